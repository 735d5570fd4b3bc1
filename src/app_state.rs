use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{GeminiClient, TextGenerator},
        points_service::{PointsStore, SupabasePointsStore},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub points: Arc<dyn PointsStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(
            config.gemini_base_url.clone(),
            config.gemini_api_key.clone(),
        ));
        let points: Arc<dyn PointsStore> = Arc::new(SupabasePointsStore::new(
            config.supabase_url.clone(),
            config.supabase_service_key.clone(),
        ));

        Self {
            generator,
            points,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.web_server_host, "127.0.0.1");
    }
}
