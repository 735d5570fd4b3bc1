use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use crate::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    services::{model_service::TextGenerator, points_service::PointsStore},
};

pub mod fixtures {
    /// A quiz completion the way the model typically wraps it in prose.
    pub const WRAPPED_QUIZ_COMPLETION: &str = "Here you go:\n[{\"id\":1,\"question\":\"Q\",\"options\":[\"A\",\"B\",\"C\",\"D\"],\"answer\":\"B\"}]\nHope that helps!";

    /// A short but well-formed video script completion.
    pub const VIDEO_COMPLETION: &str =
        "EXPLANATION: Bees pollinate flowers.\nFRAMES:\n1. A bee landing on a flower\n2. Pollen transfer close-up";
}

/// Builds an `AppState` around stubbed collaborators for handler tests.
pub fn test_state(
    generator: Arc<dyn TextGenerator>,
    points: Arc<dyn PointsStore>,
) -> web::Data<AppState> {
    web::Data::new(AppState {
        generator,
        points,
        config: Arc::new(Config::test_config()),
    })
}

/// Points store that records every call so tests can assert on call counts
/// made from detached tasks.
#[derive(Default)]
pub struct RecordingPointsStore {
    calls: Mutex<Vec<(String, i64)>>,
}

impl RecordingPointsStore {
    pub fn calls(&self) -> Vec<(String, i64)> {
        self.calls.lock().expect("calls lock should not be poisoned").clone()
    }
}

#[async_trait]
impl PointsStore for RecordingPointsStore {
    async fn increment(&self, user_id: &str, amount: i64) -> AppResult<()> {
        self.calls
            .lock()
            .expect("calls lock should not be poisoned")
            .push((user_id.to_string(), amount));
        Ok(())
    }
}
