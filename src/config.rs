use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_base_url: String,
    pub supabase_url: String,
    pub supabase_service_key: SecretString,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_else(|_| "dev_gemini_key".to_string()),
            ),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1/models".to_string()
            }),
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".to_string()),
            supabase_service_key: SecretString::from(
                env::var("SUPABASE_SERVICE_KEY")
                    .unwrap_or_else(|_| "dev_supabase_service_key".to_string()),
            ),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.gemini_api_key.expose_secret() == "dev_gemini_key" {
            panic!(
                "FATAL: GEMINI_API_KEY is using default value! Set GEMINI_API_KEY environment variable."
            );
        }

        if self.supabase_service_key.expose_secret() == "dev_supabase_service_key" {
            panic!(
                "FATAL: SUPABASE_SERVICE_KEY is using default value! Set SUPABASE_SERVICE_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_base_url: "http://localhost:9000/models".to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_service_key: SecretString::from("test_supabase_key".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.gemini_base_url.is_empty());
        assert!(!config.supabase_url.is_empty());
        assert!(config.web_server_port > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.gemini_base_url, "http://localhost:9000/models");
        assert_eq!(config.web_server_host, "127.0.0.1");
    }
}
