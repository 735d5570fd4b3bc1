use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::errors::{AppError, AppResult};

/// Idempotent point-counter increment keyed by user identity. The chat
/// handler calls this best-effort; failures are logged, never surfaced.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PointsStore: Send + Sync {
    async fn increment(&self, user_id: &str, amount: i64) -> AppResult<()>;
}

/// Points store backed by a Supabase `increment_points` RPC.
pub struct SupabasePointsStore {
    http: reqwest::Client,
    base_url: String,
    service_key: SecretString,
}

impl SupabasePointsStore {
    pub fn new(base_url: String, service_key: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            service_key,
        }
    }
}

#[async_trait]
impl PointsStore for SupabasePointsStore {
    async fn increment(&self, user_id: &str, amount: i64) -> AppResult<()> {
        let url = format!("{}/rest/v1/rpc/increment_points", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", self.service_key.expose_secret())
            .bearer_auth(self.service_key.expose_secret())
            .json(&json!({ "user_id": user_id, "amount": amount }))
            .send()
            .await
            .map_err(|err| {
                AppError::Persistence(format!("point increment request failed: {err}"))
            })?;

        if !response.status().is_success() {
            return Err(AppError::Persistence(format!(
                "point increment returned status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
