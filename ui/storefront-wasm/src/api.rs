//! HTTP API client.
//!
//! `fetch`-backed implementation of the storefront network port. Requests
//! are JSON POSTs relative to the configured API base.

use async_trait::async_trait;
use gloo_net::http::Request;
use sf_api_types::ActionResponse;
use sf_ui_core::{ApiError, StorefrontApi, StorefrontConfig};

pub struct FetchApi {
    config: StorefrontConfig,
}

impl FetchApi {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl StorefrontApi for FetchApi {
    async fn post_json(
        &self,
        endpoint: &'static str,
        body: serde_json::Value,
    ) -> Result<ActionResponse, ApiError> {
        let resp = Request::post(&self.config.url(endpoint))
            .json(&body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: resp.status(),
                body: text,
            });
        }

        resp.json::<ActionResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
