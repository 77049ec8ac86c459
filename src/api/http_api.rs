use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::api::AuthApi;
use crate::config::ServiceConfig;
use crate::error::AuthError;
use crate::models::{LoginRequest, RegistrationRequest, TokenResponse, UserProfile};

/// Talks to the authentication service over HTTP.
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &ServiceConfig) -> Self {
        info!(
            "Creating HTTP auth client for service at '{}'",
            config.base_url
        );
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a response into the expected payload, mapping error statuses to
    /// the shared error taxonomy. The service puts its human-readable message
    /// in the `detail` field of the error body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| AuthError::Network(format!("error parsing response body: {}", e)));
        }

        let detail = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body["detail"].as_str().map(str::to_string))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        if status == StatusCode::UNAUTHORIZED {
            Err(AuthError::Unauthorized { detail })
        } else {
            Err(AuthError::Service {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<UserProfile, AuthError> {
        let url = self.url("/register");
        debug!("Sending registration request to: {}", url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network(format!("error sending request: {}", e)))?;
        Self::decode(response).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let url = self.url("/login");
        debug!("Sending login request to: {}", url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Network(format!("error sending request: {}", e)))?;
        Self::decode(response).await
    }

    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile, AuthError> {
        let url = self.url("/users/me");
        debug!("Fetching current user from: {}", url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Network(format!("error sending request: {}", e)))?;
        Self::decode(response).await
    }
}
