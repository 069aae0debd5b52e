use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use ao_core::errors::GatewayError;
use ao_core::services::store::{AuthTokenStore, ObservableStore};
use ao_shared::{ApiConfig, HttpMethod, Language};

use crate::InfrastructureError;

/// Header carrying the user's display language
pub const LANGUAGE_HEADER: &str = "Lang";

/// Query parameter identifying the client platform on lookups
pub const PLATFORM_PARAM: &str = "Platform";

/// Body of a non-2xx platform response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Map a non-2xx status and its raw body to a gateway error
pub fn status_error(status: u16, body: &str) -> GatewayError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    GatewayError::Status {
        status,
        message: parsed.message.filter(|m| !m.trim().is_empty()),
        expires_in: parsed
            .expires_in
            .filter(|secs| *secs > 0)
            .map(|secs| secs.min(u32::MAX as i64) as u32),
    }
}

/// Client for the platform REST API
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    language: ObservableStore<Language>,
    tokens: Option<Arc<AuthTokenStore>>,
}

impl ApiClient {
    /// Create a client for `config`
    pub fn new(config: ApiConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        let language = config.default_language.parse().unwrap_or_default();

        tracing::info!(
            base_url = %config.base_url,
            platform = %config.platform,
            event = "api_client_initialized",
            "Platform API client initialized"
        );

        Ok(Self {
            http,
            config,
            language: ObservableStore::new(language),
            tokens: None,
        })
    }

    /// Read bearer tokens from `tokens` for authenticated calls
    pub fn with_tokens(mut self, tokens: Arc<AuthTokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Language sent with every following request
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    /// GET `path` and decode the JSON envelope
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        authenticated: bool,
    ) -> Result<T, GatewayError> {
        self.send(HttpMethod::Get, path, None, authenticated).await
    }

    /// POST `body` to `path` and decode the JSON envelope
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
        authenticated: bool,
    ) -> Result<T, GatewayError> {
        self.send(HttpMethod::Post, path, Some(body), authenticated).await
    }

    /// Send a request; a body is only attached to POSTs
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        authenticated: bool,
    ) -> Result<T, GatewayError> {
        let url = self.config.url(path);
        let mut request = match method {
            HttpMethod::Get => self
                .http
                .get(&url)
                .query(&[(PLATFORM_PARAM, self.config.platform.as_str())]),
            HttpMethod::Post => {
                let request = self.http.post(&url);
                match body {
                    Some(body) => request.json(body),
                    None => request,
                }
            }
        };
        request = request
            .header(ACCEPT, "application/json")
            .header(LANGUAGE_HEADER, self.language().code());

        if authenticated {
            match self.tokens.as_ref().and_then(|tokens| tokens.token()) {
                Some(token) => {
                    request = request.header(AUTHORIZATION, format!("bearer {}", token))
                }
                None => tracing::warn!(
                    path = path,
                    event = "missing_token",
                    "No bearer token for authenticated call"
                ),
            }
        }

        tracing::debug!(
            method = ?method,
            path = path,
            event = "api_request",
            "Calling platform API"
        );

        let response = request.send().await.map_err(|e| {
            tracing::error!(
                path = path,
                error = %e,
                event = "api_unreachable",
                "Platform API request failed"
            );
            GatewayError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED && authenticated {
                if let Some(tokens) = &self.tokens {
                    tokens.clear();
                }
                tracing::warn!(
                    path = path,
                    event = "session_expired",
                    "Platform API rejected the bearer token"
                );
            } else {
                tracing::warn!(
                    path = path,
                    status = status.as_u16(),
                    event = "api_error_status",
                    "Platform API returned an error status"
                );
            }
            return Err(status_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                path = path,
                error = %e,
                event = "api_invalid_body",
                "Platform API returned an unexpected body"
            );
            GatewayError::Transport(format!("Invalid response body: {}", e))
        })
    }
}
