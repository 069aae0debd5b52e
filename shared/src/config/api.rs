//! Platform REST API configuration

use serde::{Deserialize, Serialize};

/// HTTP method used by a platform endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// Request-code and submit endpoints of a single verification flow
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Path that dispatches a code to the selected channel
    pub request_code: String,

    /// Method for the request-code call
    #[serde(default = "default_post")]
    pub request_method: HttpMethod,

    /// Path that performs the dependent action with the entered code
    pub submit: String,

    /// Method for the submit call
    #[serde(default = "default_post")]
    pub submit_method: HttpMethod,
}

impl EndpointConfig {
    /// Create an endpoint pair where both calls are POSTs
    pub fn post(request_code: impl Into<String>, submit: impl Into<String>) -> Self {
        Self {
            request_code: request_code.into(),
            request_method: HttpMethod::Post,
            submit: submit.into(),
            submit_method: HttpMethod::Post,
        }
    }

    /// Override the request-code method
    pub fn with_request_method(mut self, method: HttpMethod) -> Self {
        self.request_method = method;
        self
    }
}

/// Endpoint table for every hosting flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEndpoints {
    pub forgot_password: EndpointConfig,
    pub change_password: EndpointConfig,
    pub reset_pin: EndpointConfig,
    pub kyc: EndpointConfig,
    pub add_bank_account: EndpointConfig,

    /// Delivery channel options ("message selection")
    pub message_selection: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            forgot_password: EndpointConfig::post(
                "/api/mapiuser/ForgotPassword_GetTac",
                "/api/mapiuser/ForgotPassword",
            ),
            change_password: EndpointConfig::post(
                "/api/mapiuser/ChangePassword_GetTac",
                "/api/mapiuser/ChangePassword",
            ),
            reset_pin: EndpointConfig::post(
                "/api/mapiuser/ResetPin_GetTac",
                "/api/mapiuser/resetpin",
            ),
            kyc: EndpointConfig::post("/api/mapiuser/KycSubmit", "/api/mapiuser/KycVerify"),
            add_bank_account: EndpointConfig::post(
                "/api/mapibank/AddBankAccount_GetTac",
                "/api/mapibank/addbankaccount",
            )
            .with_request_method(HttpMethod::Get),
            message_selection: String::from("/api/mapiuser/GetMessageSelection"),
        }
    }
}

/// Platform API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the platform API (no trailing slash)
    pub base_url: String,

    /// Platform identifier sent with requests
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Language code sent when the host has no preference
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// Per-flow endpoint table
    #[serde(default)]
    pub endpoints: ApiEndpoints,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            platform: default_platform(),
            default_language: default_language(),
            request_timeout_secs: default_timeout(),
            endpoints: ApiEndpoints::default(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var("AONE_API_URL").unwrap_or_default();
        let request_timeout_secs = std::env::var("AONE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout);

        Self {
            request_timeout_secs,
            ..Self::new(base_url)
        }
    }

    /// Join a path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn default_post() -> HttpMethod {
    HttpMethod::Post
}

fn default_platform() -> String {
    String::from("Web")
}

fn default_language() -> String {
    String::from("en")
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.platform, "Web");
        assert_eq!(config.default_language, "en");
        assert_eq!(
            config.url("/api/mapiuser/resetpin"),
            "https://api.example.com/api/mapiuser/resetpin"
        );
    }

    #[test]
    fn test_add_bank_account_requests_code_with_get() {
        let endpoints = ApiEndpoints::default();
        assert_eq!(endpoints.add_bank_account.request_method, HttpMethod::Get);
        assert_eq!(endpoints.add_bank_account.submit_method, HttpMethod::Post);
        assert_eq!(endpoints.reset_pin.request_method, HttpMethod::Post);
    }

    #[test]
    fn test_endpoints_deserialize_with_default_methods() {
        let endpoint: EndpointConfig = serde_json::from_str(
            r#"{"request_code": "/a", "submit": "/b"}"#,
        )
        .unwrap();
        assert_eq!(endpoint, EndpointConfig::post("/a", "/b"));
    }
}
