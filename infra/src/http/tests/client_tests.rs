//! Unit tests for envelope and error mapping

use std::sync::Arc;

use ao_core::errors::GatewayError;
use ao_core::services::store::AuthTokenStore;
use ao_shared::{ApiConfig, Language, TacResponse};

use crate::http::{status_error, ApiClient};

#[test]
fn test_status_error_keeps_message_and_expiry() {
    let err = status_error(400, r#"{"Code": 1, "Message": "OTP already sent", "ExpiresIn": 45}"#);
    assert_eq!(
        err,
        GatewayError::Status {
            status: 400,
            message: Some("OTP already sent".to_string()),
            expires_in: Some(45),
        }
    );
    assert_eq!(err.expires_in(), Some(45));
}

#[test]
fn test_status_error_tolerates_non_json_body() {
    let err = status_error(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        GatewayError::Status {
            status: 502,
            message: None,
            expires_in: None,
        }
    );
}

#[test]
fn test_status_error_drops_non_positive_expiry() {
    let err = status_error(400, r#"{"Message": "  ", "ExpiresIn": 0}"#);
    assert_eq!(err.expires_in(), None);
    assert!(matches!(err, GatewayError::Status { message: None, .. }));
}

#[test]
fn test_language_defaults_from_config() {
    let config = ApiConfig {
        default_language: "ms".to_string(),
        ..ApiConfig::new("http://localhost:5000")
    };
    let client = ApiClient::new(config).unwrap();
    assert_eq!(client.language(), Language::Malay);

    client.set_language(Language::Chinese);
    assert_eq!(client.language(), Language::Chinese);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Port 9 (discard) on localhost is closed in test environments
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"))
        .unwrap()
        .with_tokens(Arc::new(AuthTokenStore::new()));

    let result: Result<TacResponse, GatewayError> =
        client.get("/api/mapiuser/GetMessageSelection", false).await;

    assert!(matches!(result, Err(GatewayError::Transport(_))));
}
