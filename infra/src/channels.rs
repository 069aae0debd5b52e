//! Delivery channel options from the message-selection endpoint

use std::sync::Arc;

use async_trait::async_trait;

use ao_core::domain::entities::ChannelOption;
use ao_core::services::verification::ChannelOptionSource;
use ao_shared::types::response::LOOKUP_SUCCESS_CODE;
use ao_shared::MessageSelectionResponse;

use crate::http::ApiClient;

/// Channel options offered by the platform ("SMS", "WhatsApp", ...)
pub struct MessageSelectionSource {
    client: Arc<ApiClient>,
}

impl MessageSelectionSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

/// Usable options of a lookup envelope; anything but a non-empty success is empty
pub fn options_from_response(response: MessageSelectionResponse) -> Vec<ChannelOption> {
    if response.code != LOOKUP_SUCCESS_CODE {
        return Vec::new();
    }
    response
        .data
        .map(ChannelOption::from_selection)
        .unwrap_or_default()
}

#[async_trait]
impl ChannelOptionSource for MessageSelectionSource {
    async fn fetch_options(&self) -> Vec<ChannelOption> {
        let path = &self.client.config().endpoints.message_selection;
        match self.client.get::<MessageSelectionResponse>(path, false).await {
            Ok(response) => {
                let code = response.code;
                let options = options_from_response(response);
                if options.is_empty() {
                    tracing::warn!(
                        code = code,
                        event = "channel_options_unusable",
                        "Message selection returned no usable options"
                    );
                }
                options
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    event = "channel_options_failed",
                    "Failed to load message selection options"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ao_core::domain::entities::Channel;
    use ao_shared::{ApiConfig, MessageSelectionOption};

    fn option(value: &str) -> MessageSelectionOption {
        MessageSelectionOption {
            value: value.to_string(),
            text: value.to_string(),
        }
    }

    #[test]
    fn test_placeholder_is_dropped() {
        let response = MessageSelectionResponse {
            code: 200,
            data: Some(vec![option("Select"), option("SMS"), option("WhatsApp")]),
        };
        let options = options_from_response(response);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].channel, Channel::Sms);
        assert_eq!(options[1].channel, Channel::WhatsApp);
    }

    #[test]
    fn test_non_success_code_yields_nothing() {
        let response = MessageSelectionResponse {
            code: 500,
            data: Some(vec![option("SMS")]),
        };
        assert!(options_from_response(response).is_empty());

        let response = MessageSelectionResponse { code: 200, data: None };
        assert!(options_from_response(response).is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_degrades_to_empty() {
        let client = Arc::new(ApiClient::new(ApiConfig::new("http://127.0.0.1:9")).unwrap());
        let source = MessageSelectionSource::new(client);
        assert!(source.fetch_options().await.is_empty());
    }
}
