//! Delivery channels for one-time codes.

use serde::{Deserialize, Serialize};

use ao_shared::{Language, MessageKey, MessageSelectionOption};

/// Placeholder entry the backend includes at the top of the option list
pub const PLACEHOLDER_OPTION_VALUE: &str = "Select";

/// Delivery method for a one-time code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Channel {
    Sms,
    WhatsApp,
    Email,
    /// A channel the backend offers that this client has no special handling for
    Other(String),
}

impl Channel {
    /// Wire value sent to the backend as `Option` / `Channel`
    pub fn as_str(&self) -> &str {
        match self {
            Channel::Sms => "SMS",
            Channel::WhatsApp => "WhatsApp",
            Channel::Email => "Email",
            Channel::Other(value) => value,
        }
    }

    /// Localized name, used when telling the user where the code went
    pub fn display_name(&self, lang: Language) -> String {
        match self {
            Channel::Sms => MessageKey::Sms.translate(lang),
            Channel::WhatsApp => MessageKey::WhatsApp.translate(lang),
            other => other.as_str().to_string(),
        }
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "sms" => Channel::Sms,
            "whatsapp" => Channel::WhatsApp,
            "email" => Channel::Email,
            _ => Channel::Other(value),
        }
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        Channel::from(value.to_string())
    }
}

impl From<Channel> for String {
    fn from(channel: Channel) -> Self {
        channel.as_str().to_string()
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{value, label}` pair offered in the "send to" picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelOption {
    pub channel: Channel,
    pub label: String,
}

impl ChannelOption {
    pub fn new(channel: impl Into<Channel>, label: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            label: label.into(),
        }
    }

    /// Convert backend options, dropping the "Select" placeholder
    pub fn from_selection(options: Vec<MessageSelectionOption>) -> Vec<ChannelOption> {
        options
            .into_iter()
            .filter(|opt| opt.value != PLACEHOLDER_OPTION_VALUE)
            .map(|opt| ChannelOption::new(opt.value, opt.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_parsing_is_case_insensitive() {
        assert_eq!(Channel::from("SMS"), Channel::Sms);
        assert_eq!(Channel::from("whatsapp"), Channel::WhatsApp);
        assert_eq!(Channel::from("Telegram"), Channel::Other("Telegram".to_string()));
        assert_eq!(Channel::WhatsApp.as_str(), "WhatsApp");
    }

    #[test]
    fn test_from_selection_drops_placeholder() {
        let options = ChannelOption::from_selection(vec![
            MessageSelectionOption { value: "Select".into(), text: "Select".into() },
            MessageSelectionOption { value: "SMS".into(), text: "SMS".into() },
            MessageSelectionOption { value: "WhatsApp".into(), text: "WhatsApp".into() },
        ]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].channel, Channel::Sms);
        assert_eq!(options[1].label, "WhatsApp");
    }
}
