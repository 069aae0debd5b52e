//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Display language for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ms")]
    Malay,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 3] = [Language::English, Language::Chinese, Language::Malay];

    /// Extract language from Accept-Language style header
    pub fn from_accept_language(header: &str) -> Self {
        let header_lower = header.to_lowercase();
        if header_lower.starts_with("zh") {
            Language::Chinese
        } else if header_lower.starts_with("ms") {
            Language::Malay
        } else {
            Language::English
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Malay => "ms",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
            Language::Malay => "Malay",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "zh" | "chi" | "chinese" | "中文" => Ok(Language::Chinese),
            "ms" | "may" | "malay" => Ok(Language::Malay),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_header() {
        assert_eq!(Language::from_accept_language("en-US,en;q=0.9"), Language::English);
        assert_eq!(Language::from_accept_language("zh-CN,zh;q=0.9"), Language::Chinese);
        assert_eq!(Language::from_accept_language("ms-MY"), Language::Malay);
        assert_eq!(Language::from_accept_language("fr-FR"), Language::English);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("malay".parse::<Language>().unwrap(), Language::Malay);
        assert!("invalid".parse::<Language>().is_err());
    }
}
