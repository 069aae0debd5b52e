//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Digits with an optional leading '+'
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d+$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Whether a user-supplied phone number is long enough to request a code
///
/// Length is measured on the trimmed input, the same way the entry form counts it.
pub fn meets_min_length(phone: &str, min_length: usize) -> bool {
    phone.trim().chars().count() >= min_length
}

/// Whether the input is digits with an optional leading '+' once spaces,
/// dashes and brackets are stripped
pub fn is_plausible_phone(phone: &str) -> bool {
    let stripped: String = phone
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_REGEX.is_match(&stripped)
}

/// Mask a phone number for logs (e.g. 012****6789)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

/// Mask an account phone for display next to the TAC field (e.g. 6012 *** ***6789)
pub fn mask_account_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.trim().chars().collect();
    if chars.len() < 8 {
        return "*** ***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{} *** ***{}", head, tail)
}
