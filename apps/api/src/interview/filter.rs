//! Sensitive-topic filter for the follow-up chat.
//!
//! Coarse on purpose: a case-insensitive substring match against a fixed keyword
//! list, so "payroll" trips on "pay" while "stock options" passes.

const SENSITIVE_KEYWORDS: &[&str] = &[
    "salary",
    "compensation",
    "benefits",
    "holiday",
    "leave",
    "pay",
    "bonus",
];

pub fn is_sensitive(text: &str) -> bool {
    matched_keyword(text).is_some()
}

/// First keyword (in list order) found in `text`.
pub fn matched_keyword(text: &str) -> Option<&'static str> {
    let text_lower = text.to_lowercase();
    SENSITIVE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| text_lower.contains(*keyword))
}
