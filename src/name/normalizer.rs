//! Reduce a business name to a DNS-safe token

/// Lowercase the name and keep only ASCII letters and digits.
///
/// Never fails; an empty or all-punctuation name yields an empty token.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
