//! Input validation checks.

use std::sync::LazyLock;

use regex::Regex;

/// Format-only email pattern: local part, `@`, domain, and an alphabetic TLD
/// of at least two letters.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok()
});

/// Returns `true` if `input` is empty or consists only of ASCII whitespace.
///
/// Whitespace is space, tab, newline, carriage return, vertical tab, and form
/// feed. Non-ASCII spaces such as U+00A0 count as content.
///
/// # Examples
///
/// ```
/// use ks_core::utils::validation::is_empty;
///
/// assert!(is_empty(""));
/// assert!(is_empty(" \t\n"));
/// assert!(!is_empty(" x "));
/// ```
#[inline]
#[must_use]
pub fn is_empty(input: &str) -> bool {
    input
        .bytes()
        .all(|b| b.is_ascii_whitespace() || b == b'\x0B')
}

/// Returns `true` if `input` is non-empty and every character is an ASCII
/// letter or digit.
///
/// # Examples
///
/// ```
/// use ks_core::utils::validation::is_alphanumeric;
///
/// assert!(is_alphanumeric("abc123"));
/// assert!(!is_alphanumeric("abc 123"));
/// assert!(!is_alphanumeric(""));
/// ```
#[inline]
#[must_use]
pub fn is_alphanumeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Returns `true` if `input` looks like an email address.
///
/// This is a syntax check only; no DNS or MX lookups are performed.
///
/// # Examples
///
/// ```
/// use ks_core::utils::validation::is_valid_email;
///
/// assert!(is_valid_email("test@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(""));
        assert!(is_empty("   "));
        assert!(is_empty("\t\r\n"));
        assert!(!is_empty("a"));
        assert!(!is_empty("  a  "));
        assert!(is_empty("\x0B\x0C"));
        assert!(!is_empty("\u{a0}"));
        assert!(!is_empty("\u{2003}"));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("abc"));
        assert!(is_alphanumeric("ABC123"));
        assert!(!is_alphanumeric(""));
        assert!(!is_alphanumeric("hello world"));
        assert!(!is_alphanumeric("under_score"));
        assert!(!is_alphanumeric("dash-ed"));
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "test@example.com",
            "user.name@example.com",
            "user+tag@example.co.uk",
            "a_b%c@sub.domain.org",
        ] {
            assert!(is_valid_email(email), "expected valid: {email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user @example.com",
            "user@exam ple.com",
        ] {
            assert!(!is_valid_email(email), "expected invalid: {email}");
        }
    }
}
