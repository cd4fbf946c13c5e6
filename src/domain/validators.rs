//! Format checks applied to every registration attempt.
//!
//! Both checks are pure and total: any input, including the empty string,
//! yields a plain `true`/`false`.

use regex::Regex;
use std::sync::LazyLock;

/// Local part, `@`, domain labels, a final `.` and an alphabetic TLD of two or more letters.
/// `$` without the multi-line flag only matches at the very end, so a trailing newline is rejected.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Any Unicode decimal digit (general category Nd), not only `0-9`.
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Nd}").unwrap());

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

pub fn validate_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// True when `candidate` has at least 6 characters and at least one decimal digit.
pub fn validate_password(candidate: &str) -> bool {
    PasswordPolicy::default().check(candidate)
}

/// Password strength rule. The default is the rule `validate_password` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            require_digit: true,
        }
    }
}

impl PasswordPolicy {
    pub fn check(&self, candidate: &str) -> bool {
        // Length counts characters, not bytes.
        if candidate.chars().count() < self.min_length {
            return false;
        }

        if self.require_digit && !DIGIT_RE.is_match(candidate) {
            return false;
        }

        true
    }
}
