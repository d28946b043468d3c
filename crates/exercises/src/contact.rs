//! Email addresses as a smart constructor

use std::fmt;
use std::sync::LazyLock;

use modelkit_validator::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .ok()
});

/// The address has a local part, an `@` and a dotted domain.
///
/// Rejects everything if the pattern failed to compile.
fn email_format() -> Rule<str> {
    Rule::new("email", |input: &str| {
        EMAIL_REGEX
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(input))
    })
}

refinement! {
    /// RFC 5321 length limit plus a pragmatic address pattern.
    pub EmailRules for str => [max_chars(254), email_format()]
}

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(Validated<String, EmailRules>);

impl Email {
    /// Validates an address. Surrounding whitespace is trimmed first.
    pub fn new(raw: &str) -> ValidationResult<Self> {
        Validated::new(raw.trim().to_owned()).map(Self)
    }

    /// The full address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // The pattern guarantees exactly one `@`.
        self.as_str().split_once('@').unwrap_or((self.as_str(), ""))
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com")]
    #[case("first.last+tag@mail.example.org")]
    #[case("  padded@example.com ")]
    fn test_valid_addresses(#[case] raw: &str) {
        assert!(Email::new(raw).is_ok());
    }

    #[rstest]
    #[case("", "email")]
    #[case("no-at-sign", "email")]
    #[case("two@@example.com", "email")]
    #[case("user@localhost", "email")]
    fn test_invalid_addresses(#[case] raw: &str, #[case] rule: &str) {
        assert_eq!(Email::new(raw).unwrap_err().rule_name(), Some(rule));
    }

    #[test]
    fn test_length_limit_checked_first() {
        let raw = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            Email::new(&raw).unwrap_err().rule_name(),
            Some("max_chars(254)")
        );
    }

    #[test]
    fn test_parts() {
        let email = Email::new("ada@example.com").unwrap();
        assert_eq!(email.local_part(), "ada");
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.to_string(), "ada@example.com");
    }
}
