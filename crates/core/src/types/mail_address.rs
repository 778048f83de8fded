//! Mail address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Reasons a string is rejected as a [`MailAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MailAddressError {
    /// Nothing but whitespace was entered.
    #[error("mail address is required")]
    Blank,
    /// Longer than the SMTP path limit.
    #[error("mail address must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Not of the form `local@domain`.
    #[error("mail address is not well formed")]
    Malformed,
}

/// A syntactically valid mail address.
///
/// Only the shape is checked: exactly one `@`, something on both sides, no
/// whitespace, at most 254 characters (RFC 5321). Surrounding whitespace is
/// trimmed before checking, so `" a@x.com "` parses as `"a@x.com"`.
///
/// ```
/// use emp_management_core::MailAddress;
///
/// assert!(MailAddress::parse("taro@example.com").is_ok());
/// assert!(MailAddress::parse("taro").is_err());
/// assert!(MailAddress::parse("a@b@c").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type), sqlx(transparent))]
#[serde(transparent)]
pub struct MailAddress(String);

impl MailAddress {
    /// Maximum length of a mail address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse and validate a mail address.
    ///
    /// # Errors
    ///
    /// Returns [`MailAddressError`] if the input is blank, too long, or not
    /// `local@domain`.
    pub fn parse(s: &str) -> Result<Self, MailAddressError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MailAddressError::Blank);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(MailAddressError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(MailAddressError::Malformed);
        }

        match s.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(s.to_owned()))
            }
            _ => Err(MailAddressError::Malformed),
        }
    }

    /// The address as entered (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for MailAddress {
    type Err = MailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for MailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(MailAddress::parse("a@x.com").is_ok());
        assert!(MailAddress::parse("taro.yamada+work@example.co.jp").is_ok());
    }

    #[test]
    fn test_parse_trims() {
        let addr = MailAddress::parse("  a@x.com\t").unwrap();
        assert_eq!(addr.as_str(), "a@x.com");
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(MailAddress::parse(""), Err(MailAddressError::Blank));
        assert_eq!(MailAddress::parse("   "), Err(MailAddressError::Blank));
    }

    #[test]
    fn test_parse_too_long() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            MailAddress::parse(&long),
            Err(MailAddressError::TooLong { max: 254 })
        ));
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["taro", "@x.com", "a@", "a@b@c", "a b@x.com"] {
            assert_eq!(
                MailAddress::parse(input),
                Err(MailAddressError::Malformed),
                "{input}"
            );
        }
    }

    #[test]
    fn test_serde_is_plain_string() {
        let addr = MailAddress::parse("a@x.com").unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"a@x.com\"");
    }
}
