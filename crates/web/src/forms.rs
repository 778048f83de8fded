//! Request forms and their validation.
//!
//! Forms are bound with `#[serde(default)]`: a missing field arrives as an
//! empty string and is reported by [`InsertAdministratorForm::validate`]
//! rather than rejected by the extractor.

use secrecy::SecretString;
use serde::Deserialize;

use emp_management_core::{MailAddress, MailAddressError};

use crate::models::NewAdministrator;

/// Field names as they appear in the HTML forms.
pub mod fields {
    pub const NAME: &str = "name";
    pub const MAIL_ADDRESS: &str = "mail_address";
    pub const PASSWORD: &str = "password";
    pub const REPASSWORD: &str = "repassword";
}

/// Field-level validation errors in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Attach a message to a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// Whether any message is attached to `field`.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|(f, _)| *f == field)
    }

    /// Messages attached to `field`, in insertion order.
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Administrator registration form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InsertAdministratorForm {
    pub name: String,
    pub mail_address: String,
    pub password: String,
    pub repassword: String,
}

impl InsertAdministratorForm {
    /// Field-format rules: name and password required, mail address required
    /// and well formed.
    ///
    /// The uniqueness and password confirmation checks need the repository
    /// or both fields together, so the handler runs them after this passes.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.add(fields::NAME, "Name is required");
        }

        match MailAddress::parse(&self.mail_address) {
            Ok(_) => {}
            Err(MailAddressError::Blank) => {
                errors.add(fields::MAIL_ADDRESS, "Mail address is required");
            }
            Err(_) => {
                errors.add(fields::MAIL_ADDRESS, "Mail address is not valid");
            }
        }

        if self.password.is_empty() {
            errors.add(fields::PASSWORD, "Password is required");
        }

        errors
    }

    /// Whether the password and its confirmation are exactly equal.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password == self.repassword
    }

    /// Map the form onto a new administrator, field by field.
    ///
    /// # Errors
    ///
    /// Returns `MailAddressError` if the mail address does not parse; call
    /// [`validate`](Self::validate) first to report that to the user.
    pub fn into_new_administrator(self) -> Result<NewAdministrator, MailAddressError> {
        Ok(NewAdministrator {
            name: self.name.trim().to_owned(),
            mail_address: MailAddress::parse(&self.mail_address)?,
            password: SecretString::from(self.password),
        })
    }
}

/// Login form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub mail_address: String,
    pub password: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn form(name: &str, mail: &str, password: &str, repassword: &str) -> InsertAdministratorForm {
        InsertAdministratorForm {
            name: name.to_string(),
            mail_address: mail.to_string(),
            password: password.to_string(),
            repassword: repassword.to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(!form("Taro", "a@x.com", "p1", "p1").validate().has_errors());
    }

    #[test]
    fn test_empty_form_reports_each_required_field() {
        let errors = InsertAdministratorForm::default().validate();
        assert!(errors.has(fields::NAME));
        assert!(errors.has(fields::MAIL_ADDRESS));
        assert!(errors.has(fields::PASSWORD));
        assert!(!errors.has(fields::REPASSWORD));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let errors = form("   ", "a@x.com", "p1", "p1").validate();
        assert_eq!(errors.messages(fields::NAME), vec!["Name is required"]);
    }

    #[test]
    fn test_malformed_mail_address() {
        let errors = form("Taro", "taro", "p1", "p1").validate();
        assert_eq!(
            errors.messages(fields::MAIL_ADDRESS),
            vec!["Mail address is not valid"]
        );
    }

    #[test]
    fn test_validate_does_not_compare_passwords() {
        let f = form("Taro", "a@x.com", "p1", "p2");
        assert!(!f.validate().has_errors());
        assert!(!f.passwords_match());
    }

    #[test]
    fn test_into_new_administrator_maps_fields() {
        let admin = form(" Taro ", "a@x.com", "p1", "p1")
            .into_new_administrator()
            .unwrap();
        assert_eq!(admin.name, "Taro");
        assert_eq!(admin.mail_address.as_str(), "a@x.com");
        assert_eq!(admin.password.expose_secret(), "p1");
    }

    #[test]
    fn test_into_new_administrator_rejects_bad_address() {
        assert!(form("Taro", "nope", "p1", "p1").into_new_administrator().is_err());
    }

    #[test]
    fn test_field_errors_keep_order() {
        let mut errors = FieldErrors::new();
        errors.add(fields::MAIL_ADDRESS, "first");
        errors.add(fields::REPASSWORD, "second");
        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![(fields::MAIL_ADDRESS, "first"), (fields::REPASSWORD, "second")]
        );
    }
}
