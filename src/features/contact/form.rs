//! Contact Form Model
//!
//! Field values, the required-field check and the submitting flag. No message
//! is ever sent anywhere; submitting only flips the flag for a while.

use snafu::Snafu;

/// Form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Translation key for the field label
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.name",
            Field::Email => "contact.form.email",
            Field::Subject => "contact.form.subject",
            Field::Message => "contact.form.message",
        }
    }

    /// Example text shown in the empty input
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Ahmad Faizal",
            Field::Email => "email@contoh.com",
            Field::Subject => "Projek Penjenamaan",
            Field::Message => "Ceritakan tentang projek anda...",
        }
    }
}

/// Why a submit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum FormError {
    #[snafu(display("{field:?} is required"))]
    Missing { field: Field },

    #[snafu(display("Email address must contain '@'"))]
    InvalidEmail,
}

impl FormError {
    /// Translation key for the inline notice
    pub fn message_key(&self) -> &'static str {
        match self {
            FormError::Missing { .. } => "contact.form.required",
            FormError::InvalidEmail => "contact.form.invalid_email",
        }
    }
}

/// Snapshot of the four inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    /// Value of one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Every field must be non-blank and the email must contain `@`
    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return MissingSnafu { field }.fail();
        }
        if !self.email.contains('@') {
            return InvalidEmailSnafu.fail();
        }
        Ok(())
    }
}

/// Whether a submit is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitState {
    submitting: bool,
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a submit; returns `false` if one is already running
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Clear the flag
    pub fn complete(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Siti".into(),
            email: "siti@example.my".into(),
            subject: "Branding".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_first_blank_field_is_reported() {
        let mut fields = filled();
        fields.subject = "   ".into();
        fields.message.clear();
        assert_eq!(
            fields.validate(),
            Err(FormError::Missing { field: Field::Subject })
        );
        assert_eq!(FormFields::default().validate(), Err(FormError::Missing { field: Field::Name }));
    }

    #[test]
    fn test_email_needs_at_sign() {
        let mut fields = filled();
        fields.email = "siti.example.my".into();
        assert_eq!(fields.validate(), Err(FormError::InvalidEmail));
        assert_eq!(FormError::InvalidEmail.message_key(), "contact.form.invalid_email");
    }

    #[test]
    fn test_notice_keys_are_translated() {
        let errors = [FormError::Missing { field: Field::Name }, FormError::InvalidEmail];
        for err in errors {
            assert!(crate::i18n::lookup(crate::i18n::Locale::Bm, err.message_key()).is_some());
        }
        for field in Field::ALL {
            assert!(crate::i18n::lookup(crate::i18n::Locale::En, field.label_key()).is_some());
        }
    }

    #[test]
    fn test_submit_ignores_double_submit() {
        let mut state = SubmitState::default();
        assert!(!state.is_submitting());
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_submitting());
        state.complete();
        assert!(!state.is_submitting());
        assert!(state.begin());
    }
}
