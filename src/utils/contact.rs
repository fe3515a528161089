use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Minimum trimmed message length, in UTF-16 code units as browsers count it.
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::SubjectRequired => Field::Subject,
            FieldError::MessageRequired | FieldError::MessageTooShort => Field::Message,
        }
    }
}

/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    /// Drops the error for `field`. Returns whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        let before = self.errors.len();
        self.errors.retain(|e| e.field() != field);
        before != self.errors.len()
    }

    fn push(&mut self, error: FieldError) {
        self.clear(error.field());
        self.errors.push(error);
    }
}

/// Raw contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::NameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }

        let subject = self.subject.trim();
        if subject.is_empty() {
            errors.push(FieldError::SubjectRequired);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::MessageRequired);
        } else if message.encode_utf16().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::MessageTooShort);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactMessage {
    /// Text prefilled in the WhatsApp chat.
    pub fn whatsapp_text(&self) -> String {
        format!(
            "Hello {}!\n\nName: {}\nEmail: {}\nSubject: {}\n\n{}",
            config::COMPANY_NAME,
            self.name,
            self.email,
            self.subject,
            self.message
        )
    }

    /// `wa.me` deep link that opens a chat with `number` and the message filled in.
    pub fn whatsapp_url(&self, number: &str) -> String {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        format!(
            "https://wa.me/{}?text={}",
            digits,
            urlencoding::encode(&self.whatsapp_text())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Priya Iyer".into(),
            email: "priya@craftnest.in".into(),
            subject: "Wedding cards".into(),
            message: "Need 300 foil stamped invites.".into(),
        }
    }

    #[test]
    fn complete_form_validates() {
        let message = filled().validate().unwrap();
        assert_eq!(message.name, "Priya Iyer");
        assert_eq!(message.subject, "Wedding cards");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailRequired));
        assert_eq!(errors.get(Field::Subject), Some(FieldError::SubjectRequired));
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageRequired));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.name = "   ".into();
        form.message = "\n\t ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageRequired));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["priya", "priya@craftnest", "pri ya@craftnest.in", "@craftnest.in", "a@b@c.d"] {
            let mut form = filled();
            form.email = email.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalid), "{email}");
        }
    }

    #[test]
    fn short_messages_are_rejected_after_trimming() {
        let mut form = filled();
        form.message = "  long enough  ".into();
        assert!(form.validate().is_ok());

        form.message = "   short   ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));
        assert_eq!(FieldError::MessageTooShort.to_string(), "Message must be at least 10 characters long");
    }

    #[test]
    fn message_length_counts_utf16_units() {
        let mut form = filled();
        form.message = "\u{1F4DA}\u{1F4DA}\u{1F4DA}\u{1F4DA}\u{1F4DA}".into();
        assert!(form.validate().is_ok());

        form.message = "\u{1F4DA}\u{1F4DA}\u{1F4DA}\u{1F4DA}".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn clearing_a_field_error_keeps_the_others() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        assert!(errors.clear(Field::Email));
        assert!(!errors.clear(Field::Email));
        assert_eq!(errors.get(Field::Email), None);
        assert!(errors.get(Field::Name).is_some());
    }

    #[test]
    fn set_updates_the_named_field() {
        let mut form = ContactForm::default();
        form.set(Field::Subject, "Calendars".into());
        assert_eq!(form.subject, "Calendars");
        assert!(form.name.is_empty());
    }

    #[test]
    fn whatsapp_url_encodes_the_message() {
        let message = filled().validate().unwrap();
        let url = message.whatsapp_url("+91 84719-16297");
        assert!(url.starts_with("https://wa.me/918471916297?text="));
        assert!(url.contains("Priya%20Iyer"));
        assert!(url.contains("%0A"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn whatsapp_text_lists_every_field() {
        let text = filled().validate().unwrap().whatsapp_text();
        for part in ["Priya Iyer", "priya@craftnest.in", "Wedding cards", "foil stamped"] {
            assert!(text.contains(part), "{part}");
        }
    }
}
