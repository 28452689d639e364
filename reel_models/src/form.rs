use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::contact::{
    ContactMessage, ContactMessageAuthor, ContactMessageAuthorName, ContactMessageAuthorNameError,
    ContactMessageContent, ContactMessageContentError,
};

/// Submission progress of a contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// Whether a send operation has resolved and the status is waiting to be
    /// reset.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl std::fmt::Display for FormStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactFormField {
    Name,
    Email,
    Message,
}

impl ContactFormField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];
}

impl std::fmt::Display for ContactFormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

/// The raw, unvalidated values of a contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: ContactFormField) -> &str {
        match field {
            ContactFormField::Name => &self.name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactFormField, value: String) {
        match field {
            ContactFormField::Name => self.name = value,
            ContactFormField::Email => self.email = value,
            ContactFormField::Message => self.message = value,
        }
    }

    pub fn validate_field(&self, field: ContactFormField) -> Option<ContactFieldError> {
        match field {
            ContactFormField::Name => self.parse_name().err(),
            ContactFormField::Email => self.parse_email().err(),
            ContactFormField::Message => self.parse_message().err(),
        }
    }

    /// Validates all fields, returning the message only if every field is
    /// valid.
    pub fn validate(&self) -> Result<ContactMessage, ContactFormErrors> {
        match (self.parse_name(), self.parse_email(), self.parse_message()) {
            (Ok(name), Ok(email), Ok(content)) => Ok(ContactMessage {
                author: ContactMessageAuthor { name, email },
                content,
            }),
            (name, email, message) => Err(ContactFormErrors {
                name: name.err(),
                email: email.err(),
                message: message.err(),
            }),
        }
    }

    fn parse_name(&self) -> Result<ContactMessageAuthorName, ContactFieldError> {
        ContactMessageAuthorName::try_new(self.name.clone()).map_err(|err| match err {
            ContactMessageAuthorNameError::NotEmptyViolated => ContactFieldError::NameRequired,
            ContactMessageAuthorNameError::LenCharMaxViolated => ContactFieldError::NameTooLong,
        })
    }

    fn parse_email(&self) -> Result<crate::email_address::EmailAddress, ContactFieldError> {
        self.email
            .trim()
            .parse()
            .map_err(|_| ContactFieldError::EmailInvalid)
    }

    fn parse_message(&self) -> Result<ContactMessageContent, ContactFieldError> {
        ContactMessageContent::try_new(self.message.clone()).map_err(|err| match err {
            ContactMessageContentError::NotEmptyViolated => ContactFieldError::MessageRequired,
            ContactMessageContentError::LenCharMaxViolated => ContactFieldError::MessageTooLong,
        })
    }
}

impl From<ContactMessage> for ContactFormFields {
    fn from(value: ContactMessage) -> Self {
        Self {
            name: value.author.name.into_inner(),
            email: value.author.email.as_str().into(),
            message: value.content.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Name must be at most 256 characters.")]
    NameTooLong,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Message is required.")]
    MessageRequired,
    #[error("Message must be at most 4096 characters.")]
    MessageTooLong,
}

impl Serialize for ContactFieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Inline validation messages, one slot per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ContactFieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<ContactFieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ContactFieldError>,
}

impl ContactFormErrors {
    pub fn get(&self, field: ContactFormField) -> Option<ContactFieldError> {
        match field {
            ContactFormField::Name => self.name,
            ContactFormField::Email => self.email,
            ContactFormField::Message => self.message,
        }
    }

    pub fn set(&mut self, field: ContactFormField, error: Option<ContactFieldError>) {
        match field {
            ContactFormField::Name => self.name = error,
            ContactFormField::Email => self.email = error,
            ContactFormField::Message => self.message = error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// The first error in field order.
    pub fn first(&self) -> Option<ContactFieldError> {
        self.name.or(self.email).or(self.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactFormField, ContactFieldError)> + '_ {
        ContactFormField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }
}

/// Result of a send operation, `{"success": true}` or
/// `{"success": false, "error": "..."}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: Option<String>) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reel_utils::assert_matches;

    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFormFields {
        ContactFormFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn validate_ok() {
        let message = fields("  Ada ", "ada@example.com", "Hello!\n")
            .validate()
            .unwrap();

        assert_eq!(*message.author.name, "Ada");
        assert_eq!(message.author.email.as_str(), "ada@example.com");
        assert_eq!(*message.content, "Hello!");
    }

    #[test]
    fn validate_empty_name() {
        let errors = fields("", "a@b.com", "hi").validate().unwrap_err();

        assert_eq!(
            errors,
            ContactFormErrors {
                name: Some(ContactFieldError::NameRequired),
                email: None,
                message: None,
            }
        );
        assert_eq!(errors.first().unwrap().to_string(), "Name is required.");
    }

    #[test]
    fn validate_malformed_email() {
        let errors = fields("Ada", "not-an-email", "hi").validate().unwrap_err();

        assert_eq!(errors.email, Some(ContactFieldError::EmailInvalid));
        assert_eq!(errors.iter().count(), 1);
    }

    #[test]
    fn validate_whitespace_only() {
        let errors = fields("   ", "", "\n\t").validate().unwrap_err();

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [
                (ContactFormField::Name, ContactFieldError::NameRequired),
                (ContactFormField::Email, ContactFieldError::EmailInvalid),
                (ContactFormField::Message, ContactFieldError::MessageRequired),
            ]
        );
    }

    #[test]
    fn validate_too_long() {
        let name = "x".repeat(257);
        let message = "y".repeat(4097);
        let errors = fields(&name, "ada@example.com", &message)
            .validate()
            .unwrap_err();

        assert_eq!(errors.name, Some(ContactFieldError::NameTooLong));
        assert_eq!(errors.message, Some(ContactFieldError::MessageTooLong));
    }

    #[test]
    fn validate_single_field() {
        let fields = fields("Ada", "nope", "");

        assert_matches!(fields.validate_field(ContactFormField::Name), None);
        assert_matches!(
            fields.validate_field(ContactFormField::Email),
            Some(ContactFieldError::EmailInvalid)
        );
        assert_matches!(
            fields.validate_field(ContactFormField::Message),
            Some(ContactFieldError::MessageRequired)
        );
    }

    #[test]
    fn errors_serialize_as_messages() {
        let errors = ContactFormErrors {
            email: Some(ContactFieldError::EmailInvalid),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(errors).unwrap(),
            serde_json::json!({"email": "Please enter a valid email address."})
        );
    }

    #[test]
    fn send_result_wire_format() {
        assert_eq!(
            serde_json::to_value(SendResult::ok()).unwrap(),
            serde_json::json!({"success": true})
        );
        assert_eq!(
            serde_json::from_value::<SendResult>(serde_json::json!({"success": false}))
                .unwrap(),
            SendResult::failure(None)
        );
        assert_eq!(
            serde_json::from_value::<SendResult>(
                serde_json::json!({"success": false, "error": "Rate limited"})
            )
            .unwrap(),
            SendResult::failure(Some("Rate limited".into()))
        );
    }
}
