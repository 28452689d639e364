use reel_models::form::{ContactFormErrors, ContactFormFields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactForm {
    /// Full name of the visitor
    #[serde(default)]
    pub name: String,
    /// Email address of the visitor
    #[serde(default)]
    pub email: String,
    /// Content of the message
    #[serde(default)]
    pub message: String,
}

impl From<ApiContactForm> for ContactFormFields {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

/// Response of the contact endpoint, `{"success": true}` or
/// `{"success": false, "error": "..."}` with optional per field messages.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSendResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "ContactFormErrors::is_empty")]
    pub fields: ContactFormErrors,
}

impl ApiSendResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            fields: Default::default(),
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
            fields: Default::default(),
        }
    }

    pub fn invalid(fields: ContactFormErrors) -> Self {
        Self {
            success: false,
            error: fields.first().map(|err| err.to_string()),
            fields,
        }
    }
}
