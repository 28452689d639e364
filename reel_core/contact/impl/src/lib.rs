use std::sync::Arc;

use reel_core_contact_contracts::{ContactSendMessageError, ContactService};
use reel_di::Build;
use reel_email_contracts::{Email, EmailService};
use reel_models::{contact::ContactMessage, email_address::EmailAddressWithName};
use tracing::{info, warn};

#[derive(Debug, Clone, Build)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Recipient of contact messages
    pub email: Arc<EmailAddressWithName>,
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let author = &message.author;
        let email = Email {
            recipient: (*self.config.email).clone(),
            subject: format!("[Contact Form] Message from {}", *author.name),
            body: format!(
                "Message from {} ({}):\n\n{}",
                *author.name, author.email, *message.content
            ),
            reply_to: Some(author.email.clone().with_name((*author.name).clone())),
        };

        if !self.email.send(email).await? {
            warn!(from = %author.email, "contact message was rejected");
            return Err(ContactSendMessageError::Send);
        }

        info!(from = %author.email, "contact message delivered");
        Ok(())
    }
}
