use reel_core_contact_contracts::{ContactSendMessageError, ContactService};
use reel_core_form_contracts::ContactSendAction;
use reel_di::Build;
use reel_extern_contracts::contact::ContactApiService;
use reel_models::{contact::ContactMessage, form::SendResult};
use tracing::error;

/// Sends contact messages in-process using the contact service.
#[derive(Debug, Clone, Build)]
pub struct LocalContactSendAction<Contact> {
    contact: Contact,
}

impl<Contact> LocalContactSendAction<Contact> {
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }
}

impl<Contact> ContactSendAction for LocalContactSendAction<Contact>
where
    Contact: ContactService,
{
    async fn send(&self, message: ContactMessage) -> SendResult {
        match self.contact.send_message(message).await {
            Ok(()) => SendResult::ok(),
            Err(err @ ContactSendMessageError::Send) => SendResult::failure(Some(err.to_string())),
            Err(ContactSendMessageError::Other(err)) => {
                error!("Failed to send contact message: {err:#}");
                SendResult::failure(None)
            }
        }
    }
}

/// Sends contact messages through the REST API.
#[derive(Debug, Clone, Build)]
pub struct RemoteContactSendAction<ContactApi> {
    contact_api: ContactApi,
}

impl<ContactApi> RemoteContactSendAction<ContactApi> {
    pub fn new(contact_api: ContactApi) -> Self {
        Self { contact_api }
    }
}

impl<ContactApi> ContactSendAction for RemoteContactSendAction<ContactApi>
where
    ContactApi: ContactApiService,
{
    async fn send(&self, message: ContactMessage) -> SendResult {
        self.contact_api
            .send(message)
            .await
            .unwrap_or_else(|err| {
                error!("Failed to reach contact api: {err:#}");
                SendResult::failure(None)
            })
    }
}
