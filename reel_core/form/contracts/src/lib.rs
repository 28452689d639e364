use std::future::Future;

use reel_models::{
    contact::ContactMessage,
    form::{ContactFormErrors, ContactFormField, ContactFormFields, FormStatus, SendResult},
};
use tokio::sync::watch;

/// A contact form instance: field state, inline validation and the
/// submission status machine.
///
/// ```text
/// idle --submit(valid)--> loading --success--> success --delay--> idle
///                                 --failure--> error   --delay--> idle
/// ```
pub trait ContactFormService: Send + Sync + 'static {
    fn status(&self) -> FormStatus;

    /// Subscribes to status transitions.
    fn watch_status(&self) -> watch::Receiver<FormStatus>;

    fn fields(&self) -> ContactFormFields;

    /// Updates a field. After the first submit attempt the field is
    /// re-validated immediately.
    fn set_field(&self, field: ContactFormField, value: String);

    /// Returns the inline validation messages.
    fn errors(&self) -> ContactFormErrors;

    /// Whether the submit control is enabled.
    fn can_submit(&self) -> bool {
        self.status().is_idle()
    }

    /// Validates the fields and, if they are valid and the form is idle,
    /// invokes the send operation.
    fn submit(&self) -> impl Future<Output = SubmitOutcome> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was not idle, nothing happened.
    Disabled,
    /// At least one field failed validation, nothing was sent.
    Invalid(ContactFormErrors),
    /// The message has been delivered and the fields have been cleared.
    Sent,
    /// The send operation failed. Fields are kept for a retry.
    Failed { description: String },
}

/// The send operation invoked by a contact form. Failures are reported as
/// data, never as errors.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSendAction: Send + Sync + 'static {
    fn send(&self, message: ContactMessage) -> impl Future<Output = SendResult> + Send;
}

#[cfg(feature = "mock")]
impl MockContactSendAction {
    pub fn with_send(mut self, message: ContactMessage, result: SendResult) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    /// Expects a single send that resolves once a result is passed to the
    /// returned sender.
    pub fn with_pending_send(
        mut self,
        message: ContactMessage,
    ) -> (Self, tokio::sync::oneshot::Sender<SendResult>) {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| {
                Box::pin(async move { rx.await.unwrap_or_else(|_| SendResult::failure(None)) })
            });
        (self, tx)
    }
}
