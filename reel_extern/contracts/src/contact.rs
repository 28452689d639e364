use std::future::Future;

use reel_models::{contact::ContactMessage, form::SendResult};

/// Client for the `/contact` endpoint of the REST API.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Submits a contact message. Rejections by the server are returned as
    /// an unsuccessful [`SendResult`], only transport and protocol failures
    /// are errors.
    fn send(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = anyhow::Result<SendResult>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_send(mut self, message: ContactMessage, result: SendResult) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, message: ContactMessage, error: &'static str) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
