use reel_models::toast::{QueuedToast, Toast, ToastId};
use tokio::sync::watch;

/// The notification host. Owns queueing and dismissal of toasts.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ToastService: Send + Sync + 'static {
    /// Shows a toast and returns its id.
    fn toast(&self, toast: Toast) -> ToastId;

    /// Removes a toast. Unknown ids are ignored.
    fn dismiss(&self, id: ToastId);

    /// Returns the currently visible toasts, newest first.
    fn toasts(&self) -> Vec<QueuedToast>;

    /// Subscribes to changes of the visible toasts.
    fn subscribe(&self) -> watch::Receiver<Vec<QueuedToast>>;
}

#[cfg(feature = "mock")]
impl MockToastService {
    pub fn with_toast(mut self, toast: Toast) -> Self {
        self.expect_toast()
            .once()
            .with(mockall::predicate::eq(toast))
            .return_const(ToastId(0));
        self
    }
}
