use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use reel_di::Build;
use reel_models::toast::{QueuedToast, Toast, ToastId};
use reel_shared_contracts::toast::ToastService;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Build)]
pub struct ToastServiceImpl {
    config: ToastServiceConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone, Copy)]
pub struct ToastServiceConfig {
    /// Maximum number of visible toasts. Older toasts are dropped first.
    pub limit: usize,
}

#[derive(Debug)]
struct State {
    next_id: AtomicU64,
    toasts: watch::Sender<Vec<QueuedToast>>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            toasts: watch::Sender::new(Vec::new()),
        }
    }
}

impl ToastService for ToastServiceImpl {
    fn toast(&self, toast: Toast) -> ToastId {
        let id = ToastId(self.state.next_id.fetch_add(1, Ordering::Relaxed));
        debug!(%id, variant = ?toast.variant, title = %toast.title, "show toast");

        let limit = self.config.limit.max(1);
        self.state.toasts.send_modify(|toasts| {
            toasts.insert(0, QueuedToast { id, toast });
            toasts.truncate(limit);
        });

        id
    }

    fn dismiss(&self, id: ToastId) {
        self.state.toasts.send_if_modified(|toasts| {
            let len = toasts.len();
            toasts.retain(|x| x.id != id);
            toasts.len() != len
        });
    }

    fn toasts(&self) -> Vec<QueuedToast> {
        self.state.toasts.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Vec<QueuedToast>> {
        self.state.toasts.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reel_models::toast::ToastVariant;

    use super::*;

    fn sut(limit: usize) -> ToastServiceImpl {
        ToastServiceImpl {
            config: ToastServiceConfig { limit },
            state: Default::default(),
        }
    }

    fn toast(title: &str) -> Toast {
        Toast {
            variant: ToastVariant::Default,
            title: title.into(),
            description: "description".into(),
        }
    }

    #[test]
    fn newest_first() {
        // Arrange
        let sut = sut(3);

        // Act
        let first = sut.toast(toast("first"));
        let second = sut.toast(toast("second"));

        // Assert
        assert_eq!(
            sut.toasts(),
            [
                QueuedToast {
                    id: second,
                    toast: toast("second")
                },
                QueuedToast {
                    id: first,
                    toast: toast("first")
                },
            ]
        );
    }

    #[test]
    fn limit_drops_oldest() {
        // Arrange
        let sut = sut(1);

        // Act
        sut.toast(toast("first"));
        let second = sut.toast(toast("second"));

        // Assert
        let toasts = sut.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
    }

    #[test]
    fn zero_limit_keeps_one() {
        let sut = sut(0);
        sut.toast(toast("first"));
        assert_eq!(sut.toasts().len(), 1);
    }

    #[test]
    fn dismiss() {
        // Arrange
        let sut = sut(3);
        let first = sut.toast(toast("first"));
        let second = sut.toast(toast("second"));

        // Act
        sut.dismiss(first);
        sut.dismiss(ToastId(1234));

        // Assert
        let ids = sut.toasts().into_iter().map(|x| x.id).collect::<Vec<_>>();
        assert_eq!(ids, [second]);
    }

    #[tokio::test]
    async fn subscribe() {
        // Arrange
        let sut = sut(1);
        let mut rx = sut.subscribe();

        // Act
        let id = sut.toast(toast("hello"));

        // Assert
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update()[0].id, id);

        sut.dismiss(ToastId(1234));
        assert!(!rx.has_changed().unwrap());

        sut.dismiss(id);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn clones_share_queue() {
        let sut = sut(2);
        let clone = sut.clone();
        clone.toast(toast("hello"));
        assert_eq!(sut.toasts().len(), 1);
    }
}
