use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

use reel_core_form_contracts::{ContactFormService, ContactSendAction, SubmitOutcome};
use reel_di::Build;
use reel_models::{
    form::{ContactFormErrors, ContactFormField, ContactFormFields, FormStatus},
    toast::{Toast, ToastVariant},
};
use reel_shared_contracts::toast::ToastService;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub use send_action::{LocalContactSendAction, RemoteContactSendAction};

mod send_action;

#[cfg(test)]
mod tests;

pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Uh oh! Something went wrong.";
pub const FAILURE_DESCRIPTION: &str = "There was a problem with your request. Please try again.";

#[derive(Debug, Clone, Build)]
pub struct ContactFormServiceImpl<SendAction, ToastS> {
    send_action: SendAction,
    toast: ToastS,
    config: ContactFormFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormFeatureConfig {
    /// Delay after which a settled form returns to idle
    pub reset_delay: Duration,
}

impl Default for ContactFormFeatureConfig {
    fn default() -> Self {
        Self {
            reset_delay: Duration::from_secs(3),
        }
    }
}

#[derive(Debug)]
struct State {
    status: watch::Sender<FormStatus>,
    fields: watch::Sender<ContactFormFields>,
    errors: watch::Sender<ContactFormErrors>,
    /// Set by the first submit attempt, cleared when the form is reset.
    submitted: AtomicBool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            status: watch::Sender::new(FormStatus::Idle),
            fields: watch::Sender::new(ContactFormFields::default()),
            errors: watch::Sender::new(ContactFormErrors::default()),
            submitted: AtomicBool::new(false),
        }
    }
}

impl State {
    /// Moves the status from idle to loading. Returns `false` if the form was
    /// not idle.
    fn begin_loading(&self) -> bool {
        self.status.send_if_modified(|status| {
            let idle = status.is_idle();
            if idle {
                *status = FormStatus::Loading;
            }
            idle
        })
    }

    fn reset_fields(&self) {
        self.fields.send_replace(ContactFormFields::default());
        self.errors.send_replace(ContactFormErrors::default());
        self.submitted.store(false, Ordering::Relaxed);
    }
}

impl<SendAction, ToastS> ContactFormServiceImpl<SendAction, ToastS> {
    /// Creates an idle form with empty fields.
    pub fn new(send_action: SendAction, toast: ToastS, config: ContactFormFeatureConfig) -> Self {
        Self {
            send_action,
            toast,
            config,
            state: Default::default(),
        }
    }
}

impl<SendAction, ToastS> ContactFormServiceImpl<SendAction, ToastS>
where
    SendAction: ContactSendAction,
    ToastS: ToastService,
{
    fn schedule_reset(&self) {
        let state = Arc::downgrade(&self.state);
        let delay = self.config.reset_delay;
        tokio::spawn(reset_after(state, delay));
    }

    fn notify_success(&self) {
        self.toast.toast(Toast {
            variant: ToastVariant::Default,
            title: SUCCESS_TITLE.into(),
            description: SUCCESS_DESCRIPTION.into(),
        });
    }

    fn notify_failure(&self, description: String) {
        self.toast.toast(Toast {
            variant: ToastVariant::Destructive,
            title: FAILURE_TITLE.into(),
            description,
        });
    }
}

/// Returns a settled form to idle. A form that has been dropped in the
/// meantime is left alone.
async fn reset_after(state: Weak<State>, delay: Duration) {
    tokio::time::sleep(delay).await;

    let Some(state) = state.upgrade() else {
        debug!("contact form dropped before status reset");
        return;
    };

    state.status.send_if_modified(|status| {
        let settled = status.is_settled();
        if settled {
            *status = FormStatus::Idle;
        }
        settled
    });
}

impl<SendAction, ToastS> ContactFormService for ContactFormServiceImpl<SendAction, ToastS>
where
    SendAction: ContactSendAction,
    ToastS: ToastService,
{
    fn status(&self) -> FormStatus {
        *self.state.status.borrow()
    }

    fn watch_status(&self) -> watch::Receiver<FormStatus> {
        self.state.status.subscribe()
    }

    fn fields(&self) -> ContactFormFields {
        self.state.fields.borrow().clone()
    }

    fn set_field(&self, field: ContactFormField, value: String) {
        self.state.fields.send_modify(|fields| fields.set(field, value));

        if self.state.submitted.load(Ordering::Relaxed) {
            let error = self.state.fields.borrow().validate_field(field);
            self.state.errors.send_if_modified(|errors| {
                let changed = errors.get(field) != error;
                errors.set(field, error);
                changed
            });
        }
    }

    fn errors(&self) -> ContactFormErrors {
        *self.state.errors.borrow()
    }

    async fn submit(&self) -> SubmitOutcome {
        if !self.can_submit() {
            debug!(status = %self.status(), "ignoring submit while form is busy");
            return SubmitOutcome::Disabled;
        }

        self.state.submitted.store(true, Ordering::Relaxed);

        let validated = self.state.fields.borrow().validate();
        let message = match validated {
            Ok(message) => message,
            Err(errors) => {
                debug!(?errors, "contact form is invalid");
                self.state.errors.send_replace(errors);
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.state.errors.send_replace(ContactFormErrors::default());

        if !self.state.begin_loading() {
            return SubmitOutcome::Disabled;
        }

        let result = self.send_action.send(message).await;

        let outcome = if result.success {
            info!("contact message sent");
            self.state.status.send_replace(FormStatus::Success);
            self.notify_success();
            self.state.reset_fields();
            SubmitOutcome::Sent
        } else {
            let description = result
                .error
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| FAILURE_DESCRIPTION.into());
            warn!(%description, "failed to send contact message");
            self.state.status.send_replace(FormStatus::Error);
            self.notify_failure(description.clone());
            SubmitOutcome::Failed { description }
        };

        self.schedule_reset();

        outcome
    }
}
