use std::{sync::Arc, time::Duration};

use reel_core_form_contracts::{ContactFormService, MockContactSendAction};
use reel_models::{
    contact::{ContactMessage, ContactMessageAuthor},
    form::{ContactFormField, ContactFormFields},
    toast::{Toast, ToastVariant},
};
use reel_shared_contracts::toast::MockToastService;

use crate::{
    ContactFormFeatureConfig, ContactFormServiceImpl, FAILURE_DESCRIPTION, FAILURE_TITLE,
    SUCCESS_DESCRIPTION, SUCCESS_TITLE,
};

mod busy;
mod submit;

type Sut = ContactFormServiceImpl<MockContactSendAction, MockToastService>;

const RESET_DELAY: Duration = Duration::from_secs(3);

fn make_sut(send_action: MockContactSendAction, toast: MockToastService) -> Sut {
    ContactFormServiceImpl::new(
        send_action,
        toast,
        ContactFormFeatureConfig {
            reset_delay: RESET_DELAY,
        },
    )
}

fn fill(sut: &impl ContactFormService, name: &str, email: &str, message: &str) {
    sut.set_field(ContactFormField::Name, name.into());
    sut.set_field(ContactFormField::Email, email.into());
    sut.set_field(ContactFormField::Message, message.into());
}

fn fill_valid(sut: &impl ContactFormService) {
    fill(sut, "Ada", "ada@example.com", "I need an editor for my short film.");
}

fn valid_fields() -> ContactFormFields {
    ContactFormFields {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "I need an editor for my short film.".into(),
    }
}

pub(crate) fn valid_message() -> ContactMessage {
    ContactMessage {
        author: ContactMessageAuthor {
            name: "Ada".try_into().unwrap(),
            email: "ada@example.com".parse().unwrap(),
        },
        content: "I need an editor for my short film.".try_into().unwrap(),
    }
}

fn success_toast() -> Toast {
    Toast {
        variant: ToastVariant::Default,
        title: SUCCESS_TITLE.into(),
        description: SUCCESS_DESCRIPTION.into(),
    }
}

fn failure_toast(description: &str) -> Toast {
    Toast {
        variant: ToastVariant::Destructive,
        title: FAILURE_TITLE.into(),
        description: description.into(),
    }
}

fn fallback_toast() -> Toast {
    failure_toast(FAILURE_DESCRIPTION)
}

fn shared(sut: Sut) -> Arc<Sut> {
    Arc::new(sut)
}
