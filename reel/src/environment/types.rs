use reel_core_contact_impl::ContactServiceImpl;
use reel_core_form_impl::{
    ContactFormServiceImpl, LocalContactSendAction, RemoteContactSendAction,
};
use reel_core_health_impl::HealthServiceImpl;
use reel_email_impl::EmailServiceImpl;
use reel_extern_impl::contact::ContactApiServiceImpl;
use reel_shared_impl::{time::TimeServiceImpl, toast::ToastServiceImpl};

// API
pub type RestServer = reel_api_rest::RestServer<Health, Contact>;

// Email
pub type Email = EmailServiceImpl;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;
pub type Toasts = ToastServiceImpl;

// Core
pub type Health = HealthServiceImpl<Time, Email>;
pub type Contact = ContactServiceImpl<Email>;

/// Contact form delivering messages through the local SMTP transport
pub type LocalForm = ContactFormServiceImpl<LocalContactSendAction<Contact>, Toasts>;
/// Contact form delivering messages through the REST API
pub type RemoteForm = ContactFormServiceImpl<RemoteContactSendAction<ContactApi>, Toasts>;
