pub use contact::{ApiContactForm, ApiSendResult};

mod contact;
