use anyhow::Context;
use reel_config::EmailConfig;
use reel_email_impl::EmailServiceImpl;

/// Set up the SMTP transport
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.smtp_url, config.from.clone())
        .context("Failed to configure SMTP transport")
}
