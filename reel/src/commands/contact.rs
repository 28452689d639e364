use anyhow::bail;
use clap::Subcommand;
use reel_config::Config;
use reel_core_form_contracts::{ContactFormService, SubmitOutcome};
use reel_di::Provide;
use reel_models::{
    form::{ContactFormField, ContactFormFields},
    toast::{QueuedToast, ToastVariant},
};
use reel_shared_contracts::toast::ToastService;
use tracing::info;
use url::Url;

use crate::{
    email,
    environment::{
        types::{LocalForm, RemoteForm, Toasts},
        ConfigProvider, Provider,
    },
};

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a message through the contact form
    #[command(aliases(["s"]))]
    Send {
        /// Your name
        #[arg(long, default_value = "")]
        name: String,
        /// Your email address
        #[arg(long, default_value = "")]
        email: String,
        /// The message to send
        #[arg(long, default_value = "")]
        message: String,
        /// Submit through the REST API instead of delivering the email
        /// directly. Defaults to `form.api_url` if no url is given.
        #[arg(long, num_args = 0..=1)]
        api: Option<Option<Url>>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                message,
                api,
            } => {
                let fields = ContactFormFields {
                    name,
                    email,
                    message,
                };
                match api {
                    None => send_local(config, fields).await,
                    Some(api_url) => send_remote(config, api_url, fields).await,
                }
            }
        }
    }
}

async fn send_local(config: Config, fields: ContactFormFields) -> anyhow::Result<()> {
    let email = email::connect(&config.email)?;
    let mut provider = Provider::new(ConfigProvider::new(&config)?, email);

    let form: LocalForm = provider.provide();
    let toasts: Toasts = provider.provide();
    run(&form, toasts, fields).await
}

async fn send_remote(
    mut config: Config,
    api_url: Option<Url>,
    fields: ContactFormFields,
) -> anyhow::Result<()> {
    if let Some(api_url) = api_url {
        config.form.api_url = api_url;
    }
    info!("Submitting contact form to {}", config.form.api_url);
    let mut provider = ConfigProvider::new(&config)?;

    let form: RemoteForm = provider.provide();
    let toasts: Toasts = provider.provide();
    run(&form, toasts, fields).await
}

/// Fills in and submits the form, then waits until it has returned to idle.
async fn run(
    form: &impl ContactFormService,
    toasts: Toasts,
    fields: ContactFormFields,
) -> anyhow::Result<()> {
    for field in ContactFormField::ALL {
        form.set_field(field, fields.get(field).into());
    }

    // The watch channel only keeps the latest status, so a fast send may go
    // from loading to a settled status without loading being observed.
    let mut status = form.watch_status();
    status.mark_unchanged();
    let transitions = tokio::spawn(async move {
        while status.changed().await.is_ok() {
            let current = *status.borrow_and_update();
            println!("status: {current}");
            if current.is_idle() {
                break;
            }
        }
    });

    let outcome = form.submit().await;

    if let SubmitOutcome::Invalid(errors) = &outcome {
        for (field, error) in errors.iter() {
            println!("{field}: {error}");
        }
    }

    for QueuedToast { toast, .. } in toasts.toasts() {
        let marker = match toast.variant {
            ToastVariant::Default => "*",
            ToastVariant::Destructive => "!",
        };
        println!("{marker} {}\n  {}", toast.title, toast.description);
    }

    match outcome {
        SubmitOutcome::Sent | SubmitOutcome::Failed { .. } => transitions.await?,
        SubmitOutcome::Disabled | SubmitOutcome::Invalid(_) => transitions.abort(),
    }

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Invalid(_) => bail!("The contact form is invalid"),
        SubmitOutcome::Failed { description } => bail!("Failed to send message: {description}"),
        SubmitOutcome::Disabled => bail!("The contact form is busy"),
    }
}
