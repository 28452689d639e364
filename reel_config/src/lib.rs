use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use reel_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
pub const CONFIG_PATH_ENV: &str = "REEL_CONFIG";

/// Loads the config files listed in `REEL_CONFIG`, or the default config if
/// the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(paths) => load_paths(&paths.split(':').collect::<Vec<_>>()),
        Err(_) => load_paths(&[DEFAULT_CONFIG_PATH]),
    }
}

/// Loads and merges the given config files. Values in later files override
/// values in earlier ones.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub health: HealthConfig,
    pub contact: ContactConfig,
    pub form: FormConfig,
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Recipient of messages submitted through the contact form
    pub email: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    /// Delay after which a settled form returns to idle
    pub reset_delay: Duration,
    /// Base url of the REST API used by remote form submissions
    pub api_url: Url,
}

#[derive(Debug, Deserialize)]
pub struct ToastConfig {
    /// Maximum number of toasts visible at the same time
    pub limit: usize,
}
