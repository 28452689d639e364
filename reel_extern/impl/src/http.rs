use std::{ops::Deref, sync::LazyLock, time::Duration};

use reel_utils::reel_version;

/// `Reel Portfolio (<homepage>, <repository>, Version <version>)`
pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "Reel Portfolio ({}, {}, Version {})",
        env!("CARGO_PKG_HOMEPAGE"),
        env!("CARGO_PKG_REPOSITORY"),
        reel_version()
    )
});

/// Upper bound for a single request, including reading the body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared http client for outgoing requests.
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build http client");
        Self(client)
    }
}
