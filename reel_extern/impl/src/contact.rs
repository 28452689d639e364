use std::sync::Arc;

use anyhow::Context;
use reel_di::Build;
use reel_extern_contracts::contact::ContactApiService;
use reel_models::{contact::ContactMessage, form::SendResult};
use serde::Serialize;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Build)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    endpoint: Arc<Url>,
}

impl ContactApiServiceConfig {
    /// Resolves the contact endpoint relative to the base url of the REST
    /// API.
    pub fn new(api_url: &Url) -> anyhow::Result<Self> {
        let endpoint = api_url
            .join("contact")
            .with_context(|| format!("Invalid api url {api_url}"))?;
        Ok(Self {
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn send(&self, message: ContactMessage) -> anyhow::Result<SendResult> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(&ContactRequest::from(&message))
            .send()
            .await?;

        // error responses carry a `SendResult` too
        let status = response.status();
        response
            .json::<SendResult>()
            .await
            .with_context(|| format!("Unexpected response from contact api ({status})"))
    }
}

#[derive(Serialize)]
struct ContactRequest<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ContactMessage> for ContactRequest<'a> {
    fn from(value: &'a ContactMessage) -> Self {
        Self {
            name: &value.author.name,
            email: value.author.email.as_str(),
            message: &value.content,
        }
    }
}
