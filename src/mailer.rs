use std::time::Duration;

use reqwest::Client;

use crate::domain::subscription::{MailerRequest, NewSubscription};

#[derive(thiserror::Error, Debug)]
pub enum MailerError {
    #[error("Failed to reach the mailer service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("The mailer service answered with status code {0}")]
    Status(u16),
}

#[derive(Clone)]
pub struct MailerClient {
    http_client: Client,
    base_url: String,
}

impl MailerClient {
    /// Without a `timeout` a request waits for the upstream indefinitely.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    /// Hands the subscription to the mailer and returns its (opaque) answer.
    #[tracing::instrument(
        name = "Send subscription to the mailer",
        skip(self, subscription),
        fields(email = %subscription.email, name = %subscription.name)
    )]
    pub async fn send_subscription(
        &self,
        subscription: &NewSubscription,
    ) -> Result<String, MailerError> {
        let url = format!("{}/mailer", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&MailerRequest::from(subscription))
            .send()
            .await
            .map_err(MailerError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailerError::Status(status.as_u16()));
        }

        response.text().await.map_err(MailerError::Transport)
    }
}
