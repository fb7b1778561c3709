use std::time::Duration;

use reqwest::Client;

use crate::domain::quote::QuoteCollection;

#[derive(thiserror::Error, Debug)]
pub enum QuotesError {
    #[error("Failed to reach the quotes service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Request failed with status code {0}")]
    Status(u16),
}

#[derive(Clone)]
pub struct QuotesClient {
    http_client: Client,
    base_url: String,
}

impl QuotesClient {
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

    /// Fetches the current quote collection.
    ///
    /// `Ok(None)` means the service answered but the body held no usable quotes.
    #[tracing::instrument(name = "Fetch quotes", skip(self))]
    pub async fn fetch_quotes(&self) -> Result<Option<QuoteCollection>, QuotesError> {
        let url = format!("{}/quotes", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(QuotesError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuotesError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(QuotesError::Transport)?;
        let collection = QuoteCollection::parse(&body);
        if collection.is_none() {
            tracing::warn!("the quotes service returned no usable quotes");
        }

        Ok(collection)
    }
}
