use std::{io, net::IpAddr, time::Duration};

use anyhow::Context;
use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Settings, mailer::MailerClient, quotes::QuotesClient};

mod asset;
mod error;
mod health;
mod home;
mod not_found;
mod subscription;

#[derive(Clone)]
pub struct AppState {
    quotes_client: QuotesClient,
    mailer_client: MailerClient,
    status_clear_delay: Duration,
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(home::router())
        .merge(subscription::router())
        .merge(asset::router())
        .fallback(not_found::not_found_page)
}

pub struct App {
    listener: TcpListener,
    state: AppState,
}

impl App {
    pub async fn with(config: &Settings) -> anyhow::Result<Self> {
        let quotes_client =
            QuotesClient::new(config.quotes.base_url.clone(), config.quotes.timeout())
                .context("Failed to build the quotes client.")?;
        let mailer_client =
            MailerClient::new(config.mailer.base_url.clone(), config.mailer.timeout())
                .context("Failed to build the mailer client.")?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}.", address))?;

        Ok(Self {
            listener,
            state: AppState {
                quotes_client,
                mailer_client,
                status_clear_delay: config.application.status_clear_delay(),
            },
        })
    }

    pub fn host(&self) -> Result<IpAddr, io::Error> {
        Ok(self.listener.local_addr()?.ip())
    }

    pub fn port(&self) -> Result<u16, io::Error> {
        Ok(self.listener.local_addr()?.port())
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router().with_state(self.state).layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let id = uuid::Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    method = ?request.method(),
                    uri = ?request.uri(),
                    %id,
                )
            }),
        );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
