use anyhow::Context;
use quotes_site::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::with(&config).await?;

    let (host, port) = (app.host()?, app.port()?);
    tracing::info!(
        %host,
        port,
        quotes = %config.quotes.base_url,
        mailer = %config.mailer.base_url,
        "starting server"
    );
    app.serve().await.context("The server stopped unexpectedly.")?;

    Ok(())
}
