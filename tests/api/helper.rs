use once_cell::sync::Lazy;
use quotes_site::{
    app::App,
    config::{get_configuration, Settings},
    telemetry::get_subscriber,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use tracing_subscriber::util::SubscriberInitExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = "quotes_site=trace,tower_http=trace,axum::rejection=trace";

    if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(env_filter, std::io::stdout).init();
    } else {
        get_subscriber(env_filter, std::io::sink).init();
    };
});

pub const STATUS_CLEAR_DELAY_MILLISECONDS: u64 = 1500;

pub struct TestApp {
    pub addr: String,
    pub quotes_server: MockServer,
    pub mailer_server: MockServer,
}

impl TestApp {
    pub async fn get_home(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/", &self.addr))
            .send()
            .await
            .expect("The request should succeed.")
    }

    pub async fn post_subscriptions(&self, form: &[(&str, &str)]) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/subscribe", &self.addr))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("The request should succeed.")
    }

    pub async fn get_status(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/status", &self.addr))
            .send()
            .await
            .expect("The request should succeed.")
    }

    /// Makes the quotes service answer every request with `body`.
    pub async fn serve_quotes(&self, body: Value) {
        Mock::given(path("/quotes"))
            .and(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.quotes_server)
            .await;
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Like `spawn_app`, with a last chance to tweak the settings the app starts with.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let quotes_server = MockServer::start().await;
    let mailer_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;
    config.application.status_clear_delay_milliseconds = STATUS_CLEAR_DELAY_MILLISECONDS;
    config.quotes.base_url = quotes_server.uri();
    config.mailer.base_url = mailer_server.uri();
    configure(&mut config);

    let app = App::with(&config)
        .await
        .expect("The listener should be able to bind the address.");

    let test_app = TestApp {
        addr: format!("http://127.0.0.1:{}", app.port().unwrap()),
        quotes_server,
        mailer_server,
    };

    let _ = tokio::spawn(async move { app.serve().await.expect("The server should be running") });

    test_app
}

/// An address nothing listens on: the port is released right after the OS hands it out.
pub fn closed_address() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("The OS should allocate a port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{}", port)
}

pub fn get_client() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
