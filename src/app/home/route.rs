use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    app::AppState,
    domain::quote::{Quote, QuoteCollection},
};

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    quote: Quote,
}

#[derive(Template)]
#[template(path = "quotes_unavailable.html")]
struct QuotesUnavailableTemplate {
    message: String,
}

#[tracing::instrument(name = "Home page", skip(state))]
pub async fn home_page(State(state): State<AppState>) -> Response {
    let collection = match state.quotes_client.fetch_quotes().await {
        Ok(collection) => collection,
        Err(e) => {
            tracing::error!(detail = ?e, "failed to fetch quotes");
            return (
                StatusCode::BAD_GATEWAY,
                QuotesUnavailableTemplate {
                    message: e.to_string(),
                },
            )
                .into_response();
        }
    };

    HomeTemplate {
        quote: pick_quote(collection),
    }
    .into_response()
}

fn pick_quote(collection: Option<QuoteCollection>) -> Quote {
    match collection {
        Some(collection) => collection.choose(&mut rand::thread_rng()).clone(),
        None => Quote::fallback(),
    }
}
