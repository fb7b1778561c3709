use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};

use super::schema::SubscribeForm;
use crate::{
    app::{error::AppResult, AppState},
    domain::subscription::NewSubscription,
};

/// Client-side event fired on the form once the mailer accepted a subscription.
const SUBSCRIBED_EVENT: &str = "subscribed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Success,
    Failure,
}

impl SubscriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "✅ Subscribed Successfully!",
            Self::Failure => "❌ Subscription Failed!",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "status-success",
            Self::Failure => "status-error",
        }
    }
}

/// Transient banner that asks for its own replacement after `clear_after_ms`.
#[derive(Template)]
#[template(path = "status.html")]
struct StatusTemplate {
    status: SubscriptionStatus,
    clear_after_ms: u128,
}

#[derive(Template)]
#[template(path = "status_cleared.html")]
struct ClearedStatusTemplate;

#[tracing::instrument(
    name = "Relaying a new subscription",
    skip(state, form),
    fields(email = %form.email, name = %form.name)
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> AppResult<Response> {
    let subscription = NewSubscription::try_from(form)?;
    let clear_after_ms = state.status_clear_delay.as_millis();

    match state.mailer_client.send_subscription(&subscription).await {
        Ok(response) => {
            tracing::info!(response = %response, "subscription accepted by the mailer");
            Ok((
                [("HX-Trigger", SUBSCRIBED_EVENT)],
                StatusTemplate {
                    status: SubscriptionStatus::Success,
                    clear_after_ms,
                },
            )
                .into_response())
        }
        Err(e) => {
            tracing::error!(detail = ?e, "failed to send the subscription to the mailer");
            Ok(StatusTemplate {
                status: SubscriptionStatus::Failure,
                clear_after_ms,
            }
            .into_response())
        }
    }
}

#[tracing::instrument(name = "Clearing the subscription status")]
pub async fn clear_status() -> impl IntoResponse {
    ClearedStatusTemplate
}
