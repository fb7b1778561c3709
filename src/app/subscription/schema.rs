use serde::Deserialize;

use crate::{
    app::error::AppError,
    domain::{
        quote::Quote,
        subscription::{email::SubscriberEmail, NewSubscription},
    },
};

/// The subscription form, including the hidden fields holding the displayed quote.
#[derive(Deserialize)]
pub struct SubscribeForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub quote: String,
    pub author: String,
}

impl TryFrom<SubscribeForm> for NewSubscription {
    type Error = AppError;

    fn try_from(value: SubscribeForm) -> Result<Self, Self::Error> {
        let email =
            SubscriberEmail::try_from(value.email).map_err(|message| AppError::ValidationError {
                field: "email",
                message,
            })?;
        let quote = Quote {
            quote: value.quote,
            author: value.author,
        };

        NewSubscription::new(value.name, email, &value.message, &quote).map_err(|e| {
            AppError::ValidationError {
                field: e.field(),
                message: e.to_string(),
            }
        })
    }
}
