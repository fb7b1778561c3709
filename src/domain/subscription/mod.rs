pub mod email;

use serde::Serialize;

use self::email::SubscriberEmail;
use super::quote::Quote;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("name is empty")]
    EmptyName,
    #[error("message is empty")]
    EmptyMessage,
}

impl SubscriptionError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyMessage => "message",
        }
    }
}

/// What the mailer receives for one form submission.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub name: String,
    pub email: SubscriberEmail,
    pub message: String,
}

impl NewSubscription {
    /// Builds a subscription whose message carries the quote the subscriber was looking at.
    pub fn new(
        name: String,
        email: SubscriberEmail,
        message: &str,
        quote: &Quote,
    ) -> Result<Self, SubscriptionError> {
        if name.is_empty() {
            return Err(SubscriptionError::EmptyName);
        }
        if message.is_empty() {
            return Err(SubscriptionError::EmptyMessage);
        }

        Ok(Self {
            name,
            email,
            message: with_quote_of_the_day(message, quote),
        })
    }
}

fn with_quote_of_the_day(message: &str, quote: &Quote) -> String {
    format!(
        "{}\n\n✨ Quote of the day: \"{}\" — {}",
        message, quote.quote, quote.author
    )
}

/// Wire body of the mailer endpoint.
#[derive(Serialize)]
pub struct MailerRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl<'a> From<&'a NewSubscription> for MailerRequest<'a> {
    fn from(value: &'a NewSubscription) -> Self {
        Self {
            name: &value.name,
            email: value.email.as_ref(),
            message: &value.message,
        }
    }
}
