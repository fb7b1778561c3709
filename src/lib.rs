pub mod app;
pub mod config;
pub mod domain;
pub mod mailer;
pub mod quotes;
pub mod telemetry;
