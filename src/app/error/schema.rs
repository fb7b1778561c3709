use serde::Serialize;

#[derive(Serialize)]
pub struct Error {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetails>>,
}

/// Points at the form field that was rejected.
#[derive(Serialize)]
pub struct ErrorDetails {
    pub field: String,
    pub message: String,
}
