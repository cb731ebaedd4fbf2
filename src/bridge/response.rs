use std::error::Error;

use serde::Serialize;

use crate::models::aero::polar::FoilPolar;

/// The single JSON object written for every request.
///
/// On failure `success` is false, all arrays are empty, and `error` holds the
/// rendered error chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    #[serde(flatten)]
    pub polar: FoilPolar,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    #[must_use]
    pub fn success(polar: FoilPolar) -> Self {
        Self { polar, error: None }
    }

    /// A failure envelope whose message joins `err` and its sources with `": "`.
    #[must_use]
    pub fn failure(err: &(dyn Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::failure_message(message)
    }

    /// A failure envelope carrying an already rendered message.
    #[must_use]
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self {
            polar: FoilPolar::default(),
            error: Some(message.into()),
        }
    }
}
