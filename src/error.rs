use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("OPENAI_API_KEY is not configured")]
    Configuration,

    #[error("Upstream API error (status {status})")]
    Upstream { status: u16, body: String },

    #[error("Upstream response shape not recognized")]
    UnrecognizedResponseShape { body: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TranslateError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Configuration
            | Self::Upstream { .. }
            | Self::UnrecognizedResponseShape { .. }
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            Self::InvalidInput(message) => ErrorBody {
                error: message.clone(),
                detail: None,
            },
            Self::Configuration => ErrorBody {
                error: self.to_string(),
                detail: None,
            },
            Self::Upstream { body, .. } | Self::UnrecognizedResponseShape { body } => ErrorBody {
                error: self.to_string(),
                detail: Some(body.clone()),
            },
            // Internal details stay in the logs.
            Self::Internal(_) => ErrorBody {
                error: "Internal server error".to_string(),
                detail: None,
            },
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            error!("Translation failed unexpectedly: {:#}", err);
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}
