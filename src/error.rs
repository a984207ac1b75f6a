use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::models::ErrorBody;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Missing q")]
    MissingQuery,

    #[error("{message}")]
    Upstream { message: String, target: String },
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingQuery => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let target = match self {
            ProxyError::MissingQuery => None,
            ProxyError::Upstream { target, .. } => Some(target.clone()),
        };
        ErrorBody {
            error: self.to_string(),
            target,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
