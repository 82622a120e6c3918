use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use thiserror::Error;
use tracing::{debug, error};

/// Every way a request can fail, mapped to a status and a plain-text body.
///
/// Store details are logged but never sent to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Only {0} Method Allowed")]
    MethodNotAllowed(&'static str),

    #[error("Invalid request payload")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Store failure: {0}")]
    Store(#[from] DomainError),

    #[error("Invalid response")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidPayload(_) | ApiError::Encode(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Store(DomainError::Scan(_)) => "Invalid database scan".to_string(),
            ApiError::Store(_) => "Invalid query to the database".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(e) => error!("❌ {}", e),
            ApiError::InvalidPayload(e) => debug!("Rejected payload: {}", e),
            ApiError::Encode(e) => error!("❌ Failed to encode response: {}", e),
            ApiError::MethodNotAllowed(_) => {}
        }

        (self.status(), self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MethodNotAllowed("Get").status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::InvalidPayload(payload_error()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Encode(payload_error()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(DomainError::Query("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_details_stay_private() {
        let err = ApiError::Store(DomainError::Query("table crud missing".into()));
        assert_eq!(err.public_message(), "Invalid query to the database");

        let err = ApiError::Store(DomainError::Scan("column type".into()));
        assert_eq!(err.public_message(), "Invalid database scan");
    }

    #[test]
    fn test_method_message() {
        assert_eq!(
            ApiError::MethodNotAllowed("Put").public_message(),
            "Only Put Method Allowed"
        );
    }
}
