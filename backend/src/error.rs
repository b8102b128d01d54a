//! API error taxonomy.
//!
//! Every failure a handler can surface maps onto one of these variants, and
//! each variant owns its HTTP status and JSON body shape. Handlers return
//! `Result<HttpResponse, ApiError>` and let actix render the rejection.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorBody;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A submitted form failed validation. Body carries `success: false` so
    /// the capture modal can tell a rejection from a transport error.
    #[error("{0}")]
    Validation(String),
    /// A malformed request outside the form flow, e.g. an unknown syllabus
    /// level code.
    #[error("{0}")]
    BadRequest(String),
    /// The gate credential is missing. The body flags `requiresLead` so the
    /// client knows to open the capture form instead of retrying.
    #[error("Please submit the lead form to access downloads")]
    LeadRequired,
    /// URL signing failed. The cause stays in the logs, never in the body.
    #[error("Failed to generate download URL")]
    SigningFailed(#[from] StorageError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::LeadRequired => StatusCode::FORBIDDEN,
            ApiError::SigningFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody {
            success: matches!(self, ApiError::Validation(_)).then_some(false),
            error: self.to_string(),
            requires_lead: matches!(self, ApiError::LeadRequired).then_some(true),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn lead_required_renders_403_with_flag() {
        let err = ApiError::LeadRequired;
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let resp = err.error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.requires_lead, Some(true));
        assert_eq!(body.error, "Please submit the lead form to access downloads");
        assert_eq!(body.success, None);
    }

    #[actix_web::test]
    async fn validation_renders_400_with_success_false() {
        let err = ApiError::Validation("Invalid email format".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let resp = err.error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.success, Some(false));
        assert_eq!(body.error, "Invalid email format");
        assert_eq!(body.requires_lead, None);
    }
}
