use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// Sample resource behind the access gate.
pub async fn protected() -> ApiSuccess<ProtectedResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        ProtectedResponseData {
            message: "This is a protected path".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedResponseData {
    pub message: String,
}
