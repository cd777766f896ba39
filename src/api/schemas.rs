use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for successful responses: `{"success": true, "data": ...}`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for failures: `{"success": false, "error": {...}}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `PROJECT_NOT_FOUND`.
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,
    /// Human-readable explanation.
    #[schema(example = "Project not found")]
    pub message: String,
}
