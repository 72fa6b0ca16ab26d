use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("{0}")]
    InvalidQuery(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::ActivityNotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => StatusCode::BAD_REQUEST,
            ActivityError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ActivityError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ActivityError::Database(e) => {
                tracing::error!(error = %e, "activity_store_failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
