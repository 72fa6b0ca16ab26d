use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::ActivityError;
use crate::services::activities_service::{self, ActivityDirectory};

pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn root_handler() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

pub async fn activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<ActivityDirectory>, ActivityError> {
    let directory = activities_service::list_activities(&pool).await?;
    Ok(Json(directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(pool): State<SqlitePool>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let Query(query) = query.map_err(invalid_query)?;
    let message = activities_service::signup(&pool, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(pool): State<SqlitePool>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let Query(query) = query.map_err(invalid_query)?;
    let message = activities_service::unregister(&pool, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}

fn invalid_query(rejection: QueryRejection) -> ActivityError {
    ActivityError::InvalidQuery(rejection.body_text())
}
