use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::Activity;
use crate::store::{ActivityDirectory, DirectoryError};

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<HashMap<String, Activity>> {
    Json(directory.list_activities())
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    directory
        .signup(&activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "Signup rejected: {}", e);
            reject(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    directory
        .unregister(&activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "Unregister rejected: {}", e);
            reject(e)
        })
}

// Status codes live here at the boundary; the store only knows error kinds.
fn reject(e: DirectoryError) -> (StatusCode, Json<Value>) {
    let status = match e {
        DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
        DirectoryError::AlreadySignedUp | DirectoryError::NotRegistered => StatusCode::BAD_REQUEST,
    };
    (status, Json(serde_json::json!({ "detail": e.to_string() })))
}
