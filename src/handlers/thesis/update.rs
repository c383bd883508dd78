use axum::{extract::Path, response::Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::store::{PgThesisStore, ThesisStore};
use crate::error::ApiError;
use crate::lifecycle::{plan_update, SystemClock, ThesisStatus, UpdateRequest};
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct UpdateThesisRequest {
    pub status: Option<ThesisStatus>,
    /// Date the status change is evaluated against; defaults to now.
    pub reference_date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Path of a replacement file already placed by the upload layer.
    pub file_path: Option<String>,
    pub delegation_list: Option<String>,
    /// When present, replaces the keyword set wholesale.
    pub keywords: Option<Vec<String>>,
}

/// PUT /api/thesis/:id - Apply a lifecycle-checked update
///
/// The request is validated against the stored snapshot by the lifecycle
/// manager; only the approved sparse field-set is persisted. A policy
/// rejection leaves the record untouched.
pub async fn thesis_update(
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateThesisRequest>,
) -> ApiResult<Value> {
    let store = PgThesisStore::connect().await?;

    let current = store
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Thesis {} not found", id)))?;

    let request = UpdateRequest {
        status: payload.status,
        reference_date: payload.reference_date,
        title: payload.title,
        description: payload.description,
        category: payload.category,
        file_path: payload.file_path,
        delegation_list: payload.delegation_list,
    };
    let patch = plan_update(&current, &request, &SystemClock)?;

    if !patch.is_empty() || payload.keywords.is_some() {
        store
            .apply_update(id, &patch, payload.keywords.as_deref())
            .await?;
    }

    tracing::info!("Updated thesis {}", id);
    Ok(ApiResponse::success(json!({
        "id": id,
        "applied": patch
    })))
}
