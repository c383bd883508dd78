use axum::extract::{Path, Query};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::database::store::{PgThesisStore, ThesisStore};
use crate::error::ApiError;
use crate::lifecycle::{ParseStatusError, ThesisStatus};
use crate::middleware::{ApiResponse, ApiResult};

use super::list::ThesisList;

#[derive(Debug, Default, Deserialize)]
pub struct StatusWindow {
    /// Inclusive lower bound on created_at.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on created_at.
    pub to: Option<DateTime<Utc>>,
}

/// GET /api/thesis/status/:status - Theses currently in a workflow state,
/// optionally narrowed to a creation-date window
pub async fn thesis_by_status(
    Path(status): Path<String>,
    Query(window): Query<StatusWindow>,
) -> ApiResult<ThesisList> {
    let status: ThesisStatus = status
        .parse()
        .map_err(|e: ParseStatusError| ApiError::bad_request(e.to_string()))?;

    let store = PgThesisStore::connect().await?;
    let theses = store.list_by_status(status, window.from, window.to).await?;
    Ok(ApiResponse::success(theses.into()))
}
