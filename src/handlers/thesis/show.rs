use axum::extract::Path;
use uuid::Uuid;

use crate::database::models::ThesisWithKeywords;
use crate::database::store::{PgThesisStore, ThesisStore};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/thesis/:id - Fetch one thesis with its keywords
pub async fn thesis_show(Path(id): Path<Uuid>) -> ApiResult<ThesisWithKeywords> {
    let store = PgThesisStore::connect().await?;

    let thesis = store
        .fetch_with_keywords(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Thesis {} not found", id)))?;

    Ok(ApiResponse::success(thesis))
}
