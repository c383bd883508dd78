use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{NewThesis, Thesis};
use crate::database::store::{PgThesisStore, ThesisStore};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct CreateThesisRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file_path: Option<String>,
    /// Student submitting the thesis.
    pub added_by: Uuid,
    /// Advisor assigned at submission time.
    pub professor_id: Uuid,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// POST /api/thesis - Submit a new thesis
///
/// Creates the record in `shqyrtim` together with its advisor relation and
/// optional keyword set, all in one transaction.
pub async fn thesis_create(Json(payload): Json<CreateThesisRequest>) -> ApiResult<Thesis> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::validation_error("Title must not be empty"));
    }

    let store = PgThesisStore::connect().await?;
    let thesis = store
        .create(NewThesis {
            title: payload.title,
            description: payload.description,
            category: payload.category,
            file_path: payload.file_path,
            added_by: payload.added_by,
            professor_id: payload.professor_id,
            keywords: payload.keywords,
        })
        .await?;

    tracing::info!("Created thesis {}", thesis.id);
    Ok(ApiResponse::created(thesis))
}
