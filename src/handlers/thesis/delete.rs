use axum::extract::Path;
use uuid::Uuid;

use crate::database::store::{PgThesisStore, ThesisStore};
use crate::middleware::{ApiResponse, ApiResult};

/// DELETE /api/thesis/:id - Remove a thesis and its associations
pub async fn thesis_delete(Path(id): Path<Uuid>) -> ApiResult<()> {
    let store = PgThesisStore::connect().await?;
    store.delete(id).await?;

    tracing::info!("Deleted thesis {}", id);
    Ok(ApiResponse::<()>::no_content())
}
