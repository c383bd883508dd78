use axum::extract::Path;
use uuid::Uuid;

use crate::database::store::{PgThesisStore, ThesisStore};
use crate::middleware::{ApiResponse, ApiResult};

use super::list::ThesisList;

/// GET /api/thesis/user/:user_id - Theses a user is involved in, whether
/// as the submitting student or as the advisor
pub async fn thesis_by_user(Path(user_id): Path<Uuid>) -> ApiResult<ThesisList> {
    let store = PgThesisStore::connect().await?;
    let theses = store.list_by_user(user_id).await?;
    Ok(ApiResponse::success(theses.into()))
}
