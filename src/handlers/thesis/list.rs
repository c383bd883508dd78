use serde::Serialize;

use crate::database::models::Thesis;
use crate::database::store::{PgThesisStore, ThesisStore};
use crate::middleware::{ApiResponse, ApiResult};

/// Collection payload shared by the list endpoints.
#[derive(Debug, Serialize)]
pub struct ThesisList {
    pub count: usize,
    pub theses: Vec<Thesis>,
}

impl From<Vec<Thesis>> for ThesisList {
    fn from(theses: Vec<Thesis>) -> Self {
        Self {
            count: theses.len(),
            theses,
        }
    }
}

/// GET /api/thesis - List all theses
pub async fn thesis_list() -> ApiResult<ThesisList> {
    let store = PgThesisStore::connect().await?;
    let theses = store.list().await?;
    Ok(ApiResponse::success(theses.into()))
}
