use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::lifecycle::ThesisStatus;

/// A thesis row as stored. Milestone timestamps stay `None` until the
/// workflow reaches the matching status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Thesis {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file_path: Option<String>,
    /// Student who submitted the thesis.
    pub added_by: Uuid,
    #[sqlx(try_from = "String")]
    pub status: ThesisStatus,
    pub approved_by_departament_date: Option<DateTime<Utc>>,
    pub delegation_date: Option<DateTime<Utc>>,
    pub published_date: Option<DateTime<Utc>>,
    pub delegation_list: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Thesis plus its keyword set, as returned by the single-record read.
#[derive(Debug, Clone, Serialize)]
pub struct ThesisWithKeywords {
    #[serde(flatten)]
    pub thesis: Thesis,
    pub keywords: Vec<String>,
}

/// Fields accepted when a student submits a new thesis. The advisor
/// relation and keyword set are created together with the record.
#[derive(Debug, Clone)]
pub struct NewThesis {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file_path: Option<String>,
    pub added_by: Uuid,
    pub professor_id: Uuid,
    pub keywords: Vec<String>,
}
