use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use thiserror::Error;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewThesis, Thesis, ThesisWithKeywords};
use crate::lifecycle::{ThesisPatch, ThesisStatus};

/// Errors from the thesis store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Thesis not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence boundary for thesis records and their associations. The
/// lifecycle manager never talks to SQL directly; it hands an approved
/// sparse patch to this trait.
#[async_trait]
pub trait ThesisStore: Send + Sync {
    async fn fetch(&self, id: Uuid) -> Result<Option<Thesis>, StoreError>;

    async fn fetch_with_keywords(&self, id: Uuid)
        -> Result<Option<ThesisWithKeywords>, StoreError>;

    /// Insert the thesis together with its advisor relation and keyword
    /// set, as one transaction.
    async fn create(&self, new: NewThesis) -> Result<Thesis, StoreError>;

    /// Apply a sparse patch and, when a keyword list is supplied, replace
    /// the keyword associations wholesale. Both writes share one
    /// transaction.
    async fn apply_update(
        &self,
        id: Uuid,
        patch: &ThesisPatch,
        keywords: Option<&[String]>,
    ) -> Result<(), StoreError>;

    /// Delete the thesis and its associations.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<Thesis>, StoreError>;

    /// Theses a user is involved in, as student or as advisor.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Thesis>, StoreError>;

    /// Theses in a given status, optionally narrowed to a created-at
    /// window.
    async fn list_by_status(
        &self,
        status: ThesisStatus,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<Thesis>, StoreError>;
}

/// Postgres-backed store over the shared pool
pub struct PgThesisStore {
    pool: PgPool,
}

impl PgThesisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect() -> Result<Self, DatabaseError> {
        Ok(Self::new(DatabaseManager::pool().await?))
    }

    async fn keywords_for(&self, id: Uuid) -> Result<Vec<String>, StoreError> {
        let keywords = sqlx::query_scalar::<_, String>(
            "SELECT keyword FROM thesis_to_keyword WHERE thesis_id = $1 ORDER BY keyword",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(keywords)
    }
}

#[async_trait]
impl ThesisStore for PgThesisStore {
    async fn fetch(&self, id: Uuid) -> Result<Option<Thesis>, StoreError> {
        let thesis = sqlx::query_as::<_, Thesis>("SELECT * FROM thesis WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(thesis)
    }

    async fn fetch_with_keywords(
        &self,
        id: Uuid,
    ) -> Result<Option<ThesisWithKeywords>, StoreError> {
        let Some(thesis) = self.fetch(id).await? else {
            return Ok(None);
        };
        let keywords = self.keywords_for(id).await?;
        Ok(Some(ThesisWithKeywords { thesis, keywords }))
    }

    async fn create(&self, new: NewThesis) -> Result<Thesis, StoreError> {
        let mut tx = self.pool.begin().await?;

        let thesis = sqlx::query_as::<_, Thesis>(
            "INSERT INTO thesis (id, title, description, category, file_path, added_by, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.category)
        .bind(&new.file_path)
        .bind(new.added_by)
        .bind(ThesisStatus::Shqyrtim.as_str())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO thesis_to_user (professor_id, student_id, thesis_id) \
             VALUES ($1, $2, $3)",
        )
        .bind(new.professor_id)
        .bind(new.added_by)
        .bind(thesis.id)
        .execute(&mut *tx)
        .await?;

        for keyword in &new.keywords {
            sqlx::query("INSERT INTO thesis_to_keyword (thesis_id, keyword) VALUES ($1, $2)")
                .bind(thesis.id)
                .bind(keyword)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(thesis)
    }

    async fn apply_update(
        &self,
        id: Uuid,
        patch: &ThesisPatch,
        keywords: Option<&[String]>,
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        if !patch.is_empty() {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE thesis SET ");
            {
                let mut set = builder.separated(", ");
                if let Some(status) = patch.status {
                    set.push("status = ");
                    set.push_bind_unseparated(status.as_str());
                }
                if let Some(approved) = patch.approved_by_departament_date {
                    set.push("approved_by_departament_date = ");
                    set.push_bind_unseparated(approved);
                }
                if let Some(delegated) = patch.delegation_date {
                    set.push("delegation_date = ");
                    set.push_bind_unseparated(delegated);
                }
                if let Some(published) = patch.published_date {
                    set.push("published_date = ");
                    set.push_bind_unseparated(published);
                }
                if let Some(ref title) = patch.title {
                    set.push("title = ");
                    set.push_bind_unseparated(title);
                }
                if let Some(ref description) = patch.description {
                    set.push("description = ");
                    set.push_bind_unseparated(description);
                }
                if let Some(ref category) = patch.category {
                    set.push("category = ");
                    set.push_bind_unseparated(category);
                }
                if let Some(ref file_path) = patch.file_path {
                    set.push("file_path = ");
                    set.push_bind_unseparated(file_path);
                }
                if let Some(ref delegation_list) = patch.delegation_list {
                    set.push("delegation_list = ");
                    set.push_bind_unseparated(delegation_list);
                }
                set.push("updated_at = now()");
            }
            builder.push(" WHERE id = ");
            builder.push_bind(id);

            let result = builder.build().execute(&mut *tx).await?;
            if result.rows_affected() == 0 {
                return Err(StoreError::NotFound(id));
            }
        }

        if let Some(keywords) = keywords {
            sqlx::query("DELETE FROM thesis_to_keyword WHERE thesis_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for keyword in keywords {
                sqlx::query("INSERT INTO thesis_to_keyword (thesis_id, keyword) VALUES ($1, $2)")
                    .bind(id)
                    .bind(keyword)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM thesis_to_keyword WHERE thesis_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM thesis_to_user WHERE thesis_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM thesis WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Thesis>, StoreError> {
        let theses =
            sqlx::query_as::<_, Thesis>("SELECT * FROM thesis ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(theses)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Thesis>, StoreError> {
        let theses = sqlx::query_as::<_, Thesis>(
            "SELECT t.* FROM thesis t \
             JOIN thesis_to_user tu ON tu.thesis_id = t.id \
             WHERE tu.student_id = $1 OR tu.professor_id = $1 \
             ORDER BY t.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(theses)
    }

    async fn list_by_status(
        &self,
        status: ThesisStatus,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<Thesis>, StoreError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM thesis WHERE status = ");
        builder.push_bind(status.as_str());
        if let Some(from) = from {
            builder.push(" AND created_at >= ");
            builder.push_bind(from);
        }
        if let Some(to) = to {
            builder.push(" AND created_at <= ");
            builder.push_bind(to);
        }
        builder.push(" ORDER BY created_at DESC");

        let theses = builder
            .build_query_as::<Thesis>()
            .fetch_all(&self.pool)
            .await?;
        Ok(theses)
    }
}
