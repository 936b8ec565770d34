//! Repository for the `projects` table.

use scenesync_core::project::STATUS_ACTIVE;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status, created_by, created_at, updated_at";

/// Provides create and list operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with status `active`, returning the persisted row.
    ///
    /// Runs in its own transaction; if anything fails before commit the
    /// transaction is rolled back on drop and the connection returns to the pool.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (title, description, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(STATUS_ACTIVE)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(project_id = project.id, "Project created");
        Ok(project)
    }

    /// List all projects, newest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }
}
