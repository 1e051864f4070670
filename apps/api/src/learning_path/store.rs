//! Learning-path persistence.
//!
//! Table:
//! ```sql
//! CREATE TABLE learning_paths (
//!     id             UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     user_id        UUID NOT NULL,
//!     role_title     TEXT NOT NULL,
//!     resources      JSONB NOT NULL,
//!     completed_urls TEXT[] NOT NULL DEFAULT '{}',
//!     created_at     TIMESTAMPTZ NOT NULL DEFAULT now(),
//!     updated_at     TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::curation::models::CuratedResource;
use crate::learning_path::models::LearningPathRow;

pub async fn create_learning_path(
    pool: &PgPool,
    user_id: Uuid,
    role_title: &str,
    resources: &[CuratedResource],
) -> Result<LearningPathRow, sqlx::Error> {
    let row = sqlx::query_as::<_, LearningPathRow>(
        r#"
        INSERT INTO learning_paths (id, user_id, role_title, resources)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(role_title)
    .bind(Json(resources))
    .fetch_one(pool)
    .await?;

    info!(
        "Saved learning path {} for user {user_id} ({} resources)",
        row.id,
        resources.len()
    );
    Ok(row)
}

pub async fn list_learning_paths(pool: &PgPool, user_id: Uuid) -> Result<Vec<LearningPathRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, LearningPathRow>(
        "SELECT * FROM learning_paths WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_learning_path(pool: &PgPool, id: Uuid) -> Result<Option<LearningPathRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, LearningPathRow>("SELECT * FROM learning_paths WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Appends `url` to the completed set. Idempotent: completing twice is a no-op.
pub async fn mark_resource_completed(
    pool: &PgPool,
    id: Uuid,
    url: &str,
) -> Result<Option<LearningPathRow>, sqlx::Error> {
    let updated = sqlx::query_as::<_, LearningPathRow>(
        r#"
        UPDATE learning_paths
        SET completed_urls = array_append(completed_urls, $2),
            updated_at = now()
        WHERE id = $1 AND NOT ($2 = ANY(completed_urls))
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(url)
    .fetch_optional(pool)
    .await?;

    match updated {
        Some(row) => {
            info!("Marked {url} completed on learning path {id}");
            Ok(Some(row))
        }
        // Already completed, or no such path
        None => get_learning_path(pool, id).await,
    }
}
