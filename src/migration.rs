//! Schema bootstrap: create the books table at startup and keep it in sync
//! with the entity definition. Additive changes only, no destructive DDL.

use crate::error::AppError;
use sqlx::PgPool;

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            author TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Columns added to the entity after a table already exists.
    for column in ["title", "author"] {
        let ddl = format!(
            "ALTER TABLE books ADD COLUMN IF NOT EXISTS {} TEXT NOT NULL DEFAULT ''",
            column
        );
        sqlx::query(&ddl).execute(pool).await?;
    }

    Ok(())
}
