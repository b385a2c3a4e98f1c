//! PostgreSQL-backed data access for books, plus database bootstrap.

use crate::config::DatabaseSettings;
use crate::error::AppError;
use crate::model::{Book, BookPayload};
use sqlx::{ConnectOptions, PgPool};

/// Thin façade over the connection pool. One method per relational
/// statement; no caching, no transactions (every request issues at most one
/// write).
#[derive(Clone)]
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title, author FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>("SELECT id, title, author FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Insert one row; the id is assigned by the database. Returns the
    /// stored row.
    pub async fn create(&self, payload: &BookPayload) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author) VALUES ($1, $2) RETURNING id, title, author",
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id = book.id, "created book");
        Ok(book)
    }

    /// Full replace: every column except the primary key is overwritten.
    /// Returns `None` when the row is absent.
    pub async fn update(&self, id: i64, payload: &BookPayload) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(
            "UPDATE books SET title = $2, author = $3 WHERE id = $1 RETURNING id, title, author",
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.author)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "deleted book");
        Ok(result.rows_affected() > 0)
    }
}

/// Ensure the configured database exists; create it if not. Connects to the
/// maintenance `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(db: &DatabaseSettings) -> Result<(), AppError> {
    if db.name.is_empty() || db.name == "postgres" {
        return Ok(());
    }
    let mut conn: sqlx::PgConnection = db.admin_connect_options().connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db.name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db.name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_wraps_and_escapes() {
        assert_eq!(quote_ident("books"), "\"books\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\\\"ird\"");
    }
}
