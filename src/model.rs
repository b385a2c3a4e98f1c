//! The persisted entity and the write-side DTO.

use serde::{Deserialize, Serialize};

/// A row in the `books` table. `id` is assigned by the database on insert
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Client-supplied fields for create and full-replace update. Kept separate
/// from [`Book`] so a request can never smuggle in an `id`: unknown fields
/// are dropped during deserialization, and both text fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_requires_both_fields() {
        assert!(serde_json::from_value::<BookPayload>(json!({"title": "Dune"})).is_err());
        assert!(serde_json::from_value::<BookPayload>(json!({"author": "Herbert"})).is_err());
    }

    #[test]
    fn payload_rejects_wrong_types() {
        assert!(serde_json::from_value::<BookPayload>(json!({"title": 3, "author": "x"})).is_err());
    }

    #[test]
    fn payload_ignores_client_supplied_id() {
        let payload: BookPayload =
            serde_json::from_value(json!({"id": 99, "title": "Dune", "author": "Herbert"}))
                .unwrap();
        assert_eq!(payload.title, "Dune");
        assert_eq!(payload.author, "Herbert");
    }

    #[test]
    fn book_serializes_flat() {
        let book = Book {
            id: 1,
            title: "Dune".into(),
            author: "Herbert".into(),
        };
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({"id": 1, "title": "Dune", "author": "Herbert"})
        );
    }
}
