//! Bookshelf: a books CRUD REST service backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{DatabaseSettings, HttpSettings, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Book, BookPayload};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_database_exists, BookStore};
