//! Shared application state, constructor-injected into every handler via
//! axum `State`. No globals.

use crate::store::BookStore;

#[derive(Clone)]
pub struct AppState {
    pub store: BookStore,
}
