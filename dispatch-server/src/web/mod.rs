//! Web layer for the dispatch server.
//!
//! Provides HTTP endpoints for delay prediction and rerouting.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
