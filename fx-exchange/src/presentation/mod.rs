pub mod rest;
pub mod sse;

pub use rest::{ApiError, AppState, create_router};
