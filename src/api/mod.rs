// API layer module (HTTP adapter)
// Routes, handlers and the error/extractor types they share

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
