//! HTTP front end: one zip code in, one rendered report out.

pub mod error;
pub mod handlers;
pub mod negotiate;
pub mod router;
pub mod state;

pub use error::ServerError;
pub use router::create_router;
pub use state::AppState;
