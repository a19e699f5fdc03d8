//! `gatehouse-api` — HTTP boundary for the kiosk backend.
//!
//! Maps the access service's failure taxonomy to status codes and gates
//! administrative routes behind a bearer capability token. Registration and
//! swipe are public; everything else requires the administrator token.

pub mod app;
pub mod auth;
pub mod config;
pub mod csv;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;
pub mod terms;

pub use app::build_router;
pub use config::Config;
pub use state::AppState;
