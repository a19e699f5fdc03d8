//! `gatehouse-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod types;

pub use error::{AccessError, AccessResult};
pub use types::{DecisionOutcome, StaffActionKind, SwipeResult, UserStatus};
