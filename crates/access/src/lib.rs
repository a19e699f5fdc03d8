//! `gatehouse-access` — account state machine and swipe decision engine.
//!
//! Pure decision logic, decoupled from storage. The store crate runs these
//! functions inside its transactions; nothing here holds state between calls.

pub mod decision;
pub mod registration;

pub use decision::{MatchedUser, SwipeVerdict, evaluate, validate_input};
pub use registration::Registration;
