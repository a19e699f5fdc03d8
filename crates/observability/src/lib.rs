//! Tracing/logging initialization for gatehouse binaries.

pub mod tracing;

pub use tracing::init;
