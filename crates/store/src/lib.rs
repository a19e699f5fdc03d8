//! `gatehouse-store` — sqlx-backed persistent store and transactional services.
//!
//! Owns all durable state. Each public operation on [`AccessService`] runs as
//! one transaction: the reads that determine a decision and the writes that
//! persist its effect commit together.

pub mod analytics;
pub mod db;
pub mod schema;
pub mod service;

#[cfg(test)]
mod integration_tests;

pub use db::connect;
pub use service::AccessService;
