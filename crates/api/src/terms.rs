//! Terms-of-service text storage.
//!
//! A single text file next to the database. A missing file reads as empty
//! terms; the first update creates it.

use std::io;
use std::path::Path;

use gatehouse_core::{AccessError, AccessResult};

pub async fn read_terms(path: &Path) -> AccessResult<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(AccessError::storage(format!("reading terms: {e}"))),
    }
}

pub async fn write_terms(path: &Path, text: &str) -> AccessResult<()> {
    tokio::fs::write(path, text)
        .await
        .map_err(|e| AccessError::storage(format!("writing terms: {e}")))
}
