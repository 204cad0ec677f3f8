//! Compression metadata
//!
//! Payloads are never decompressed here; the catalog only labels them.

pub mod catalog;

pub use catalog::{CATALOG, extension_for};
