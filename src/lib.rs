//! Product Catalog Service Library
//!
//! This library crate defines the core modules that make up the catalog service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two loosely coupled subsystems:
//!
//! - **`catalog`**: The HTTP endpoint layer. Axum handlers that parse and
//!   validate requests, translate them into store operations, and map the
//!   results (or failures) back to HTTP status codes and JSON bodies.
//! - **`store`**: The key-value store client. A hash-style store (`KvStore`)
//!   offering per-key field maps, existence checks, deletion, key enumeration
//!   by prefix, and atomic increment-and-return counters.

pub mod catalog;
pub mod store;
