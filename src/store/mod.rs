//! Key-Value Store Client Module
//!
//! Implements the hash-style key-value store the catalog is backed by.
//!
//! ## Core Concepts
//! - **Field maps**: each key holds a mapping of named string fields to string
//!   values, analogous to a row with named columns.
//! - **Counters**: store-resident integers incremented atomically to produce
//!   unique sequential ids.
//! - **Prefix enumeration**: all keys beginning with a given prefix can be
//!   listed; the order is unspecified.
//!
//! All fallible operations return `anyhow::Result` so callers can surface
//! store failures uniformly without categorizing them.

pub mod kv;

#[cfg(test)]
mod tests;
