//! Catalog Endpoint Module
//!
//! The HTTP surface of the service: four CRUD operations over product
//! records stored as field maps in the key-value store.
//!
//! ## Overview
//! Each request is a single independent transition over current store state;
//! there is no cross-request session state. The store handle is injected
//! into every handler via an axum `Extension` layer.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers and the router constructor.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.
//! - **`error`**: the `ApiError` type and its HTTP response mapping.

pub mod error;
pub mod handlers;
pub mod types;
