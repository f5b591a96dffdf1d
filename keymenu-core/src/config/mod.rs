//! Configuration types
//!
//! Key engine and view settings. With the `serde` feature the aggregate
//! [`MenuConfig`] can be stored as postcard binary data.

pub mod types;

pub use types::*;
