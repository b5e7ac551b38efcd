//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP gateway to the records backend, local file
//! import/export, and environment-driven configuration.

pub mod api;
pub mod config;
pub mod persistence;

pub use api::*;
pub use config::*;
pub use persistence::*;
