//! EMPREC - Employee Records Client
//!
//! A client-side state container for employee records: it fetches the record
//! list from a backend endpoint and persists edited records back to it.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
pub use application::*;
