//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and whatever front end
//! drives the store, holding the record list and the per-operation flags.

pub mod state;

pub use state::*;
