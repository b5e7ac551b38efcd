//! Application state for the employee records page.
//!
//! This module contains the record store: the in-memory record list, the
//! loading and error flags the UI reads, and the two operations that talk to
//! the backend through a [`RecordsGateway`].

use crate::domain::{Employee, RecordsGateway, ack_from_envelope, records_from_envelope};
use log::error;

/// State container for the employee record list.
///
/// Holds the records last fetched from the backend plus the flags a UI needs
/// to render progress and failures. Operations publish their outcome through
/// these fields rather than return values; callers inspect `error` and
/// `employees` after each call.
///
/// Both operations take `&mut self`, so a second operation cannot start while
/// one is running on the same store; overlapping calls are ruled out by
/// construction rather than guarded at runtime.
#[derive(Debug)]
pub struct EmployeeStore<G> {
    gateway: G,
    /// Records as of the last successful fetch, in server order.
    pub employees: Vec<Employee>,
    /// True strictly for the duration of one operation.
    pub is_loading: bool,
    /// Display message of the last failure, cleared at the start of every
    /// operation.
    pub error: Option<String>,
}

impl<G: RecordsGateway> EmployeeStore<G> {
    /// Creates an empty store backed by the given gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            employees: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    /// Replaces the record list with the backend's current state.
    ///
    /// On any failure the list is cleared, not preserved: a page that cannot
    /// fetch shows no stale records. The failure message lands in `error`.
    pub fn fetch_employees(&mut self) {
        self.is_loading = true;
        self.error = None;

        match self.gateway.get_records().and_then(records_from_envelope) {
            Ok(records) => {
                self.employees = records;
            }
            Err(err) => {
                error!("Error fetching employees: {}", err);
                self.error = Some(err.to_string());
                self.employees = Vec::new();
            }
        }

        self.is_loading = false;
    }

    /// Sends a full replacement record list to the backend.
    ///
    /// `records` is the complete desired list, not a diff. On acceptance the
    /// store refetches so that `employees` reflects what the server actually
    /// stored, not the payload that was sent. On failure the current list is
    /// left untouched and only `error` is set.
    pub fn save_employees(&mut self, records: &[Employee]) {
        self.is_loading = true;
        self.error = None;

        match self.gateway.save_records(records).and_then(ack_from_envelope) {
            Ok(()) => {
                self.fetch_employees();
            }
            Err(err) => {
                error!("Error saving employees: {}", err);
                self.error = Some(err.to_string());
            }
        }

        self.is_loading = false;
    }
}
