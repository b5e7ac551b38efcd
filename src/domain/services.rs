//! Envelope interpretation rules and the transport seam.
//!
//! Both backend endpoints answer with the same `{Success, Msg, Data}`
//! envelope, but the two operations read it differently: fetch requires an
//! array payload, save only inspects the success flag.

use crate::domain::{ApiResponse, Employee, StoreError, StoreResult};
use serde_json::Value;

/// Fallback error message when a fetch fails without a server-supplied `Msg`.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch employees";

/// Fallback error message when a save fails without a server-supplied `Msg`.
pub const DEFAULT_SAVE_ERROR: &str = "Failed to save employees";

/// Transport access to the records backend.
///
/// The store is written against this trait so tests can script responses and
/// the HTTP client stays an infrastructure concern. Implementations return
/// the raw envelope; interpreting it is the domain's job.
pub trait RecordsGateway {
    /// Retrieves the record-list envelope from the backend.
    fn get_records(&self) -> StoreResult<ApiResponse>;

    /// Sends a full replacement record list and returns the backend's
    /// acknowledgement envelope.
    fn save_records(&self, records: &[Employee]) -> StoreResult<ApiResponse>;
}

/// Extracts the record list from a fetch envelope.
///
/// Succeeds only when `Success` is true and `Data` is an array of valid
/// records. Every other shape fails with the server `Msg` when present, or
/// [`DEFAULT_FETCH_ERROR`] otherwise.
pub fn records_from_envelope(response: ApiResponse) -> StoreResult<Vec<Employee>> {
    let ApiResponse { success, msg, data } = response;
    let failure = StoreError::Api(msg.unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_string()));

    match data {
        Some(value @ Value::Array(_)) if success => {
            serde_json::from_value(value).map_err(|_| failure)
        }
        _ => Err(failure),
    }
}

/// Checks a save envelope for acceptance.
///
/// Only the `Success` flag matters; `Data` is ignored whatever its shape,
/// since a successful save is followed by a refetch anyway.
pub fn ack_from_envelope(response: ApiResponse) -> StoreResult<()> {
    if response.success {
        Ok(())
    } else {
        let msg = response
            .msg
            .unwrap_or_else(|| DEFAULT_SAVE_ERROR.to_string());
        Err(StoreError::Api(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(success: bool, msg: Option<&str>, data: Option<Value>) -> ApiResponse {
        ApiResponse {
            success,
            msg: msg.map(String::from),
            data,
        }
    }

    #[test]
    fn test_fetch_envelope_with_records() {
        let data = json!([
            {"Name": "A", "DateOfBirth": "1990-01-01", "Salary": 50000, "Address": "X"},
            {"Name": "B", "DateOfBirth": "1985-06-15", "Salary": 62000.5, "Address": "Y"},
        ]);

        let records = records_from_envelope(envelope(true, None, Some(data))).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[1].salary, 62000.5);
    }

    #[test]
    fn test_fetch_envelope_with_empty_array() {
        let records = records_from_envelope(envelope(true, None, Some(json!([])))).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_fetch_envelope_success_false_uses_server_msg() {
        let err = records_from_envelope(envelope(false, Some("backend offline"), None)).unwrap_err();
        assert_eq!(err, StoreError::Api("backend offline".to_string()));
    }

    #[test]
    fn test_fetch_envelope_success_false_without_msg() {
        let err = records_from_envelope(envelope(false, None, None)).unwrap_err();
        assert_eq!(err, StoreError::Api(DEFAULT_FETCH_ERROR.to_string()));
    }

    #[test]
    fn test_fetch_envelope_missing_data() {
        let err = records_from_envelope(envelope(true, None, None)).unwrap_err();
        assert_eq!(err, StoreError::Api(DEFAULT_FETCH_ERROR.to_string()));
    }

    #[test]
    fn test_fetch_envelope_non_array_data() {
        let err =
            records_from_envelope(envelope(true, None, Some(json!("oops")))).unwrap_err();
        assert_eq!(err, StoreError::Api(DEFAULT_FETCH_ERROR.to_string()));
    }

    #[test]
    fn test_fetch_envelope_non_array_data_prefers_server_msg() {
        let err = records_from_envelope(envelope(true, Some("no list today"), Some(json!(7))))
            .unwrap_err();
        assert_eq!(err, StoreError::Api("no list today".to_string()));
    }

    #[test]
    fn test_fetch_envelope_malformed_record() {
        // An array whose elements are not employee records counts as a
        // malformed payload, not a transport failure.
        let err = records_from_envelope(envelope(true, None, Some(json!([{"Nope": 1}]))))
            .unwrap_err();
        assert_eq!(err, StoreError::Api(DEFAULT_FETCH_ERROR.to_string()));
    }

    #[test]
    fn test_save_envelope_accepted() {
        assert!(ack_from_envelope(envelope(true, None, None)).is_ok());
    }

    #[test]
    fn test_save_envelope_accepted_ignores_data_shape() {
        let response = envelope(true, None, Some(json!("whatever")));
        assert!(ack_from_envelope(response).is_ok());
    }

    #[test]
    fn test_save_envelope_rejected_uses_server_msg() {
        let err = ack_from_envelope(envelope(false, Some("Validation failed"), None)).unwrap_err();
        assert_eq!(err, StoreError::Api("Validation failed".to_string()));
    }

    #[test]
    fn test_save_envelope_rejected_without_msg() {
        let err = ack_from_envelope(envelope(false, None, None)).unwrap_err();
        assert_eq!(err, StoreError::Api(DEFAULT_SAVE_ERROR.to_string()));
    }
}
