use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single employee record as exchanged with the backend.
///
/// The PascalCase field names are part of the wire contract and must not
/// change. Records carry no identifier; their position in the list is their
/// identity.
///
/// # Examples
///
/// ```
/// use emprec::domain::Employee;
///
/// let json = r#"{"Name":"A","DateOfBirth":"1990-01-01","Salary":50000,"Address":"X"}"#;
/// let record: Employee = serde_json::from_str(json).unwrap();
/// assert_eq!(record.name, "A");
/// assert_eq!(record.salary, 50000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub name: String,
    /// Date of birth as the backend sends it. The contract only promises a
    /// date-shaped string, so no parsing is attempted.
    pub date_of_birth: String,
    pub salary: f64,
    pub address: String,
}

/// Result envelope returned by both backend endpoints.
///
/// `Data` stays untyped JSON: on fetch the payload must be checked for
/// "missing or not an array" separately from body-level decode failures, and
/// on save the payload is ignored regardless of its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}
