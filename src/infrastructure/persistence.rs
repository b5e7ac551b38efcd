use crate::domain::Employee;
use std::fs;

/// Local JSON import/export for record lists.
///
/// Files hold a plain JSON array of employee records in wire-contract form,
/// the same shape the save endpoint accepts as a request body.
pub struct RecordsFile;

impl RecordsFile {
    pub fn save_records(records: &[Employee], filename: &str) -> Result<String, String> {
        match serde_json::to_string_pretty(records) {
            Ok(json) => match fs::write(filename, &json) {
                Ok(_) => Ok(filename.to_string()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn load_records(filename: &str) -> Result<Vec<Employee>, String> {
        match fs::read_to_string(filename) {
            Ok(content) => match serde_json::from_str::<Vec<Employee>>(&content) {
                Ok(records) => Ok(records),
                Err(e) => Err(format!("Invalid file format - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }
}
