// Author: Dustin Pilgrim
// License: MIT

use std::fs::File;
use std::io::BufReader;

use serde_json::json;

use crate::ast::Mapping;
use crate::parser::{self, ParseOptions};
use crate::ProfileError;

/// Export a parsed report tree to pretty-printed JSON.
///
/// Values map as follows:
/// - Booleans, integers and text → JSON booleans, numbers and strings
/// - Sections → nested objects, keys in report order
/// - Durations → `{"duration_secs": n}`, fractional seconds so sub-second
///   values survive
///
/// # Examples
/// ```
/// use sysprofile::{parse_str, export::export_to_json};
///
/// let tree = parse_str("Bluetooth:\n    Power: On\n    Idle Timeout: 2 minutes\n")?;
/// let json = export_to_json(&tree)?;
/// assert!(json.contains("\"duration_secs\": 120.0"));
/// # Ok::<(), sysprofile::ProfileError>(())
/// ```
pub fn export_to_json(tree: &Mapping) -> Result<String, ProfileError> {
    serde_json::to_string_pretty(tree).map_err(|e| ProfileError::ExportError {
        message: format!("Failed to serialize report: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Export a report tree wrapped with the name of the data type it came from,
/// e.g. `{"data_type": "SPBluetoothDataType", "report": {...}}`.
pub fn export_with_source(tree: &Mapping, data_type: &str) -> Result<String, ProfileError> {
    let wrapped = json!({
        "data_type": data_type,
        "report": tree,
    });

    serde_json::to_string_pretty(&wrapped).map_err(|e| ProfileError::ExportError {
        message: format!("Failed to serialize report: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Read, parse and export a saved report file in one call.
///
/// # Examples
/// ```no_run
/// use sysprofile::export::export_report_file;
///
/// let json = export_report_file("bluetooth.txt")?;
/// println!("{}", json);
/// # Ok::<(), sysprofile::ProfileError>(())
/// ```
///
/// # Errors
/// Returns error if the file can't be read or the report is malformed.
pub fn export_report_file(path: &str) -> Result<String, ProfileError> {
    let file = File::open(path).map_err(|e| ProfileError::FileError {
        message: format!("Failed to open file: {}", e),
        path: path.to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    let tree = parser::parse_reader(BufReader::new(file), ParseOptions::default())?;
    export_to_json(&tree)
}
