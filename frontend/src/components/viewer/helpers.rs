//! Formatting helpers for the viewer component.
//!
//! - **Cells**: turning a JSON value into what a table cell shows.
//! - **Messages**: the info line after a load and the error text for a failed
//!   upload, built from the status and raw body of the response.

use common::model::upload::ErrorResponse;
use num_format::{Locale, ToFormattedString};
use serde_json::Value;
use wasm_bindgen::JsValue;

/// What a single table cell displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Null or absent value; rendered as a muted `null`.
    Placeholder,
    /// Scalar rendered as plain text. Strings are shown without quotes.
    Text(String),
    /// Object or array, pretty-printed as JSON.
    Structure(String),
}

pub fn cell_content(value: Option<&Value>) -> CellContent {
    match value {
        None | Some(Value::Null) => CellContent::Placeholder,
        Some(Value::String(s)) => CellContent::Text(s.clone()),
        Some(nested @ (Value::Object(_) | Value::Array(_))) => CellContent::Structure(
            serde_json::to_string_pretty(nested).unwrap_or_else(|_| nested.to_string()),
        ),
        Some(scalar) => CellContent::Text(scalar.to_string()),
    }
}

pub fn loaded_message(rows: usize, columns: usize) -> String {
    format!(
        "Successfully loaded {} records with {} columns.",
        rows.to_formatted_string(&Locale::en),
        columns.to_formatted_string(&Locale::en)
    )
}

/// Error text for a non-2xx upload response.
///
/// The body is read once as text: a JSON `{ error }` body yields its message,
/// any other JSON yields the bare status, and a non-JSON body is quoted.
pub fn describe_failure(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(ErrorResponse { error }) = serde_json::from_str::<ErrorResponse>(body) {
        if !error.is_empty() {
            return error;
        }
    }
    if serde_json::from_str::<Value>(body).is_ok() {
        return format!("Server error: {}", status);
    }
    format!(
        "Server error: {} {}. Response: {}",
        status, status_text, body
    )
}

/// Best-effort text for an exception coming back from a browser API.
pub fn js_error(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("Browser error: {:?}", err))
}
