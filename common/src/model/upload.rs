use crate::model::column::ColumnMetadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One decoded row: column name to JSON value.
///
/// 64-bit integers are already rewritten as decimal strings by the backend,
/// so every value here round-trips through JSON without loss.
pub type Record = Map<String, Value>;

/// Successful answer of `POST /api/upload`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Every row of the file, in file order.
    pub data: Vec<Record>,
    /// Top-level columns, in schema order.
    pub columns: Vec<ColumnMetadata>,
}

/// Body of every non-2xx answer of the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
