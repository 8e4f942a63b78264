use serde::{Deserialize, Serialize};
use std::fmt;

/// Type label of a column, derived on the backend from the Parquet schema.
///
/// The label travels to the frontend as a plain string (see the serde renames)
/// and is displayed next to the column name in the visibility panel.
/// `BigInt` columns carry 64-bit integers, which are sent as decimal strings
/// because JSON numbers cannot hold them losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "bigint (stringified)")]
    BigInt,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "decimal")]
    Decimal,
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "binary")]
    Binary,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "timestamp")]
    Timestamp,
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "map")]
    Map,
    #[serde(rename = "object")]
    Object,
    /// Anything the schema mapping does not recognize. Also the fallback when
    /// deserializing a label this build does not know.
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl ColumnType {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Integer => "integer",
            ColumnType::BigInt => "bigint (stringified)",
            ColumnType::Float => "float",
            ColumnType::Decimal => "decimal",
            ColumnType::Text => "string",
            ColumnType::Binary => "binary",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Array => "array",
            ColumnType::Map => "map",
            ColumnType::Object => "object",
            ColumnType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name and type of one top-level column of an uploaded file.
///
/// The list of `ColumnMetadata` is computed once per upload and keeps the
/// column order of the file schema. The frontend uses it both for the
/// visibility panel and for the table header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}
