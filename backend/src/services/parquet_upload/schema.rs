//! Column metadata derived from the Parquet schema.
//!
//! The label of a column never depends on the rows: it is computed from the
//! file's root schema, so an empty file still yields a full column list.
//! For primitive fields the logical type wins, then the legacy converted type,
//! then the physical type. Groups become `array`, `map` or `object`.

use common::model::column::{ColumnMetadata, ColumnType};
use parquet::basic::{ConvertedType, LogicalType, Repetition, Type as PhysicalType};
use parquet::schema::types::{BasicTypeInfo, Type};

/// Builds one `ColumnMetadata` per top-level field of `root`, in schema order.
pub fn column_metadata(root: &Type) -> Vec<ColumnMetadata> {
    root.get_fields()
        .iter()
        .map(|field| ColumnMetadata::new(field.name(), column_type(field)))
        .collect()
}

/// Type label of a single (top-level) schema field.
pub fn column_type(field: &Type) -> ColumnType {
    let info = field.get_basic_info();
    if info.has_repetition() && info.repetition() == Repetition::REPEATED {
        return ColumnType::Array;
    }

    match field {
        Type::PrimitiveType { physical_type, .. } => primitive_type(info, *physical_type),
        Type::GroupType { .. } => group_type(info),
    }
}

fn primitive_type(info: &BasicTypeInfo, physical_type: PhysicalType) -> ColumnType {
    if let Some(logical) = info.logical_type() {
        if let Some(column_type) = from_logical(&logical) {
            return column_type;
        }
    }
    if let Some(column_type) = from_converted(info.converted_type()) {
        return column_type;
    }

    match physical_type {
        PhysicalType::BOOLEAN => ColumnType::Boolean,
        PhysicalType::INT32 => ColumnType::Integer,
        PhysicalType::INT64 => ColumnType::BigInt,
        // INT96 is only ever written for legacy timestamps.
        PhysicalType::INT96 => ColumnType::Timestamp,
        PhysicalType::FLOAT | PhysicalType::DOUBLE => ColumnType::Float,
        PhysicalType::BYTE_ARRAY | PhysicalType::FIXED_LEN_BYTE_ARRAY => ColumnType::Binary,
    }
}

fn group_type(info: &BasicTypeInfo) -> ColumnType {
    match info.logical_type() {
        Some(LogicalType::List) => return ColumnType::Array,
        Some(LogicalType::Map) => return ColumnType::Map,
        _ => {}
    }

    match info.converted_type() {
        ConvertedType::LIST => ColumnType::Array,
        ConvertedType::MAP | ConvertedType::MAP_KEY_VALUE => ColumnType::Map,
        _ => ColumnType::Object,
    }
}

fn from_logical(logical: &LogicalType) -> Option<ColumnType> {
    let column_type = match logical {
        LogicalType::String | LogicalType::Enum | LogicalType::Json => ColumnType::Text,
        LogicalType::Integer { bit_width: 64, .. } => ColumnType::BigInt,
        LogicalType::Integer { .. } => ColumnType::Integer,
        LogicalType::Decimal { .. } => ColumnType::Decimal,
        LogicalType::Date => ColumnType::Date,
        LogicalType::Time { .. } => ColumnType::Time,
        LogicalType::Timestamp { .. } => ColumnType::Timestamp,
        LogicalType::Float16 => ColumnType::Float,
        LogicalType::Bson | LogicalType::Uuid => ColumnType::Binary,
        _ => return None,
    };
    Some(column_type)
}

fn from_converted(converted: ConvertedType) -> Option<ColumnType> {
    let column_type = match converted {
        ConvertedType::UTF8 | ConvertedType::ENUM | ConvertedType::JSON => ColumnType::Text,
        ConvertedType::INT_64 | ConvertedType::UINT_64 => ColumnType::BigInt,
        ConvertedType::INT_8
        | ConvertedType::INT_16
        | ConvertedType::INT_32
        | ConvertedType::UINT_8
        | ConvertedType::UINT_16
        | ConvertedType::UINT_32 => ColumnType::Integer,
        ConvertedType::DECIMAL => ColumnType::Decimal,
        ConvertedType::DATE => ColumnType::Date,
        ConvertedType::TIME_MILLIS | ConvertedType::TIME_MICROS => ColumnType::Time,
        ConvertedType::TIMESTAMP_MILLIS | ConvertedType::TIMESTAMP_MICROS => ColumnType::Timestamp,
        ConvertedType::BSON => ColumnType::Binary,
        _ => return None,
    };
    Some(column_type)
}
