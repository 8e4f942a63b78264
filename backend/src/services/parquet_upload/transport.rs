//! Conversion of decoded rows into JSON records that survive transport.
//!
//! JSON numbers are doubles on the browser side, so every 64-bit integer is
//! written as its decimal string, at any nesting depth. Everything else keeps
//! the decoder's own JSON rendering.

use common::model::upload::Record;
use parquet::record::{Field, Row};
use serde_json::Value;

pub fn row_to_record(row: &Row) -> Record {
    row.get_column_iter()
        .map(|(name, field)| (name.clone(), field_to_json(field)))
        .collect()
}

pub fn field_to_json(field: &Field) -> Value {
    match field {
        Field::Long(value) => Value::String(value.to_string()),
        Field::ULong(value) => Value::String(value.to_string()),
        Field::Group(row) => Value::Object(row_to_record(row)),
        Field::ListInternal(list) => {
            Value::Array(list.elements().iter().map(field_to_json).collect())
        }
        Field::MapInternal(map) => Value::Object(
            map.entries()
                .iter()
                .map(|(key, value)| (map_key(key), field_to_json(value)))
                .collect(),
        ),
        other => other.to_json_value(),
    }
}

fn map_key(key: &Field) -> String {
    match field_to_json(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
