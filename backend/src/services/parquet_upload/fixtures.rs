//! In-memory Parquet files for tests.

use arrow::array::{
    Array, ArrayRef, Float64Array, Int64Array, Int64Builder, ListArray, MapBuilder, StringArray,
    StringBuilder, StructArray, UInt64Array,
};
use arrow::datatypes::{DataType, Field, Int32Type, Int64Type, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use std::sync::Arc;

/// Above 2^53, so a JSON number would lose precision.
pub const FIRST_ID: i64 = 9_007_199_254_740_993;

fn write(batch: RecordBatch) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut writer = ArrowWriter::try_new(&mut bytes, batch.schema(), None).unwrap();
    if batch.num_rows() > 0 {
        writer.write(&batch).unwrap();
    }
    writer.close().unwrap();
    bytes
}

/// `id: int64`, `name: utf8` (null on every third row), `score: double`.
pub fn people_parquet(rows: usize) -> Vec<u8> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, true),
        Field::new("score", DataType::Float64, false),
    ]));

    let ids: Int64Array = (0..rows).map(|i| Some(FIRST_ID + i as i64)).collect();
    let names: StringArray = (0..rows)
        .map(|i| (i % 3 != 0).then(|| format!("person-{}", i)))
        .collect();
    let scores: Float64Array = (0..rows).map(|i| Some(i as f64 * 0.5)).collect();

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(ids) as ArrayRef,
            Arc::new(names) as ArrayRef,
            Arc::new(scores) as ArrayRef,
        ],
    )
    .unwrap();
    write(batch)
}

/// One nullable `tags: list<int32>` column with two rows: `[1, 2]` and null.
pub fn tags_parquet() -> Vec<u8> {
    let tags = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
        Some(vec![Some(1), Some(2)]),
        None,
    ]);
    let schema = Arc::new(Schema::new(vec![Field::new(
        "tags",
        tags.data_type().clone(),
        true,
    )]));
    let batch = RecordBatch::try_new(schema, vec![Arc::new(tags) as ArrayRef]).unwrap();
    write(batch)
}

/// One row whose 64-bit integers sit at every nesting level:
/// `nested: struct<big: int64>`, `ids: list<int64>`, `attrs: map<utf8, int64>`
/// and a top-level `unsigned: uint64` holding `u64::MAX`.
pub fn nested_int64_parquet() -> Vec<u8> {
    let nested = StructArray::from(vec![(
        Arc::new(Field::new("big", DataType::Int64, false)),
        Arc::new(Int64Array::from(vec![FIRST_ID])) as ArrayRef,
    )]);

    let ids = ListArray::from_iter_primitive::<Int64Type, _, _>(vec![Some(vec![
        Some(FIRST_ID),
        Some(-1),
    ])]);

    let mut attrs = MapBuilder::new(None, StringBuilder::new(), Int64Builder::new());
    attrs.keys().append_value("a");
    attrs.values().append_value(FIRST_ID);
    attrs.append(true).unwrap();
    let attrs = attrs.finish();

    let unsigned = UInt64Array::from(vec![u64::MAX]);

    let schema = Arc::new(Schema::new(vec![
        Field::new("nested", nested.data_type().clone(), true),
        Field::new("ids", ids.data_type().clone(), true),
        Field::new("attrs", attrs.data_type().clone(), true),
        Field::new("unsigned", DataType::UInt64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(nested) as ArrayRef,
            Arc::new(ids) as ArrayRef,
            Arc::new(attrs) as ArrayRef,
            Arc::new(unsigned) as ArrayRef,
        ],
    )
    .unwrap();
    write(batch)
}
