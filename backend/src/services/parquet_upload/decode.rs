use super::{schema, transport};
use common::model::column::ColumnMetadata;
use common::model::upload::Record;
use log::debug;
use parquet::errors::ParquetError;
use parquet::file::reader::{FileReader, SerializedFileReader};
use std::fs::File;

/// Fully decoded content of one Parquet file.
#[derive(Debug)]
pub struct DecodedTable {
    pub rows: Vec<Record>,
    pub columns: Vec<ColumnMetadata>,
}

/// Reads every row of `file` and derives the column list from its schema.
///
/// Blocking; callers on the async runtime should run it through
/// `spawn_blocking`.
pub fn decode_file(file: File) -> Result<DecodedTable, ParquetError> {
    let reader = SerializedFileReader::new(file)?;
    let file_metadata = reader.metadata().file_metadata();
    let columns = schema::column_metadata(file_metadata.schema());
    debug!(
        "Schema has {} columns, metadata reports {} rows",
        columns.len(),
        file_metadata.num_rows()
    );

    let mut rows = Vec::with_capacity(usize::try_from(file_metadata.num_rows()).unwrap_or(0));
    for row in reader.get_row_iter(None)? {
        rows.push(transport::row_to_record(&row?));
    }

    Ok(DecodedTable { rows, columns })
}
