pub mod parquet_upload;
