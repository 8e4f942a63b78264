/// Endpoint accepting `multipart/form-data` Parquet uploads.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Name of the multipart field that carries the file bytes.
pub const UPLOAD_FIELD: &str = "file";
