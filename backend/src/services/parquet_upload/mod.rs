//! Parquet upload endpoint: the only API of the viewer.
//!
//! - `POST /api/upload`: accepts `multipart/form-data` with a `file` field. The
//!   bytes are buffered, staged in a uniquely named scratch file, decoded with
//!   the `parquet` crate and returned as `{ data, columns }`. Column types come
//!   from the file schema, so an empty file still lists its columns. 64-bit
//!   integers are sent as decimal strings. The scratch file is removed on every
//!   exit path; failures come back as `{ error }` with a 4xx/5xx status.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod decode;
mod error;
mod schema;
mod scratch;
mod transport;
mod upload;

#[cfg(test)]
mod fixtures;

const API_PATH: &str = "/api";

/// Configures and returns the Actix scope for the upload route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to decode an uploaded Parquet file.
        .route("/upload", post().to(upload::process))
}
