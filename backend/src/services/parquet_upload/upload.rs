use super::decode::{decode_file, DecodedTable};
use super::error::UploadError;
use super::scratch::ScratchFile;
use crate::config::UploadSettings;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::upload::{ErrorResponse, UploadResponse};
use common::requests::UPLOAD_FIELD;
use futures_util::StreamExt;
use log::{error, info};

/// Name used for the scratch file when the part carries no filename.
const DEFAULT_FILE_NAME: &str = "upload.parquet";

struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with `{ data, columns }`.
/// - On failure: the status of the `UploadError` with `{ error }`. Never both.
pub async fn process(settings: web::Data<UploadSettings>, payload: Multipart) -> impl Responder {
    match upload_parquet(&settings, payload).await {
        Ok(response) => {
            info!(
                "Returning {} rows with {} columns",
                response.data.len(),
                response.columns.len()
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            error!("Upload failed: {}", e);
            HttpResponse::build(e.status_code()).json(ErrorResponse {
                error: e.client_message(),
            })
        }
    }
}

/// Buffers the `file` part, stages it in the scratch directory, decodes it and
/// removes the scratch copy again.
///
/// The scratch file is a guard: every `?` below drops it, which deletes the
/// file before the error reaches the caller.
pub async fn upload_parquet(
    settings: &UploadSettings,
    payload: Multipart,
) -> Result<UploadResponse, UploadError> {
    let UploadedFile { file_name, bytes } =
        read_file_field(payload, settings.max_upload_bytes).await?;
    info!("File received: {}, size: {}", file_name, bytes.len());

    let scratch = ScratchFile::stage(&settings.scratch_dir, &file_name, &bytes)?;
    drop(bytes);

    let file = scratch.reopen()?;
    let DecodedTable { rows, columns } =
        tokio::task::spawn_blocking(move || decode_file(file)).await??;

    scratch.finish();
    Ok(UploadResponse {
        data: rows,
        columns,
    })
}

/// Reads the multipart stream until the `file` part and buffers it, refusing
/// to grow past `limit` bytes. Other parts are skipped.
async fn read_file_field(
    mut payload: Multipart,
    limit: usize,
) -> Result<UploadedFile, UploadError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if field_name.as_deref() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > limit {
                return Err(UploadError::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(UploadedFile { file_name, bytes });
    }

    Err(UploadError::MissingFile)
}
