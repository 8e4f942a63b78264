use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use parquet::errors::ParquetError;
use thiserror::Error;
use tokio::task::JoinError;

/// Everything that can go wrong while handling one upload.
///
/// `MissingFile`, `TooLarge` and `Multipart` are client input errors; the rest
/// are server processing errors and are reported with a 500.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded.")]
    MissingFile,

    #[error("File exceeds the upload limit of {limit} bytes.")]
    TooLarge { limit: usize },

    #[error("Malformed multipart payload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] ParquetError),

    #[error("Decoder task failed: {0}")]
    Task(#[from] JoinError),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingFile | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Io(_) | UploadError::Decode(_) | UploadError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message placed in the `error` field of the JSON body.
    pub fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            format!("Server-side processing failed: {}", self)
        } else {
            self.to_string()
        }
    }
}
