use clap::Parser;
use std::path::PathBuf;

/// Server configuration. Every flag can also be set through its environment
/// variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "parquet-viewer", version, about = "Browser-based viewer for Parquet files")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "PARQUET_VIEWER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "PARQUET_VIEWER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory for per-request scratch files. Defaults to the system temp dir.
    #[arg(long, env = "PARQUET_VIEWER_SCRATCH_DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Largest accepted upload, in MiB.
    #[arg(long, env = "PARQUET_VIEWER_MAX_UPLOAD_MB", default_value_t = 512)]
    pub max_upload_mb: usize,

    /// Do not open a browser window on start-up.
    #[arg(long, env = "PARQUET_VIEWER_NO_BROWSER")]
    pub no_browser: bool,
}

/// What the upload handler needs from the configuration; shared as `web::Data`.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub scratch_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            scratch_dir: self
                .scratch_dir
                .clone()
                .unwrap_or_else(std::env::temp_dir),
            max_upload_bytes: self.max_upload_mb.saturating_mul(1024 * 1024),
        }
    }
}
