// crates/rota-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ingestion failed: {0}")]
    Ingest(#[from] rota_parser::IngestError),

    #[error("Archive serialization failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
