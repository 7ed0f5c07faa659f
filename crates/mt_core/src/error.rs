use std::path::PathBuf;

/// Errors raised outside the evaluation path: dataset I/O, catalog and
/// configuration parsing. Evaluation itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("failed to read dataset {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what} dataset: {source}")]
    DatasetParse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse signal catalogs: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("datasets are already loaded")]
    AlreadyLoaded,
}

pub type Result<T> = std::result::Result<T, CoreError>;
