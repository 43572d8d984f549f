use thiserror::Error;

/// Errors produced by a contact table
#[derive(Error, Debug)]
pub enum TableError {
    /// The table was asked for zero buckets.
    #[error("bucket count must be at least 1, got {bucket_count}")]
    InvalidConfiguration { bucket_count: usize },
    /// Writing the table's rendering failed.
    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
