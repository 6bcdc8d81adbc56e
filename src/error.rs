use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open the configuration file {}: {source}", path.display())]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration file {} is not valid UTF-8 (byte {offset})", path.display())]
    ConfigEncoding { path: PathBuf, offset: usize },
    #[error("invalid configuration file {}:{line}: expected `extension<TAB>program`", path.display())]
    ConfigLine { path: PathBuf, line: usize },
    #[error("no files exist in {}", path.display())]
    EmptyListing { path: PathBuf },
    #[error("invalid path name: {}", path.display())]
    InvalidPath { path: PathBuf },
}

pub type AppResult<T> = Result<T, AppError>;
