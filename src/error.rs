use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum IgError {
    #[error("file is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("invalid profile data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("store error at {path}: {message}")]
    Store { path: PathBuf, message: String },
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
    #[error("not a .json file: {}", .0.display())]
    NotJson(PathBuf),
    #[error("page {page} is out of range (1..={total})")]
    InvalidPage { page: usize, total: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, IgError>;

impl IgError {
    pub(crate) fn store(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        IgError::Store {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
