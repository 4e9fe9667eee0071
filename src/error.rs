use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColliderError {
    #[error("cannot open target list {path}: {source}")]
    TargetOpen { path: PathBuf, source: io::Error },

    #[error("read failed on target list {path}: {source}")]
    TargetRead { path: PathBuf, source: io::Error },

    #[error("entropy source failure: {0}")]
    Entropy(String),

    #[error("cannot append match to {path}: {source}")]
    Persist { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ColliderError>;
