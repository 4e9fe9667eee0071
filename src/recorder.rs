//! Append-only match log.
//!
//! Every confirmed match is persisted as three lines: address, secret hex,
//! public hex. Records from concurrent workers never interleave: the full
//! record is formatted into one buffer and written with a single call while
//! holding the writer lock.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{ColliderError, Result};
use crate::keygen::Keypair;

pub struct MatchRecorder {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl MatchRecorder {
    /// The log file is created on first append, not here.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record. Existing content is never truncated or reordered.
    pub fn record(&self, keypair: &Keypair) -> Result<()> {
        let entry = format!(
            "{}\n{}\n{}\n",
            keypair.address, keypair.secret_hex, keypair.public_hex
        );

        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.persist_error(source))?;
        file.write_all(entry.as_bytes())
            .map_err(|source| self.persist_error(source))?;

        Ok(())
    }

    fn persist_error(&self, source: io::Error) -> ColliderError {
        ColliderError::Persist {
            path: self.path.clone(),
            source,
        }
    }
}
