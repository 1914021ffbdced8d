//! Locked, resettable read access to a single file.

use crate::error::{CloseError, OpenError, ReadError};
use std::fs::{self, File, TryLockError};
use std::io::{Read, Seek};
use std::path::Path;

/// An open file holding an exclusive advisory lock for its whole lifetime.
///
/// The file is opened once and re-read from the start on every query. While
/// the handle is alive no other handle can lock the same path, so content
/// cannot change under a cooperating writer mid-session.
///
/// Dropping an open handle releases the lock. [`close`](Self::close) does the
/// same explicitly and reports a second call as [`CloseError::AlreadyClosed`].
#[derive(Debug)]
pub struct DocumentHandle {
    label: String,
    /// `None` once closed
    file: Option<File>,
}

impl DocumentHandle {
    /// Opens `path` and takes the lock without blocking.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, OpenError> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|e| OpenError::from_io(path, e))?;
        if !metadata.is_file() {
            return Err(OpenError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| OpenError::from_io(path, e))?;
        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => {
                return Err(OpenError::AlreadyLocked {
                    path: path.to_path_buf(),
                });
            }
            Err(TryLockError::Error(source)) => {
                return Err(OpenError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        tracing::debug!("Opened and locked {}", path.display());

        Ok(Self {
            label: path.display().to_string(),
            file: Some(file),
        })
    }

    /// The stable name this document is reported under.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Reads from the current cursor to end of file as UTF-8.
    pub fn read_all(&mut self) -> Result<String, ReadError> {
        let file = self.file.as_mut().ok_or(ReadError::Closed)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Moves the cursor back to offset 0.
    pub fn reset_to_start(&mut self) -> Result<(), ReadError> {
        let file = self.file.as_mut().ok_or(ReadError::Closed)?;
        file.rewind()?;
        Ok(())
    }

    /// Releases the lock and the file.
    pub fn close(&mut self) -> Result<(), CloseError> {
        let file = self.file.take().ok_or(CloseError::AlreadyClosed)?;
        file.unlock()?;
        tracing::debug!("Closed {}", self.label);
        Ok(())
    }
}

impl Drop for DocumentHandle {
    fn drop(&mut self) {
        if let Some(file) = self.file.take()
            && let Err(e) = file.unlock()
        {
            tracing::warn!("Failed to unlock {} on drop: {}", self.label, e);
        }
    }
}
