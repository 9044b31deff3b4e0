//! Record stores: where finished registration lines end up

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Failure to reach the backing store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to append record to {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read records from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Trait for record storage backends
///
/// Lines are stored verbatim, one per record, in submission order.
pub trait RecordStore {
    /// Append one record line
    fn append(&self, line: &str) -> Result<(), StoreError>;

    /// Every stored line, oldest first
    fn read_all(&self) -> Result<Vec<String>, StoreError>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

impl<R: RecordStore + ?Sized> RecordStore for &R {
    fn append(&self, line: &str) -> Result<(), StoreError> {
        (**self).append(line)
    }

    fn read_all(&self) -> Result<Vec<String>, StoreError> {
        (**self).read_all()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Append-only text file, one `\n`-terminated record per line
///
/// The file is opened for each append and closed again before returning,
/// whether or not the write succeeded. It is created on first use.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()
    }
}

impl RecordStore for FileStore {
    fn append(&self, line: &str) -> Result<(), StoreError> {
        self.write_line(line).map_err(|source| StoreError::Append {
            path: self.path.clone(),
            source,
        })
    }

    fn read_all(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    lines: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, line: &str) -> Result<(), StoreError> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
