//! Append-only CSV audit log, one record per evaluation cycle.

use crate::errors::AuditError;
use crate::models::alert::AlertRecord;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Flat append-only store with schema `Date,Symbol,Price,Correlation,Signal`
/// and no unique constraint (repeated ticks produce repeated rows).
///
/// The file is opened, appended, and closed within a single call; the record
/// bytes (header included on a fresh store) go out in one write, so a row is
/// never partially visible.
pub struct CsvAuditLog {
    path: PathBuf,
}

impl CsvAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_fresh(&self) -> Result<bool, AuditError> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one record, writing the header row first on a fresh store.
    pub fn append(&self, record: &AlertRecord) -> Result<(), AuditError> {
        let fresh = self.is_fresh()?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(fresh)
            .from_writer(Vec::new());
        writer.serialize(record)?;
        let buf = writer
            .into_inner()
            .map_err(|e| AuditError::Io(io::Error::other(e.to_string())))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&buf)?;
        Ok(())
    }
}
