//! Append-only writer for the employee record file
//!
//! A write is not acknowledged until the row has been fsync'd; there is no
//! asynchronous window in which an acknowledged record could be lost.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::{StorageError, StorageResult};
use super::record::EmployeeRow;

/// File name of the record file inside `<data_dir>/data/`.
pub(super) const RECORD_FILE: &str = "employees.dat";

/// Append-only writer for `employees.dat`.
pub struct RosterWriter {
    storage_path: PathBuf,
    file: File,
    current_offset: u64,
}

impl RosterWriter {
    /// Opens or creates the record file under the given data directory.
    ///
    /// Creates `<data_dir>/data/employees.dat` and any missing parent
    /// directories.
    pub fn open(data_dir: &Path) -> StorageResult<Self> {
        let data_subdir = data_dir.join("data");
        let storage_path = data_subdir.join(RECORD_FILE);

        if !data_subdir.exists() {
            fs::create_dir_all(&data_subdir).map_err(|e| {
                StorageError::write_failed(
                    format!("Failed to create data directory: {}", data_subdir.display()),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&storage_path)
            .map_err(|e| {
                StorageError::write_failed(
                    format!("Failed to open record file: {}", storage_path.display()),
                    e,
                )
            })?;

        let current_offset = file
            .metadata()
            .map_err(|e| StorageError::write_failed("Failed to read file metadata", e))?
            .len();

        Ok(Self {
            storage_path,
            file,
            current_offset,
        })
    }

    /// Returns the path of the record file.
    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Returns the current file offset.
    pub fn current_offset(&self) -> u64 {
        self.current_offset
    }

    /// Appends an employee row and fsyncs before returning.
    ///
    /// Returns the byte offset at which the row was written.
    pub fn append(&mut self, row: &EmployeeRow) -> StorageResult<u64> {
        let serialized = row.serialize();
        let offset = self.current_offset;

        self.file.write_all(&serialized).map_err(|e| {
            StorageError::write_failed(
                format!("Failed to write employee row: {}", row.id_number),
                e,
            )
        })?;

        // fsync - mandatory for durability
        self.file.sync_all().map_err(|e| {
            StorageError::write_failed(
                format!("fsync failed after writing employee row: {}", row.id_number),
                e,
            )
        })?;

        self.current_offset += serialized.len() as u64;

        Ok(offset)
    }
}
