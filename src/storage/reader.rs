//! Sequential reader for the employee record file
//!
//! Validates the checksum of every row. Any corruption aborts the scan with
//! a fatal storage error; there is no repair or skip-ahead.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::errors::{StorageError, StorageResult};
use super::record::{EmployeeRow, MIN_ROW_SIZE};
use super::writer::RECORD_FILE;

/// Checksum-validating sequential reader for `employees.dat`.
pub struct RosterReader {
    storage_path: PathBuf,
    reader: BufReader<File>,
    current_offset: u64,
    file_size: u64,
}

impl RosterReader {
    /// Opens the record file for reading.
    pub fn open(storage_path: &Path) -> StorageResult<Self> {
        let file = File::open(storage_path).map_err(|e| {
            StorageError::read_failed(
                format!("Failed to open record file: {}", storage_path.display()),
                e,
            )
        })?;

        let file_size = file
            .metadata()
            .map_err(|e| StorageError::read_failed("Failed to read file metadata", e))?
            .len();

        Ok(Self {
            storage_path: storage_path.to_path_buf(),
            reader: BufReader::new(file),
            current_offset: 0,
            file_size,
        })
    }

    /// Opens the record file beneath a data directory.
    pub fn open_from_data_dir(data_dir: &Path) -> StorageResult<Self> {
        let storage_path = data_dir.join("data").join(RECORD_FILE);
        Self::open(&storage_path)
    }

    /// Returns the record file path.
    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Returns the current read offset.
    pub fn current_offset(&self) -> u64 {
        self.current_offset
    }

    /// Reads the next row, or `None` at end of file.
    pub fn read_next(&mut self) -> StorageResult<Option<EmployeeRow>> {
        if self.current_offset >= self.file_size {
            return Ok(None);
        }

        let remaining = self.file_size - self.current_offset;
        if remaining < MIN_ROW_SIZE as u64 {
            return Err(StorageError::corruption_at_offset(
                self.current_offset,
                format!(
                    "Truncated record file: {} bytes remaining, minimum row size is {}",
                    remaining, MIN_ROW_SIZE
                ),
            ));
        }

        let mut len_buf = [0u8; 4];
        self.reader.read_exact(&mut len_buf).map_err(|e| {
            StorageError::corruption_at_offset(
                self.current_offset,
                format!("Failed to read row length: {}", e),
            )
        })?;
        let row_length = u32::from_le_bytes(len_buf) as u64;

        if row_length < MIN_ROW_SIZE as u64 {
            return Err(StorageError::corruption_at_offset(
                self.current_offset,
                format!("Invalid row length: {}", row_length),
            ));
        }

        if row_length > remaining {
            return Err(StorageError::corruption_at_offset(
                self.current_offset,
                format!(
                    "Row length {} exceeds remaining file size {}",
                    row_length, remaining
                ),
            ));
        }

        let mut row_buf = vec![0u8; row_length as usize];
        row_buf[0..4].copy_from_slice(&len_buf);

        self.reader.read_exact(&mut row_buf[4..]).map_err(|e| {
            StorageError::corruption_at_offset(
                self.current_offset,
                format!("Failed to read row body: {}", e),
            )
        })?;

        // Parse and validate (includes checksum verification)
        let (row, bytes_consumed) = EmployeeRow::deserialize(&row_buf)
            .map_err(|e| StorageError::corruption_at_offset(self.current_offset, e.to_string()))?;

        self.current_offset += bytes_consumed as u64;

        Ok(Some(row))
    }

    /// Reads every row in file order.
    ///
    /// Any corruption causes immediate failure.
    pub fn read_all(&mut self) -> StorageResult<Vec<EmployeeRow>> {
        let mut rows = Vec::new();

        while let Some(row) = self.read_next()? {
            rows.push(row);
        }

        Ok(rows)
    }
}
