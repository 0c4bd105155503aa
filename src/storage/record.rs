//! On-disk employee row format
//!
//! Each row in the record file is laid out as:
//!
//! ```text
//! +------------------+
//! | Row Length       | (u32 LE, includes this field and the checksum)
//! +------------------+
//! | Identity         | (i64 LE)
//! +------------------+
//! | First Name       | (length-prefixed UTF-8)
//! +------------------+
//! | Last Name        | (length-prefixed UTF-8)
//! +------------------+
//! | Checksum         | (u32 LE)
//! +------------------+
//! ```
//!
//! The checksum covers all bytes except the checksum itself.

use std::io::{self, Read};

use crate::model::Employee;

/// Minimum possible row size: length + identity + two empty names + checksum.
pub(super) const MIN_ROW_SIZE: usize = 4 + 8 + 4 + 4 + 4;

/// One employee row as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id_number: i64,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeRow {
    /// Build a row from an in-memory employee.
    ///
    /// The employee's name fields are already normalized; the row stores
    /// them as-is.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id_number: employee.id_number(),
            first_name: employee.first_name().to_string(),
            last_name: employee.last_name().to_string(),
        }
    }

    /// Convert a row read back from disk into the in-memory entity.
    pub fn into_employee(self) -> Employee {
        Employee::from_stored(self.first_name, self.last_name, self.id_number)
    }

    /// Serialize the row body (everything between the length prefix and the
    /// checksum).
    fn serialize_body(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(&self.id_number.to_le_bytes());

        buf.extend_from_slice(&(self.first_name.len() as u32).to_le_bytes());
        buf.extend_from_slice(self.first_name.as_bytes());

        buf.extend_from_slice(&(self.last_name.len() as u32).to_le_bytes());
        buf.extend_from_slice(self.last_name.as_bytes());

        buf
    }

    /// Serialize the complete row to bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let body = self.serialize_body();
        let row_length = (4 + body.len() + 4) as u32;

        // Checksum covers: length + body
        let mut checksum_data = Vec::with_capacity(4 + body.len());
        checksum_data.extend_from_slice(&row_length.to_le_bytes());
        checksum_data.extend_from_slice(&body);
        let checksum = super::checksum::compute_checksum(&checksum_data);

        let mut row = Vec::with_capacity(row_length as usize);
        row.extend_from_slice(&row_length.to_le_bytes());
        row.extend_from_slice(&body);
        row.extend_from_slice(&checksum.to_le_bytes());

        row
    }

    /// Deserialize a row from bytes, verifying the checksum.
    ///
    /// Returns the row and the number of bytes consumed.
    pub fn deserialize(data: &[u8]) -> io::Result<(Self, usize)> {
        if data.len() < MIN_ROW_SIZE {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "Row too short"));
        }

        let row_length = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

        if row_length < MIN_ROW_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid row length: {}", row_length),
            ));
        }

        if data.len() < row_length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("Row truncated: expected {} bytes, got {}", row_length, data.len()),
            ));
        }

        let checksum_offset = row_length - 4;
        let stored_checksum = u32::from_le_bytes([
            data[checksum_offset],
            data[checksum_offset + 1],
            data[checksum_offset + 2],
            data[checksum_offset + 3],
        ]);

        let computed_checksum = super::checksum::compute_checksum(&data[0..checksum_offset]);
        if computed_checksum != stored_checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Checksum mismatch: computed {:08x}, stored {:08x}",
                    computed_checksum, stored_checksum
                ),
            ));
        }

        let mut cursor = io::Cursor::new(&data[4..checksum_offset]);

        fn read_string<R: Read>(reader: &mut R) -> io::Result<String> {
            let mut len_buf = [0u8; 4];
            reader.read_exact(&mut len_buf)?;
            let len = u32::from_le_bytes(len_buf) as usize;

            let mut buf = vec![0u8; len];
            reader.read_exact(&mut buf)?;

            String::from_utf8(buf).map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {}", e))
            })
        }

        let mut id_buf = [0u8; 8];
        cursor.read_exact(&mut id_buf)?;
        let id_number = i64::from_le_bytes(id_buf);

        let first_name = read_string(&mut cursor)?;
        let last_name = read_string(&mut cursor)?;

        Ok((
            Self {
                id_number,
                first_name,
                last_name,
            },
            row_length,
        ))
    }
}
