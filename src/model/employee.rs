//! The employee entity and its external representation

use serde::{Deserialize, Serialize};

use super::normalize::normalize_name;

/// A stored employee record.
///
/// Name fields are always held in normalized form; construction is the only
/// way to build one, so un-normalized input cannot leak into storage. The
/// identity is caller-supplied and stored verbatim. Uniqueness is enforced
/// by the repository at insert time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id_number: i64,
    first_name: String,
    last_name: String,
}

impl Employee {
    /// Build an employee from raw field values, normalizing both names.
    pub fn new(first_name: &str, last_name: &str, id_number: i64) -> Self {
        Self {
            id_number,
            first_name: normalize_name(first_name),
            last_name: normalize_name(last_name),
        }
    }

    /// Rebuild an employee from already-normalized fields.
    ///
    /// Used when loading records back from storage, where the fields were
    /// normalized before they were written.
    pub fn from_stored(first_name: String, last_name: String, id_number: i64) -> Self {
        Self {
            id_number,
            first_name,
            last_name,
        }
    }

    pub fn id_number(&self) -> i64 {
        self.id_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The external representation: exactly the three public fields,
    /// enumerated explicitly.
    pub fn to_record(&self) -> EmployeeRecord {
        EmployeeRecord {
            id_number: self.id_number,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Wire-level employee record.
///
/// This is the only shape in which an employee ever leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id_number: i64,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_normalizes_names() {
        let employee = Employee::new("jo3hn!!", "sm1th", 42);
        assert_eq!(employee.first_name(), "John");
        assert_eq!(employee.last_name(), "Smith");
        assert_eq!(employee.id_number(), 42);
    }

    #[test]
    fn test_identity_stored_verbatim() {
        let employee = Employee::new("a", "b", -7);
        assert_eq!(employee.id_number(), -7);
    }

    #[test]
    fn test_record_has_exactly_public_fields() {
        let record = Employee::new("jane", "doe", 7).to_record();
        let json = serde_json::to_value(&record).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["id_number"], 7);
        assert_eq!(json["first_name"], "Jane");
        assert_eq!(json["last_name"], "Doe");
    }

    #[test]
    fn test_record_deserializes_from_wire_shape() {
        let record: EmployeeRecord = serde_json::from_str(
            r#"{"id_number": 1, "first_name": "Al", "last_name": "Smith"}"#,
        )
        .unwrap();
        assert_eq!(record.id_number, 1);
        assert_eq!(record.first_name, "Al");
        assert_eq!(record.last_name, "Smith");
    }
}
