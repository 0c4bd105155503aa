//! File-backed repository
//!
//! Owns the append-only record file through a [`RosterWriter`] and keeps an
//! insertion-ordered in-memory copy of the collection, rebuilt by scanning
//! the file at open. Every insert is appended and fsync'd before the cache
//! is updated, so an acknowledged record is always durable.

use std::path::Path;
use std::sync::Mutex;

use crate::model::Employee;
use crate::observability::Logger;
use crate::storage::{EmployeeRow, RosterReader, RosterWriter, StorageResult};

use super::errors::{RepositoryError, RepositoryResult};
use super::EmployeeRepository;

struct Inner {
    writer: RosterWriter,
    /// Insertion-ordered copy of everything in the file.
    employees: Vec<Employee>,
}

/// Durable employee repository backed by `employees.dat`.
pub struct FileRepository {
    inner: Mutex<Inner>,
}

impl FileRepository {
    /// Opens the repository under the given data directory, loading any
    /// existing records.
    ///
    /// A corrupt record file fails the open; the store is not usable until
    /// the corruption is resolved.
    pub fn open(data_dir: &Path) -> StorageResult<Self> {
        let writer = RosterWriter::open(data_dir)?;
        let employees = Self::load_existing(writer.path())?;

        Logger::info(
            "STORE_OPENED",
            &[
                ("path", &writer.path().display().to_string()),
                ("records", &employees.len().to_string()),
            ],
        );

        Ok(Self {
            inner: Mutex::new(Inner { writer, employees }),
        })
    }

    fn load_existing(storage_path: &Path) -> StorageResult<Vec<Employee>> {
        let mut reader = RosterReader::open(storage_path)?;
        let rows = reader.read_all()?;
        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }
}

impl EmployeeRepository for FileRepository {
    fn insert(&self, employee: Employee) -> RepositoryResult<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if inner
            .employees
            .iter()
            .any(|e| e.id_number() == employee.id_number())
        {
            return Err(RepositoryError::DuplicateId(employee.id_number()));
        }

        // Durable before visible
        let row = EmployeeRow::from_employee(&employee);
        inner.writer.append(&row)?;

        Logger::info(
            "EMPLOYEE_STORED",
            &[("id_number", &employee.id_number().to_string())],
        );

        inner.employees.push(employee);
        Ok(())
    }

    fn fetch_all(&self) -> RepositoryResult<Vec<Employee>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(inner.employees.clone())
    }

    fn fetch_by_id(&self, id_number: i64) -> RepositoryResult<Option<Employee>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(inner
            .employees
            .iter()
            .find(|e| e.id_number() == id_number)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_insert_then_fetch_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileRepository::open(temp_dir.path()).unwrap();

        repository.insert(Employee::new("jane", "doe", 7)).unwrap();

        let found = repository.fetch_by_id(7).unwrap().unwrap();
        assert_eq!(found.first_name(), "Jane");
        assert_eq!(found.last_name(), "Doe");
    }

    #[test]
    fn test_fetch_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileRepository::open(temp_dir.path()).unwrap();

        assert!(repository.fetch_by_id(99).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_identity_rejected_and_not_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileRepository::open(temp_dir.path()).unwrap();

        repository.insert(Employee::new("al", "smith", 1)).unwrap();
        let result = repository.insert(Employee::new("bo", "jones", 1));

        assert!(matches!(result, Err(RepositoryError::DuplicateId(1))));
        // The original record is untouched
        let found = repository.fetch_by_id(1).unwrap().unwrap();
        assert_eq!(found.first_name(), "Al");
        assert_eq!(repository.fetch_all().unwrap().len(), 1);
    }

    #[test]
    fn test_records_survive_reopen_in_order() {
        let temp_dir = TempDir::new().unwrap();

        {
            let repository = FileRepository::open(temp_dir.path()).unwrap();
            repository.insert(Employee::new("c", "c", 3)).unwrap();
            repository.insert(Employee::new("a", "a", 1)).unwrap();
            repository.insert(Employee::new("b", "b", 2)).unwrap();
        }

        let repository = FileRepository::open(temp_dir.path()).unwrap();
        let ids: Vec<i64> = repository
            .fetch_all()
            .unwrap()
            .iter()
            .map(|e| e.id_number())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
