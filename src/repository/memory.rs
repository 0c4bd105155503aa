//! In-memory repository
//!
//! Same contract as the file-backed repository, with no durable medium.
//! Used to exercise the request handlers in isolation.

use std::sync::RwLock;

use crate::model::Employee;

use super::errors::{RepositoryError, RepositoryResult};
use super::EmployeeRepository;

/// In-memory employee repository.
#[derive(Default)]
pub struct MemoryRepository {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeRepository for MemoryRepository {
    fn insert(&self, employee: Employee) -> RepositoryResult<()> {
        let mut employees = self
            .employees
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if employees
            .iter()
            .any(|e| e.id_number() == employee.id_number())
        {
            return Err(RepositoryError::DuplicateId(employee.id_number()));
        }

        employees.push(employee);
        Ok(())
    }

    fn fetch_all(&self) -> RepositoryResult<Vec<Employee>> {
        let employees = self
            .employees
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(employees.clone())
    }

    fn fetch_by_id(&self, id_number: i64) -> RepositoryResult<Option<Employee>> {
        let employees = self
            .employees
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(employees
            .iter()
            .find(|e| e.id_number() == id_number)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_visible_immediately() {
        let repository = MemoryRepository::new();
        repository.insert(Employee::new("jane", "doe", 7)).unwrap();

        assert!(repository.fetch_by_id(7).unwrap().is_some());
    }

    #[test]
    fn test_fetch_all_insertion_order() {
        let repository = MemoryRepository::new();
        for id in [5, 2, 9] {
            repository.insert(Employee::new("x", "y", id)).unwrap();
        }

        let ids: Vec<i64> = repository
            .fetch_all()
            .unwrap()
            .iter()
            .map(|e| e.id_number())
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let repository = MemoryRepository::new();
        repository.insert(Employee::new("a", "b", 1)).unwrap();

        assert!(matches!(
            repository.insert(Employee::new("c", "d", 1)),
            Err(RepositoryError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_fetch_missing_is_none() {
        let repository = MemoryRepository::new();
        assert!(repository.fetch_by_id(42).unwrap().is_none());
    }
}
