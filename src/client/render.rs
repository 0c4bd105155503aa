//! Human-readable rendering of service results

use crate::model::EmployeeRecord;

/// Header printed before the full employee listing
pub const LIST_HEADER: &str = "Current employees:";

/// Header printed before a freshly created record
pub const ADDED_HEADER: &str = "New employee added:";

/// Message for a create that yielded no result
pub const ADD_FAILED: &str = "Unable to add new employee to database";

/// Message for a listing that yielded no result
pub const LIST_FAILED: &str = "Unable to retrieve employees from the service";

/// One line per employee: `<first> <last>, id_number: <id>`
pub fn employee_line(record: &EmployeeRecord) -> String {
    format!(
        "{} {}, id_number: {}",
        record.first_name, record.last_name, record.id_number
    )
}

/// Message for a single-employee lookup that found nothing
pub fn missing_employee_line(id_number: i64) -> String {
    format!("Unable to find an employee with id number {}", id_number)
}
