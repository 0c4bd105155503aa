//! Client command-line interface
//!
//! Flag-driven, not positional. Identity arguments are validated as
//! integers by the parser itself, so a malformed id fails as a usage error
//! before any outbound call is attempted. Invoking with no arguments prints
//! usage and exits without contacting the service.

use clap::{CommandFactory, Parser};

use super::http::{ClientError, EmployeeClient};
use super::render;

/// Command-line client for the rosterdb employee service
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print a list of all employees
    #[arg(long)]
    pub get_employees: bool,

    /// Print employee info by employee ID
    #[arg(long, value_name = "ID", value_parser = parse_identity)]
    pub get_employee: Option<i64>,

    /// Add employee (must specify --employee-name and --employee-id)
    #[arg(long, requires = "employee_name", requires = "employee_id")]
    pub add_employee: bool,

    /// The new employee first and last name
    #[arg(long, num_args = 2, value_names = ["FIRST", "LAST"])]
    pub employee_name: Option<Vec<String>>,

    /// The new employee id number
    #[arg(long, value_name = "ID", value_parser = parse_identity)]
    pub employee_id: Option<i64>,

    /// Base URL of the employee service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,
}

fn parse_identity(raw: &str) -> Result<i64, String> {
    raw.parse()
        .map_err(|_| format!("Not a valid id number: {}", raw))
}

/// Parse arguments and run the requested operation.
pub fn run() -> Result<(), ClientError> {
    // No arguments at all: print usage, contact nothing
    if std::env::args().len() == 1 {
        let _ = Cli::command().print_help();
        return Ok(());
    }

    let cli = Cli::parse();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(execute(cli))
}

async fn execute(cli: Cli) -> Result<(), ClientError> {
    let client = EmployeeClient::new(&cli.server)?;

    if cli.get_employees {
        print_all_employees(&client).await;
    } else if let Some(id_number) = cli.get_employee {
        print_employee(&client, id_number).await;
    } else if cli.add_employee {
        if let (Some(name), Some(id_number)) = (&cli.employee_name, cli.employee_id) {
            if let [first_name, last_name] = name.as_slice() {
                add_employee(&client, first_name, last_name, id_number).await;
            }
        }
    }

    Ok(())
}

async fn print_all_employees(client: &EmployeeClient) {
    match client.get_all_employees().await {
        Some(employees) => {
            println!("{}", render::LIST_HEADER);
            for record in &employees {
                println!("{}", render::employee_line(record));
            }
        }
        None => println!("{}", render::LIST_FAILED),
    }
}

async fn print_employee(client: &EmployeeClient, id_number: i64) {
    match client.get_employee(id_number).await {
        Some(record) => println!("{}", render::employee_line(&record)),
        None => println!("{}", render::missing_employee_line(id_number)),
    }
}

async fn add_employee(client: &EmployeeClient, first_name: &str, last_name: &str, id_number: i64) {
    match client.post_employee(first_name, last_name, id_number).await {
        Some(record) => {
            println!("{}", render::ADDED_HEADER);
            println!("{}", render::employee_line(&record));
        }
        None => println!("{}", render::ADD_FAILED),
    }
}
