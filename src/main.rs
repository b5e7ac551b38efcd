//! EMPREC - Employee Records Client
//!
//! Command-line front end for the employee records store. Fetches the record
//! list from the backend, pushes a full replacement list read from a local
//! JSON file, or exports the current list to disk.

use std::env;
use std::process::ExitCode;

mod domain;
mod application;
mod infrastructure;

use application::EmployeeStore;
use domain::Employee;
use infrastructure::{Config, HttpRecordsGateway, RecordsFile};

/// Entry point for the EMPREC command-line client.
///
/// Reads the backend base URL from the environment, runs one store operation
/// per invocation, and exits non-zero when the store ends up with an error.
fn main() -> ExitCode {
    env_logger::init();

    let config = Config::from_env();
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("fetch");

    let gateway = HttpRecordsGateway::new(&config.api_base_url);
    let mut store = EmployeeStore::new(gateway);

    match command {
        "fetch" => {
            store.fetch_employees();
            report(&store)
        }
        "save" => {
            let Some(filename) = args.get(2) else {
                eprintln!("usage: emprec save <records.json>");
                return ExitCode::FAILURE;
            };
            let records = match RecordsFile::load_records(filename) {
                Ok(records) => records,
                Err(err) => {
                    eprintln!("Cannot read {}: {}", filename, err);
                    return ExitCode::FAILURE;
                }
            };
            store.save_employees(&records);
            report(&store)
        }
        "export" => {
            let Some(filename) = args.get(2) else {
                eprintln!("usage: emprec export <records.json>");
                return ExitCode::FAILURE;
            };
            store.fetch_employees();
            if let Some(err) = &store.error {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
            match RecordsFile::save_records(&store.employees, filename) {
                Ok(path) => {
                    println!("Exported {} record(s) to {}", store.employees.len(), path);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("Cannot write {}: {}", filename, err);
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            eprintln!("usage: emprec [fetch | save <records.json> | export <records.json>]");
            ExitCode::FAILURE
        }
    }
}

/// Prints the store outcome after an operation: the error if one was
/// recorded, the record table otherwise.
fn report(store: &EmployeeStore<HttpRecordsGateway>) -> ExitCode {
    if let Some(err) = &store.error {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }
    print_records(&store.employees);
    ExitCode::SUCCESS
}

fn print_records(records: &[Employee]) {
    println!(
        "{:<24} {:<12} {:>12} {}",
        "Name", "DateOfBirth", "Salary", "Address"
    );
    for record in records {
        println!(
            "{:<24} {:<12} {:>12.2} {}",
            record.name, record.date_of_birth, record.salary, record.address
        );
    }
    println!("{} record(s)", records.len());
}
