use std::path::PathBuf;

use colored::Colorize;

use crate::db::get_connection;
use crate::error::Result;
use crate::importer::import_workbook;
use crate::settings::get_data_dir;

pub fn run(file: &str) -> Result<()> {
    let file_path = PathBuf::from(file);
    let conn = get_connection(&get_data_dir().join("libreta.db"))?;

    let result = import_workbook(&conn, &file_path)?;

    if result.duplicate_file {
        println!("This file has already been imported (duplicate checksum).");
        return Ok(());
    }

    println!(
        "{} movements imported, {} row errors",
        result.movements_created,
        result.errors.len()
    );
    for err in &result.errors {
        println!("{}", format!("  row {}: {}", err.row, err.reason).yellow());
    }

    Ok(())
}
