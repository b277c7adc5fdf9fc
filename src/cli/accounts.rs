use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::Result;
use crate::settings::get_data_dir;
use crate::stores::find_or_create_account;

pub fn add(code: &str, name: &str) -> Result<()> {
    let conn = get_connection(&get_data_dir().join("libreta.db"))?;
    let account = find_or_create_account(&conn, code, name)?;
    println!("Account {} ({})", account.code, account.name);
    Ok(())
}

pub fn list() -> Result<()> {
    let conn = get_connection(&get_data_dir().join("libreta.db"))?;
    let mut stmt = conn.prepare(
        "SELECT accounting_account_id, account_code, name FROM accounting_accounts ORDER BY account_code",
    )?;
    let rows: Vec<(i64, String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Code", "Name"]);
    for (id, code, name) in rows {
        table.add_row(vec![Cell::new(id), Cell::new(code), Cell::new(name)]);
    }
    println!("Accounting accounts\n{table}");
    Ok(())
}
