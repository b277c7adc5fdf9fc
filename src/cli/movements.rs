use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::Result;
use crate::fmt;
use crate::settings::get_data_dir;

pub fn list(account: Option<&str>, segment: Option<&str>) -> Result<()> {
    let conn = get_connection(&get_data_dir().join("libreta.db"))?;

    let mut sql = String::from(
        "SELECT m.date, m.type, m.number, a.account_code, s.code, m.supplier, m.concept, m.reference, m.charge \
         FROM movements m \
         JOIN accounting_accounts a ON m.accounting_account_id = a.accounting_account_id \
         JOIN segments s ON m.segment_id = s.segment_id",
    );
    let mut clauses = Vec::new();
    let mut params: Vec<&str> = Vec::new();
    if let Some(code) = account {
        params.push(code);
        clauses.push(format!("a.account_code = ?{}", params.len()));
    }
    if let Some(code) = segment {
        params.push(code);
        clauses.push(format!("s.code = ?{}", params.len()));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY m.date, m.number");

    let mut stmt = conn.prepare(&sql)?;
    let rows: Vec<(String, String, i64, String, String, String, String, String, Option<f64>)> = stmt
        .query_map(rusqlite::params_from_iter(params.iter()), |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec![
        "Date", "Type", "Number", "Account", "Segment", "Supplier", "Concept", "Reference", "Charge",
    ]);
    for (date, kind, number, account_code, segment_code, supplier, concept, reference, charge) in rows {
        table.add_row(vec![
            Cell::new(date),
            Cell::new(kind),
            Cell::new(number),
            Cell::new(account_code),
            Cell::new(segment_code),
            Cell::new(supplier),
            Cell::new(concept),
            Cell::new(reference),
            Cell::new(fmt::charge(charge)),
        ]);
    }
    println!("Movements\n{table}");
    Ok(())
}
