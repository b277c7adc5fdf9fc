use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::Result;
use crate::settings::get_data_dir;
use crate::stores::find_or_create_segment;

pub fn add(code: &str, name: Option<&str>) -> Result<()> {
    let conn = get_connection(&get_data_dir().join("libreta.db"))?;
    let segment = find_or_create_segment(&conn, code, name)?;
    println!("Segment {} ({})", segment.code, segment.name);
    Ok(())
}

pub fn list() -> Result<()> {
    let conn = get_connection(&get_data_dir().join("libreta.db"))?;
    let mut stmt = conn.prepare("SELECT segment_id, code, name FROM segments ORDER BY code")?;
    let rows: Vec<(i64, String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Code", "Name"]);
    for (id, code, name) in rows {
        table.add_row(vec![Cell::new(id), Cell::new(code), Cell::new(name)]);
    }
    println!("Segments\n{table}");
    Ok(())
}
