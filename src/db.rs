use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS companies (
    company_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS accounting_accounts (
    accounting_account_id INTEGER PRIMARY KEY,
    account_code TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS segments (
    segment_id INTEGER PRIMARY KEY,
    code TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS movements (
    movement_id INTEGER PRIMARY KEY,
    segment_id INTEGER NOT NULL,
    accounting_account_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    type TEXT NOT NULL,
    number INTEGER NOT NULL,
    supplier TEXT NOT NULL,
    concept TEXT NOT NULL,
    reference TEXT NOT NULL,
    charge REAL,
    created_at TEXT DEFAULT (datetime('now')),
    FOREIGN KEY (segment_id) REFERENCES segments(segment_id),
    FOREIGN KEY (accounting_account_id) REFERENCES accounting_accounts(accounting_account_id)
);

CREATE TABLE IF NOT EXISTS imports (
    import_id INTEGER PRIMARY KEY,
    filename TEXT NOT NULL,
    company_id INTEGER,
    import_date TEXT DEFAULT (datetime('now')),
    movement_count INTEGER,
    error_count INTEGER,
    checksum TEXT,
    FOREIGN KEY (company_id) REFERENCES companies(company_id)
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
