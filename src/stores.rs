use rusqlite::{Connection, OptionalExtension};

use crate::error::{LibretaError, Result};
use crate::models::{AccountingAccount, Company, MovementDraft, Segment};
use crate::rows::is_account_code;

pub fn find_or_create_company(conn: &Connection, name: &str) -> Result<Company> {
    let existing = conn
        .query_row(
            "SELECT company_id, name FROM companies WHERE name = ?1",
            [name],
            |row| {
                Ok(Company {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    if let Some(company) = existing {
        return Ok(company);
    }
    conn.execute("INSERT INTO companies (name) VALUES (?1)", [name])?;
    Ok(Company {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
    })
}

/// Idempotent on the account code. The code format is checked before any
/// lookup so a malformed code never reaches the table.
pub fn find_or_create_account(conn: &Connection, code: &str, name: &str) -> Result<AccountingAccount> {
    if !is_account_code(code) {
        return Err(LibretaError::InvalidAccountCode(code.to_string()));
    }
    let existing = conn
        .query_row(
            "SELECT accounting_account_id, account_code, name FROM accounting_accounts WHERE account_code = ?1",
            [code],
            |row| {
                Ok(AccountingAccount {
                    id: row.get(0)?,
                    code: row.get(1)?,
                    name: row.get(2)?,
                })
            },
        )
        .optional()?;
    if let Some(account) = existing {
        return Ok(account);
    }
    conn.execute(
        "INSERT INTO accounting_accounts (account_code, name) VALUES (?1, ?2)",
        rusqlite::params![code, name],
    )?;
    Ok(AccountingAccount {
        id: conn.last_insert_rowid(),
        code: code.to_string(),
        name: name.to_string(),
    })
}

/// Idempotent on the segment code. When the export gives no display name the
/// segment is labelled `Segmento <code>`.
pub fn find_or_create_segment(conn: &Connection, code: &str, name: Option<&str>) -> Result<Segment> {
    let existing = conn
        .query_row(
            "SELECT segment_id, code, name FROM segments WHERE code = ?1",
            [code],
            |row| {
                Ok(Segment {
                    id: row.get(0)?,
                    code: row.get(1)?,
                    name: row.get(2)?,
                })
            },
        )
        .optional()?;
    if let Some(segment) = existing {
        return Ok(segment);
    }
    let name = name
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("Segmento {code}"));
    conn.execute(
        "INSERT INTO segments (code, name) VALUES (?1, ?2)",
        rusqlite::params![code, name],
    )?;
    Ok(Segment {
        id: conn.last_insert_rowid(),
        code: code.to_string(),
        name,
    })
}

pub fn insert_movement(conn: &Connection, draft: &MovementDraft) -> Result<i64> {
    if draft.number < 1 {
        return Err(LibretaError::InvalidMovementNumber(draft.number.to_string()));
    }
    conn.execute(
        "INSERT INTO movements (segment_id, accounting_account_id, date, type, number, supplier, concept, reference, charge) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
            draft.segment_id,
            draft.accounting_account_id,
            draft.date,
            draft.kind.as_str(),
            draft.number,
            draft.supplier,
            draft.concept,
            draft.reference,
            draft.charge,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
