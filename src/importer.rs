use std::path::Path;

use calamine::{Data, Reader};
use rusqlite::Connection;
use sha2::{Digest, Sha256};

use crate::error::{LibretaError, Result};
use crate::models::{MovementDraft, MovementKind};
use crate::rows::{normalize_date, parse_charge, parse_sequence, Classifier, MovementCells, RowKind};
use crate::stores;

/// The title row carries the company name in this (0-based) column.
const COMPANY_NAME_COLUMN: usize = 3;

/// A defect confined to one row. `row` is the 1-based spreadsheet row
/// number, so messages line up with what the user sees in Excel.
#[derive(Debug, Clone)]
pub struct RowError {
    pub row: usize,
    pub reason: String,
}

#[derive(Debug)]
pub struct ImportResult {
    /// `None` only when the workbook was skipped as a duplicate.
    pub company_id: Option<i64>,
    pub movements_created: usize,
    pub errors: Vec<RowError>,
    pub duplicate_file: bool,
}

/// Parsing context carried forward across rows: the most recent account and
/// segment headers stay active for every movement row that follows, until
/// the next header of that kind. One instance per run, never reset mid-run.
#[derive(Debug, Default)]
struct ParseContext {
    account_id: Option<i64>,
    account_name: String,
    segment_id: Option<i64>,
}

fn compute_checksum(file_path: &Path) -> Result<String> {
    let data = std::fs::read(file_path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(hex::encode(hasher.finalize()))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // Excel hands integers over as floats; keep "100" out of "100.0"
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

/// Resolve one movement row against the running context. Any failure here
/// is a row-level defect, reported as a reason string.
fn build_draft(context: &ParseContext, row: &[String]) -> std::result::Result<MovementDraft, String> {
    let account_id = context
        .account_id
        .ok_or("movement before any account header")?;
    let segment_id = context
        .segment_id
        .ok_or("movement before any segment header")?;

    let cells = MovementCells::decode(row);
    let date = normalize_date(&cells.date)
        .ok_or_else(|| format!("unrecognized date: {:?}", cells.date))?;
    let number = parse_sequence(&cells.number)
        .ok_or_else(|| format!("invalid movement number: {:?}", cells.number))?;
    // The type column is unreliable in ContPAQ exports; unrecognized values
    // fall back to Egresos and get corrected manually later.
    let kind = MovementKind::parse(&cells.kind).unwrap_or(MovementKind::Egresos);

    Ok(MovementDraft {
        segment_id,
        accounting_account_id: account_id,
        date,
        kind,
        number,
        supplier: cells.supplier,
        // Placeholder by design: the export has no concept column, the user
        // fills it in after import.
        concept: context.account_name.clone(),
        reference: cells.reference,
        charge: parse_charge(&cells.charge),
    })
}

/// Single sequential pass over the export grid. Row 0 is the title row
/// naming the company; every later row is classified by its first cell and
/// either updates the context or emits a movement.
///
/// Failure asymmetry: account/segment resolution failures abort the run,
/// while per-row defects (bad date, bad number, movement before a header,
/// failed movement insert) are collected and the run continues.
pub fn import_rows(conn: &Connection, rows: &[Vec<String>]) -> Result<ImportResult> {
    if rows.len() < 2 {
        return Err(LibretaError::NoData);
    }

    let company_name = rows[0]
        .get(COMPANY_NAME_COLUMN)
        .map(|c| c.trim())
        .unwrap_or("");
    if company_name.is_empty() {
        return Err(LibretaError::MissingCompanyName);
    }
    let company = stores::find_or_create_company(conn, company_name)?;

    let classifier = Classifier::new();
    let mut context = ParseContext::default();
    let mut result = ImportResult {
        company_id: Some(company.id),
        movements_created: 0,
        errors: Vec::new(),
        duplicate_file: false,
    };

    for (i, row) in rows.iter().enumerate().skip(1) {
        match classifier.classify(row) {
            Some(RowKind::AccountHeader { code, name }) => {
                let account = stores::find_or_create_account(conn, &code, &name)?;
                context.account_id = Some(account.id);
                context.account_name = account.name;
            }
            Some(RowKind::SegmentHeader { code }) => {
                let segment = stores::find_or_create_segment(conn, &code, None)?;
                context.segment_id = Some(segment.id);
            }
            Some(RowKind::MovementHeader) => match build_draft(&context, row) {
                Ok(draft) => match stores::insert_movement(conn, &draft) {
                    Ok(_) => result.movements_created += 1,
                    Err(e) => result.errors.push(RowError {
                        row: i + 1,
                        reason: e.to_string(),
                    }),
                },
                Err(reason) => result.errors.push(RowError { row: i + 1, reason }),
            },
            None => {} // titles, separators, totals
        }
    }

    Ok(result)
}

/// Import the first worksheet of an XLSX export. The file itself belongs to
/// the caller; nothing here deletes or moves it.
pub fn import_workbook(conn: &Connection, file_path: &Path) -> Result<ImportResult> {
    let checksum = compute_checksum(file_path)?;
    {
        let mut stmt = conn.prepare("SELECT 1 FROM imports WHERE checksum = ?1")?;
        if stmt.exists([&checksum])? {
            return Ok(ImportResult {
                company_id: None,
                movements_created: 0,
                errors: Vec::new(),
                duplicate_file: true,
            });
        }
    }

    let mut workbook = calamine::open_workbook_auto(file_path)
        .map_err(|e| LibretaError::Other(format!("Failed to open XLSX: {e}")))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LibretaError::NoData)?
        .map_err(|e| LibretaError::Other(format!("Failed to read worksheet: {e}")))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    let result = import_rows(conn, &rows)?;

    conn.execute(
        "INSERT INTO imports (filename, company_id, movement_count, error_count, checksum) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            file_path.file_name().and_then(|n| n.to_str()).unwrap_or(""),
            result.company_id,
            result.movements_created as i64,
            result.errors.len() as i64,
            checksum,
        ],
    )?;

    Ok(result)
}
