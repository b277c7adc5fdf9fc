use std::sync::OnceLock;

use regex::Regex;

/// ContPAQ account codes: five hyphen-separated digit groups of 3/3/3/3/2.
const ACCOUNT_CODE_PATTERN: &str = r"^\d{3}-\d{3}-\d{3}-\d{3}-\d{2}$";

/// Localized short dates as ContPAQ prints them, e.g. `31/Jul/2025`. Day
/// range is deliberately loose (the export itself never validates it).
const MOVEMENT_DATE_PATTERN: &str =
    r"^([0-2]?\d|3[01])/(Ene|Feb|Mar|Abr|May|Jun|Jul|Ago|Sep|Oct|Nov|Dic)/\d{4}\s?$";

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

fn account_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ACCOUNT_CODE_PATTERN).unwrap())
}

pub fn is_account_code(raw: &str) -> bool {
    account_code_re().is_match(raw)
}

// ---------------------------------------------------------------------------
// Row classification
// ---------------------------------------------------------------------------

/// What a single export row represents, judged from its first cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// New account context: code plus the display name from the next column.
    AccountHeader { code: String, name: String },
    /// New segment context: the cell text after the leading "segmento" word.
    SegmentHeader { code: String },
    /// A dated ledger entry; decode the cells with [`MovementCells`].
    MovementHeader,
}

pub struct Classifier {
    date_re: Regex,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            date_re: Regex::new(MOVEMENT_DATE_PATTERN).unwrap(),
        }
    }

    /// Classify one row. Priority is fixed: account code, then segment
    /// prefix, then date. Title rows, separators and totals match nothing
    /// and return `None`; that is not an error.
    pub fn classify(&self, row: &[String]) -> Option<RowKind> {
        let first = row.first().map(|c| c.trim()).unwrap_or("");
        if first.is_empty() {
            return None;
        }
        if is_account_code(first) {
            let name = row.get(1).map(|c| c.trim()).unwrap_or("").to_string();
            return Some(RowKind::AccountHeader {
                code: first.to_string(),
                name,
            });
        }
        if first.to_lowercase().starts_with("segmento") {
            let code = first
                .split(' ')
                .skip(1)
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string();
            return Some(RowKind::SegmentHeader { code });
        }
        if self.date_re.is_match(first) {
            return Some(RowKind::MovementHeader);
        }
        None
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Cell coercions
// ---------------------------------------------------------------------------

/// `31/Jul/2025` -> `2025-07-31`. Returns `None` when the month abbreviation
/// is not one of the twelve known values; callers report that as a row
/// error instead of emitting a month "00".
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let (day, month, year) = (parts[0], parts[1], parts[2]);
    let ordinal = MONTH_ABBREVIATIONS.iter().position(|m| *m == month)? + 1;
    Some(format!("{year}-{ordinal:02}-{day:0>2}"))
}

/// Charge cells: empty or unparseable means "no amount" (NULL), never zero
/// and never an error. Thousands separators and currency signs are noise.
pub fn parse_charge(raw: &str) -> Option<f64> {
    let s = raw.replace(',', "").replace('$', "");
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Movement sequence numbers must be positive integers. Excel hands numeric
/// cells over as floats, so integer-valued floats are accepted too.
pub fn parse_sequence(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(n) = s.parse::<i64>() {
        return (n >= 1).then_some(n);
    }
    let f = s.parse::<f64>().ok()?;
    (f.fract() == 0.0 && f >= 1.0).then_some(f as i64)
}

/// Named accessors for the six movement columns, decoded once per row so
/// the driver never indexes cells directly.
#[derive(Debug, Clone)]
pub struct MovementCells {
    pub date: String,
    pub kind: String,
    pub number: String,
    pub supplier: String,
    pub reference: String,
    pub charge: String,
}

impl MovementCells {
    pub fn decode(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).map(|c| c.trim()).unwrap_or("").to_string();
        Self {
            date: cell(0),
            kind: cell(1),
            number: cell(2),
            supplier: cell(3),
            reference: cell(4),
            charge: cell(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_is_account_code() {
        assert!(is_account_code("101-001-001-001-01"));
        assert!(is_account_code("999-999-999-999-99"));
        assert!(!is_account_code("101-001-001-001-001"));
        assert!(!is_account_code("segmento SEG-1"));
        assert!(!is_account_code(""));
        // Repeated calls hit the same shared matcher as the classifier
        let c = Classifier::new();
        for code in ["101-001-001-001-01", "101-001"] {
            assert_eq!(
                is_account_code(code),
                matches!(c.classify(&row(&[code])), Some(RowKind::AccountHeader { .. }))
            );
        }
    }

    #[test]
    fn test_classify_account_header() {
        let c = Classifier::new();
        assert_eq!(
            c.classify(&row(&["101-001-001-001-01", "Caja General"])),
            Some(RowKind::AccountHeader {
                code: "101-001-001-001-01".to_string(),
                name: "Caja General".to_string(),
            })
        );
        // Name column may be missing entirely
        assert_eq!(
            c.classify(&row(&["101-001-001-001-01"])),
            Some(RowKind::AccountHeader {
                code: "101-001-001-001-01".to_string(),
                name: String::new(),
            })
        );
    }

    #[test]
    fn test_classify_rejects_malformed_account_codes() {
        let c = Classifier::new();
        for bad in &[
            "101-001-001-001-001", // last group too long
            "101-001-001-001",     // four groups
            "10-001-001-001-01",   // first group too short
            "101.001.001.001.01",  // wrong separator
            "101-001-001-001-0a",  // non-digit
        ] {
            let kind = c.classify(&row(&[bad]));
            assert!(
                !matches!(kind, Some(RowKind::AccountHeader { .. })),
                "{bad} classified as account header"
            );
        }
    }

    #[test]
    fn test_classify_segment_header_case_insensitive() {
        let c = Classifier::new();
        assert_eq!(
            c.classify(&row(&["Segmento SEG-1"])),
            Some(RowKind::SegmentHeader { code: "SEG-1".to_string() })
        );
        assert_eq!(
            c.classify(&row(&["SEGMENTO SEG-1"])),
            Some(RowKind::SegmentHeader { code: "SEG-1".to_string() })
        );
        assert_eq!(
            c.classify(&row(&["segmento ventas norte"])),
            Some(RowKind::SegmentHeader { code: "ventas norte".to_string() })
        );
    }

    #[test]
    fn test_classify_movement_header() {
        let c = Classifier::new();
        assert_eq!(c.classify(&row(&["31/Jul/2025"])), Some(RowKind::MovementHeader));
        assert_eq!(c.classify(&row(&["1/Ene/2024"])), Some(RowKind::MovementHeader));
        // Trailing space appears in real exports
        assert_eq!(c.classify(&row(&["05/Dic/2023 "])), Some(RowKind::MovementHeader));
        // Loose day validation by design
        assert_eq!(c.classify(&row(&["31/Feb/2025"])), Some(RowKind::MovementHeader));
    }

    #[test]
    fn test_classify_skips_decorative_rows() {
        let c = Classifier::new();
        assert_eq!(c.classify(&row(&[""])), None);
        assert_eq!(c.classify(&row(&["Total:", "1,500.00"])), None);
        assert_eq!(c.classify(&row(&["Balanza de comprobación"])), None);
        assert_eq!(c.classify(&row(&["31/July/2025"])), None);
        assert_eq!(c.classify(&[]), None);
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("31/Jul/2025"), Some("2025-07-31".to_string()));
        assert_eq!(normalize_date("1/Ene/2024"), Some("2024-01-01".to_string()));
        assert_eq!(normalize_date("15/Dic/2023"), Some("2023-12-15".to_string()));
        assert_eq!(normalize_date("31/Jul/2025 "), Some("2025-07-31".to_string()));
    }

    #[test]
    fn test_normalize_date_unknown_month_fails() {
        assert_eq!(normalize_date("31/XXX/2025"), None);
        assert_eq!(normalize_date("31/Jan/2025"), None);
        assert_eq!(normalize_date("31-Jul-2025"), None);
        assert_eq!(normalize_date(""), None);
    }

    #[test]
    fn test_parse_charge() {
        assert_eq!(parse_charge("1500.50"), Some(1500.50));
        assert_eq!(parse_charge("1,500.50"), Some(1500.50));
        assert_eq!(parse_charge("$250.00"), Some(250.0));
        assert_eq!(parse_charge("-42.10"), Some(-42.10));
        assert_eq!(parse_charge(""), None);
        assert_eq!(parse_charge("   "), None);
        assert_eq!(parse_charge("n/a"), None);
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("100"), Some(100));
        assert_eq!(parse_sequence("100.0"), Some(100));
        assert_eq!(parse_sequence("0"), None);
        assert_eq!(parse_sequence("-5"), None);
        assert_eq!(parse_sequence("12.5"), None);
        assert_eq!(parse_sequence("abc"), None);
        assert_eq!(parse_sequence(""), None);
    }

    #[test]
    fn test_movement_cells_decode() {
        let cells = MovementCells::decode(&row(&[
            "31/Jul/2025",
            "Egresos",
            "100",
            " ACME ",
            "REF-1",
            "250.00",
        ]));
        assert_eq!(cells.date, "31/Jul/2025");
        assert_eq!(cells.kind, "Egresos");
        assert_eq!(cells.number, "100");
        assert_eq!(cells.supplier, "ACME");
        assert_eq!(cells.reference, "REF-1");
        assert_eq!(cells.charge, "250.00");
    }

    #[test]
    fn test_movement_cells_decode_short_row() {
        let cells = MovementCells::decode(&row(&["31/Jul/2025", "Egresos", "100"]));
        assert_eq!(cells.supplier, "");
        assert_eq!(cells.charge, "");
    }
}
