#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AccountingAccount {
    pub id: i64,
    pub code: String,
    pub name: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Segment {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// The two movement types the ledger accepts. ContPAQ exports also carry
/// rows labelled "Diario"; those fall back to `Egresos` at import time and
/// get corrected manually later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Egresos,
    Ingresos,
}

impl MovementKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "egresos" => Some(Self::Egresos),
            "ingresos" => Some(Self::Ingresos),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Egresos => "Egresos",
            Self::Ingresos => "Ingresos",
        }
    }
}

/// Intermediate representation of a movement row after classification and
/// context resolution, before DB insert.
#[derive(Debug, Clone)]
pub struct MovementDraft {
    pub segment_id: i64,
    pub accounting_account_id: i64,
    pub date: String,
    pub kind: MovementKind,
    pub number: i64,
    pub supplier: String,
    pub concept: String,
    pub reference: String,
    pub charge: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_kind_parse() {
        assert_eq!(MovementKind::parse("Egresos"), Some(MovementKind::Egresos));
        assert_eq!(MovementKind::parse("  ingresos "), Some(MovementKind::Ingresos));
        assert_eq!(MovementKind::parse("Diario"), None);
        assert_eq!(MovementKind::parse(""), None);
    }

    #[test]
    fn test_movement_kind_as_str() {
        assert_eq!(MovementKind::Egresos.as_str(), "Egresos");
        assert_eq!(MovementKind::Ingresos.as_str(), "Ingresos");
    }
}
