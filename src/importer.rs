use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::categorizer::{categorize, CATEGORY_RULES};
use crate::error::{GastosError, Result};
use crate::installments::parse_installment;
use crate::models::{RawRow, Transaction};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

const REQUIRED_COLUMNS: &[&str] = &["date", "title", "amount"];

fn read_rows(file_path: &Path, delimiter: u8) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_path(file_path)?;
    let headers = rdr.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(GastosError::MissingColumn(*missing));
    }
    let rows = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<RawRow>, _>>()?;
    Ok(rows)
}

/// Read the export as comma-delimited, falling back to semicolons if that fails.
pub fn load_csv(file_path: &Path) -> Result<Vec<RawRow>> {
    match read_rows(file_path, b',') {
        Ok(rows) => Ok(rows),
        Err(e) => {
            log::debug!("comma-delimited read of {} failed ({e}), retrying with ';'", file_path.display());
            read_rows(file_path, b';')
        }
    }
}

// ---------------------------------------------------------------------------
// Type coercion
// ---------------------------------------------------------------------------

// Slash dates are month-first; day-first only catches what month-first rejects.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Coerce raw rows into typed transactions, annotating installments and
/// categories. The first bad date or amount aborts the whole batch.
pub fn normalize(rows: Vec<RawRow>) -> Result<Vec<Transaction>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let line = i + 1;
            let date = parse_date(&row.date).ok_or_else(|| GastosError::InvalidDate {
                line,
                value: row.date.clone(),
            })?;
            let amount = parse_amount(&row.amount).ok_or_else(|| GastosError::InvalidAmount {
                line,
                value: row.amount.clone(),
            })?;
            Ok(Transaction {
                date,
                installment: parse_installment(&row.title),
                category: categorize(&row.title, CATEGORY_RULES),
                title: row.title,
                amount,
            })
        })
        .collect()
}
