use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ColNum, ExcelDateTime, Format, RowNum, Workbook, Worksheet};

use crate::error::Result;
use crate::models::Transaction;
use crate::reports::Report;

pub const SHEET_TRANSACTIONS: &str = "Transações";
pub const SHEET_SUMMARY: &str = "Resumo";
pub const SHEET_INSTALLMENTS: &str = "Parcelados";
pub const SHEET_RECURRING: &str = "Recorrentes";

const TRANSACTION_COLUMNS: &[&str] = &[
    "date",
    "title",
    "amount",
    "parcela_atual",
    "parcelas_totais",
    "is_parcelado",
    "categoria",
];

enum Cell<'a> {
    Date(NaiveDate),
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Empty,
}

struct Formats {
    header: Format,
    date: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold(),
            date: Format::new().set_num_format("yyyy-mm-dd"),
        }
    }
}

/// Excel serial dates only cover 1900-9999; anything outside is written as text.
fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year()).ok().filter(|y| (1900..=9999).contains(y))?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}

fn new_sheet(name: &str, columns: &[&str], formats: &Formats) -> Result<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *title, &formats.header)?;
    }
    Ok(sheet)
}

fn write_row(sheet: &mut Worksheet, row: RowNum, cells: &[Cell], formats: &Formats) -> Result<()> {
    for (col, cell) in cells.iter().enumerate() {
        let col = col as ColNum;
        match cell {
            Cell::Date(date) => match excel_date(*date) {
                Some(dt) => {
                    sheet.write_datetime_with_format(row, col, &dt, &formats.date)?;
                }
                None => {
                    sheet.write_string(row, col, date.format("%Y-%m-%d").to_string())?;
                }
            },
            Cell::Text(text) => {
                sheet.write_string(row, col, *text)?;
            }
            Cell::Number(n) => {
                sheet.write_number(row, col, *n)?;
            }
            Cell::Bool(b) => {
                sheet.write_boolean(row, col, *b)?;
            }
            Cell::Empty => {}
        }
    }
    Ok(())
}

fn transaction_cells(txn: &Transaction) -> Vec<Cell<'_>> {
    let (current, total) = match txn.installment {
        Some(inst) => (Cell::Number(inst.current as f64), Cell::Number(inst.total as f64)),
        None => (Cell::Empty, Cell::Empty),
    };
    vec![
        Cell::Date(txn.date),
        Cell::Text(&txn.title),
        Cell::Number(txn.amount),
        current,
        total,
        Cell::Bool(txn.is_parcelado()),
        Cell::Text(txn.category),
    ]
}

// ---------------------------------------------------------------------------
// Sheets
// ---------------------------------------------------------------------------

fn transactions_sheet(report: &Report, formats: &Formats) -> Result<Worksheet> {
    let mut sheet = new_sheet(SHEET_TRANSACTIONS, TRANSACTION_COLUMNS, formats)?;
    for (i, txn) in report.transactions.iter().enumerate() {
        write_row(&mut sheet, i as RowNum + 1, &transaction_cells(txn), formats)?;
    }
    Ok(sheet)
}

fn summary_sheet(report: &Report, formats: &Formats) -> Result<Worksheet> {
    let mut sheet = new_sheet(SHEET_SUMMARY, &["categoria", "amount"], formats)?;
    for (i, item) in report.summary.iter().enumerate() {
        let cells = [Cell::Text(item.category), Cell::Number(item.total)];
        write_row(&mut sheet, i as RowNum + 1, &cells, formats)?;
    }
    Ok(sheet)
}

fn installments_sheet(report: &Report, formats: &Formats) -> Result<Worksheet> {
    let mut columns = TRANSACTION_COLUMNS.to_vec();
    columns.extend(["valor_parcela", "parcelas_restantes", "total_comprometido"]);
    let mut sheet = new_sheet(SHEET_INSTALLMENTS, &columns, formats)?;
    for (i, row) in report.installments.iter().enumerate() {
        let mut cells = transaction_cells(&row.transaction);
        cells.extend([
            Cell::Number(row.transaction.amount),
            Cell::Number(row.remaining as f64),
            Cell::Number(row.total_committed),
        ]);
        write_row(&mut sheet, i as RowNum + 1, &cells, formats)?;
    }
    Ok(sheet)
}

fn recurring_sheet(report: &Report, formats: &Formats) -> Result<Worksheet> {
    let mut sheet = new_sheet(SHEET_RECURRING, &["date", "title", "amount", "frequencia"], formats)?;
    for (i, row) in report.recurring.iter().enumerate() {
        let cells = [
            Cell::Date(row.date),
            Cell::Text(&row.title),
            Cell::Number(row.amount),
            Cell::Number(row.frequency as f64),
        ];
        write_row(&mut sheet, i as RowNum + 1, &cells, formats)?;
    }
    Ok(sheet)
}

/// Write the report workbook to `path`, overwriting it. Installment and
/// recurring sheets are left out when empty. Returns the sheet names written.
pub fn write_workbook(report: &Report, path: &Path) -> Result<Vec<&'static str>> {
    let formats = Formats::new();
    let mut sheets = vec![
        (SHEET_TRANSACTIONS, transactions_sheet(report, &formats)?),
        (SHEET_SUMMARY, summary_sheet(report, &formats)?),
    ];
    if !report.installments.is_empty() {
        sheets.push((SHEET_INSTALLMENTS, installments_sheet(report, &formats)?));
    }
    if !report.recurring.is_empty() {
        sheets.push((SHEET_RECURRING, recurring_sheet(report, &formats)?));
    }

    let mut workbook = Workbook::new();
    let mut names = Vec::with_capacity(sheets.len());
    for (name, mut sheet) in sheets {
        sheet.autofit();
        workbook.push_worksheet(sheet);
        names.push(name);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    workbook.save(path)?;
    log::debug!("wrote {} sheet(s) to {}", names.len(), path.display());
    Ok(names)
}
