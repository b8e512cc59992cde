use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::importer::{load_csv, normalize};
use crate::reports::Report;
use crate::xlsx::write_workbook;

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let rows = load_csv(input)?;
    log::debug!("loaded {} row(s) from {}", rows.len(), input.display());
    let report = Report::build(normalize(rows)?);

    let sheets = write_workbook(&report, output)?;

    let mut table = Table::new();
    table.set_header(vec!["Categoria", "Valor"]);
    for item in &report.summary {
        table.add_row(vec![Cell::new(item.category), Cell::new(money(item.total))]);
    }
    let total: f64 = report.summary.iter().map(|s| s.total).sum();
    table.add_row(vec![Cell::new("Total".bold()), Cell::new(money(total))]);
    println!("Resumo\n{table}");

    println!(
        "{} transações, {} parceladas, {} recorrentes",
        report.transactions.len(),
        report.installments.len(),
        report.recurring.len()
    );
    println!(
        "{} {} com abas: {}",
        "Planilha gerada em".green().bold(),
        output.display(),
        sheets.join(", ")
    );
    Ok(())
}
