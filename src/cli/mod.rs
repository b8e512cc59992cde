pub mod report;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Controle mensal de despesas a partir de CSV."
)]
pub struct Cli {
    /// CSV de entrada, separado por vírgula ou ponto e vírgula
    #[arg(short = 'i', long = "input_csv", default_value = "./docs/exemplo.csv")]
    pub input_csv: PathBuf,
    /// Planilha Excel de saída
    #[arg(short = 'o', long = "output_excel", default_value = "./out/arquivoDeSaida.xlsx")]
    pub output_excel: PathBuf,
}
