mod categorizer;
mod cli;
mod error;
mod fmt;
mod importer;
mod installments;
mod models;
mod reports;
mod xlsx;

use clap::Parser;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = cli::report::run(&cli.input_csv, &cli.output_excel) {
        eprintln!("Erro: {e}");
        std::process::exit(1);
    }
}
