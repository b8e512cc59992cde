use thiserror::Error;

#[derive(Error, Debug)]
pub enum GastosError {
    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Coluna obrigatória ausente: {0}")]
    MissingColumn(&'static str),

    #[error("Data inválida na linha {line}: {value:?}")]
    InvalidDate { line: usize, value: String },

    #[error("Valor inválido na linha {line}: {value:?}")]
    InvalidAmount { line: usize, value: String },

    #[error("Erro na planilha: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, GastosError>;
