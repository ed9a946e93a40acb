use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Malformed cell address: '{0}'")]
    MalformedAddress(String),

    #[error("Cell {address} has no customer cell on its row (column A must come first)")]
    OrphanColumn { address: String },

    #[error("Cell {address} holds '{value}', which is not a numeric amount")]
    InvalidAmount { address: String, value: String },

    #[error("Cannot parse registration date '{value}' for customer '{customer}'")]
    UnparseableDate { customer: String, value: String },

    #[error("Date serial {0} is outside the supported range")]
    InvalidSerial(f64),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),
}
