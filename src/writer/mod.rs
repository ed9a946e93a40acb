use crate::error::{LedgerError, LedgerResult};
use crate::types::SummaryRow;
use std::fs;
use std::path::Path;

/// Serialization format for a rows dump, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsFormat {
    Yaml,
    Json,
}

impl RowsFormat {
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(RowsFormat::Yaml),
            Some("json") => Ok(RowsFormat::Json),
            _ => Err(LedgerError::Export(format!(
                "Unsupported rows format for '{}'. Use .yaml, .yml or .json",
                path.display()
            ))),
        }
    }
}

/// Serialize summary rows in the format `path`'s extension asks for
pub fn render_summary_rows(path: &Path, rows: &[SummaryRow]) -> LedgerResult<String> {
    let content = match RowsFormat::from_path(path)? {
        RowsFormat::Yaml => serde_yaml::to_string(rows)?,
        RowsFormat::Json => serde_json::to_string_pretty(rows)?,
    };
    Ok(content)
}

/// Write summary rows as YAML or JSON, depending on `path`'s extension
pub fn write_summary_rows(path: &Path, rows: &[SummaryRow]) -> LedgerResult<()> {
    let content = render_summary_rows(path, rows)?;
    fs::write(path, content)?;
    Ok(())
}
