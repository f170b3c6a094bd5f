use super::outcome_message;
use crate::excise::Excision;
use crate::refactor::FileExcision;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, result: &FileExcision) -> Result<()> {
        let report = JsonReport::from_excision(result);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum JsonStatus {
    Excised,
    WouldExcise,
    MarkersNotFound,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    version: &'static str,
    file: String,
    status: JsonStatus,
    message: &'static str,
    /// 1-based line of the start marker
    start_line: Option<usize>,
    /// 1-based line of the end marker, before removal
    end_line: Option<usize>,
    removed_lines: usize,
}

impl JsonReport {
    fn from_excision(result: &FileExcision) -> Self {
        let (status, start, end) = match &result.excision {
            Excision::Excised { span, .. } => {
                let status = if result.written {
                    JsonStatus::Excised
                } else {
                    JsonStatus::WouldExcise
                };
                (status, Some(span.start), Some(span.end))
            }
            Excision::MarkersNotFound { scan } => (JsonStatus::MarkersNotFound, scan.start, scan.end),
        };

        Self {
            version: env!("CARGO_PKG_VERSION"),
            file: result.path.display().to_string(),
            status,
            message: outcome_message(result),
            start_line: start.map(|i| i + 1),
            end_line: end.map(|i| i + 1),
            removed_lines: result.excision.removed_lines().len(),
        }
    }
}
