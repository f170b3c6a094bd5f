mod terminal;
mod json;

pub use terminal::TerminalReporter;
pub use json::JsonReporter;

use crate::excise::Excision;
use crate::refactor::FileExcision;
use miette::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SUCCESS_MESSAGE: &str = "Successfully deleted Favorites Gallery section.";
pub const DRY_RUN_MESSAGE: &str = "Dry run - would delete Favorites Gallery section.";
pub const NOT_FOUND_MESSAGE: &str = "Could not find start or end markers.";

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Outcome line for an excision
pub fn outcome_message(result: &FileExcision) -> &'static str {
    match &result.excision {
        Excision::Excised { .. } if result.written => SUCCESS_MESSAGE,
        Excision::Excised { .. } => DRY_RUN_MESSAGE,
        Excision::MarkersNotFound { .. } => NOT_FOUND_MESSAGE,
    }
}

/// Reporter for excision outcomes
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn report(&self, result: &FileExcision) -> Result<()> {
        match self.format {
            ReportFormat::Terminal => TerminalReporter::new().report(result),
            ReportFormat::Json => JsonReporter::new(self.output_path.clone()).report(result),
        }
    }
}
