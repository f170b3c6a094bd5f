use super::outcome_message;
use crate::refactor::FileExcision;
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, result: &FileExcision) -> Result<()> {
        if result.is_dry_run() {
            for line in result.excision.removed_lines() {
                let line = line.trim_end_matches(['\n', '\r']);
                println!("{}", format!("- {}", line).red().dimmed());
            }
            println!("{}", outcome_message(result).yellow());
        } else if result.excision.is_excised() {
            println!("{}", outcome_message(result).green());
        } else {
            println!("{}", outcome_message(result).yellow());
        }

        Ok(())
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
