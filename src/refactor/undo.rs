use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UndoError {
    #[error("Failed to write undo script: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Heredoc delimiter; a file containing this exact line cannot be restored
const HEREDOC_DELIMITER: &str = "EXCISE_EOF";

/// Generates a shell script that restores files to their pre-edit contents
pub struct UndoScript {
    file_states: BTreeMap<PathBuf, String>,
}

impl UndoScript {
    pub fn new() -> Self {
        Self {
            file_states: BTreeMap::new(),
        }
    }

    /// Record the state of a file before modification; the first record wins
    pub fn record_file_state(&mut self, path: &Path, contents: &str) {
        self.file_states
            .entry(path.to_path_buf())
            .or_insert_with(|| contents.to_string());
    }

    /// Render the script text
    pub fn render(&self) -> String {
        let mut script = String::new();

        script.push_str("#!/bin/bash\n");
        script.push_str("# excise undo script\n");
        script.push_str("# Run to restore the removed section\n\n");
        script.push_str("set -e\n\n");

        for (file_path, contents) in &self.file_states {
            let escaped_path = file_path.display().to_string().replace('\'', "'\\''");

            script.push_str(&format!("# Restore {}\n", file_path.display()));
            // A quoted heredoc keeps the body literal, no escaping needed.
            // It always ends the body with a newline, so a file without one
            // is restored through a trailing-newline strip.
            if contents.ends_with('\n') {
                script.push_str(&format!(
                    "cat > '{}' << '{}'\n",
                    escaped_path, HEREDOC_DELIMITER
                ));
                script.push_str(contents);
                script.push_str(&format!("{}\n", HEREDOC_DELIMITER));
            } else {
                script.push_str(&format!(
                    "printf '%s' \"$(cat << '{}'\n",
                    HEREDOC_DELIMITER
                ));
                script.push_str(contents);
                script.push_str(&format!(
                    "\n{}\n)\" > '{}'\n",
                    HEREDOC_DELIMITER, escaped_path
                ));
            }
            script.push_str(&format!("echo '  Restored: {}'\n\n", escaped_path));
        }

        script
    }

    /// Write the undo script to a file
    pub fn write(&self, path: &Path) -> Result<(), UndoError> {
        std::fs::write(path, self.render())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }
}

impl Default for UndoScript {
    fn default() -> Self {
        Self::new()
    }
}
