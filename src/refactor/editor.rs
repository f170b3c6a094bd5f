use super::undo::{UndoError, UndoScript};
use crate::excise::{excise_lines, Excision, LineSequence, Markers};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while editing a file on disk
#[derive(Error, Debug)]
pub enum ExciseError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to save undo script {}, {} left unchanged: {source}", script.display(), path.display())]
    Undo {
        path: PathBuf,
        script: PathBuf,
        source: UndoError,
    },
}

/// An excision applied (or previewed) against a file
#[derive(Debug, Clone)]
pub struct FileExcision {
    pub path: PathBuf,
    /// File contents before the edit
    pub original: String,
    pub excision: Excision,
    /// Whether the file was rewritten
    pub written: bool,
}

impl FileExcision {
    pub fn is_dry_run(&self) -> bool {
        self.excision.is_excised() && !self.written
    }
}

/// File editor for cutting marker-bounded sections out of source files
pub struct FileEditor {
    dry_run: bool,
    undo_script_path: Option<PathBuf>,
}

impl FileEditor {
    pub fn new() -> Self {
        Self {
            dry_run: false,
            undo_script_path: None,
        }
    }

    /// Scan and compute the excision without writing anything
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Save a restore script here before a file is rewritten
    pub fn with_undo_script(mut self, path: Option<PathBuf>) -> Self {
        self.undo_script_path = path;
        self
    }

    /// Read `path`, excise the marker span and write the remainder back.
    ///
    /// Missing markers are not an error: the file is left alone and the
    /// returned excision says so. With an undo script configured, the script
    /// is written first and a failure there leaves the file untouched.
    pub fn excise(&self, path: &Path, markers: &Markers<'_>) -> Result<FileExcision, ExciseError> {
        let original = std::fs::read_to_string(path).map_err(|source| ExciseError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines = LineSequence::parse(&original);
        debug!("Read {} lines from {}", lines.len(), path.display());

        let excision = excise_lines(&mut lines, markers);

        let written = match &excision {
            Excision::Excised { span, .. } if !self.dry_run => {
                if let Some(script_path) = &self.undo_script_path {
                    self.save_undo_script(path, &original, script_path)?;
                }
                std::fs::write(path, lines.to_contents()).map_err(|source| ExciseError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!(
                    "Removed lines {}..{} from {}",
                    span.start + 1,
                    span.end + 1,
                    path.display()
                );
                true
            }
            Excision::Excised { span, .. } => {
                debug!("Dry run: {} lines would be removed", span.len());
                false
            }
            Excision::MarkersNotFound { scan } => {
                debug!(
                    "Markers not found in {} (start: {:?}, end: {:?})",
                    path.display(),
                    scan.start,
                    scan.end
                );
                false
            }
        };

        Ok(FileExcision {
            path: path.to_path_buf(),
            original,
            excision,
            written,
        })
    }

    fn save_undo_script(&self, path: &Path, original: &str, script_path: &Path) -> Result<(), ExciseError> {
        let mut script = UndoScript::new();
        script.record_file_state(path, original);
        script.write(script_path).map_err(|source| ExciseError::Undo {
            path: path.to_path_buf(),
            script: script_path.to_path_buf(),
            source,
        })?;
        info!("Undo script saved to: {}", script_path.display());
        Ok(())
    }
}

impl Default for FileEditor {
    fn default() -> Self {
        Self::new()
    }
}
