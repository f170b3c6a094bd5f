use crate::report::ReportFormat;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Page the Favorites Gallery section lives in, relative to the project root
pub const DEFAULT_TARGET: &str = "app/page.tsx";

/// Configuration for an excise run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File to edit
    pub target: PathBuf,

    /// Report what would be removed without touching the file
    pub dry_run: bool,

    /// Where to write a restore script, if anywhere
    pub undo_script: Option<PathBuf>,

    /// Output format: terminal, json
    pub format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            dry_run: false,
            undo_script: None,
            format: ReportFormat::Terminal,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".excise.yml",
            ".excise.yaml",
            ".excise.toml",
            "excise.yml",
            "excise.yaml",
            "excise.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                tracing::debug!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}
