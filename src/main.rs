use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;
use tracing::{info, warn};

use excise::config::Config;
use excise::excise::Markers;
use excise::refactor::FileEditor;
use excise::report::{ReportFormat, Reporter};

/// excise - remove the Favorites Gallery section from a page
#[derive(Parser, Debug)]
#[command(name = "excise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to edit [default: app/page.tsx]
    path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dry run - show what would be deleted without making changes
    #[arg(long)]
    dry_run: bool,

    /// Generate undo script
    #[arg(long, value_name = "FILE")]
    undo_script: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("excise v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run(&config, cli.output.clone())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        let cwd = std::env::current_dir()
            .into_diagnostic()
            .wrap_err("Failed to get current directory")?;
        Config::from_default_locations(&cwd)?
    };

    // Override with CLI arguments
    if let Some(path) = &cli.path {
        config.target = path.clone();
    }
    if cli.dry_run {
        config.dry_run = true;
    }
    if cli.undo_script.is_some() {
        config.undo_script = cli.undo_script.clone();
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }

    Ok(config)
}

fn run(config: &Config, output: Option<PathBuf>) -> Result<()> {
    if output.is_some() && config.format == ReportFormat::Terminal {
        warn!("--output only applies to the json format, printing to the terminal");
    }

    let editor = FileEditor::new()
        .with_dry_run(config.dry_run)
        .with_undo_script(config.undo_script.clone());
    let result = editor
        .excise(&config.target, &Markers::favorites_gallery())
        .into_diagnostic()?;

    if !result.written && config.undo_script.is_some() {
        warn!("Nothing was removed, skipping undo script");
    }

    let reporter = Reporter::new(config.format, output);
    reporter.report(&result)?;

    Ok(())
}
