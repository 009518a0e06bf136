//! PoseGrade CLI — Command-line interface for grading pose sequences.
//!
//! Usage:
//!   posegrade grade [OPTIONS]      Grade a user sequence against a model sequence
//!   posegrade validate [OPTIONS]   Check sequence and mapping files for shape problems
//!   posegrade joints               List the canonical joint table

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "posegrade",
    about = "Frame-by-frame pose grading against a reference performance",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a user sequence against a model sequence
    Grade {
        /// User pose sequence (.json array of frames or .jsonl)
        #[arg(short, long)]
        user: PathBuf,

        /// Model (reference) pose sequence (.json array of frames or .jsonl)
        #[arg(short, long)]
        model: PathBuf,

        /// Alignment mapping (JSON array of model-frame indices).
        /// Defaults to the identity mapping.
        #[arg(long)]
        mapping: Option<PathBuf>,

        /// Grading thresholds (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the default joint threshold
        #[arg(long)]
        default_threshold: Option<f64>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Attach a sequence summary to the report
        #[arg(long)]
        summary: bool,

        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check sequence and mapping files for shape problems
    Validate {
        /// User pose sequence
        #[arg(short, long)]
        user: PathBuf,

        /// Model (reference) pose sequence
        #[arg(short, long)]
        model: PathBuf,

        /// Alignment mapping
        #[arg(long)]
        mapping: Option<PathBuf>,
    },

    /// List the canonical joint table
    Joints {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config errors are reported once logging is up
    let (app_config, config_error) = match posegrade_common::AppConfig::try_load() {
        Ok(config) => (config, None),
        Err(e) => (posegrade_common::AppConfig::default(), Some(e)),
    };

    // Initialize logging
    let mut logging = app_config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    posegrade_common::logging::init_logging(&logging);

    if let Some(e) = config_error {
        tracing::warn!(
            path = %posegrade_common::config_file_path().display(),
            error = %e,
            "Failed to load config, using defaults"
        );
    }

    match cli.command {
        Commands::Grade {
            user,
            model,
            mapping,
            config,
            default_threshold,
            output,
            summary,
            compact,
        } => commands::grade::run(commands::grade::GradeArgs {
            user,
            model,
            mapping,
            config,
            default_threshold,
            output,
            summary: summary || app_config.report.include_summary,
            pretty: !compact && app_config.report.pretty,
        }),
        Commands::Validate {
            user,
            model,
            mapping,
        } => commands::validate::run(user, model, mapping),
        Commands::Joints { json } => commands::joints::run(json),
    }
}
