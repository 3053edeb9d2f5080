//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Match a resume against a job description using a skill taxonomy")]
#[command(
    long_about = "Extract text from resume and job description documents, detect known skills and keywords against a reference taxonomy, and compute a percentage match score with a missing-skills report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against a job description
    Match {
        /// Path to the resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job description file (PDF or DOCX)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description supplied as literal text instead of a file
        #[arg(long)]
        job_text: Option<String>,

        /// Taxonomy file to match against (overrides the configured path)
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip the extraction cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Taxonomy management commands
    Taxonomy {
        #[command(subcommand)]
        action: TaxonomyAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum TaxonomyAction {
    /// Write the starter taxonomy to the configured path
    Init {
        /// Overwrite an existing taxonomy file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the loaded taxonomy
    Show,

    /// Print the effective taxonomy path
    Path,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}
