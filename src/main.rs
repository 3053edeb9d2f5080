//! Resume matcher: taxonomy-driven resume and job description matching tool

mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;
mod taxonomy;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, TaxonomyAction};
use config::Config;
use error::{Result, ResumeMatcherError};
use input::manager::InputManager;
use log::{error, info, warn};
use matching::{score, MatchResult, SkillDetector};
use output::formatter::{save_report_to_file, ReportGenerator};
use output::report::MatchReport;
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use taxonomy::SkillTaxonomy;

enum JobSource {
    File(PathBuf),
    Pasted(String),
}

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            job_text,
            taxonomy,
            detailed,
            output,
            save,
            no_cache,
        } => {
            info!("Starting resume match analysis");

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            // Exactly one job source: a file or pasted text. Missing input
            // is a usage error, reported before any extraction work.
            let job_source = match (job, job_text) {
                (Some(_), Some(_)) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Supply either --job or --job-text, not both".to_string(),
                    ));
                }
                (Some(path), None) => JobSource::File(path),
                (None, Some(text)) => JobSource::Pasted(text),
                (None, None) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Please supply both documents: a resume (--resume) and a job description (--job or --job-text)"
                            .to_string(),
                    ));
                }
            };

            // The taxonomy is loaded once and injected everywhere; a load
            // failure aborts the run rather than matching against a
            // partial vocabulary.
            let taxonomy_path = taxonomy.unwrap_or_else(|| config.taxonomy.path.clone());
            let taxonomy = SkillTaxonomy::load(&taxonomy_path)?;

            let start = Instant::now();
            let mut input_manager =
                InputManager::new().with_cache(config.processing.enable_caching && !no_cache);

            println!("📄 Processing resume: {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;
            if resume_text.trim().is_empty() {
                warn!(
                    "Resume '{}' produced no text; nothing will be detected",
                    resume.display()
                );
            }

            let (job_description, job_label) = match &job_source {
                JobSource::File(path) => {
                    println!("💼 Processing job description: {}", path.display());
                    (
                        input_manager.extract_text(path).await?,
                        path.display().to_string(),
                    )
                }
                JobSource::Pasted(text) => (text.clone(), "pasted text".to_string()),
            };
            if job_description.trim().is_empty() {
                warn!("Job description ({}) produced no text", job_label);
            }

            let detector = SkillDetector::new(&taxonomy)?;
            let resume_findings = detector.detect(&resume_text);
            let job_findings = detector.detect(&job_description);

            // A scoring failure degrades to a zero score with a visible
            // error instead of crashing the analysis.
            let result = match score(&resume_findings, &job_findings) {
                Ok(result) => result,
                Err(e) => {
                    error!("Scoring failed: {} - reporting a zero score", e);
                    MatchResult::zero()
                }
            };

            let processing_time_ms = start.elapsed().as_millis() as u64;
            let report = MatchReport::new(
                resume_findings,
                job_findings,
                result,
                resume.display().to_string(),
                job_label,
                taxonomy.entry_count(),
                processing_time_ms,
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("{}", rendered);

            if let Some(path) = save {
                save_report_to_file(&rendered, &path)?;
                println!("💾 Report saved to {}", path.display());
            }
        }

        Commands::Taxonomy { action } => match action {
            TaxonomyAction::Init { force } => {
                let path = config.taxonomy.path.clone();
                if path.exists() && !force {
                    println!(
                        "⚠️  Taxonomy already exists at {} (use --force to overwrite)",
                        path.display()
                    );
                    return Ok(());
                }
                let starter = SkillTaxonomy::default();
                starter.save(&path)?;
                println!(
                    "✅ Wrote starter taxonomy ({} entries) to {}",
                    starter.entry_count(),
                    path.display()
                );
            }

            TaxonomyAction::Show => {
                let taxonomy = SkillTaxonomy::load(&config.taxonomy.path)?;
                println!("📚 Taxonomy at {}\n", config.taxonomy.path.display());
                for (category, skills) in &taxonomy.tech_skills {
                    println!("  {}: {}", category.to_uppercase(), skills.join(", "));
                }
                println!("  KEYWORDS: {}", taxonomy.job_keywords.join(", "));
                println!("\n  Total entries: {}", taxonomy.entry_count());
            }

            TaxonomyAction::Path => {
                println!("{}", config.taxonomy.path.display());
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Taxonomy file: {}", config.taxonomy.path.display());
                println!("Caching enabled: {}", config.processing.enable_caching);
                println!("Default output format: {:?}", config.output.format);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
