//! Output formatters - console, JSON, and Markdown presentation

use crate::config::OutputFormat;
use crate::error::Result;
use crate::matching::Findings;
use crate::output::report::MatchReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score as u32 {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            60..=74 => ("GOOD", Color::Yellow),
            40..=59 => ("FAIR", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn push_findings(&self, output: &mut String, findings: &Findings) {
        if findings.is_empty() {
            output.push_str("  (nothing detected)\n");
            return;
        }
        for (category, skills) in &findings.tech_skills {
            output.push_str(&format!(
                "  {}: {}\n",
                self.colorize(&category.to_uppercase(), Color::Cyan),
                skills.join(", ")
            ));
        }
        if !findings.job_keywords.is_empty() {
            output.push_str(&format!(
                "  {}: {}\n",
                self.colorize("KEYWORDS", Color::Cyan),
                findings.job_keywords.join(", ")
            ));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Match Score", 2));
        let score_badge = self.format_score_badge(report.result.score);
        output.push_str(&format!(
            "Overall Match Score: {:.1}% {}\n",
            report.result.score, score_badge
        ));

        output.push_str(&self.format_header("🔧 Skills Found in Resume", 3));
        self.push_findings(&mut output, &report.resume_findings);

        output.push_str(&self.format_header("🎯 Skills Required by Job", 3));
        self.push_findings(&mut output, &report.job_findings);

        if report.result.missing_skills.is_empty() {
            output.push_str(&self.format_header("Missing Skills", 3));
            output.push_str(&format!(
                "  {}\n",
                self.colorize("None - every required skill was found", Color::Green)
            ));
        } else {
            output.push_str(&self.format_header("❌ Missing Skills", 3));
            for (category, skills) in &report.result.missing_skills {
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.colorize(&category.to_uppercase(), Color::Red),
                    skills.join(", ")
                ));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Detection Details", 3));
            output.push_str(&format!(
                "  Resume entries detected: {}\n",
                report.resume_findings.total_entries()
            ));
            output.push_str(&format!(
                "  Job entries detected: {}\n",
                report.job_findings.total_entries()
            ));
            output.push_str(&format!(
                "  Taxonomy size: {} entries\n",
                report.metadata.taxonomy_entries
            ));
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Matcher v{} | Resume: {} | Job: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.matcher_version,
            report.metadata.resume_file,
            report.metadata.job_source
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn push_findings(output: &mut String, findings: &Findings) {
        if findings.is_empty() {
            output.push_str("*Nothing detected.*\n\n");
            return;
        }
        for (category, skills) in &findings.tech_skills {
            output.push_str(&format!(
                "- **{}**: {}\n",
                category.to_uppercase(),
                skills.join(", ")
            ));
        }
        if !findings.job_keywords.is_empty() {
            output.push_str(&format!(
                "- **Keywords**: {}\n",
                findings.job_keywords.join(", ")
            ));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_file, report.metadata.job_source
            ));
        }

        output.push_str(&format!(
            "## Match Score: {:.1}%\n\n",
            report.result.score
        ));

        output.push_str("## 🔧 Skills Found in Resume\n\n");
        Self::push_findings(&mut output, &report.resume_findings);

        output.push_str("## 🎯 Skills Required by Job\n\n");
        Self::push_findings(&mut output, &report.job_findings);

        output.push_str("## ❌ Missing Skills\n\n");
        if report.result.missing_skills.is_empty() {
            output.push_str("*None - every required skill was found.*\n\n");
        } else {
            for (category, skills) in &report.result.missing_skills {
                output.push_str(&format!(
                    "- **{}**: {}\n",
                    category.to_uppercase(),
                    skills.join(", ")
                ));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Matcher v{} against a taxonomy of {} entries*\n",
                report.metadata.matcher_version, report.metadata.taxonomy_entries
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a rendered report to disk, creating parent directories as needed.
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_match{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_match{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_match{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{score, Findings, SkillDetector};
    use crate::taxonomy::SkillTaxonomy;

    fn sample_report() -> MatchReport {
        let taxonomy = SkillTaxonomy::default();
        let detector = SkillDetector::new(&taxonomy).unwrap();
        let resume_findings = detector.detect("Python and Docker, remote work");
        let job_findings = detector.detect("Python, Rust, Docker, remote");
        let result = score(&resume_findings, &job_findings).unwrap();

        MatchReport::new(
            resume_findings,
            job_findings,
            result,
            "resume.pdf".to_string(),
            "job.docx".to_string(),
            taxonomy.entry_count(),
            7,
        )
    }

    #[test]
    fn test_json_report_round_trips() {
        let report = sample_report();
        let json = JsonFormatter::new(true).format_report(&report).unwrap();

        let parsed: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result, report.result);
        assert_eq!(parsed.resume_findings, report.resume_findings);
    }

    #[test]
    fn test_console_report_mentions_score_and_missing() {
        let report = sample_report();
        let rendered = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();

        assert!(rendered.contains("Overall Match Score"));
        assert!(rendered.contains("Rust"));
    }

    #[test]
    fn test_markdown_report_handles_empty_findings() {
        let report = MatchReport::new(
            Findings::default(),
            Findings::default(),
            crate::matching::MatchResult::zero(),
            "resume.pdf".to_string(),
            "pasted text".to_string(),
            0,
            1,
        );

        let rendered = MarkdownFormatter::new(false).format_report(&report).unwrap();
        assert!(rendered.contains("Nothing detected"));
    }

    #[test]
    fn test_suggest_filename_per_format() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "my_resume.pdf", false),
            "my_resume_match.json"
        );
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "my_resume.pdf", false),
            "my_resume_match.md"
        );
    }
}
