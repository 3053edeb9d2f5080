//! Skill taxonomy: the reference vocabulary of categorized technical skills
//! and standalone job keywords that detection matches against.

use crate::error::{Result, ResumeMatcherError};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The matching vocabulary, loaded once at startup and treated as immutable
/// by every consumer. Categories map to ordered skill lists; `BTreeMap`
/// keeps iteration deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    pub tech_skills: BTreeMap<String, Vec<String>>,
    pub job_keywords: Vec<String>,
}

impl SkillTaxonomy {
    /// Load a taxonomy from a JSON file. Fails if the file is missing,
    /// is not valid JSON, lacks the `tech_skills`/`job_keywords` keys, or
    /// contains blank entries. There is no fallback: callers are expected
    /// to abort startup on error rather than run with a partial vocabulary.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumeMatcherError::TaxonomyLoad(format!("cannot read '{}': {}", path.display(), e))
        })?;

        let taxonomy: SkillTaxonomy = serde_json::from_str(&content).map_err(|e| {
            ResumeMatcherError::TaxonomyLoad(format!("malformed taxonomy '{}': {}", path.display(), e))
        })?;

        taxonomy.validate()?;
        info!(
            "Loaded taxonomy with {} entries from {}",
            taxonomy.entry_count(),
            path.display()
        );
        Ok(taxonomy)
    }

    /// Write the taxonomy as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Total number of skill entries plus keywords.
    pub fn entry_count(&self) -> usize {
        self.tech_skills.values().map(Vec::len).sum::<usize>() + self.job_keywords.len()
    }

    fn validate(&self) -> Result<()> {
        for (category, skills) in &self.tech_skills {
            if category.trim().is_empty() {
                return Err(ResumeMatcherError::TaxonomyLoad(
                    "tech_skills contains a blank category name".to_string(),
                ));
            }
            for skill in skills {
                if skill.trim().is_empty() {
                    return Err(ResumeMatcherError::TaxonomyLoad(format!(
                        "category '{}' contains a blank skill entry",
                        category
                    )));
                }
            }
        }
        for keyword in &self.job_keywords {
            if keyword.trim().is_empty() {
                return Err(ResumeMatcherError::TaxonomyLoad(
                    "job_keywords contains a blank entry".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for SkillTaxonomy {
    /// Starter vocabulary written by `taxonomy init`. Never used as a
    /// silent fallback when loading fails.
    fn default() -> Self {
        let mut tech_skills = BTreeMap::new();
        tech_skills.insert(
            "languages".to_string(),
            to_strings(&[
                "Python",
                "Rust",
                "JavaScript",
                "TypeScript",
                "Java",
                "C++",
                "C#",
                "Go",
                "Ruby",
                "PHP",
                "Swift",
                "Kotlin",
                "Scala",
                "R",
            ]),
        );
        tech_skills.insert(
            "web".to_string(),
            to_strings(&[
                "React", "Vue", "Angular", "Svelte", "Node.js", "Express", "Django", "Flask",
                "HTML", "CSS",
            ]),
        );
        tech_skills.insert(
            "databases".to_string(),
            to_strings(&[
                "PostgreSQL",
                "MySQL",
                "MongoDB",
                "Redis",
                "SQLite",
                "Elasticsearch",
            ]),
        );
        tech_skills.insert(
            "infrastructure".to_string(),
            to_strings(&[
                "Docker",
                "Kubernetes",
                "AWS",
                "Azure",
                "GCP",
                "Terraform",
                "Jenkins",
                "Linux",
                "Git",
            ]),
        );
        tech_skills.insert(
            "data".to_string(),
            to_strings(&[
                "Machine Learning",
                "TensorFlow",
                "PyTorch",
                "Pandas",
                "NumPy",
                "Spark",
                "Kafka",
            ]),
        );

        let job_keywords = to_strings(&[
            "remote",
            "hybrid",
            "agile",
            "scrum",
            "leadership",
            "communication",
            "teamwork",
            "mentoring",
            "senior",
            "full-time",
        ]);

        Self {
            tech_skills,
            job_keywords,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_taxonomy() {
        let file = write_temp(
            r#"{
                "tech_skills": {"languages": ["Python", "Go"]},
                "job_keywords": ["remote"]
            }"#,
        );

        let taxonomy = SkillTaxonomy::load(file.path()).unwrap();
        assert_eq!(taxonomy.tech_skills["languages"], vec!["Python", "Go"]);
        assert_eq!(taxonomy.job_keywords, vec!["remote"]);
        assert_eq!(taxonomy.entry_count(), 3);
    }

    #[test]
    fn test_missing_file_fails_load() {
        let result = SkillTaxonomy::load(Path::new("/nonexistent/taxonomy.json"));
        assert!(matches!(result, Err(ResumeMatcherError::TaxonomyLoad(_))));
    }

    #[test]
    fn test_malformed_json_fails_load() {
        let file = write_temp("not json at all {");
        let result = SkillTaxonomy::load(file.path());
        assert!(matches!(result, Err(ResumeMatcherError::TaxonomyLoad(_))));
    }

    #[test]
    fn test_missing_top_level_key_fails_load() {
        let file = write_temp(r#"{"tech_skills": {"languages": ["Python"]}}"#);
        let result = SkillTaxonomy::load(file.path());
        assert!(matches!(result, Err(ResumeMatcherError::TaxonomyLoad(_))));
    }

    #[test]
    fn test_non_string_skill_fails_load() {
        let file = write_temp(
            r#"{"tech_skills": {"languages": ["Python", 42]}, "job_keywords": []}"#,
        );
        let result = SkillTaxonomy::load(file.path());
        assert!(matches!(result, Err(ResumeMatcherError::TaxonomyLoad(_))));
    }

    #[test]
    fn test_blank_skill_fails_load() {
        let file = write_temp(
            r#"{"tech_skills": {"languages": ["Python", "  "]}, "job_keywords": []}"#,
        );
        let result = SkillTaxonomy::load(file.path());
        assert!(matches!(result, Err(ResumeMatcherError::TaxonomyLoad(_))));
    }

    #[test]
    fn test_default_taxonomy_is_valid() {
        let taxonomy = SkillTaxonomy::default();
        assert!(taxonomy.validate().is_ok());
        assert!(taxonomy.entry_count() > 0);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxonomy.json");

        let taxonomy = SkillTaxonomy::default();
        taxonomy.save(&path).unwrap();

        let reloaded = SkillTaxonomy::load(&path).unwrap();
        assert_eq!(taxonomy, reloaded);
    }
}
