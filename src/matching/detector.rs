//! Skill and keyword detection against the taxonomy
//!
//! Matching is literal, case-insensitive substring containment: a taxonomy
//! entry is present if its lowercase form occurs anywhere in the lowercased
//! document text. There is no word-boundary or token matching: "go" matches
//! inside "algorithm". That imprecision is part of the output contract and
//! must not be tightened.

use crate::error::{Result, ResumeMatcherError};
use crate::taxonomy::SkillTaxonomy;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Taxonomy entries detected in one document. Categories appear only when
/// they have at least one hit; within a category, order follows taxonomy
/// iteration order, not position in the text. Two Findings with equal field
/// values are interchangeable for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Findings {
    pub tech_skills: BTreeMap<String, Vec<String>>,
    pub job_keywords: Vec<String>,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.tech_skills.values().all(|skills| skills.is_empty()) && self.job_keywords.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.tech_skills.values().map(Vec::len).sum::<usize>() + self.job_keywords.len()
    }
}

enum PatternEntry {
    Skill { category: String, name: String },
    Keyword { name: String },
}

/// Multi-pattern scanner built once per taxonomy and reused across
/// documents. One pattern per taxonomy entry occurrence: if the taxonomy
/// lists a skill twice, it gets two pattern ids and appears twice in
/// Findings; no dedup happens at detection time.
pub struct SkillDetector {
    automaton: AhoCorasick,
    entries: Vec<PatternEntry>,
}

impl SkillDetector {
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut entries = Vec::new();

        for (category, skills) in &taxonomy.tech_skills {
            for skill in skills {
                patterns.push(skill.to_lowercase());
                entries.push(PatternEntry::Skill {
                    category: category.clone(),
                    name: skill.clone(),
                });
            }
        }
        for keyword in &taxonomy.job_keywords {
            patterns.push(keyword.to_lowercase());
            entries.push(PatternEntry::Keyword {
                name: keyword.clone(),
            });
        }

        let automaton = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeMatcherError::Processing(format!("Failed to build skill detector: {}", e))
        })?;

        Ok(Self { automaton, entries })
    }

    /// Scan a document's text and report which taxonomy entries occur in it.
    /// Detection is binary per entry (present or absent, no counts) and
    /// never fails: empty text simply yields empty Findings.
    pub fn detect(&self, text: &str) -> Findings {
        let mut findings = Findings::default();
        if self.entries.is_empty() {
            return findings;
        }

        let normalized = text.to_lowercase();

        // Overlapping search so that patterns nested inside other matches
        // (e.g. "java" inside "javascript") are still reported.
        let mut present = vec![false; self.entries.len()];
        for mat in self.automaton.find_overlapping_iter(&normalized) {
            present[mat.pattern().as_usize()] = true;
        }

        for (entry, found) in self.entries.iter().zip(present) {
            if !found {
                continue;
            }
            match entry {
                PatternEntry::Skill { category, name } => findings
                    .tech_skills
                    .entry(category.clone())
                    .or_default()
                    .push(name.clone()),
                PatternEntry::Keyword { name } => findings.job_keywords.push(name.clone()),
            }
        }

        findings
    }

    pub fn pattern_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn taxonomy(categories: &[(&str, &[&str])], keywords: &[&str]) -> SkillTaxonomy {
        let mut tech_skills = BTreeMap::new();
        for (category, skills) in categories {
            tech_skills.insert(
                category.to_string(),
                skills.iter().map(|s| s.to_string()).collect(),
            );
        }
        SkillTaxonomy {
            tech_skills,
            job_keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_detects_skills_and_keywords() {
        let taxonomy = taxonomy(&[("languages", &["Python", "Go"])], &["remote"]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("We need a Go developer, remote position");
        assert_eq!(findings.tech_skills["languages"], vec!["Go"]);
        assert_eq!(findings.job_keywords, vec!["remote"]);
    }

    #[test]
    fn test_reports_original_case() {
        let taxonomy = taxonomy(&[("languages", &["Python"])], &[]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("expert in PYTHON scripting");
        assert_eq!(findings.tech_skills["languages"], vec!["Python"]);
    }

    #[test]
    fn test_skill_order_follows_taxonomy_not_text() {
        let taxonomy = taxonomy(&[("languages", &["Python", "Go"])], &[]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("I know Go and also Python");
        assert_eq!(findings.tech_skills["languages"], vec!["Python", "Go"]);
    }

    #[test]
    fn test_empty_text_yields_empty_findings() {
        let taxonomy = taxonomy(&[("languages", &["Python", "Go"])], &["remote"]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("");
        assert!(findings.is_empty());
        assert!(findings.tech_skills.is_empty());
        assert!(findings.job_keywords.is_empty());
    }

    #[test]
    fn test_absent_categories_do_not_appear() {
        let taxonomy = taxonomy(
            &[("languages", &["Python"]), ("databases", &["PostgreSQL"])],
            &[],
        );
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("Python only");
        assert!(findings.tech_skills.contains_key("languages"));
        assert!(!findings.tech_skills.contains_key("databases"));
    }

    #[test]
    fn test_substring_containment_is_literal() {
        // "R" occurs inside "there"; single-letter and embedded matches are
        // part of the contract, not a bug to fix.
        let taxonomy = taxonomy(&[("languages", &["R", "Go"])], &[]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("there are many requirements in this algorithm");
        assert_eq!(findings.tech_skills["languages"], vec!["R", "Go"]);
    }

    #[test]
    fn test_nested_patterns_both_match() {
        let taxonomy = taxonomy(&[("languages", &["Java", "JavaScript"])], &[]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("JavaScript experience");
        assert_eq!(
            findings.tech_skills["languages"],
            vec!["Java", "JavaScript"]
        );
    }

    #[test]
    fn test_duplicate_taxonomy_entry_appears_twice() {
        let taxonomy = taxonomy(&[("languages", &["Python", "Python"])], &[]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("Python developer");
        assert_eq!(findings.tech_skills["languages"], vec!["Python", "Python"]);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let taxonomy = taxonomy(&[("languages", &["Python", "Go"])], &["remote"]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let text = "Remote Python and Go position";
        assert_eq!(detector.detect(text), detector.detect(text));
    }

    #[test]
    fn test_empty_taxonomy_detects_nothing() {
        let taxonomy = taxonomy(&[], &[]);
        let detector = SkillDetector::new(&taxonomy).unwrap();

        let findings = detector.detect("Python, Go, remote, everything");
        assert!(findings.is_empty());
    }
}
