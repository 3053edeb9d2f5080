//! Match scoring: percentage overlap between resume and job findings

use crate::error::{Result, ResumeMatcherError};
use crate::matching::Findings;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Outcome of comparing resume findings against job findings. The score is
/// the percentage of the job's required entries also present in the resume;
/// `missing_skills` lists what the resume lacks, grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub missing_skills: BTreeMap<String, Vec<String>>,
}

impl MatchResult {
    /// Degraded result the calling workflow substitutes when scoring fails.
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            missing_skills: BTreeMap::new(),
        }
    }
}

/// Compare two findings structures. Matching uses set semantics per
/// category, so duplicate entries never inflate the matched count; the
/// denominator counts the job's listed entries as-is. A job with nothing
/// detectable scores exactly 0, not an error and not 100.
pub fn score(resume: &Findings, job: &Findings) -> Result<MatchResult> {
    let total_required: usize =
        job.tech_skills.values().map(Vec::len).sum::<usize>() + job.job_keywords.len();

    let mut matched = 0usize;
    for (category, required) in &job.tech_skills {
        let have = skill_set(resume.tech_skills.get(category));
        let want: HashSet<&str> = required.iter().map(String::as_str).collect();
        matched += want.intersection(&have).count();
    }

    let resume_keywords: HashSet<&str> = resume.job_keywords.iter().map(String::as_str).collect();
    let job_keywords: HashSet<&str> = job.job_keywords.iter().map(String::as_str).collect();
    matched += job_keywords.intersection(&resume_keywords).count();

    let score = if total_required > 0 {
        matched as f64 / total_required as f64 * 100.0
    } else {
        0.0
    };

    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(ResumeMatcherError::Scoring(format!(
            "computed score {} outside the 0-100 range ({} of {} matched)",
            score, matched, total_required
        )));
    }

    let mut missing_skills = BTreeMap::new();
    for (category, required) in &job.tech_skills {
        let have = skill_set(resume.tech_skills.get(category));
        let mut seen = HashSet::new();
        let missing: Vec<String> = required
            .iter()
            .filter(|skill| !have.contains(skill.as_str()) && seen.insert(skill.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            missing_skills.insert(category.clone(), missing);
        }
    }

    Ok(MatchResult {
        score,
        missing_skills,
    })
}

fn skill_set(skills: Option<&Vec<String>>) -> HashSet<&str> {
    skills
        .map(|s| s.iter().map(String::as_str).collect())
        .unwrap_or_default()
}
