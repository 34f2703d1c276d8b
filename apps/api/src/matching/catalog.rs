//! Skill Catalog: every distinct skill named by the dataset, with a compiled
//! case-insensitive pattern per skill.
//!
//! Built once alongside the dataset and shared read-only by all requests.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;

/// How a skill occurrence is recognised inside résumé text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring. "Java" is found inside "JavaScript".
    #[default]
    Substring,
    /// The occurrence must not touch a letter or digit on either side.
    WordBoundary,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word" | "word_boundary" => Ok(MatchMode::WordBoundary),
            other => Err(format!(
                "unknown match mode '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => f.write_str("substring"),
            MatchMode::WordBoundary => f.write_str("word_boundary"),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct CatalogSkill {
    /// First-seen authored spelling.
    pub canonical: String,
    pattern: Regex,
}

impl CatalogSkill {
    pub fn is_found_in(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<CatalogSkill>,
    mode: MatchMode,
}

impl SkillCatalog {
    /// Flattens every posting's required skills into a deduplicated catalog.
    /// Dataset order decides both the canonical spelling and the catalog order.
    pub fn build(postings: &[JobPosting], mode: MatchMode) -> Result<Self, regex::Error> {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for skill in postings.iter().flat_map(|p| p.required_skills.iter()) {
            let key = normalize_skill(skill);
            if key.is_empty() || !seen.insert(key) {
                continue;
            }
            let pattern = compile_pattern(skill.trim(), mode)?;
            skills.push(CatalogSkill {
                canonical: skill.trim().to_string(),
                pattern,
            });
        }

        Ok(Self { skills, mode })
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogSkill> {
        self.skills.iter()
    }
}

/// Matching key for a skill: trimmed and lowercased.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Anything but a Unicode letter or decimal digit.
const SEPARATOR: &str = r"[^\p{Alphabetic}\p{Nd}]";

fn compile_pattern(skill: &str, mode: MatchMode) -> Result<Regex, regex::Error> {
    let literal = regex::escape(skill);
    // `\b` never matches after a trailing `+` or `#`, so flanks are matched explicitly.
    // Underscore counts as a separator, unlike in `\W`.
    let pattern = match mode {
        MatchMode::Substring => literal,
        MatchMode::WordBoundary => format!("(?:^|{SEPARATOR}){literal}(?:$|{SEPARATOR})"),
    };
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}
