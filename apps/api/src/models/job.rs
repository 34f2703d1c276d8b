use serde::{Deserialize, Serialize};

/// A single row of the job dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub industry: String,
    /// Comma-split, trimmed, in authored order. Empty fragments are dropped.
    pub required_skills: Vec<String>,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, industry: impl Into<String>, skills_field: &str) -> Self {
        Self {
            title: title.into(),
            industry: industry.into(),
            required_skills: split_skills(skills_field),
        }
    }
}

/// A posting that shares at least one skill with a résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobPosting,
    /// Posting's own spelling, in required order.
    pub matching_skills: Vec<String>,
    pub match_count: usize,
    pub total_required: usize,
    pub match_percentage: u32, // 0..=100
}

/// Splits a `Required Skills` cell on commas and trims each fragment.
pub fn split_skills(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills_trims_whitespace() {
        assert_eq!(
            split_skills(" Python,SQL ,  Docker "),
            vec!["Python", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_split_skills_drops_empty_fragments() {
        assert_eq!(split_skills("Python, , SQL,"), vec!["Python", "SQL"]);
        assert!(split_skills("").is_empty());
    }

    #[test]
    fn test_split_skills_keeps_authored_order_and_casing() {
        assert_eq!(split_skills("sql, Python, AWS"), vec!["sql", "Python", "AWS"]);
    }
}
