use serde::Serialize;

use crate::matching::catalog::SkillCatalog;

/// Canonical skill names found in a résumé, in catalog order. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedSkills(Vec<String>);

impl ExtractedSkills {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl SkillCatalog {
    /// Tests `resume_text` for every catalog skill. An empty result is not an error.
    pub fn extract(&self, resume_text: &str) -> ExtractedSkills {
        ExtractedSkills(
            self.iter()
                .filter(|skill| skill.is_found_in(resume_text))
                .map(|skill| skill.canonical.clone())
                .collect(),
        )
    }
}
