//! Job ranking by skill overlap.
//!
//! Algorithm:
//! 1. For each posting, intersect its required skills with the extracted set
//!    (compared by normalized key, reported in the posting's own spelling).
//! 2. Drop postings with an empty intersection.
//! 3. match_percentage = round_half_even(100 × match_count / total_required), 0 when nothing is required.
//! 4. Stable sort on (match_percentage, match_count) descending: exact ties keep dataset order.

use std::collections::HashSet;

use crate::matching::catalog::normalize_skill;
use crate::matching::extractor::ExtractedSkills;
use crate::models::job::{JobMatch, JobPosting};

pub fn match_jobs(extracted: &ExtractedSkills, postings: &[JobPosting]) -> Vec<JobMatch> {
    let extracted_keys: HashSet<String> = extracted.iter().map(|s| normalize_skill(s)).collect();

    let mut matches: Vec<JobMatch> = postings
        .iter()
        .filter_map(|posting| match_posting(posting, &extracted_keys))
        .collect();

    // `sort_by` is stable.
    matches.sort_by(|a, b| {
        (b.match_percentage, b.match_count).cmp(&(a.match_percentage, a.match_count))
    });
    matches
}

fn match_posting(posting: &JobPosting, extracted_keys: &HashSet<String>) -> Option<JobMatch> {
    let mut seen = HashSet::new();
    let matching_skills: Vec<String> = posting
        .required_skills
        .iter()
        .filter(|skill| {
            let key = normalize_skill(skill);
            extracted_keys.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect();

    if matching_skills.is_empty() {
        return None;
    }

    let match_count = matching_skills.len();
    let total_required = posting.required_skills.len();

    Some(JobMatch {
        job: posting.clone(),
        matching_skills,
        match_count,
        total_required,
        match_percentage: match_percentage(match_count, total_required),
    })
}

/// Integer percentage, rounding exact halves to the even neighbour.
pub fn match_percentage(match_count: usize, total_required: usize) -> u32 {
    if total_required == 0 {
        return 0;
    }
    let scaled = 100 * match_count.min(total_required);
    let quotient = scaled / total_required;
    let twice_remainder = 2 * (scaled % total_required);

    let rounded = if twice_remainder > total_required
        || (twice_remainder == total_required && quotient % 2 == 1)
    {
        quotient + 1
    } else {
        quotient
    };
    rounded as u32
}
