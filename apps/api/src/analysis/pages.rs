//! Askama views for the upload form flow.

use askama::Template;

use crate::analysis::AnalysisReport;
use crate::models::job::JobMatch;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub max_upload_mb: String,
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage<'a> {
    pub report: &'a AnalysisReport,
    pub rows: Vec<MatchRow<'a>>,
}

pub struct MatchRow<'a> {
    pub rank: usize,
    pub tier: &'static str,
    pub job_match: &'a JobMatch,
}

impl<'a> ResultPage<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        let rows = report
            .job_matches
            .iter()
            .enumerate()
            .map(|(i, job_match)| MatchRow {
                rank: i + 1,
                tier: match_tier(job_match.match_percentage),
                job_match,
            })
            .collect();
        Self { report, rows }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub error_message: String,
}

/// Bar colour bucket for a match percentage.
pub fn match_tier(percentage: u32) -> &'static str {
    match percentage {
        75..=100 => "strong",
        40..=74 => "moderate",
        _ => "weak",
    }
}
