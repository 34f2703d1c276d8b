// Request orchestration: upload → document text → skill extraction → job ranking → report.
// Handlers live in `handlers`; HTML views in `pages`.

pub mod handlers;
pub mod pages;

use bytes::Bytes;
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::dataset::JobDataset;
use crate::document::read_document;
use crate::errors::AnalysisError;
use crate::matching::ranker::match_jobs;
use crate::models::job::JobMatch;

pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// One file taken from the `resume` multipart field.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Everything the result view shows.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub skills: Vec<String>,
    pub job_matches: Vec<JobMatch>,
    pub total_skills_found: usize,
    pub total_jobs_matched: usize,
    pub analysis_timestamp: String,
}

/// Runs the full pipeline for one upload. Synchronous; callers run it off the async runtime.
pub fn analyze_upload(
    dataset: &JobDataset,
    upload: Option<ResumeUpload>,
    now: DateTime<Local>,
) -> Result<AnalysisReport, AnalysisError> {
    let upload = upload.ok_or(AnalysisError::MissingFile)?;
    if upload.filename.is_empty() {
        return Err(AnalysisError::EmptyFilename);
    }

    let resume_text = read_document(&upload.bytes, &upload.filename)?;
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::EmptyContent);
    }

    Ok(analyze_text(dataset, &resume_text, now))
}

/// Extraction and ranking over already-decoded résumé text.
pub fn analyze_text(dataset: &JobDataset, resume_text: &str, now: DateTime<Local>) -> AnalysisReport {
    let extracted = dataset.catalog.extract(resume_text);
    if extracted.is_empty() {
        debug!("No catalog skill found in {} chars of resume text", resume_text.len());
    }
    let job_matches = match_jobs(&extracted, &dataset.postings);

    AnalysisReport {
        total_skills_found: extracted.len(),
        total_jobs_matched: job_matches.len(),
        skills: extracted.into_vec(),
        job_matches,
        analysis_timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::matching::catalog::MatchMode;
    use crate::models::job::JobPosting;

    fn dataset() -> JobDataset {
        JobDataset::from_postings(
            vec![
                JobPosting::new("Backend Engineer", "Software", "Python, SQL, Docker"),
                JobPosting::new("Designer", "Design", "Figma, Sketch"),
            ],
            MatchMode::Substring,
        )
        .unwrap()
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, 15, 7, 0).unwrap()
    }

    fn upload(filename: &str, bytes: &'static [u8]) -> Option<ResumeUpload> {
        Some(ResumeUpload {
            filename: filename.to_string(),
            bytes: Bytes::from_static(bytes),
        })
    }

    #[test]
    fn test_backend_engineer_report() {
        let report = analyze_upload(
            &dataset(),
            upload("resume.txt", b"Experienced in Python and Docker projects"),
            fixed_now(),
        )
        .unwrap();

        assert_eq!(report.skills, vec!["Python", "Docker"]);
        assert_eq!(report.total_skills_found, 2);
        assert_eq!(report.total_jobs_matched, 1);
        assert_eq!(report.job_matches[0].job.title, "Backend Engineer");
        assert_eq!(report.job_matches[0].match_percentage, 67);
        assert_eq!(report.analysis_timestamp, "October 18, 2026 at 03:07 PM");
    }

    #[test]
    fn test_missing_upload() {
        let err = analyze_upload(&dataset(), None, fixed_now()).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingFile));
    }

    #[test]
    fn test_empty_filename() {
        let err = analyze_upload(&dataset(), upload("", b"Python"), fixed_now()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyFilename));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = analyze_upload(&dataset(), upload("notes.exe", b"Python"), fixed_now())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_empty_and_blank_text_files() {
        for body in [&b""[..], &b"  \n\t \r\n"[..]] {
            let err = analyze_upload(&dataset(), upload("resume.txt", body), fixed_now())
                .unwrap_err();
            assert!(matches!(err, AnalysisError::EmptyContent));
        }
    }

    #[test]
    fn test_no_skills_is_a_valid_empty_report() {
        let report = analyze_upload(
            &dataset(),
            upload("resume.txt", b"Pastry chef with a love of sourdough"),
            fixed_now(),
        )
        .unwrap();
        assert!(report.skills.is_empty());
        assert!(report.job_matches.is_empty());
        assert_eq!(report.total_jobs_matched, 0);
    }

    #[test]
    fn test_same_text_twice_gives_same_report() {
        let dataset = dataset();
        let text = "SQL, figma, python";
        let first = analyze_text(&dataset, text, fixed_now());
        let second = analyze_text(&dataset, text, fixed_now());
        assert_eq!(first.skills, second.skills);
        assert_eq!(first.job_matches, second.job_matches);
    }

    #[test]
    fn test_docx_upload() {
        let docx = crate::document::docx::tests::build_docx(
            "<w:p><w:r><w:t>Skills</w:t></w:r></w:p><w:p><w:r><w:t>Figma and SQL</w:t></w:r></w:p>",
        );
        let report = analyze_upload(
            &dataset(),
            Some(ResumeUpload {
                filename: "CV.DOCX".to_string(),
                bytes: Bytes::from(docx),
            }),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(report.skills, vec!["SQL", "Figma"]);
        let titles: Vec<&str> = report
            .job_matches
            .iter()
            .map(|m| m.job.title.as_str())
            .collect();
        // Designer 1/2 = 50%, Backend Engineer 1/3 = 33%.
        assert_eq!(titles, vec!["Designer", "Backend Engineer"]);
    }
}
