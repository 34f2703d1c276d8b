use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::matching::catalog::{MatchMode, SkillCatalog};
use crate::models::job::JobPosting;

pub const REQUIRED_COLUMNS: [&str; 3] = ["Job Title", "Industry", "Required Skills"];

/// Startup-time failure. The service must not start serving without a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset '{path}' is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("malformed dataset '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid skill pattern in dataset: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Deserialize)]
struct JobRecord {
    #[serde(rename = "Job Title")]
    title: String,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(rename = "Required Skills")]
    required_skills: String,
}

/// The read-only job table plus the skill catalog derived from it.
#[derive(Debug)]
pub struct JobDataset {
    pub postings: Vec<JobPosting>,
    pub catalog: SkillCatalog,
}

impl JobDataset {
    pub fn from_postings(postings: Vec<JobPosting>, mode: MatchMode) -> Result<Self, DatasetError> {
        let catalog = SkillCatalog::build(&postings, mode)?;
        Ok(Self { postings, catalog })
    }
}

/// Loads the CSV dataset and builds the catalog. Called once at startup.
pub fn load_dataset(path: &Path, mode: MatchMode) -> Result<JobDataset, DatasetError> {
    info!("Loading job dataset from {}", path.display());

    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let postings = read_postings(file, path)?;
    let dataset = JobDataset::from_postings(postings, mode)?;

    if dataset.postings.is_empty() {
        warn!("Dataset {} contains no job postings", path.display());
    } else if dataset.catalog.is_empty() {
        warn!("Dataset {} names no required skills", path.display());
    }
    info!(
        "Loaded {} job postings, {} distinct skills (match mode: {})",
        dataset.postings.len(),
        dataset.catalog.len(),
        dataset.catalog.mode()
    );
    Ok(dataset)
}

fn read_postings<R: std::io::Read>(reader: R, path: &Path) -> Result<Vec<JobPosting>, DatasetError> {
    let malformed = |source| DatasetError::Malformed {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(&malformed)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    csv_reader
        .deserialize::<JobRecord>()
        .map(|record| {
            let record = record.map_err(&malformed)?;
            Ok(JobPosting::new(
                record.title.trim(),
                record.industry.trim(),
                &record.required_skills,
            ))
        })
        .collect()
}
