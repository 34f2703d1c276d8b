//! Document Reader: turns an uploaded résumé into plain text.
//!
//! Dispatch is purely on the lowercased filename suffix. The returned text is not
//! trimmed or normalized.

pub mod docx;

use crate::errors::AnalysisError;

/// Upload formats the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".txt") {
            Some(DocumentFormat::Text)
        } else if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Text => "TXT",
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        }
    }
}

/// Reads `bytes` as the format implied by `filename`.
pub fn read_document(bytes: &[u8], filename: &str) -> Result<String, AnalysisError> {
    let format = DocumentFormat::from_filename(filename)
        .ok_or_else(|| AnalysisError::UnsupportedFormat(filename.to_string()))?;

    match format {
        DocumentFormat::Text => read_text(bytes),
        DocumentFormat::Pdf => read_pdf(bytes),
        DocumentFormat::Docx => docx::extract_paragraph_text(bytes).map_err(|e| {
            AnalysisError::Parse {
                format: format.label(),
                message: e.to_string(),
            }
        }),
    }
}

fn read_text(bytes: &[u8]) -> Result<String, AnalysisError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| AnalysisError::Decode {
        format: DocumentFormat::Text.label(),
        message: e.utf8_error().to_string(),
    })
}

/// Text of every page, in document order.
fn read_pdf(bytes: &[u8]) -> Result<String, AnalysisError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AnalysisError::Parse {
        format: DocumentFormat::Pdf.label(),
        message: e.to_string(),
    })
}
