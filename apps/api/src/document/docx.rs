//! DOCX text extraction.
//!
//! A `.docx` is a zip archive; body text lives in `word/document.xml`. Each body
//! paragraph (`w:p`) becomes one line. Paragraphs inside tables are skipped, as is
//! text box content (`w:txbxContent`) anchored inside a paragraph.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a valid DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("cannot read word/document.xml: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed word/document.xml: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Paragraph texts joined by `\n`, in document order.
pub fn extract_paragraph_text(bytes: &[u8]) -> Result<String, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    Ok(body_paragraphs(&xml)?.join("\n"))
}

fn body_paragraphs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut run_depth = 0usize;
    let mut textbox_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:txbxContent" => textbox_depth += 1,
                b"w:p" => {
                    if paragraph_depth == 0 {
                        current.clear();
                    }
                    paragraph_depth += 1;
                }
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if table_depth == 0 && paragraph_depth == 0 => {
                    paragraphs.push(String::new())
                }
                // `w:tab` also appears as a tab-stop definition under `w:pPr`; only runs count.
                b"w:tab" if run_depth > 0 && textbox_depth == 0 => current.push('\t'),
                b"w:br" | b"w:cr" if run_depth > 0 && textbox_depth == 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text && textbox_depth == 0 => current.push_str(&t.unescape()?),
            Event::CData(t) if in_text && textbox_depth == 0 => {
                current.push_str(&String::from_utf8_lossy(&t))
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:txbxContent" => textbox_depth = textbox_depth.saturating_sub(1),
                b"w:p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 && table_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;

    /// Wraps body XML in a minimal `.docx` archive.
    pub(crate) fn build_docx(body: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("[Content_Types].xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn para(text: &str) -> String {
        format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let docx = build_docx(&format!("{}{}", para("Jane Doe"), para("Skills: Rust")));
        assert_eq!(extract_paragraph_text(&docx).unwrap(), "Jane Doe\nSkills: Rust");
    }

    #[test]
    fn test_runs_in_one_paragraph_are_concatenated() {
        let docx = build_docx(
            r#"<w:p><w:r><w:t>Pyth</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">on and </w:t></w:r><w:r><w:t>SQL</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract_paragraph_text(&docx).unwrap(), "Python and SQL");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let docx = build_docx(&para("R&amp;D, C&#43;&#43;"));
        assert_eq!(extract_paragraph_text(&docx).unwrap(), "R&D, C++");
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let docx = build_docx(&format!("{}<w:p/>{}", para("A"), para("B")));
        assert_eq!(extract_paragraph_text(&docx).unwrap(), "A\n\nB");
    }

    #[test]
    fn test_tabs_and_breaks_inside_runs() {
        let docx = build_docx(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Go</w:t><w:tab/><w:t>Rust</w:t><w:br/><w:t>SQL</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract_paragraph_text(&docx).unwrap(), "Go\tRust\nSQL");
    }

    #[test]
    fn test_table_paragraphs_are_skipped() {
        let docx = build_docx(&format!(
            "{}<w:tbl><w:tr><w:tc>{}</w:tc></w:tr></w:tbl>{}",
            para("Before"),
            para("In table"),
            para("After")
        ));
        assert_eq!(extract_paragraph_text(&docx).unwrap(), "Before\nAfter");
    }

    #[test]
    fn test_text_box_content_is_skipped() {
        let docx = build_docx(&format!(
            r#"<w:p><w:r><w:t>Top</w:t></w:r><w:r><w:pict><v:shape><v:textbox><w:txbxContent><w:p><w:r><w:t>Boxed</w:t><w:tab/><w:t>Rust</w:t></w:r></w:p><w:p/></w:txbxContent></v:textbox></v:shape></w:pict></w:r></w:p>{}"#,
            para("Bottom")
        ));
        assert_eq!(extract_paragraph_text(&docx).unwrap(), "Top\nBottom");
    }

    #[test]
    fn test_archive_without_document_part_fails() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_paragraph_text(&bytes),
            Err(DocxError::Archive(_))
        ));
    }
}
