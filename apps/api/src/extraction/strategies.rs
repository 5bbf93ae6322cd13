//! Concrete text-extraction strategies, one per file format.
//!
//! Every strategy is a synchronous function from a materialized file path
//! to extracted text. Failures are strategy-local; the orchestrator
//! decides whether to fall back, downgrade, or escalate.

use std::path::Path;

use lopdf::Document;
use thiserror::Error;

/// A strategy-level failure. Recoverable by construction: nothing here
/// reaches the HTTP boundary unless the orchestrator escalates it.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Failed to load PDF: {0}")]
    PdfLoad(String),

    #[error("Failed to extract PDF text: {0}")]
    PdfExtract(String),

    #[error("Failed to parse DOCX: {0}")]
    Docx(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Primary PDF strategy: page-by-page extraction via lopdf.
///
/// Page texts are joined with a newline; only the final concatenation is
/// trimmed, never the individual pages.
pub fn pdf_primary(path: &Path) -> Result<String, StrategyError> {
    let doc = Document::load(path).map_err(|e| StrategyError::PdfLoad(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| StrategyError::PdfExtract(e.to_string()))?;
        pages.push(text);
    }
    Ok(pages.join("\n").trim().to_string())
}

/// Fallback PDF strategy: whole-document extraction through pdf-extract.
/// No page-level joining contract; the engine's output is returned as-is.
pub fn pdf_fallback(path: &Path) -> Result<String, StrategyError> {
    pdf_extract::extract_text(path).map_err(|e| StrategyError::PdfExtract(e.to_string()))
}

/// DOCX strategy: paragraph-level text in paragraph order, joined with
/// newlines. A DOCX is a ZIP of XML; docx-rs exposes the parsed tree as
/// Document → Paragraph → Run → Text.
pub fn docx(path: &Path) -> Result<String, StrategyError> {
    let bytes = std::fs::read(path)?;
    let parsed = docx_rs::read_docx(&bytes).map_err(|e| StrategyError::Docx(format!("{e:?}")))?;

    let mut paragraphs = Vec::new();
    for child in &parsed.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            paragraphs.push(paragraph_text(para));
        }
    }
    Ok(paragraphs.join("\n"))
}

/// Collects the text runs of one paragraph. Runs are concatenated with no
/// separator because they are parts of the same sentence.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();
    for child in &para.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    parts.push(text.text.clone());
                }
            }
        }
    }
    parts.concat()
}

/// Plain-text strategy: undecodable byte sequences are dropped rather
/// than failing the read. Only an I/O failure is an error.
pub fn plain_text(path: &Path) -> Result<String, StrategyError> {
    let bytes = std::fs::read(path)?;
    Ok(decode_dropping_invalid(&bytes))
}

/// UTF-8 decode that skips over invalid sequences instead of replacing
/// them, so undecodable bytes never reach the extracted text.
fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                // None means the input ends mid-sequence; nothing left to keep.
                let skip = match e.error_len() {
                    Some(len) => len,
                    None => rest.len(),
                };
                bytes = &rest[skip..];
            }
        }
    }
}
