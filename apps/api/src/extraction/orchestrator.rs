use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::extraction::dispatch::StrategyKind;
use crate::extraction::strategies::{self, StrategyError};

/// A failure that exhausted every applicable strategy. This is the only
/// extraction error that reaches the HTTP boundary.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ExtractError(pub String);

/// Runs the strategy selected for this file and applies the per-format
/// recovery policy:
///
/// - `PdfChain`: primary first, always; on any primary failure the
///   fallback engine runs. Only a fallback failure escalates.
/// - `DocxSingle`: any failure is downgraded to empty text.
/// - `PlainTextRead`: tolerant decode; only an I/O failure escalates.
/// - `Unsupported`: empty text without touching the file.
pub fn extract_text(path: &Path, kind: StrategyKind) -> Result<String, ExtractError> {
    match kind {
        StrategyKind::PdfChain => {
            pdf_chain(path, strategies::pdf_primary, strategies::pdf_fallback)
        }
        StrategyKind::DocxSingle => match strategies::docx(path) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("DOCX extraction failed, returning empty text: {e}");
                Ok(String::new())
            }
        },
        StrategyKind::PlainTextRead => {
            strategies::plain_text(path).map_err(|e| ExtractError(e.to_string()))
        }
        StrategyKind::Unsupported => Ok(String::new()),
    }
}

/// Fixed-order PDF chain: the fallback runs only after the primary has
/// failed, never in parallel, and only the fallback's failure escapes.
fn pdf_chain<P, F>(path: &Path, primary: P, fallback: F) -> Result<String, ExtractError>
where
    P: FnOnce(&Path) -> Result<String, StrategyError>,
    F: FnOnce(&Path) -> Result<String, StrategyError>,
{
    match primary(path) {
        Ok(text) => Ok(text),
        Err(primary_err) => {
            warn!("Primary PDF extraction failed, trying fallback: {primary_err}");
            fallback(path).map_err(|e| ExtractError(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::strategies::test_fixtures::{write_minimal_docx, write_minimal_pdf};
    use std::cell::Cell;
    use std::path::PathBuf;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_unsupported_yields_empty_text_without_reading() {
        // The path deliberately does not exist: Unsupported must not touch it.
        let path = Path::new("/nonexistent/upload.xyz");
        assert_eq!(extract_text(path, StrategyKind::Unsupported).unwrap(), "");
    }

    #[test]
    fn test_plain_text_read_returns_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "notes.txt", b"3 years experience\n");
        let text = extract_text(&path, StrategyKind::PlainTextRead).unwrap();
        assert_eq!(text, "3 years experience\n");
    }

    #[test]
    fn test_plain_text_read_missing_file_is_unrecoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(extract_text(&path, StrategyKind::PlainTextRead).is_err());
    }

    #[test]
    fn test_unreadable_docx_downgrades_to_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "broken.docx", b"not a zip archive");
        let text = extract_text(&path, StrategyKind::DocxSingle).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_pdf_chain_exhaustion_is_unrecoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "broken.pdf", b"not a pdf either");
        assert!(extract_text(&path, StrategyKind::PdfChain).is_err());
    }

    #[test]
    fn test_pdf_chain_returns_fallback_output_when_primary_fails() {
        let text = pdf_chain(
            Path::new("ignored.pdf"),
            |_| Err(StrategyError::PdfLoad("truncated xref".to_string())),
            |_| Ok("recovered by fallback".to_string()),
        )
        .unwrap();
        assert_eq!(text, "recovered by fallback");
    }

    #[test]
    fn test_pdf_chain_never_runs_fallback_when_primary_succeeds() {
        let fallback_ran = Cell::new(false);
        let text = pdf_chain(
            Path::new("ignored.pdf"),
            |_| Ok("from primary".to_string()),
            |_| {
                fallback_ran.set(true);
                Ok("from fallback".to_string())
            },
        )
        .unwrap();
        assert_eq!(text, "from primary");
        assert!(!fallback_ran.get());
    }

    #[test]
    fn test_pdf_chain_escalates_only_the_fallback_failure() {
        let err = pdf_chain(
            Path::new("ignored.pdf"),
            |_| Err(StrategyError::PdfLoad("bad header".to_string())),
            |_| Err(StrategyError::PdfExtract("no text streams".to_string())),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no text streams"));
        assert!(!err.to_string().contains("bad header"));
    }

    #[test]
    fn test_valid_pdf_resolves_through_the_primary_strategy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        write_minimal_pdf(&path, "Hello World!");
        let text = extract_text(&path, StrategyKind::PdfChain).unwrap();
        assert_eq!(text, crate::extraction::strategies::pdf_primary(&path).unwrap());
        assert!(text.contains("Hello World!"));
    }

    #[test]
    fn test_valid_docx_yields_paragraph_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        write_minimal_docx(&path, &["Worked at Acme", "B.Tech, 2019"]);
        let text = extract_text(&path, StrategyKind::DocxSingle).unwrap();
        assert_eq!(text, "Worked at Acme\nB.Tech, 2019");
    }
}
