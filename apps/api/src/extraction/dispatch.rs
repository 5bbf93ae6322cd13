use std::path::Path;

/// Closed set of extraction strategies, resolved once per request from
/// the uploaded file's declared extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// PDF: primary engine with an ordered fallback.
    PdfChain,
    /// DOC/DOCX: single strategy, no fallback.
    DocxSingle,
    /// Plain text read with a lossy decoding policy.
    PlainTextRead,
    /// Unknown format; short-circuits to empty text.
    Unsupported,
}

/// Pure mapping from a lower-cased extension to its strategy. Anything
/// unknown, including the empty string, is `Unsupported`.
pub fn dispatch(extension: &str) -> StrategyKind {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => StrategyKind::PdfChain,
        "docx" | "doc" => StrategyKind::DocxSingle,
        "txt" => StrategyKind::PlainTextRead,
        _ => StrategyKind::Unsupported,
    }
}

/// Declared extension of an uploaded filename: the suffix after the last
/// dot, lower-cased. Empty when the name carries no extension.
pub fn declared_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}
