use crate::extraction::{ExtractionError, TextExtractor};

/// Reads the embedded text layer of a digital PDF with `pdf-extract`.
/// Works purely from the in-memory buffer.
pub struct DirectTextExtractor;

impl TextExtractor for DirectTextExtractor {
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractionError> {
        pdf_extract::extract_text_from_mem_by_pages(pdf)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}
