use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::extraction::{ExtractionError, TextExtractor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrSettings {
    pub dpi: u32,
    pub language: String,
    pub pdftoppm_bin: String,
    pub tesseract_bin: String,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            dpi: 300,
            language: "eng".to_string(),
            pdftoppm_bin: "pdftoppm".to_string(),
            tesseract_bin: "tesseract".to_string(),
        }
    }
}

/// Rasterizes every page with `pdftoppm`, then runs `tesseract` on each image.
///
/// The document and page images live in a scoped temp dir that is removed when
/// the call returns, on success or failure.
pub struct OcrTextExtractor {
    settings: OcrSettings,
}

impl OcrTextExtractor {
    pub fn new(settings: OcrSettings) -> Self {
        Self { settings }
    }

    fn rasterize(&self, pdf_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
        let output = Command::new(&self.settings.pdftoppm_bin)
            .arg("-r")
            .arg(self.settings.dpi.to_string())
            .arg("-png")
            .arg(pdf_path)
            .arg(out_dir.join("page"))
            .output()
            .map_err(|e| tool_error(&self.settings.pdftoppm_bin, e.to_string()))?;

        if !output.status.success() {
            return Err(tool_error(
                &self.settings.pdftoppm_bin,
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let mut images: Vec<(u32, PathBuf)> = std::fs::read_dir(out_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter_map(|path| page_number(&path).map(|n| (n, path)))
            .collect();
        images.sort_by_key(|(n, _)| *n);

        Ok(images.into_iter().map(|(_, path)| path).collect())
    }

    fn recognize_page(&self, image: &Path) -> Result<String, ExtractionError> {
        let output = Command::new(&self.settings.tesseract_bin)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.settings.language)
            .output()
            .map_err(|e| tool_error(&self.settings.tesseract_bin, e.to_string()))?;

        if !output.status.success() {
            return Err(tool_error(
                &self.settings.tesseract_bin,
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TextExtractor for OcrTextExtractor {
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let temp_dir = tempfile::Builder::new().prefix("skillmatch-ocr-").tempdir()?;
        let pdf_path = temp_dir.path().join("document.pdf");
        std::fs::write(&pdf_path, pdf)?;

        let images = self.rasterize(&pdf_path, temp_dir.path())?;
        debug!(
            "Rasterized {} pages at {} dpi",
            images.len(),
            self.settings.dpi
        );

        let mut pages = Vec::with_capacity(images.len());
        for (i, image) in images.iter().enumerate() {
            match self.recognize_page(image) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    // keep page positions stable; one bad page yields partial text
                    warn!("OCR failed on page {}: {e}", i + 1);
                    pages.push(String::new());
                }
            }
        }
        Ok(pages)
    }

    fn name(&self) -> &'static str {
        "ocr"
    }
}

/// Page number from a `pdftoppm` output name such as `page-07.png`.
fn page_number(path: &Path) -> Option<u32> {
    if path.extension()? != "png" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    stem.rsplit('-').next()?.parse().ok()
}

fn tool_error(tool: &str, message: String) -> ExtractionError {
    ExtractionError::Tool {
        tool: tool.to_string(),
        message,
    }
}
