use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::extraction::{ExtractionStrategy, OcrSettings};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub extraction_strategy: ExtractionStrategy,
    pub extraction_timeout: Duration,
    pub ocr: OcrSettings,
    /// Entity recognizer endpoint. `None` → no enrichment.
    pub ner_service_url: Option<String>,
    pub ner_timeout: Duration,
    /// JSON catalog replacing the built-in one.
    pub skill_catalog_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let extraction_strategy = match get("EXTRACTION_STRATEGY") {
            Some(raw) => raw
                .parse::<ExtractionStrategy>()
                .map_err(|e| anyhow!(e))
                .context("EXTRACTION_STRATEGY is invalid")?,
            None => ExtractionStrategy::DirectThenOcr,
        };

        let ocr = OcrSettings {
            dpi: parse_or(&get, "OCR_DPI", 300)?,
            language: get("OCR_LANGUAGE").unwrap_or_else(|| "eng".to_string()),
            pdftoppm_bin: get("PDFTOPPM_BIN").unwrap_or_else(|| "pdftoppm".to_string()),
            tesseract_bin: get("TESSERACT_BIN").unwrap_or_else(|| "tesseract".to_string()),
        };

        Ok(Config {
            port: parse_or(&get, "PORT", 8080)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            extraction_strategy,
            extraction_timeout: Duration::from_secs(parse_or(&get, "EXTRACTION_TIMEOUT_SECS", 60)?),
            ocr,
            ner_service_url: get("NER_SERVICE_URL"),
            ner_timeout: Duration::from_secs(parse_or(&get, "NER_TIMEOUT_SECS", 10)?),
            skill_catalog_path: get("SKILL_CATALOG_PATH").map(PathBuf::from),
            max_upload_bytes: parse_or(&get, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.extraction_strategy, ExtractionStrategy::DirectThenOcr);
        assert_eq!(config.extraction_timeout, Duration::from_secs(60));
        assert_eq!(config.ocr, OcrSettings::default());
        assert!(config.ner_service_url.is_none());
        assert_eq!(config.ner_timeout, Duration::from_secs(10));
        assert!(config.skill_catalog_path.is_none());
        assert_eq!(config.max_upload_bytes, 10_485_760);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("EXTRACTION_STRATEGY", "ocr"),
            ("OCR_DPI", "150"),
            ("OCR_LANGUAGE", "deu"),
            ("NER_SERVICE_URL", "http://ner:5000/recognize"),
            ("SKILL_CATALOG_PATH", "/etc/skillmatch/catalog.json"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.extraction_strategy, ExtractionStrategy::Ocr);
        assert_eq!(config.ocr.dpi, 150);
        assert_eq!(config.ocr.language, "deu");
        assert_eq!(
            config.ner_service_url.as_deref(),
            Some("http://ner:5000/recognize")
        );
        assert_eq!(
            config.skill_catalog_path,
            Some(PathBuf::from("/etc/skillmatch/catalog.json"))
        );
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("NER_SERVICE_URL", "  "), ("PORT", "")]).unwrap();
        assert!(config.ner_service_url.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_number_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_strategy_fails() {
        let err = config_from(&[("EXTRACTION_STRATEGY", "magic")]).unwrap_err();
        assert!(err.to_string().contains("EXTRACTION_STRATEGY"));
    }
}
