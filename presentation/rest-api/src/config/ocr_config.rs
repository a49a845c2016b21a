use std::env;

/// Text recognition engine configuration
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub binary: String,
    pub languages: Vec<String>,
}

impl OcrConfig {
    /// Load OCR configuration from environment variables
    ///
    /// Environment variables:
    /// - TESSERACT_BIN: Path or name of the tesseract executable (default: "tesseract")
    /// - OCR_LANGUAGES: Languages joined with `+` or `,` (default: "eng+fra")
    pub fn from_env() -> Self {
        let binary = env::var("TESSERACT_BIN").unwrap_or_else(|_| "tesseract".to_string());
        let languages = env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng+fra".to_string());

        Self {
            binary,
            languages: parse_languages(&languages),
        }
    }
}

fn parse_languages(raw: &str) -> Vec<String> {
    let languages: Vec<String> = raw
        .split(['+', ','])
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_string)
        .collect();

    if languages.is_empty() {
        vec!["eng".to_string()]
    } else {
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_languages_on_either_separator() {
        assert_eq!(parse_languages("eng+fra"), vec!["eng", "fra"]);
        assert_eq!(parse_languages(" deu , ita "), vec!["deu", "ita"]);
    }

    #[test]
    fn should_fall_back_to_english_when_blank() {
        assert_eq!(parse_languages(" + "), vec!["eng"]);
    }
}
