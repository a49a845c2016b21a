use std::borrow::Cow;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::RwLock;

use business::domain::scan::errors::ScanError;
use business::domain::scan::services::{RawRecognition, TextRecognizer};

use crate::tsv::parse_tsv;

/// Characters the engine may emit: digits, Latin letters, currency signs and separators.
const CHARACTER_WHITELIST: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz€$£¥., ";

struct EngineState {
    ready: bool,
    languages: Vec<String>,
}

/// Text recognizer backed by the `tesseract` command line tool.
///
/// The engine must be initialized before the first recognition; the
/// language selection is kept per instance.
pub struct TesseractRecognizer {
    binary: String,
    state: RwLock<EngineState>,
}

impl TesseractRecognizer {
    pub fn new(binary: String, languages: Vec<String>) -> Self {
        Self {
            binary,
            state: RwLock::new(EngineState {
                ready: false,
                languages,
            }),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, ScanError> {
        Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|err| {
                tracing::error!("Could not run {}: {}", self.binary, err);
                ScanError::RecognizerUnavailable
            })
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn initialize(&self) -> Result<(), ScanError> {
        let mut state = self.state.write().await;
        if state.ready {
            return Ok(());
        }

        let output = self.run(&["--version"]).await?;
        if !output.status.success() {
            tracing::error!(
                "tesseract --version failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
            return Err(ScanError::RecognizerUnavailable);
        }

        state.ready = true;
        tracing::info!(
            "Text recognizer ready with languages {}",
            state.languages.join("+")
        );
        Ok(())
    }

    async fn recognize(&self, image_path: &str) -> Result<RawRecognition, ScanError> {
        let languages = {
            let state = self.state.read().await;
            if !state.ready {
                return Err(ScanError::RecognizerUnavailable);
            }
            state.languages.join("+")
        };

        let input = engine_input(image_path);
        let whitelist = format!("tessedit_char_whitelist={}", CHARACTER_WHITELIST);
        let output = self
            .run(&[input.as_ref(), "stdout", "-l", languages.as_str(), "-c", whitelist.as_str(), "tsv"])
            .await?;
        if !output.status.success() {
            tracing::warn!(
                "tesseract failed on {}: {}",
                image_path,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(ScanError::RecognitionFailed);
        }

        Ok(parse_tsv(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn available_languages(&self) -> Result<Vec<String>, ScanError> {
        let output = self.run(&["--list-langs"]).await?;
        if !output.status.success() {
            return Err(ScanError::RecognizerUnavailable);
        }

        // Older releases print the list on stderr.
        let listing = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };

        Ok(parse_language_list(&listing))
    }

    async fn set_languages(&self, languages: Vec<String>) -> Result<(), ScanError> {
        if languages.is_empty() {
            return Err(ScanError::InvalidLanguage);
        }
        self.state.write().await.languages = languages;
        Ok(())
    }

    async fn shutdown(&self) {
        let mut state = self.state.write().await;
        if state.ready {
            state.ready = false;
            tracing::info!("Text recognizer shut down");
        }
    }
}

/// Keeps a leading dash from being read as an engine option.
fn engine_input(image_path: &str) -> Cow<'_, str> {
    if image_path.starts_with('-') {
        Cow::Owned(format!("./{}", image_path))
    } else {
        Cow::Borrowed(image_path)
    }
}

/// Skips the `List of available languages ...:` header line.
fn parse_language_list(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_engine() -> TesseractRecognizer {
        TesseractRecognizer::new(
            "/nonexistent/bin/tesseract".to_string(),
            vec!["eng".to_string(), "fra".to_string()],
        )
    }

    #[test]
    fn should_parse_language_listing() {
        let listing = "List of available languages in \"/usr/share/tessdata/\" (3):\neng\nfra\nosd\n";

        assert_eq!(parse_language_list(listing), vec!["eng", "fra", "osd"]);
    }

    #[test]
    fn should_pass_dash_prefixed_paths_as_relative_files() {
        assert_eq!(engine_input("--list-langs"), "./--list-langs");
        assert_eq!(engine_input("-l.jpg"), "./-l.jpg");
        assert_eq!(engine_input("/photos/prix.jpg"), "/photos/prix.jpg");
        assert_eq!(engine_input("photos/-prix.jpg"), "photos/-prix.jpg");
    }

    #[tokio::test]
    async fn should_fail_to_initialize_without_binary() {
        let recognizer = missing_engine();

        let result = recognizer.initialize().await;

        assert!(matches!(result.unwrap_err(), ScanError::RecognizerUnavailable));
    }

    #[tokio::test]
    async fn should_refuse_recognition_before_initialization() {
        let recognizer = missing_engine();

        let result = recognizer.recognize("/photos/prix.jpg").await;

        assert!(matches!(result.unwrap_err(), ScanError::RecognizerUnavailable));
    }

    #[tokio::test]
    async fn should_keep_language_selection_per_instance() {
        let recognizer = missing_engine();

        recognizer.set_languages(vec!["deu".to_string()]).await.unwrap();

        assert_eq!(recognizer.state.read().await.languages, vec!["deu"]);
        assert!(matches!(
            recognizer.set_languages(vec![]).await.unwrap_err(),
            ScanError::InvalidLanguage
        ));
    }

    #[tokio::test]
    async fn should_tolerate_shutdown_when_never_started() {
        let recognizer = missing_engine();

        recognizer.shutdown().await;

        assert!(!recognizer.state.read().await.ready);
    }
}
