use async_trait::async_trait;

use super::errors::ScanError;

/// Raw output of the text recognizer for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecognition {
    pub text: String,
    /// Normalised to `[0, 1]`.
    pub confidence: f32,
}

/// Service port for the on-device text recognition engine.
///
/// The adapter owns its lifecycle state. `initialize` is idempotent and must
/// have succeeded before `recognize` is called.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn initialize(&self) -> Result<(), ScanError>;

    async fn recognize(&self, image_path: &str) -> Result<RawRecognition, ScanError>;

    async fn available_languages(&self) -> Result<Vec<String>, ScanError>;

    async fn set_languages(&self, languages: Vec<String>) -> Result<(), ScanError>;

    /// Releases the engine. A later `initialize` starts it again.
    async fn shutdown(&self);
}
