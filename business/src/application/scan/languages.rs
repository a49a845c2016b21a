use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::services::TextRecognizer;
use crate::domain::scan::use_cases::languages::{
    ListLanguagesUseCase, SetLanguagesParams, SetLanguagesUseCase,
};

pub struct ListLanguagesUseCaseImpl {
    pub recognizer: Arc<dyn TextRecognizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListLanguagesUseCase for ListLanguagesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, ScanError> {
        self.logger.debug("Listing recognition languages");
        self.recognizer.available_languages().await
    }
}

pub struct SetLanguagesUseCaseImpl {
    pub recognizer: Arc<dyn TextRecognizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetLanguagesUseCase for SetLanguagesUseCaseImpl {
    async fn execute(&self, params: SetLanguagesParams) -> Result<(), ScanError> {
        let languages: Vec<String> = params
            .languages
            .into_iter()
            .map(|language| language.trim().to_string())
            .filter(|language| !language.is_empty())
            .collect();
        if languages.is_empty() {
            return Err(ScanError::InvalidLanguage);
        }

        let available = self.recognizer.available_languages().await?;
        if let Some(unknown) = languages.iter().find(|l| !available.contains(l)) {
            self.logger
                .warn(&format!("Rejected unknown recognition language: {}", unknown));
            return Err(ScanError::InvalidLanguage);
        }

        self.logger
            .info(&format!("Switching recognition languages to {}", languages.join("+")));
        self.recognizer.set_languages(languages).await
    }
}
