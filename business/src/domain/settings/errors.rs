#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings.not_an_object")]
    NotAnObject,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
