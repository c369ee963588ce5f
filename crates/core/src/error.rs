#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),
}
