use thiserror::Error;

pub type MResult<T> = Result<T, MaybeError>;

#[derive(Error, Debug)]
pub enum MaybeError {
    #[error("expected a value, found nothing")]
    Nothing,
    #[error("invalid scenario: {0}")]
    InvalidScenario(#[from] serde_json::Error),
    #[error("formulations disagree: {0}")]
    Disagreement(String),
}
