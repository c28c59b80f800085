use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DualError {
    #[error("unknown elementary function `{0}`")]
    UnknownFunction(String),
}
