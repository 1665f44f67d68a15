use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DikeError {
    #[error("Expected {expected} values, {actual} provided")]
    InvalidArgument { expected: usize, actual: usize },

    #[error("Input Profile should be provided.")]
    MissingInput,
}
