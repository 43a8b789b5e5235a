/// Failure to read a user id from the prompt
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("no user id entered")]
    Empty,

    #[error("'{0}' is not a valid user id")]
    InvalidId(String),
}
