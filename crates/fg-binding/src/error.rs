use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to compile embedded expression `{expression}`")]
    Compile {
        expression: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

// Convert from plain messages, for evaluator and target implementations
impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}
