use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid shift format: {input:?} is not an integer")]
    InvalidShiftFormat { input: String },

    #[error("input ended before a value was entered for {prompt:?}")]
    UnexpectedEof { prompt: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
