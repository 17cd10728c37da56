//! Error types for readme-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid sentinel pair: {reason}")]
    InvalidSentinel { reason: String },
}
