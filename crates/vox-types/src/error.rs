//! Error types for VOX BOARD.

use std::io;

/// Errors produced by the VOX BOARD crates.
#[derive(Debug, thiserror::Error)]
pub enum VoxError {
    /// An insert was given the reserved absent key form (the empty key).
    #[error("invalid key: the empty key cannot be stored")]
    InvalidKey,

    /// A lookup targeted a key that is not in the store.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A home-level select targeted an unknown category key.
    #[error("no such category: {0}")]
    NoSuchCategory(String),

    /// The board file to load does not exist.
    #[error("board file not found: {0}")]
    FileNotFound(String),

    /// The board file could not be written.
    #[error("board file write failed: {0}")]
    FileWrite(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VoxError>;
