use thiserror::Error;

/// Errors raised while reading a keypair file.
#[derive(Debug, Error)]
pub enum KeypairLoadError {
    /// The keypair file could not be opened or read.
    #[error("Keypair not found at {path}: {message}")]
    FileReadError { path: String, message: String },

    /// The file contents are not a JSON array of bytes.
    #[error("Keypair not valid JSON at {origin}: {message}")]
    InvalidJsonFormat { origin: String, message: String },

    /// The JSON array does not hold exactly 64 bytes.
    #[error("Invalid keypair found at {origin}: expected {expected} bytes, found {found}")]
    InvalidKeypairBytes {
        origin: String,
        expected: usize,
        found: usize,
    },
}

impl KeypairLoadError {
    /// True when the failure happened before any bytes could be read.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileReadError { .. })
    }
}
