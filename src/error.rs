use thiserror::Error;

/// Error handling while emitting JA3/JA3S records.
///
/// Fingerprint generation itself never fails: an absent handshake yields an
/// empty payload instead of an error. Only the output layer can fail.
#[derive(Error, Debug)]
pub enum HuginnNetJa3Error {
    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configured CSV separator cannot be used.
    ///
    /// The associated string holds the rejected separator.
    #[error("Invalid separator: {0:?}")]
    InvalidSeparator(String),
}
