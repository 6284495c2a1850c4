use std::io;

use thiserror::Error;

pub type PlexResult<T> = Result<T, PlexError>;

#[derive(Debug, Error)]
pub enum PlexError {
    /// The data directory could not be created or inspected.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The embedded database failed to open (lock held, corrupt file, ...).
    #[error("Failed to open data store: {0}")]
    StorageOpen(#[source] redb::Error),

    #[error("Failed to read from data store: {0}")]
    StorageRead(#[source] redb::Error),

    #[error("Failed to write to data store: {0}")]
    StorageWrite(#[source] redb::Error),

    /// The key was not found in the store
    #[error("Key not found: {0}")]
    KeyNotFound(&'static str),

    #[error("Serialization error: {0}")]
    Serialize(#[source] bincode::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[source] bincode::Error),

    /// The stored token is not valid UTF-8.
    #[error("Stored plex token is not valid UTF-8: {0}")]
    TokenEncoding(#[source] std::string::FromUtf8Error),

    /// The store was used after it was closed.
    #[error("Data store is closed")]
    Closed,
}

impl PlexError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlexError::KeyNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable() {
        assert!(PlexError::KeyNotFound("plex-token").is_not_found());
        assert!(!PlexError::Closed.is_not_found());
    }

    #[test]
    fn display_names_the_key() {
        let err = PlexError::KeyNotFound("plex-server");
        assert_eq!(err.to_string(), "Key not found: plex-server");
    }

    #[test]
    fn io_errors_convert() {
        let err: PlexError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, PlexError::Io(_)));
    }
}
