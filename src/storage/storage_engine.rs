use crate::error::PlexResult;

/// Byte-level key-value backend underneath the [`Store`](crate::store::Store).
///
/// Each call runs in its own transaction on the backend. Once `close` has
/// been called every other method fails with `PlexError::Closed`.
pub trait StorageEngine {
    fn get(&self, key: &'static str) -> PlexResult<Option<Vec<u8>>>;

    fn set(&self, key: &'static str, value: &[u8]) -> PlexResult<()>;

    /// Returns whether a value was present.
    fn delete(&self, key: &'static str) -> PlexResult<bool>;

    /// Releases the backend. The handle is gone even when this returns an error.
    fn close(&mut self) -> PlexResult<()>;

    fn is_closed(&self) -> bool;
}
