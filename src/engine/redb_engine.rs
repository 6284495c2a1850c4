use std::path::Path;

use log::{debug, trace};
use redb::backends::InMemoryBackend;
use redb::{Database, TableDefinition};

use crate::error::{PlexError, PlexResult};
use crate::storage::StorageEngine;

/// File name of the database inside the data directory.
pub const DB_FILE_NAME: &str = "plex.redb";

const STORE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("plex");

fn open_err(err: impl Into<redb::Error>) -> PlexError {
    PlexError::StorageOpen(err.into())
}

fn read_err(err: impl Into<redb::Error>) -> PlexError {
    PlexError::StorageRead(err.into())
}

fn write_err(err: impl Into<redb::Error>) -> PlexError {
    PlexError::StorageWrite(err.into())
}

/// [`StorageEngine`] backed by a single redb table.
pub struct RedbEngine {
    db: Option<Database>,
    compact_on_close: bool,
}

impl RedbEngine {
    /// Opens or creates the database file at `path`. The parent directory must exist.
    pub fn open(path: impl AsRef<Path>) -> PlexResult<Self> {
        let path = path.as_ref();
        debug!("opening redb database at {}", path.display());

        let db = Database::create(path).map_err(open_err)?;
        Self::init(db)
    }

    /// Database that lives only as long as the engine. Nothing touches disk.
    pub fn in_memory() -> PlexResult<Self> {
        let db = Database::builder()
            .create_with_backend(InMemoryBackend::new())
            .map_err(open_err)?;
        Self::init(db)
    }

    pub fn compact_on_close(mut self, enabled: bool) -> Self {
        self.compact_on_close = enabled;
        self
    }

    // Creates the table up front so reads on a fresh database see "absent"
    // rather than a missing table.
    fn init(db: Database) -> PlexResult<Self> {
        let txn = db.begin_write().map_err(open_err)?;
        {
            txn.open_table(STORE_TABLE).map_err(open_err)?;
        }
        txn.commit().map_err(open_err)?;

        Ok(Self {
            db: Some(db),
            compact_on_close: false,
        })
    }

    fn db(&self) -> PlexResult<&Database> {
        self.db.as_ref().ok_or(PlexError::Closed)
    }
}

impl StorageEngine for RedbEngine {
    fn get(&self, key: &'static str) -> PlexResult<Option<Vec<u8>>> {
        let txn = self.db()?.begin_read().map_err(read_err)?;
        let table = txn.open_table(STORE_TABLE).map_err(read_err)?;
        let value = table.get(key).map_err(read_err)?.map(|guard| guard.value().to_vec());

        trace!("get {key}: {}", if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    fn set(&self, key: &'static str, value: &[u8]) -> PlexResult<()> {
        let txn = self.db()?.begin_write().map_err(write_err)?;
        {
            let mut table = txn.open_table(STORE_TABLE).map_err(write_err)?;
            table.insert(key, value).map_err(write_err)?;
        }
        txn.commit().map_err(write_err)?;

        trace!("set {key} ({} bytes)", value.len());
        Ok(())
    }

    fn delete(&self, key: &'static str) -> PlexResult<bool> {
        let txn = self.db()?.begin_write().map_err(write_err)?;
        let removed = {
            let mut table = txn.open_table(STORE_TABLE).map_err(write_err)?;
            table.remove(key).map_err(write_err)?.is_some()
        };
        txn.commit().map_err(write_err)?;

        trace!("delete {key}: removed={removed}");
        Ok(removed)
    }

    fn close(&mut self) -> PlexResult<()> {
        let Some(mut db) = self.db.take() else {
            return Ok(());
        };

        if self.compact_on_close {
            let compacted = db.compact().map_err(write_err)?;
            debug!("compaction on close: compacted={compacted}");
        }

        drop(db);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.db.is_none()
    }
}
