//! Typed access to the three values the client persists between runs.

use std::fs;
use std::sync::{PoisonError, RwLock};

use log::{Level, log, warn};

use crate::config::StoreConfig;
use crate::engine::RedbEngine;
use crate::engine::redb_engine::DB_FILE_NAME;
use crate::error::{PlexError, PlexResult};
use crate::server::PlexServer;
use crate::storage::StorageEngine;

pub const APP_SECRET_KEY: &str = "app-secret";
pub const PLEX_TOKEN_KEY: &str = "plex-token";
pub const PLEX_SERVER_KEY: &str = "plex-server";

pub struct Store<E: StorageEngine = RedbEngine> {
    engine: E,
    is_closed: bool,
    verbose: bool,
    secret: RwLock<Option<Vec<u8>>>,
}

impl Store<RedbEngine> {
    /// Ensures `config.data_dir` exists and opens the database inside it.
    pub fn open(config: &StoreConfig) -> PlexResult<Self> {
        let dir = &config.data_dir;
        let level = level_for(config.verbose);
        log!(level, "checking for data store at {}", dir.display());

        if !dir.exists() {
            log!(level, "creating data directory {}", dir.display());
            fs::create_dir_all(dir)?;
        }

        let engine =
            RedbEngine::open(dir.join(DB_FILE_NAME))?.compact_on_close(config.compact_on_close);
        log!(level, "opened data store");

        Ok(Self::with_engine(engine, config.verbose))
    }
}

impl<E: StorageEngine> Store<E> {
    pub fn with_engine(engine: E, verbose: bool) -> Self {
        Self {
            engine,
            is_closed: false,
            verbose,
            secret: RwLock::new(None),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Closes the underlying engine. Calling it again only logs.
    pub fn close(&mut self) {
        if self.is_closed {
            log!(self.level(), "data store already closed");
            return;
        }

        if let Err(err) = self.engine.close() {
            warn!("data store failed to close: {err}");
        }

        self.is_closed = true;
        *self.secret.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The application secret, or an empty value if none has been saved yet.
    ///
    /// The value is cached after the first read. The database file lock keeps
    /// other processes from writing while this store is open, so the cache
    /// only goes stale through this store's own `save_secret`, which refreshes it.
    pub fn get_secret(&self) -> PlexResult<Vec<u8>> {
        self.ensure_open()?;

        if let Some(secret) = self.secret.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            return Ok(secret.clone());
        }

        let secret = self.engine.get(APP_SECRET_KEY)?.unwrap_or_default();
        *self.secret.write().unwrap_or_else(PoisonError::into_inner) = Some(secret.clone());
        Ok(secret)
    }

    pub fn save_secret(&self, secret: &[u8]) -> PlexResult<()> {
        self.ensure_open()?;
        self.engine.set(APP_SECRET_KEY, secret)?;
        *self.secret.write().unwrap_or_else(PoisonError::into_inner) = Some(secret.to_vec());

        log!(self.level(), "saved app secret to store");
        Ok(())
    }

    pub fn get_plex_token(&self) -> PlexResult<String> {
        let bytes = self.require(PLEX_TOKEN_KEY)?;
        let token = String::from_utf8(bytes).map_err(PlexError::TokenEncoding)?;

        log!(self.level(), "loaded plex token ({} bytes)", token.len());
        Ok(token)
    }

    pub fn save_plex_token(&self, token: &str) -> PlexResult<()> {
        self.ensure_open()?;
        self.engine.set(PLEX_TOKEN_KEY, token.as_bytes())?;

        log!(self.level(), "saved token to store");
        Ok(())
    }

    /// Removes the saved token. Returns whether one was present.
    pub fn clear_plex_token(&self) -> PlexResult<bool> {
        self.ensure_open()?;
        self.engine.delete(PLEX_TOKEN_KEY)
    }

    pub fn get_plex_server(&self) -> PlexResult<PlexServer> {
        let bytes = self.require(PLEX_SERVER_KEY)?;
        PlexServer::deserialize(&bytes)
    }

    pub fn save_plex_server(&self, server: &PlexServer) -> PlexResult<()> {
        self.ensure_open()?;
        let bytes = server.serialize()?;
        self.engine.set(PLEX_SERVER_KEY, &bytes)?;

        log!(self.level(), "saved plex server {} to store", server.name);
        Ok(())
    }

    pub fn clear_plex_server(&self) -> PlexResult<bool> {
        self.ensure_open()?;
        self.engine.delete(PLEX_SERVER_KEY)
    }

    fn require(&self, key: &'static str) -> PlexResult<Vec<u8>> {
        self.ensure_open()?;
        self.engine.get(key)?.ok_or(PlexError::KeyNotFound(key))
    }

    fn ensure_open(&self) -> PlexResult<()> {
        if self.is_closed || self.engine.is_closed() {
            return Err(PlexError::Closed);
        }
        Ok(())
    }

    fn level(&self) -> Level {
        level_for(self.verbose)
    }
}

impl<E: StorageEngine> Drop for Store<E> {
    fn drop(&mut self) {
        if !self.is_closed {
            self.close();
        }
    }
}

fn level_for(verbose: bool) -> Level {
    if verbose { Level::Info } else { Level::Debug }
}
