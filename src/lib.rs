pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod server;
pub mod storage;
pub mod store;

pub use config::StoreConfig;
pub use error::{PlexError, PlexResult};
pub use server::PlexServer;
pub use storage::StorageEngine;
pub use store::Store;
