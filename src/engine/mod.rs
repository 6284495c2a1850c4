pub mod redb_engine;

pub use redb_engine::RedbEngine;
