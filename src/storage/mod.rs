pub mod storage_engine;

pub use storage_engine::StorageEngine;
