//! Persisted session handling.

pub mod storage;
