//! Typed records shared by the HTTP layer and the store.

pub mod log;
