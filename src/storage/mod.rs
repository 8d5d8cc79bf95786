//! Storage layer for focusdesk.
//!
//! A single `SQLite` file holds a flat key-value table. Widgets see it only
//! through the [`KvStore`] trait.

mod database;
mod kv;
mod migrations;

pub use database::Database;
pub use kv::{KvStore, MemoryStore};
