//! The todo entity as stored in the database.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single todo row.
///
/// The id is the SQLite rowid, assigned on insert and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}
