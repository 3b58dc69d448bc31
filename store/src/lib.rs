//! Persistence layer for the todo service.
//!
//! # Overview
//! A single `todos` table behind a small repository type. `TodoStore` owns a
//! sqlx SQLite pool and exposes plain CRUD methods; no SQL leaks past this
//! crate.
//!
//! # Design
//! - The store keeps integer ids; stringifying them for the wire is the
//!   server's concern.
//! - `update` and `delete` are no-ops when the id is absent. Only `get`
//!   reports `NotFound`, so the server decides which operations care about
//!   existence.
//! - Constructors ensure the schema, so callers never run DDL themselves.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::Todo;
