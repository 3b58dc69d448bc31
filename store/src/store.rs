//! The `TodoStore` repository over the `todos` table.
//!
//! # Design
//! One method per CRUD operation, each acquiring a pool connection for the
//! duration of the query. `TodoStore` is `Clone` (the pool is an `Arc`
//! internally) so the server can hand a copy to every request handler.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;
use crate::types::Todo;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    completed BOOLEAN NOT NULL
)";

/// Repository over the `todos` table.
#[derive(Debug, Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Open a store on the given SQLite URL, creating the database file if
    /// it does not exist, and ensure the schema.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Open an in-memory store for tests.
    ///
    /// Capped at one connection: every connection to `sqlite::memory:` gets
    /// its own private database, so a larger pool would scatter rows across
    /// invisible copies.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Insert a new todo and return the full row with its assigned id.
    pub async fn create(&self, name: &str, completed: bool) -> Result<Todo, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (name, completed) VALUES (?1, ?2) \
             RETURNING id, name, completed",
        )
        .bind(name)
        .bind(completed)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// All todos in insertion order.
    pub async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, name, completed FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    /// Fetch one todo by id, or `NotFound`.
    pub async fn get(&self, id: i64) -> Result<Todo, StoreError> {
        sqlx::query_as::<_, Todo>("SELECT id, name, completed FROM todos WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrite both fields of the todo with the given id.
    ///
    /// Affecting zero rows is not an error here; callers that need an
    /// existence guarantee follow up with `get`.
    pub async fn update(&self, id: i64, name: &str, completed: bool) -> Result<(), StoreError> {
        sqlx::query("UPDATE todos SET name = ?1, completed = ?2 WHERE id = ?3")
            .bind(name)
            .bind(completed)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Remove the todo with the given id if present. Never errors on a
    /// missing id.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
