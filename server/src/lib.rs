//! HTTP layer for the todo service.
//!
//! # Overview
//! A four-route axum app over a `TodoStore`: list, create, update, delete,
//! all under `/api/v1/todos`. Each handler validates first, touches the
//! store once (twice for PUT), and marshals the result.
//!
//! # Design
//! - The store is constructed by the caller and injected into `app`, so
//!   tests run the router in-process against an isolated in-memory store.
//! - PUT runs the update before checking existence: the update on a missing
//!   id affects zero rows, and the follow-up `get` produces the 404.
//! - DELETE never checks existence; repeating it yields 204 every time.

pub mod error;
pub mod validation;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use todo_store::{Todo, TodoStore};

use error::ApiError;
use validation::TodoPayload;

/// Response shape for a todo. The id goes over the wire as a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoBody {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl From<Todo> for TodoBody {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            name: todo.name,
            completed: todo.completed,
        }
    }
}

/// Build the router over the given store.
pub fn app(store: TodoStore) -> Router {
    let todos = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo));

    Router::new().nest("/api/v1", todos).with_state(store)
}

/// Serve the app on the given listener until the process exits.
pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_todos(State(store): State<TodoStore>) -> Result<Json<Vec<TodoBody>>, ApiError> {
    let todos = store.list().await?;
    Ok(Json(todos.into_iter().map(TodoBody::from).collect()))
}

async fn create_todo(
    State(store): State<TodoStore>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<TodoBody>), ApiError> {
    let payload = TodoPayload::from_value(&body)?;
    let todo = store.create(&payload.name, payload.completed).await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<TodoBody>, ApiError> {
    let payload = TodoPayload::from_value(&body)?;
    // Update first; the get below turns a missing id into the 404.
    store.update(id, &payload.name, payload.completed).await?;
    let todo = store.get(id).await?;
    Ok(Json(todo.into()))
}

async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
