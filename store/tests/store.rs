//! CRUD semantics against an in-memory store.

use todo_store::{StoreError, TodoStore};

async fn store() -> TodoStore {
    TodoStore::in_memory().await.unwrap()
}

// --- create ---

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let store = store().await;
    let first = store.create("one", false).await.unwrap();
    let second = store.create("two", true).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn create_returns_the_stored_fields() {
    let store = store().await;
    let todo = store.create("write tests", true).await.unwrap();
    assert_eq!(todo.name, "write tests");
    assert!(todo.completed);
}

// --- list ---

#[tokio::test]
async fn list_empty_store_yields_empty_vec() {
    let store = store().await;
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = store().await;
    store.create("a", false).await.unwrap();
    store.create("b", false).await.unwrap();
    store.create("c", true).await.unwrap();

    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

// --- get ---

#[tokio::test]
async fn get_missing_id_is_not_found() {
    let store = store().await;
    let err = store.get(42).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
}

#[tokio::test]
async fn get_returns_the_row() {
    let store = store().await;
    let created = store.create("fetch me", false).await.unwrap();
    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

// --- update ---

#[tokio::test]
async fn update_overwrites_both_fields() {
    let store = store().await;
    let todo = store.create("before", false).await.unwrap();
    store.update(todo.id, "after", true).await.unwrap();

    let fetched = store.get(todo.id).await.unwrap();
    assert_eq!(fetched.id, todo.id);
    assert_eq!(fetched.name, "after");
    assert!(fetched.completed);
}

#[tokio::test]
async fn update_missing_id_is_a_noop() {
    let store = store().await;
    store.create("only", false).await.unwrap();
    store.update(99, "ghost", true).await.unwrap();

    let todos = store.list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].name, "only");
}

// --- delete ---

#[tokio::test]
async fn delete_removes_the_row() {
    let store = store().await;
    let todo = store.create("doomed", false).await.unwrap();
    store.delete(todo.id).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
    assert!(matches!(
        store.get(todo.id).await.unwrap_err(),
        StoreError::NotFound(_)
    ));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let store = store().await;
    let todo = store.create("twice", false).await.unwrap();
    store.delete(todo.id).await.unwrap();
    store.delete(todo.id).await.unwrap();
}
