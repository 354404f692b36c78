//! Port contract tests for the in-memory todo repository.

use crate::in_memory::helpers::repo;
use rstest::rstest;
use std::sync::Arc;
use todo_grpc::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Todo, TodoId},
    ports::{TodoReadRepository, TodoRepositoryError, TodoWriteRepository},
};

#[rstest]
#[tokio::test]
async fn ids_are_sequential_and_not_reused(repo: Arc<InMemoryTodoRepository>) {
    let first = repo
        .add(&Todo::create("One").expect("valid draft"))
        .await
        .expect("add");
    repo.delete(first).await.expect("delete");
    let second = repo
        .add(&Todo::create("Two").expect("valid draft"))
        .await
        .expect("add");

    assert_eq!(first.value(), 1);
    assert_eq!(second.value(), 2);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_todo_is_not_found(repo: Arc<InMemoryTodoRepository>) {
    let id = TodoId::new(5).expect("valid id");
    let todo = Todo::create("Ghost").expect("valid draft").into_persisted(id);

    let result = repo.update(&todo).await;

    assert!(matches!(result, Err(TodoRepositoryError::NotFound(missing)) if missing == id));
}

#[rstest]
#[tokio::test]
async fn delete_of_missing_todo_is_not_found(repo: Arc<InMemoryTodoRepository>) {
    let id = TodoId::new(5).expect("valid id");

    let result = repo.delete(id).await;

    assert!(matches!(result, Err(TodoRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test]
async fn get_all_returns_todos_in_id_order(repo: Arc<InMemoryTodoRepository>) {
    for name in ["b", "a", "c"] {
        repo.add(&Todo::create(name).expect("valid draft"))
            .await
            .expect("add");
    }

    let todos = repo.get_all().await.expect("get_all");

    let names: Vec<&str> = todos.iter().map(|todo| todo.name().as_str()).collect();
    assert_eq!(names, ["b", "a", "c"]);
}
