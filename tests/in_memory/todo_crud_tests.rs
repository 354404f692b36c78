//! End-to-end pipeline tests over the in-memory adapter.

use crate::in_memory::helpers::{create_todo, dispatcher_over, repo};
use rstest::rstest;
use std::sync::Arc;
use todo_grpc::todo::{
    adapters::memory::InMemoryTodoRepository,
    requests::{
        DeleteTodoCommand, GetAllTodosQuery, GetTodoByIdQuery, TodoDto, UpdateTodoCommand,
        UpdateTodoDto,
    },
};
use tokio_util::sync::CancellationToken;

#[rstest]
#[tokio::test]
async fn create_then_get_returns_trimmed_name(repo: Arc<InMemoryTodoRepository>) {
    let dispatcher = dispatcher_over(&repo);

    let id = create_todo(&dispatcher, "  Task  ").await;
    let found = dispatcher
        .send(GetTodoByIdQuery::new(id), &CancellationToken::new())
        .await
        .expect("lookup should succeed");

    assert_eq!(
        found,
        Some(TodoDto {
            id,
            name: "Task".to_owned()
        })
    );
}

#[rstest]
#[tokio::test]
async fn get_all_on_empty_store_is_empty(repo: Arc<InMemoryTodoRepository>) {
    let dispatcher = dispatcher_over(&repo);

    let todos = dispatcher
        .send(GetAllTodosQuery, &CancellationToken::new())
        .await
        .expect("listing should succeed");

    assert!(todos.is_empty());
}

#[rstest]
#[tokio::test]
async fn get_by_id_of_missing_todo_is_absent(repo: Arc<InMemoryTodoRepository>) {
    let dispatcher = dispatcher_over(&repo);

    let found = dispatcher
        .send(GetTodoByIdQuery::new(404), &CancellationToken::new())
        .await
        .expect("lookup should not fail");

    assert_eq!(found, None);
}

#[rstest]
#[tokio::test]
async fn delete_of_missing_todo_returns_false(repo: Arc<InMemoryTodoRepository>) {
    let dispatcher = dispatcher_over(&repo);

    let deleted = dispatcher
        .send(DeleteTodoCommand::new(12), &CancellationToken::new())
        .await
        .expect("delete should not fail");

    assert!(!deleted);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_todo_returns_false_and_leaves_store_unchanged(
    repo: Arc<InMemoryTodoRepository>,
) {
    let dispatcher = dispatcher_over(&repo);
    let existing = create_todo(&dispatcher, "Keep me").await;

    let updated = dispatcher
        .send(
            UpdateTodoCommand::new(UpdateTodoDto {
                id: existing + 1,
                name: "Renamed".to_owned(),
            }),
            &CancellationToken::new(),
        )
        .await
        .expect("update should not fail");

    assert!(!updated);
    let todos = dispatcher
        .send(GetAllTodosQuery, &CancellationToken::new())
        .await
        .expect("listing should succeed");
    assert_eq!(
        todos,
        [TodoDto {
            id: existing,
            name: "Keep me".to_owned()
        }]
    );
}

#[rstest]
#[tokio::test]
async fn update_then_delete_round_trip(repo: Arc<InMemoryTodoRepository>) {
    let dispatcher = dispatcher_over(&repo);
    let token = CancellationToken::new();
    let id = create_todo(&dispatcher, "Draft").await;

    let updated = dispatcher
        .send(
            UpdateTodoCommand::new(UpdateTodoDto {
                id,
                name: " Final ".to_owned(),
            }),
            &token,
        )
        .await
        .expect("update should succeed");
    assert!(updated);

    let renamed = dispatcher
        .send(GetTodoByIdQuery::new(id), &token)
        .await
        .expect("lookup should succeed")
        .expect("todo should exist");
    assert_eq!(renamed.name, "Final");

    let deleted = dispatcher
        .send(DeleteTodoCommand::new(id), &token)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    let gone = dispatcher
        .send(GetTodoByIdQuery::new(id), &token)
        .await
        .expect("lookup should succeed");
    assert_eq!(gone, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_receive_distinct_ids(repo: Arc<InMemoryTodoRepository>) {
    let dispatcher = dispatcher_over(&repo);

    let tasks: Vec<_> = (0..16)
        .map(|index| {
            let worker = dispatcher.clone();
            tokio::spawn(async move { create_todo(&worker, &format!("Task {index}")).await })
        })
        .collect();
    let mut ids = Vec::with_capacity(tasks.len());
    for task in tasks {
        ids.push(task.await.expect("task should not panic"));
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=16).collect::<Vec<_>>());
}
