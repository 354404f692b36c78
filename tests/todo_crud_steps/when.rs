//! When steps for todo CRUD BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::when;
use todo_grpc::grpc::{
    TodoService,
    proto::{CreateTodoRequest, DeleteTodoRequest, UpdateTodoRequest},
};
use tonic::Request;

fn create(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    let response = run_async(world.service.create(Request::new(CreateTodoRequest { name })))
        .map_err(|status| eyre::eyre!("create failed at transport level: {status}"))?
        .into_inner();
    if response.id > 0 {
        world.last_created_id = Some(response.id);
    }
    world.last_status = response.status;
    Ok(())
}

fn rename(world: &mut TodoWorld, id: i32, name: String) -> Result<(), eyre::Report> {
    let response = run_async(world.service.update(Request::new(UpdateTodoRequest { id, name })))
        .map_err(|status| eyre::eyre!("update failed at transport level: {status}"))?
        .into_inner();
    world.last_status = response.status;
    Ok(())
}

#[when(r#"a todo named "{name}" is created"#)]
fn a_todo_named_is_created(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    create(world, name)
}

#[when("a todo with a blank name is created")]
fn a_blank_todo_is_created(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    create(world, "   ".to_owned())
}

#[when(r#"todo {id:i32} is renamed to "{name}""#)]
fn todo_is_renamed(world: &mut TodoWorld, id: i32, name: String) -> Result<(), eyre::Report> {
    rename(world, id, name)
}

#[when("todo {id:i32} is renamed to a blank name")]
fn todo_is_renamed_to_blank(world: &mut TodoWorld, id: i32) -> Result<(), eyre::Report> {
    rename(world, id, String::new())
}

#[when("the stored todo is deleted")]
fn the_stored_todo_is_deleted(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_created_id
        .ok_or_else(|| eyre::eyre!("no stored todo in scenario world"))?;
    let response = run_async(world.service.delete(Request::new(DeleteTodoRequest { id })))
        .map_err(|status| eyre::eyre!("delete failed at transport level: {status}"))?
        .into_inner();
    world.last_status = response.status;
    Ok(())
}
