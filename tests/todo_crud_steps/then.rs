//! Then steps for todo CRUD BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::then;
use todo_grpc::grpc::{
    TodoService,
    proto::{GetAllTodosRequest, GetTodoByIdRequest},
};
use tonic::Request;

#[then("the response code is {code:i32}")]
fn the_response_code_is(world: &TodoWorld, code: i32) -> Result<(), eyre::Report> {
    let status = world.status()?;
    if status.code != code {
        return Err(eyre::eyre!("expected code {code}, got {status:?}"));
    }
    Ok(())
}

#[then(r#"the response message is "{message}""#)]
fn the_response_message_is(world: &TodoWorld, message: String) -> Result<(), eyre::Report> {
    let status = world.status()?;
    if status.message != message {
        return Err(eyre::eyre!("expected message '{message}', got {status:?}"));
    }
    Ok(())
}

#[then(r#"the response errors include "{error}""#)]
fn the_response_errors_include(world: &TodoWorld, error: String) -> Result<(), eyre::Report> {
    let status = world.status()?;
    if !status.errors.contains(&error) {
        return Err(eyre::eyre!("expected error '{error}', got {status:?}"));
    }
    Ok(())
}

#[then(r#"the response errors are "{first}" then "{second}""#)]
fn the_response_errors_are(
    world: &TodoWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let status = world.status()?;
    if status.errors != [first.clone(), second.clone()] {
        return Err(eyre::eyre!(
            "expected errors ['{first}', '{second}'], got {status:?}"
        ));
    }
    Ok(())
}

#[then(r#"fetching the created todo returns the name "{name}""#)]
fn fetching_returns_name(world: &TodoWorld, name: String) -> Result<(), eyre::Report> {
    let id = world
        .last_created_id
        .ok_or_else(|| eyre::eyre!("no created todo in scenario world"))?;
    let response = run_async(world.service.get_by_id(Request::new(GetTodoByIdRequest { id })))
        .map_err(|status| eyre::eyre!("lookup failed at transport level: {status}"))?
        .into_inner();
    let found = response
        .data
        .ok_or_else(|| eyre::eyre!("expected todo {id} to exist, got {:?}", response.status))?;
    if found.name != name {
        return Err(eyre::eyre!("expected name '{name}', got '{}'", found.name));
    }
    Ok(())
}

#[then("listing todos returns {count:usize} entries")]
fn listing_returns_count(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let response = run_async(world.service.get_all(Request::new(GetAllTodosRequest {})))
        .map_err(|status| eyre::eyre!("listing failed at transport level: {status}"))?
        .into_inner();
    if response.data.len() != count {
        return Err(eyre::eyre!(
            "expected {count} todos, found {}",
            response.data.len()
        ));
    }
    Ok(())
}
