//! Given steps for todo CRUD BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_grpc::grpc::{TodoService, proto::CreateTodoRequest};
use tonic::Request;

#[given("an empty todo store")]
fn an_empty_todo_store(world: &mut TodoWorld) {
    world.last_created_id = None;
    world.last_status = None;
}

#[given(r#"a stored todo named "{name}""#)]
fn a_stored_todo_named(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    let response = run_async(world.service.create(Request::new(CreateTodoRequest { name })))
        .wrap_err("create todo for scenario")?
        .into_inner();
    if response.id <= 0 {
        return Err(eyre::eyre!("expected a stored todo, got {response:?}"));
    }
    world.last_created_id = Some(response.id);
    Ok(())
}
