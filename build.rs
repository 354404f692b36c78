//! Generates the tonic service glue for the `todo.v1.TodoService` gRPC API.
//!
//! Messages are declared by hand with `prost` derives in `src/grpc/proto.rs`,
//! so the manual service builder is used and no `protoc` binary is needed.

use tonic_build::manual::{Builder, Method, Service};

const PROTO_PATH: &str = "crate::grpc::proto";
const CODEC_PATH: &str = "tonic::codec::ProstCodec";

fn unary(name: &str, route_name: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(format!("{PROTO_PATH}::{input}"))
        .output_type(format!("{PROTO_PATH}::{output}"))
        .codec_path(CODEC_PATH)
        .build()
}

fn main() {
    let service = Service::builder()
        .name("TodoService")
        .package("todo.v1")
        .method(unary(
            "get_by_id",
            "GetById",
            "GetTodoByIdRequest",
            "TodoResponse",
        ))
        .method(unary(
            "get_all",
            "GetAll",
            "GetAllTodosRequest",
            "TodoListResponse",
        ))
        .method(unary(
            "create",
            "Create",
            "CreateTodoRequest",
            "CreateTodoResponse",
        ))
        .method(unary(
            "update",
            "Update",
            "UpdateTodoRequest",
            "UpdateTodoResponse",
        ))
        .method(unary(
            "delete",
            "Delete",
            "DeleteTodoRequest",
            "DeleteTodoResponse",
        ))
        .build();

    Builder::new().compile(&[service]);
}
