//! `tonic` adapter exposing the todo dispatcher as `todo.v1.TodoService`.

use super::correlation::{correlation_id, with_correlation_id};
use super::envelope::{
    CODE_CREATED, CODE_NOT_FOUND, CODE_OK, CODE_UNPROCESSABLE, FailureClass, INTERNAL_ERROR,
    bad_input, failure, success,
};
use super::proto::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    GetAllTodosRequest, GetTodoByIdRequest, StatusData, TodoData, TodoListResponse, TodoResponse,
    UpdateTodoRequest, UpdateTodoResponse, todo_service_server::TodoService,
};
use crate::pipeline::{DispatchError, Request as PipelineRequest};
use crate::todo::{
    handlers::TodoHandlerError,
    requests::{
        CreateTodoCommand, CreateTodoDto, DeleteTodoCommand, GetAllTodosQuery, GetTodoByIdQuery,
        TodoDto, UpdateTodoCommand, UpdateTodoDto,
    },
    wiring::TodoDispatcher,
};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tonic::{Request, Response, Status};
use tracing::{Instrument, Span, error, info, info_span, warn};

/// Default per-call deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Boundary behaviour shared by every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryOptions {
    /// Deadline after which the call's cancellation token fires.
    pub request_timeout: Duration,
    /// Return internal error detail to callers. Development only.
    pub expose_error_details: bool,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            expose_error_details: false,
        }
    }
}

/// gRPC service translating wire messages into pipeline requests.
#[derive(Debug, Clone)]
pub struct TodoGrpcService {
    dispatcher: TodoDispatcher,
    options: BoundaryOptions,
}

impl TodoGrpcService {
    /// Creates the service over a built dispatcher.
    #[must_use]
    pub const fn new(dispatcher: TodoDispatcher, options: BoundaryOptions) -> Self {
        Self {
            dispatcher,
            options,
        }
    }

    /// Sends `request` with a token that fires on timeout or when the call
    /// is dropped.
    async fn dispatch<R>(&self, request: R) -> Result<R::Response, DispatchError<TodoHandlerError>>
    where
        R: PipelineRequest,
    {
        let cancellation = CancellationToken::new();
        let _cancel_on_drop = cancellation.clone().drop_guard();

        let deadline = cancellation.clone();
        let timeout = self.options.request_timeout;
        tokio::spawn(async move {
            tokio::select! {
                () = deadline.cancelled() => {}
                () = tokio::time::sleep(timeout) => {
                    warn!(timeout = ?timeout, "request deadline exceeded");
                    deadline.cancel();
                }
            }
        }
        .instrument(Span::current()));

        self.dispatcher.send(request, &cancellation).await
    }

    /// Maps a pipeline failure to an envelope or a transport status.
    fn reject(&self, err: DispatchError<TodoHandlerError>) -> Result<StatusData, Status> {
        match FailureClass::from(err) {
            FailureClass::BadInput(messages) => {
                warn!(errors = ?messages, "request rejected");
                Ok(bad_input(messages))
            }
            FailureClass::Cancelled => {
                warn!("request cancelled");
                Err(Status::cancelled("request cancelled or timed out"))
            }
            FailureClass::Internal(detail) => {
                error!(error = %detail, "request failed");
                if self.options.expose_error_details {
                    Err(Status::internal(detail))
                } else {
                    Err(Status::internal(INTERNAL_ERROR))
                }
            }
        }
    }

    async fn get_by_id_call(&self, id: i32) -> Result<TodoResponse, Status> {
        match self.dispatch(GetTodoByIdQuery::new(id)).await {
            Ok(Some(todo)) => Ok(TodoResponse {
                status: Some(success(CODE_OK, "record found")),
                data: Some(todo.into()),
            }),
            Ok(None) => Ok(TodoResponse {
                status: Some(failure(CODE_NOT_FOUND, "no record found", Vec::new())),
                data: None,
            }),
            Err(err) => Ok(TodoResponse {
                status: Some(self.reject(err)?),
                data: None,
            }),
        }
    }

    async fn get_all_call(&self) -> Result<TodoListResponse, Status> {
        match self.dispatch(GetAllTodosQuery).await {
            Ok(todos) if todos.is_empty() => Ok(TodoListResponse {
                status: Some(success(CODE_OK, "no records found")),
                data: Vec::new(),
            }),
            Ok(todos) => Ok(TodoListResponse {
                status: Some(success(CODE_OK, "record(s) found")),
                data: todos.into_iter().map(TodoData::from).collect(),
            }),
            Err(err) => Ok(TodoListResponse {
                status: Some(self.reject(err)?),
                data: Vec::new(),
            }),
        }
    }

    async fn create_call(&self, name: String) -> Result<CreateTodoResponse, Status> {
        let command = CreateTodoCommand::new(CreateTodoDto { name });
        match self.dispatch(command).await {
            Ok(id) if id > 0 => Ok(CreateTodoResponse {
                status: Some(success(CODE_CREATED, "record created successfully")),
                id,
            }),
            Ok(_) => Ok(CreateTodoResponse {
                status: Some(failure(CODE_UNPROCESSABLE, "unable to create", Vec::new())),
                id: 0,
            }),
            Err(err) => Ok(CreateTodoResponse {
                status: Some(self.reject(err)?),
                id: 0,
            }),
        }
    }

    async fn update_call(&self, id: i32, name: String) -> Result<UpdateTodoResponse, Status> {
        let command = UpdateTodoCommand::new(UpdateTodoDto { id, name });
        let status = match self.dispatch(command).await {
            Ok(true) => success(CODE_OK, "record updated successfully"),
            Ok(false) => failure(CODE_UNPROCESSABLE, "unable to update", Vec::new()),
            Err(err) => self.reject(err)?,
        };
        Ok(UpdateTodoResponse {
            status: Some(status),
        })
    }

    async fn delete_call(&self, id: i32) -> Result<DeleteTodoResponse, Status> {
        let status = match self.dispatch(DeleteTodoCommand::new(id)).await {
            Ok(true) => success(CODE_OK, "record deleted successfully"),
            Ok(false) => failure(CODE_UNPROCESSABLE, "unable to delete", Vec::new()),
            Err(err) => self.reject(err)?,
        };
        Ok(DeleteTodoResponse {
            status: Some(status),
        })
    }
}

/// Runs one call inside a span carrying its method and correlation id.
async fn traced<T, F>(method: &'static str, correlation_id: String, call: F) -> Result<Response<T>, Status>
where
    F: Future<Output = Result<T, Status>>,
{
    let span = info_span!("grpc_call", method, correlation_id = %correlation_id);
    async move {
        info!("call received");
        let body = call.await?;
        info!("call completed");
        Ok(with_correlation_id(Response::new(body), &correlation_id))
    }
    .instrument(span)
    .await
}

#[tonic::async_trait]
impl TodoService for TodoGrpcService {
    async fn get_by_id(
        &self,
        request: Request<GetTodoByIdRequest>,
    ) -> Result<Response<TodoResponse>, Status> {
        let correlation = correlation_id(&request);
        let id = request.into_inner().id;
        traced("GetById", correlation, self.get_by_id_call(id)).await
    }

    async fn get_all(
        &self,
        request: Request<GetAllTodosRequest>,
    ) -> Result<Response<TodoListResponse>, Status> {
        let correlation = correlation_id(&request);
        traced("GetAll", correlation, self.get_all_call()).await
    }

    async fn create(
        &self,
        request: Request<CreateTodoRequest>,
    ) -> Result<Response<CreateTodoResponse>, Status> {
        let correlation = correlation_id(&request);
        let name = request.into_inner().name;
        traced("Create", correlation, self.create_call(name)).await
    }

    async fn update(
        &self,
        request: Request<UpdateTodoRequest>,
    ) -> Result<Response<UpdateTodoResponse>, Status> {
        let correlation = correlation_id(&request);
        let UpdateTodoRequest { id, name } = request.into_inner();
        traced("Update", correlation, self.update_call(id, name)).await
    }

    async fn delete(
        &self,
        request: Request<DeleteTodoRequest>,
    ) -> Result<Response<DeleteTodoResponse>, Status> {
        let correlation = correlation_id(&request);
        let id = request.into_inner().id;
        traced("Delete", correlation, self.delete_call(id)).await
    }
}

impl From<TodoDto> for TodoData {
    fn from(todo: TodoDto) -> Self {
        Self {
            id: todo.id,
            name: todo.name,
        }
    }
}
