//! Request handlers.

use super::{ApiError, AppState};
use crate::todo::{
    domain::{TodoId, TodoItem, TodoStatistics},
    ports::TodoRepository,
};
use crate::tools::ToolDefinition;
use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use mockable::Clock;
use serde::Deserialize;
use serde_json::{Value, json};

type ApiResult<T> = Result<T, ApiError>;

/// Body of `POST /todos` and `PUT /todos/:id`.
#[derive(Debug, Deserialize)]
pub(super) struct TextBody {
    text: String,
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))
}

fn path<T>(segment: Result<Path<T>, PathRejection>) -> ApiResult<T> {
    segment
        .map(|Path(value)| value)
        .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))
}

fn todo_id(segment: Result<Path<i64>, PathRejection>) -> ApiResult<TodoId> {
    path(segment).map(TodoId::new)
}

#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub(super) async fn health() -> &'static str {
    "OK"
}

pub(super) async fn list_todos<R, C>(
    State(state): State<AppState<R, C>>,
) -> ApiResult<Json<Vec<TodoItem>>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.service.list().await?))
}

pub(super) async fn create_todo<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoItem>)>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let request = body(payload)?;
    let created = state.service.create(&request.text).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn todo_statistics<R, C>(
    State(state): State<AppState<R, C>>,
) -> ApiResult<Json<TodoStatistics>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.service.statistics().await?))
}

pub(super) async fn get_todo<R, C>(
    State(state): State<AppState<R, C>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TodoItem>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let item_id = todo_id(id)?;
    state
        .service
        .get_by_id(item_id)
        .await?
        .map(Json)
        .ok_or(ApiError::Missing(item_id))
}

pub(super) async fn update_todo<R, C>(
    State(state): State<AppState<R, C>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TextBody>, JsonRejection>,
) -> ApiResult<Json<TodoItem>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let item_id = todo_id(id)?;
    let request = body(payload)?;
    let updated = state.service.update(item_id, &request.text).await?;
    Ok(Json(updated))
}

pub(super) async fn complete_todo<R, C>(
    State(state): State<AppState<R, C>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TodoItem>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.service.complete(todo_id(id)?).await?))
}

pub(super) async fn delete_todo<R, C>(
    State(state): State<AppState<R, C>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.service.delete(todo_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub(super) async fn list_tools<R, C>(
    State(state): State<AppState<R, C>>,
) -> Json<Vec<ToolDefinition>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(state.tools.list_tools().to_vec())
}

/// An empty body is treated as an empty argument object.
pub(super) async fn invoke_tool<R, C>(
    State(state): State<AppState<R, C>>,
    name: Result<Path<String>, PathRejection>,
    raw: Bytes,
) -> ApiResult<Json<Value>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tool = path(name)?;
    let arguments = if raw.iter().all(u8::is_ascii_whitespace) {
        json!({})
    } else {
        serde_json::from_slice(&raw)
            .map_err(|err| ApiError::MalformedRequest(err.to_string()))?
    };
    let result = state.tools.invoke(&tool, arguments).await?;
    Ok(Json(json!({ "result": result })))
}
