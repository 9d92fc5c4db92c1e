use axum::{
    body::HttpBody,
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::Json,
    routing::get,
    BoxError, Router,
};
use serde::Deserialize;
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::remove_books_by_title_cmd::{RemoveBooksByTitleCommand, RemoveBooksByTitleCommandRequest, RemoveBooksByTitleCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::update_book_by_title_cmd::{UpdateBookByTitleCommand, UpdateBookByTitleCommandRequest, UpdateBookByTitleCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::books::dto::BookDetailsDto;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, rejection_to_server_error, ServerError};

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

/// Routes of the catalog API. Generic over the request body so the same router
/// serves a local hyper server and AWS Lambda.
pub fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/api/v1/books",
               get(search_books).post(add_book).put(update_book_by_title).delete(remove_books_by_title))
        .route("/api/v1/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state)
}

fn json_body(json: Result<Json<Value>, JsonRejection>) -> Result<Value, ServerError> {
    json.map(|Json(value)| value)
        .map_err(|rejection| rejection_to_server_error(rejection.status(), rejection.body_text()))
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ServerError> {
    query.map(|Query(params)| params)
        .map_err(|rejection| rejection_to_server_error(rejection.status(), rejection.body_text()))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn search_books(
    State(state): State<AppState>,
    query: Result<Query<SearchBooksCommandRequest>, QueryRejection>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let req = query_params(query)?;
    let res = SearchBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json_body(json)?).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_book_by_title(
    State(state): State<AppState>,
    query: Result<Query<TitleQuery>, QueryRejection>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookByTitleCommandResponse>, ServerError> {
    let query = query_params(query)?;
    let book: BookDetailsDto = serde_json::from_value(json_body(json)?).map_err(json_to_server_error)?;
    let req = UpdateBookByTitleCommandRequest { title: query.title, book };
    let res = UpdateBookByTitleCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let book: BookDetailsDto = serde_json::from_value(json_body(json)?).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest { book_id, book };
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_books_by_title(
    State(state): State<AppState>,
    query: Result<Query<TitleQuery>, QueryRejection>) -> Result<Json<RemoveBooksByTitleCommandResponse>, ServerError> {
    let req = RemoveBooksByTitleCommandRequest { title: query_params(query)?.title };
    let res = RemoveBooksByTitleCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}
