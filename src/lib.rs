pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod views;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Form, Router,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{error::AppError, repository::TodoStore};

#[derive(Debug, Clone)]
pub struct AppState {
    store: TodoStore,
}

/// The full HTTP surface. Handlers share nothing but the store handle.
pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/toggle/:id", post(toggle_todo))
        .route("/todos/:id", delete(delete_todo))
        .with_state(AppState { store })
}

async fn index() -> Markup {
    views::page()
}

async fn list_todos(State(state): State<AppState>) -> Result<Markup, AppError> {
    let todos = state.store.list_all()?;
    Ok(views::todo_list(&todos))
}

#[derive(Deserialize)]
struct CreateTodo {
    content: String,
}
async fn create_todo(
    State(state): State<AppState>,
    Form(CreateTodo { content }): Form<CreateTodo>,
) -> Result<Markup, AppError> {
    if content.is_empty() {
        return Err(AppError::Invalid("content cannot be empty".to_string()));
    }
    let todo = state.store.insert(content)?;
    tracing::debug!(id = todo.id, "created todo");
    Ok(views::todo_item(&todo))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Markup, AppError> {
    let todo = state.store.get(id)?.ok_or(AppError::NotFound(id))?;
    let todo = state
        .store
        .set_completed(id, !todo.completed)?
        .ok_or(AppError::NotFound(id))?;
    tracing::debug!(id, completed = todo.completed, "toggled todo");
    Ok(views::todo_item(&todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Markup, AppError> {
    state.store.delete(id)?;
    tracing::debug!(id, "deleted todo");
    Ok(html! {})
}
