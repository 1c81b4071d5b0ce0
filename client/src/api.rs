//! Stateless request builder and response parser for the todo REST API.
//!
//! # Design
//! `TodoApi` holds only the base URL. Each remote operation is split into a
//! `build_*` method producing an `HttpRequest` and a `parse_*` method
//! consuming an `HttpResponse`, so the layer that owns the network (see
//! `TodoService`) stays a thin adapter. Status interpretation is uniform:
//! anything other than the expected success code becomes a `ServerError`.
//!
//! Title validation is deliberately absent here — submitting a blank title is
//! blocked by the caller before a request is ever built (see `TodoList`).

use crate::error::ServerError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::todo::Todo;

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Builds and parses the five todo API round-trips without touching the
/// network.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/todos/getTodos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/todos/getTodo/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Serialize a draft for creation. The draft's missing `id` is omitted
    /// from the body; the server assigns one.
    pub fn build_create_todo(&self, todo: &Todo) -> Result<HttpRequest, ServerError> {
        let body = serde_json::to_string(todo).map_err(|e| ServerError::from_error(&e))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/todos/createTodo", self.base_url),
            headers: vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            body: Some(body),
        })
    }

    /// Serialize a full record for update. The todo must already have an
    /// `id`; updating a draft is an error before any request is produced.
    pub fn build_update_todo(&self, todo: &Todo) -> Result<HttpRequest, ServerError> {
        let id = todo
            .id
            .as_deref()
            .ok_or_else(|| ServerError::new("cannot update a todo that has no id"))?;
        let body = serde_json::to_string(todo).map_err(|e| ServerError::from_error(&e))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/api/todos/updateTodo/{id}", self.base_url),
            headers: vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/api/todos/deleteTodo/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_get_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ServerError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ServerError::from_error(&e))
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ServerError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ServerError::from_error(&e))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ServerError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ServerError::from_error(&e))
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ServerError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ServerError::from_error(&e))
    }

    /// Delete signals success by status alone; any body is ignored.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ServerError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ServerError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ServerError::from_status(response.status, &response.body))
}
