//! Async access client executing the todo API round-trips.
//!
//! # Design
//! `TodoService` pairs a pooled `reqwest::Client` with the deterministic
//! `TodoApi` build/parse layer. Each operation is one stateless round trip:
//! no retries, no caching, no coordination between concurrent calls on the
//! same id. Callers compose the returned futures however they like and get
//! every failure as a `ServerError`.

use crate::api::TodoApi;
use crate::config::Config;
use crate::error::ServerError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::todo::Todo;

/// Async client for the todo REST API.
#[derive(Debug, Clone)]
pub struct TodoService {
    http: reqwest::Client,
    api: TodoApi,
}

impl TodoService {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing `reqwest::Client`, e.g. to share its connection pool.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            api: TodoApi::new(base_url),
        }
    }

    /// Fetch every todo. Empty vec when none exist.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, ServerError> {
        let response = self.execute(self.api.build_get_todos()).await?;
        self.api.parse_get_todos(response)
    }

    /// Fetch a single todo by its server-assigned id.
    pub async fn get_todo(&self, id: &str) -> Result<Todo, ServerError> {
        let response = self.execute(self.api.build_get_todo(id)).await?;
        self.api.parse_get_todo(response)
    }

    /// Submit a draft; the returned todo carries the server-assigned id.
    /// Blank titles are not checked here — that is the caller's job.
    pub async fn create_todo(&self, todo: &Todo) -> Result<Todo, ServerError> {
        let response = self.execute(self.api.build_create_todo(todo)?).await?;
        self.api.parse_create_todo(response)
    }

    /// Submit a complete record, replacing the stored one with the same id.
    pub async fn update_todo(&self, todo: &Todo) -> Result<Todo, ServerError> {
        let response = self.execute(self.api.build_update_todo(todo)?).await?;
        self.api.parse_update_todo(response)
    }

    /// Remove the todo with the given id. Success carries no payload.
    pub async fn delete_todo(&self, id: &str) -> Result<(), ServerError> {
        let response = self.execute(self.api.build_delete_todo(id)).await?;
        self.api.parse_delete_todo(response)
    }

    /// Run one `HttpRequest` over reqwest, normalizing transport failures.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ServerError> {
        tracing::debug!(method = ?request.method, url = %request.url, "sending todo API request");
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
            HttpMethod::Put => self.http.put(&request.url),
            HttpMethod::Delete => self.http.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| ServerError::from_error(&e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ServerError::from_error(&e))?;
        Ok(HttpResponse { status, body })
    }
}
