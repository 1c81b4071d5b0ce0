//! HTTP round-trips described as plain data.
//!
//! # Design
//! `TodoApi` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; the executing side (`TodoService`, or a test
//! harness) performs the actual I/O in between. Keeping the request/response
//! shapes as owned plain data makes the build/parse layer deterministic and
//! testable without a socket.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An outgoing request, ready to be executed by any transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A completed response, as seen by the parse layer. Only the status and the
/// body text matter to the todo API contract.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
