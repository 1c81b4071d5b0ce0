//! Client library for a remote todo-list REST API.
//!
//! # Overview
//! Four remote operations — list, create, update, delete (plus fetch-by-id)
//! — against a base URL taken from the environment, with every failure
//! normalized to a single [`ServerError`] carrying the upstream message.
//!
//! # Design
//! - [`TodoApi`] is the deterministic core: it builds [`HttpRequest`] values
//!   and parses [`HttpResponse`] values without touching the network.
//! - [`TodoService`] is the async surface: it executes those requests over
//!   reqwest, one stateless round trip per call.
//! - [`TodoList`] holds the presentation-side state (arrival-ordered
//!   collection, new-item draft, copy-on-edit slot, optimistic completion
//!   toggle with revert) and performs the blank-title check the access
//!   client deliberately skips.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod list;
pub mod service;
pub mod todo;

pub use api::TodoApi;
pub use config::Config;
pub use error::ServerError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::TodoList;
pub use service::TodoService;
pub use todo::Todo;
