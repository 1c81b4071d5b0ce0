//! The todo record and its draft constructor.
//!
//! # Design
//! `id` is an opaque string assigned by the server; a todo without one is a
//! draft that has never been persisted. `created_at` is stamped client-side
//! when the draft is made and the server keeps its own authoritative value,
//! so the field is never mutated after construction. No validation happens
//! here — callers check the title before submitting (see `TodoList`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// Serializes to the wire shape `{id, title, completed, createdAt}`. Drafts
/// (`id == None`) omit the `id` field entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// A blank, unsaved draft: empty title, not completed, stamped now.
    pub fn create_new() -> Self {
        Self {
            id: None,
            title: String::new(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Construct from optional parts. A missing `created_at` defaults to now;
    /// a missing `title` or `completed` defaults to empty / `false`.
    pub fn new(
        id: Option<String>,
        title: Option<String>,
        completed: Option<bool>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title: title.unwrap_or_default(),
            completed: completed.unwrap_or(false),
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Whether the title is non-blank once trimmed. The access client never
    /// checks this itself; callers gate create/update submissions with it.
    pub fn has_valid_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_new_is_a_blank_draft() {
        let before = Utc::now();
        let todo = Todo::create_new();
        assert!(todo.id.is_none());
        assert!(todo.title.is_empty());
        assert!(!todo.completed);
        assert!(todo.created_at >= before);
    }

    #[test]
    fn new_defaults_missing_fields() {
        let before = Utc::now();
        let todo = Todo::new(Some("t1".to_string()), None, None, None);
        assert_eq!(todo.id.as_deref(), Some("t1"));
        assert!(todo.title.is_empty());
        assert!(!todo.completed);
        assert!(todo.created_at >= before);
    }

    #[test]
    fn new_keeps_supplied_timestamp() {
        let stamp = "2024-05-01T08:30:00Z".parse().unwrap();
        let todo = Todo::new(None, Some("Buy milk".to_string()), Some(true), Some(stamp));
        assert_eq!(todo.created_at, stamp);
        assert_eq!(todo.title, "Buy milk");
        assert!(todo.completed);
    }

    #[test]
    fn draft_serializes_without_id() {
        let todo = Todo::create_new();
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "");
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn persisted_todo_roundtrips_through_json() {
        let todo = Todo::new(
            Some("t1".to_string()),
            Some("Walk dog".to_string()),
            Some(false),
            Some("2024-05-01T08:30:00Z".parse().unwrap()),
        );
        let json = serde_json::to_string(&todo).unwrap();
        assert!(json.contains("\"createdAt\""));
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn blank_title_is_invalid() {
        let mut todo = Todo::create_new();
        assert!(!todo.has_valid_title());
        todo.title = "   ".to_string();
        assert!(!todo.has_valid_title());
        todo.title = " Buy milk ".to_string();
        assert!(todo.has_valid_title());
    }
}
