//! Presentation-side state for a todo list.
//!
//! # Design
//! `TodoList` owns what the list screen needs between server calls: the
//! fetched todos in arrival order, a new-item draft, and a copy-on-edit slot.
//! It performs no I/O itself — the caller runs `TodoService` operations and
//! feeds the confirmed results back through the `apply_*` methods.
//!
//! The completion toggle is optimistic: the flag flips locally first and the
//! caller gets a snapshot of the previous value to restore if the update is
//! rejected. Blank titles are caught here, before any request is built.

use crate::todo::Todo;

/// In-memory list state: fetched todos, a new-item draft, and an edit copy.
#[derive(Debug, Clone)]
pub struct TodoList {
    todos: Vec<Todo>,
    draft: Todo,
    editing: Option<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            draft: Todo::create_new(),
            editing: None,
        }
    }

    /// The todos in display order: fetch order, new items appended.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Replace the collection with a fresh fetch result.
    pub fn set_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// The new-item draft being filled in.
    pub fn draft(&self) -> &Todo {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Todo {
        &mut self.draft
    }

    /// The draft, only if its title survives trimming. `None` means the
    /// submission must be blocked before any network call.
    pub fn valid_draft(&self) -> Option<&Todo> {
        self.draft.has_valid_title().then_some(&self.draft)
    }

    /// Record a confirmed creation: append it and reset the draft.
    pub fn apply_created(&mut self, todo: Todo) {
        self.todos.push(todo);
        self.draft = Todo::create_new();
    }

    /// Clone the stored todo into the edit slot. Returns `false` for an
    /// unknown id.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.find(id) {
            Some(index) => {
                self.editing = Some(self.todos[index].clone());
                true
            }
            None => false,
        }
    }

    pub fn editing(&self) -> Option<&Todo> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut Todo> {
        self.editing.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The edit copy, only if its title survives trimming.
    pub fn valid_edit(&self) -> Option<&Todo> {
        self.editing.as_ref().filter(|t| t.has_valid_title())
    }

    /// Record a confirmed update: replace the stored record in place (matched
    /// by id, at most once) and close any edit in progress.
    pub fn apply_updated(&mut self, todo: Todo) {
        if let Some(id) = todo.id.as_deref() {
            if let Some(index) = self.find(id) {
                self.todos[index] = todo;
            }
        }
        self.editing = None;
    }

    /// Flip `completed` locally before the server confirms. Returns the
    /// previous value to hand back to `revert_completed` on failure, or
    /// `None` for an unknown id.
    pub fn toggle_completed(&mut self, id: &str) -> Option<bool> {
        let index = self.find(id)?;
        let previous = self.todos[index].completed;
        self.todos[index].completed = !previous;
        Some(previous)
    }

    /// Compensate a failed optimistic toggle.
    pub fn revert_completed(&mut self, id: &str, previous: bool) {
        if let Some(index) = self.find(id) {
            self.todos[index].completed = previous;
        }
    }

    /// Record a confirmed deletion.
    pub fn apply_deleted(&mut self, id: &str) {
        self.todos.retain(|t| t.id.as_deref() != Some(id));
    }

    fn find(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|t| t.id.as_deref() == Some(id))
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(id: &str, title: &str, completed: bool) -> Todo {
        Todo::new(
            Some(id.to_string()),
            Some(title.to_string()),
            Some(completed),
            Some("2024-05-01T08:30:00Z".parse().unwrap()),
        )
    }

    fn list_with(todos: Vec<Todo>) -> TodoList {
        let mut list = TodoList::new();
        list.set_todos(todos);
        list
    }

    #[test]
    fn starts_empty_with_a_blank_draft() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert!(list.draft().id.is_none());
        assert!(list.editing().is_none());
    }

    #[test]
    fn blank_draft_is_blocked_before_submission() {
        let mut list = TodoList::new();
        assert!(list.valid_draft().is_none());
        list.draft_mut().title = "   ".to_string();
        assert!(list.valid_draft().is_none());
        list.draft_mut().title = "Buy milk".to_string();
        assert!(list.valid_draft().is_some());
    }

    #[test]
    fn apply_created_appends_and_resets_draft() {
        let mut list = TodoList::new();
        list.draft_mut().title = "Buy milk".to_string();
        list.apply_created(persisted("t1", "Buy milk", false));
        assert_eq!(list.len(), 1);
        assert_eq!(list.todos()[0].id.as_deref(), Some("t1"));
        assert!(list.draft().title.is_empty());
    }

    #[test]
    fn display_order_follows_arrival() {
        let mut list = list_with(vec![persisted("t1", "First", false)]);
        list.apply_created(persisted("t2", "Second", false));
        let ids: Vec<_> = list.todos().iter().map(|t| t.id.as_deref().unwrap()).collect();
        assert_eq!(ids, ["t1", "t2"]);
    }

    #[test]
    fn start_edit_clones_instead_of_aliasing() {
        let mut list = list_with(vec![persisted("t1", "Buy milk", false)]);
        assert!(list.start_edit("t1"));
        list.editing_mut().unwrap().title = "Buy oat milk".to_string();
        // The stored todo is untouched until the server confirms.
        assert_eq!(list.todos()[0].title, "Buy milk");
    }

    #[test]
    fn start_edit_unknown_id_is_refused() {
        let mut list = TodoList::new();
        assert!(!list.start_edit("missing"));
    }

    #[test]
    fn blank_edit_title_is_blocked() {
        let mut list = list_with(vec![persisted("t1", "Buy milk", false)]);
        list.start_edit("t1");
        list.editing_mut().unwrap().title = " ".to_string();
        assert!(list.valid_edit().is_none());
    }

    #[test]
    fn apply_updated_replaces_exactly_once_and_closes_edit() {
        let mut list = list_with(vec![
            persisted("t1", "Buy milk", false),
            persisted("t2", "Walk dog", false),
        ]);
        list.start_edit("t1");
        list.apply_updated(persisted("t1", "Buy oat milk", true));
        assert_eq!(list.len(), 2);
        assert_eq!(list.todos()[0].title, "Buy oat milk");
        assert!(list.todos()[0].completed);
        assert_eq!(list.todos()[1].title, "Walk dog");
        assert!(list.editing().is_none());
    }

    #[test]
    fn toggle_returns_snapshot_and_revert_restores_it() {
        let mut list = list_with(vec![persisted("t1", "Buy milk", false)]);
        let previous = list.toggle_completed("t1").unwrap();
        assert!(!previous);
        assert!(list.todos()[0].completed);
        // Simulate a rejected update: compensate with the snapshot.
        list.revert_completed("t1", previous);
        assert!(!list.todos()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_refused() {
        let mut list = TodoList::new();
        assert!(list.toggle_completed("missing").is_none());
    }

    #[test]
    fn apply_deleted_filters_by_id() {
        let mut list = list_with(vec![
            persisted("t1", "Buy milk", false),
            persisted("t2", "Walk dog", false),
        ]);
        list.apply_deleted("t1");
        assert_eq!(list.len(), 1);
        assert_eq!(list.todos()[0].id.as_deref(), Some("t2"));
    }
}
