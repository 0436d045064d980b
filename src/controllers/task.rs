//! Task Controller
//!
//! Flat to-do list persisted under a single storage key.

use crate::clock::{Clock, IdGenerator};
use crate::error::{AppResult, ValidationError};
use crate::html::escape_html;
use crate::models::{Task, TaskFilter};
use crate::notify::{self, Notification, Notifier};
use crate::storage::{self, KeyValueStore};

/// One rendered task row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: i64,
    /// Escaped, safe to insert as markup
    pub text_html: String,
    pub completed: bool,
}

/// Everything the task page draws
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListView {
    pub rows: Vec<TaskRow>,
    pub filter: TaskFilter,
    pub total: usize,
    pub completed: usize,
}

impl TaskListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct TaskController<S, C, N> {
    tasks: Vec<Task>,
    filter: TaskFilter,
    key: &'static str,
    ids: IdGenerator,
    store: S,
    clock: C,
    notifier: N,
}

impl<S: KeyValueStore, C: Clock, N: Notifier> TaskController<S, C, N> {
    /// Load the stored snapshot once for the page session
    pub fn load(store: S, clock: C, notifier: N, key: &'static str) -> Self {
        let tasks: Vec<Task> = storage::load_or_empty(&store, key);
        log::debug!("[tasks] loaded {} tasks", tasks.len());
        Self {
            ids: IdGenerator::seeded_from(tasks.iter().map(|t| t.id)),
            tasks,
            filter: TaskFilter::All,
            key,
            store,
            clock,
            notifier,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Prepend a new pending task. Returns its id.
    pub fn add(&mut self, text: &str) -> AppResult<i64> {
        let text = text.trim();
        if text.is_empty() {
            return Err(notify::reject(&self.notifier, ValidationError::EmptyTaskText));
        }

        let now = self.clock.now();
        let task = Task {
            id: self.ids.next(now.timestamp_millis()),
            text: text.to_string(),
            completed: false,
            created_at: now,
        };
        let id = task.id;
        log::debug!("[tasks] add {}", id);
        self.tasks.insert(0, task);
        if self.persist() {
            self.notifier.notify(Notification::success("Tarefa adicionada!"));
        }
        Ok(id)
    }

    /// Flip completion. `None` when the id is unknown.
    pub fn toggle(&mut self, id: i64) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        log::debug!("[tasks] toggle {} -> {}", id, completed);
        self.persist();
        Some(completed)
    }

    /// Remove by id. Notifies even when nothing matched.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        log::debug!("[tasks] remove {} (found: {})", id, removed);
        if self.persist() {
            self.notifier.notify(Notification::success("Tarefa removida!"));
        }
        removed
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Filtered rows plus counters over the whole collection
    pub fn view(&self) -> TaskListView {
        let rows = self
            .tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .map(|t| TaskRow {
                id: t.id,
                text_html: escape_html(&t.text),
                completed: t.completed,
            })
            .collect();
        TaskListView {
            rows,
            filter: self.filter,
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// Write the snapshot. On failure the user is told and memory stays ahead.
    fn persist(&self) -> bool {
        match storage::save_collection(&self.store, self.key, &self.tasks) {
            Ok(()) => true,
            Err(err) => {
                notify::save_failed(&self.notifier, err);
                false
            }
        }
    }
}
