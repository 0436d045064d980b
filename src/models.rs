//! Frontend Models
//!
//! Data structures persisted to browser storage.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// To-do item (stored under `tasks`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Named list card (stored under `savedLists`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    /// Never filled in, kept so stored snapshots round-trip unchanged
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub completed_items: u32,
    #[serde(default)]
    pub total_items: u32,
}

impl ListRecord {
    /// Completion percentage, 0 for a list with no items
    pub fn progress(&self) -> u32 {
        if self.total_items == 0 {
            return 0;
        }
        (f64::from(self.completed_items) / f64::from(self.total_items) * 100.0).round() as u32
    }

    /// Creation date as `dd/mm/yyyy` in the local time zone
    pub fn created_on(&self) -> String {
        self.created_at.with_timezone(&Local).format("%d/%m/%Y").to_string()
    }
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Completed => "completed",
            TaskFilter::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "Todas",
            TaskFilter::Completed => "Concluídas",
            TaskFilter::Pending => "Pendentes",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }
}

/// Page color scheme (stored under `theme`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` is light
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Icon on the toggle: the theme you would switch to
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// List categories: (key, icon, display name)
pub const CATEGORIES: &[(&str, &str, &str)] = &[
    ("compras", "🛒", "Compras"),
    ("tarefas", "📋", "Tarefas"),
    ("trabalho", "💼", "Trabalho"),
    ("estudos", "📚", "Estudos"),
    ("casa", "🏠", "Casa"),
    ("pessoal", "👤", "Pessoal"),
    ("outro", "🔖", "Outro"),
];

const UNKNOWN_CATEGORY_ICON: &str = "📁";
const UNKNOWN_CATEGORY_NAME: &str = "Outro";

pub fn category_icon(key: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, icon, _)| *icon)
        .unwrap_or(UNKNOWN_CATEGORY_ICON)
}

pub fn category_name(key: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, _, name)| *name)
        .unwrap_or(UNKNOWN_CATEGORY_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_list(completed_items: u32, total_items: u32) -> ListRecord {
        ListRecord {
            id: 1,
            name: "Groceries".to_string(),
            category: "compras".to_string(),
            color: "#ff6b9d".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
            items: Vec::new(),
            completed_items,
            total_items,
        }
    }

    #[test]
    fn test_progress() {
        assert_eq!(make_list(0, 0).progress(), 0);
        assert_eq!(make_list(3, 0).progress(), 0);
        assert_eq!(make_list(1, 3).progress(), 33);
        assert_eq!(make_list(2, 3).progress(), 67);
        assert_eq!(make_list(4, 4).progress(), 100);
    }

    #[test]
    fn test_reads_snapshot_written_by_old_pages() {
        let raw = r##"[{"id":1717686537151,"name":"Mercado","category":"compras","color":"#4ecdc4",
            "createdAt":"2024-06-06T15:08:57.151Z","items":[],"completedItems":0,"totalItems":0}]"##;
        let lists: Vec<ListRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(lists[0].id, 1717686537151);
        assert_eq!(lists[0].created_at.timestamp_millis(), 1717686537151);
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let raw = r##"{"id":1,"name":"x","category":"casa","color":"#fff","createdAt":"2024-06-06T15:08:57.151Z"}"##;
        let list: ListRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(list.total_items, 0);
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_task_uses_camel_case_fields() {
        let task = Task {
            id: 7,
            text: "Buy milk".to_string(),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["text"], "Buy milk");
    }

    #[test]
    fn test_filter_matches() {
        let mut task = Task {
            id: 1,
            text: "a".to_string(),
            completed: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        assert!(TaskFilter::All.matches(&task));
        assert!(TaskFilter::Completed.matches(&task));
        assert!(!TaskFilter::Pending.matches(&task));
        task.completed = false;
        assert!(TaskFilter::Pending.matches(&task));
    }

    #[test]
    fn test_theme_parse_defaults_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_category_lookup_with_fallback() {
        assert_eq!(category_icon("compras"), "🛒");
        assert_eq!(category_name("estudos"), "Estudos");
        assert_eq!(category_icon("viagem"), "📁");
        assert_eq!(category_name("viagem"), "Outro");
    }
}
