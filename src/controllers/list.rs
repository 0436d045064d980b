//! List Controller
//!
//! Named, categorized lists with search and a shared create/edit modal.

use crate::clock::{Clock, IdGenerator};
use crate::error::{AppResult, ValidationError};
use crate::html::{escape_html, is_hex_color};
use crate::models::{category_icon, category_name, ListRecord};
use crate::notify::{self, Notification, Notifier};
use crate::storage::{self, KeyValueStore};

/// What the modal's submit button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Create,
    Edit(i64),
}

impl ModalMode {
    pub fn title(&self) -> &'static str {
        match self {
            ModalMode::Create => "Criar Nova Lista",
            ModalMode::Edit(_) => "Editar Lista",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            ModalMode::Create => "Criar Lista",
            ModalMode::Edit(_) => "Atualizar Lista",
        }
    }
}

/// Modal form contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListDraft {
    pub name: String,
    pub category: String,
    pub color: Option<String>,
}

/// Category part of the list filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` or a category key, as carried by the filter buttons
    pub fn parse(s: &str) -> Self {
        match s {
            "all" | "" => CategoryFilter::All,
            key => CategoryFilter::Only(key.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(key) => key,
        }
    }

    fn matches(&self, list: &ListRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => list.category == *key,
        }
    }
}

/// Delete awaiting confirmation. Only `confirm_delete` consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingDelete {
    id: i64,
}

impl PendingDelete {
    pub fn id(&self) -> i64 {
        self.id
    }
}

/// One rendered list card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListCard {
    pub id: i64,
    /// Escaped, safe to insert as markup
    pub name_html: String,
    pub icon: &'static str,
    pub category_name: &'static str,
    pub color: String,
    /// `completed/total itens`
    pub stats: String,
    pub created_on: String,
    pub progress: u32,
}

impl From<&ListRecord> for ListCard {
    fn from(list: &ListRecord) -> Self {
        Self {
            id: list.id,
            name_html: escape_html(&list.name),
            icon: category_icon(&list.category),
            category_name: category_name(&list.category),
            color: list.color.clone(),
            stats: format!("{}/{} itens", list.completed_items, list.total_items),
            created_on: list.created_on(),
            progress: list.progress(),
        }
    }
}

pub struct ListController<S, C, N> {
    lists: Vec<ListRecord>,
    category: CategoryFilter,
    /// Search term as typed
    search: String,
    key: &'static str,
    default_color: &'static str,
    ids: IdGenerator,
    store: S,
    clock: C,
    notifier: N,
}

impl<S: KeyValueStore, C: Clock, N: Notifier> ListController<S, C, N> {
    pub fn load(
        store: S,
        clock: C,
        notifier: N,
        key: &'static str,
        default_color: &'static str,
    ) -> Self {
        let lists: Vec<ListRecord> = storage::load_or_empty(&store, key);
        log::debug!("[lists] loaded {} lists", lists.len());
        Self {
            ids: IdGenerator::seeded_from(lists.iter().map(|l| l.id)),
            lists,
            category: CategoryFilter::All,
            search: String::new(),
            key,
            default_color,
            store,
            clock,
            notifier,
        }
    }

    pub fn lists(&self) -> &[ListRecord] {
        &self.lists
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Modal contents for editing an existing list
    pub fn draft_for(&self, id: i64) -> Option<ListDraft> {
        self.lists.iter().find(|l| l.id == id).map(|l| ListDraft {
            name: l.name.clone(),
            category: l.category.clone(),
            color: Some(l.color.clone()),
        })
    }

    /// Single submit handler for the modal
    pub fn submit(&mut self, mode: ModalMode, draft: ListDraft) -> AppResult<()> {
        match mode {
            ModalMode::Create => self.create(draft).map(|_| ()),
            ModalMode::Edit(id) => self.update(id, draft).map(|_| ()),
        }
    }

    /// Prepend a new empty list. Returns its id.
    pub fn create(&mut self, draft: ListDraft) -> AppResult<i64> {
        let (name, category, color) = self.validate(draft)?;
        let now = self.clock.now();
        let list = ListRecord {
            id: self.ids.next(now.timestamp_millis()),
            name,
            category,
            color,
            created_at: now,
            items: Vec::new(),
            completed_items: 0,
            total_items: 0,
        };
        let id = list.id;
        log::debug!("[lists] create {}", id);
        self.lists.insert(0, list);
        if self.persist() {
            self.notifier.notify(Notification::success("Lista criada com sucesso!"));
        }
        Ok(id)
    }

    /// Overwrite name, category and color. `false` when the id is unknown.
    pub fn update(&mut self, id: i64, draft: ListDraft) -> AppResult<bool> {
        if !self.lists.iter().any(|l| l.id == id) {
            return Ok(false);
        }
        let (name, category, color) = self.validate(draft)?;
        if let Some(list) = self.lists.iter_mut().find(|l| l.id == id) {
            list.name = name;
            list.category = category;
            list.color = color;
        }
        log::debug!("[lists] update {}", id);
        if self.persist() {
            self.notifier.notify(Notification::success("Lista atualizada com sucesso!"));
        }
        Ok(true)
    }

    /// First step of a delete. `None` when the id is unknown.
    pub fn request_delete(&self, id: i64) -> Option<PendingDelete> {
        self.lists.iter().any(|l| l.id == id).then_some(PendingDelete { id })
    }

    /// Second step of a delete
    pub fn confirm_delete(&mut self, pending: PendingDelete) -> bool {
        let before = self.lists.len();
        self.lists.retain(|l| l.id != pending.id);
        if self.lists.len() == before {
            return false;
        }
        log::debug!("[lists] delete {}", pending.id);
        if self.persist() {
            self.notifier.notify(Notification::success("Lista excluída com sucesso!"));
        }
        true
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn open(&self, id: i64) {
        self.notifier.notify(Notification::info(format!(
            "Abrindo lista {} - Página em desenvolvimento",
            id
        )));
    }

    /// Lists passing both the category and the search filter, in order
    pub fn filtered(&self) -> impl Iterator<Item = &ListRecord> {
        let needle = self.search.to_lowercase();
        self.lists.iter().filter(move |l| {
            self.category.matches(l) && l.name.to_lowercase().contains(&needle)
        })
    }

    pub fn view(&self) -> Vec<ListCard> {
        self.filtered().map(ListCard::from).collect()
    }

    fn validate(&self, draft: ListDraft) -> AppResult<(String, String, String)> {
        let name = draft.name.trim().to_string();
        if name.is_empty() || draft.category.is_empty() {
            return Err(notify::reject(&self.notifier, ValidationError::MissingListFields));
        }
        let color = match draft.color {
            Some(color) if is_hex_color(&color) => color,
            Some(color) => {
                log::warn!("[lists] ignoring invalid color {:?}", color);
                self.default_color.to_string()
            }
            None => self.default_color.to_string(),
        };
        Ok((name, draft.category, color))
    }

    fn persist(&self) -> bool {
        match storage::save_collection(&self.store, self.key, &self.lists) {
            Ok(()) => true,
            Err(err) => {
                notify::save_failed(&self.notifier, err);
                false
            }
        }
    }
}
