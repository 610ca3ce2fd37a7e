//! Draft snapshot and the record derived from it on submit

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of personas a draft always keeps
pub const MIN_PERSONAS: usize = 2;
/// Minimum number of subreddits a draft always keeps
pub const MIN_SUBREDDITS: usize = 1;
/// Minimum number of queries a draft always keeps
pub const MIN_QUERIES: usize = 1;

/// Opaque identifier of a list item, unique within its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a variable-length text list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: ItemId,
    pub value: String,
}

impl ListItem {
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            value: String::new(),
        }
    }
}

/// The three variable-length lists of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Personas,
    Subreddits,
    Queries,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Personas, ListKind::Subreddits, ListKind::Queries];

    /// Smallest length the list may shrink to
    pub fn minimum(self) -> usize {
        match self {
            Self::Personas => MIN_PERSONAS,
            Self::Subreddits => MIN_SUBREDDITS,
            Self::Queries => MIN_QUERIES,
        }
    }

    /// Lowercase plural used in messages
    pub fn noun(self) -> &'static str {
        match self {
            Self::Personas => "personas",
            Self::Subreddits => "subreddits",
            Self::Queries => "queries",
        }
    }

    /// Section title shown above the list
    pub fn title(self) -> &'static str {
        match self {
            Self::Personas => "Personas (Minimum 2)",
            Self::Subreddits => "Subreddits",
            Self::Queries => "ChatGPT Queries to Target",
        }
    }

    /// Placeholder label for a single row, e.g. "Persona 1"
    pub fn item_label(self, index: usize) -> String {
        match self {
            Self::Personas => format!("Persona {}", index + 1),
            Self::Subreddits => "r/subreddit".to_string(),
            Self::Queries => format!("Query {}", index + 1),
        }
    }
}

/// Complete in-progress form state.
///
/// A `Draft` is treated as an immutable snapshot: every `with_*` method
/// returns a new value and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub company_info: String,
    pub personas: Vec<ListItem>,
    pub subreddits: Vec<ListItem>,
    pub queries: Vec<ListItem>,
    pub posts_per_week: u32,
}

impl Draft {
    /// The draft a freshly mounted form starts with, ids numbered from 1
    pub fn initial() -> Self {
        let mut raw = 0;
        Self::initial_with(|| {
            raw += 1;
            ItemId::new(raw)
        })
    }

    /// Initial shape (blank text, minimum-length lists of empty items, zero
    /// posts) with item ids drawn from `next_id`
    pub fn initial_with(mut next_id: impl FnMut() -> ItemId) -> Self {
        let mut blank = |count: usize| -> Vec<ListItem> {
            (0..count).map(|_| ListItem::empty(next_id())).collect()
        };
        Self {
            company_info: String::new(),
            personas: blank(MIN_PERSONAS),
            subreddits: blank(MIN_SUBREDDITS),
            queries: blank(MIN_QUERIES),
            posts_per_week: 0,
        }
    }

    pub fn list(&self, kind: ListKind) -> &[ListItem] {
        match kind {
            ListKind::Personas => &self.personas,
            ListKind::Subreddits => &self.subreddits,
            ListKind::Queries => &self.queries,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<ListItem> {
        match kind {
            ListKind::Personas => &mut self.personas,
            ListKind::Subreddits => &mut self.subreddits,
            ListKind::Queries => &mut self.queries,
        }
    }

    /// True when an item of `kind` may be removed without breaking the floor
    pub fn can_remove(&self, kind: ListKind) -> bool {
        self.list(kind).len() > kind.minimum()
    }

    pub fn with_company_info(&self, text: impl Into<String>) -> Self {
        Self {
            company_info: text.into(),
            ..self.clone()
        }
    }

    pub fn with_posts_per_week(&self, posts_per_week: u32) -> Self {
        Self {
            posts_per_week,
            ..self.clone()
        }
    }

    /// Append an empty item with `id` at the end of the list
    pub fn with_item_added(&self, kind: ListKind, id: ItemId) -> Self {
        let mut next = self.clone();
        next.list_mut(kind).push(ListItem::empty(id));
        next
    }

    /// Drop the item with `id`, unless the list is already at its minimum
    pub fn with_item_removed(&self, kind: ListKind, id: ItemId) -> Self {
        if !self.can_remove(kind) {
            return self.clone();
        }
        let mut next = self.clone();
        next.list_mut(kind).retain(|item| item.id != id);
        next
    }

    /// Replace the value of the item with `id`; unknown ids leave the draft as is
    pub fn with_item_value(&self, kind: ListKind, id: ItemId, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.list_mut(kind).iter_mut().find(|item| item.id == id) {
            item.value = value.into();
        }
        next
    }

    /// Derive the sanitized payload sent on submit
    pub fn to_submission_record(&self) -> SubmissionRecord {
        SubmissionRecord {
            company_info: self.company_info.clone(),
            personas: non_blank_values(&self.personas),
            subreddits: non_blank_values(&self.subreddits),
            chatgpt_queries: non_blank_values(&self.queries),
            posts_per_week: self.posts_per_week,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
impl Draft {
    /// Equal text, posts and list values, ignoring item ids
    pub fn same_values(&self, other: &Draft) -> bool {
        let values = |items: &[ListItem]| -> Vec<String> {
            items.iter().map(|item| item.value.clone()).collect()
        };
        self.company_info == other.company_info
            && self.posts_per_week == other.posts_per_week
            && ListKind::ALL
                .iter()
                .all(|&kind| values(self.list(kind)) == values(other.list(kind)))
    }
}

fn non_blank_values(items: &[ListItem]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.value.trim().is_empty())
        .map(|item| item.value.clone())
        .collect()
}

/// Id-stripped, blank-filtered payload written to the `user_inputs` table.
///
/// Field names match the table's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub company_info: String,
    pub personas: Vec<String>,
    pub subreddits: Vec<String>,
    pub chatgpt_queries: Vec<String>,
    pub posts_per_week: u32,
}
