//! Checklist Models
//!
//! Items, their persisted form, and the small enums the UI switches on.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CATEGORY;

/// Session-stable item identifier (assigned by the list, never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A checklist entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub category: String,
    pub completed: bool,
    folded_text: String,
    folded_category: String,
}

impl Item {
    /// Build an item; `text` is expected to be trimmed and non-empty already.
    pub fn new(id: ItemId, text: String, category: String, completed: bool) -> Self {
        let folded_text = text.to_lowercase();
        let folded_category = category.to_lowercase();
        Self {
            id,
            text,
            category,
            completed,
            folded_text,
            folded_category,
        }
    }

    /// Case-insensitive substring match on text or category.
    /// `folded_term` must already be lowercased.
    pub fn matches(&self, folded_term: &str) -> bool {
        folded_term.is_empty()
            || self.folded_text.contains(folded_term)
            || self.folded_category.contains(folded_term)
    }

    pub fn to_record(&self) -> StoredItem {
        StoredItem {
            text: self.text.clone(),
            completed: self.completed,
            category: self.category.clone(),
        }
    }
}

/// Persisted form of an item: `{ "text", "completed", "category" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Which completion state the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "todos",
            Filter::Completed => "completados",
            Filter::Pending => "pendientes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "Todos",
            Filter::Completed => "Completados",
            Filter::Pending => "Pendientes",
        }
    }

    pub fn keeps(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => item.completed,
            Filter::Pending => !item.completed,
        }
    }
}

/// Filter + search term, passed explicitly into the projection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub filter: Filter,
    pub search: String,
}

/// Cosmetic color scheme, persisted apart from the list
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

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_matches_text_and_category() {
        let item = Item::new(ItemId(1), "Call Bob".to_string(), "Trabajo".to_string(), false);
        assert!(item.matches("bob"));
        assert!(item.matches("trab"));
        assert!(item.matches(""));
        assert!(!item.matches("mom"));
    }

    #[test]
    fn test_stored_item_defaults() {
        let record: StoredItem = serde_json::from_str(r#"{"text":"Pan"}"#).unwrap();
        assert_eq!(record.category, "Otros");
        assert!(!record.completed);
    }

    #[test]
    fn test_filter_keeps() {
        let done = Item::new(ItemId(1), "Pan".to_string(), "Compras".to_string(), true);
        assert!(Filter::All.keeps(&done));
        assert!(Filter::Completed.keeps(&done));
        assert!(!Filter::Pending.keeps(&done));
        assert_eq!(Filter::Pending.as_str(), "pendientes");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str(""), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
    }
}
