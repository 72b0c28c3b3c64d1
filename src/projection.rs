//! View Projection
//!
//! Derives what the list view shows from the items and a `ViewQuery`.
//! Pure: nothing about visibility is stored anywhere else.

use crate::models::{Filter, Item, ViewQuery};

/// A visible row and its index in the full list
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItem {
    pub item: Item,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Counts {
    /// Badge count shown next to a filter button
    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Completed => self.completed,
            Filter::Pending => self.pending,
        }
    }
}

/// Why nothing is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The list itself is empty
    NoItems,
    /// Items exist but the filter/search hides all of them
    NoMatches,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    pub visible: Vec<VisibleItem>,
    pub counts: Counts,
    pub progress_percent: u8,
    pub is_empty: bool,
    pub empty_reason: Option<EmptyReason>,
    pub show_clear_completed: bool,
    pub show_remove_all: bool,
}

/// Filter first, then search; list order is kept.
pub fn project(items: &[Item], query: &ViewQuery) -> Projection {
    let folded_term = query.search.to_lowercase();

    let visible: Vec<VisibleItem> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| query.filter.keeps(item))
        .filter(|(_, item)| item.matches(&folded_term))
        .map(|(position, item)| VisibleItem {
            item: item.clone(),
            position,
        })
        .collect();

    let counts = count(items);
    let empty_reason = if counts.total == 0 {
        Some(EmptyReason::NoItems)
    } else if visible.is_empty() {
        Some(EmptyReason::NoMatches)
    } else {
        None
    };

    Projection {
        visible,
        counts,
        progress_percent: progress_percent(counts),
        is_empty: empty_reason.is_some(),
        empty_reason,
        show_clear_completed: counts.completed > 0,
        show_remove_all: counts.total > 0,
    }
}

pub fn count(items: &[Item]) -> Counts {
    let total = items.len();
    let completed = items.iter().filter(|item| item.completed).count();
    Counts {
        total,
        completed,
        pending: total - completed,
    }
}

/// Rounded completion percentage, halves round up
pub fn progress_percent(counts: Counts) -> u8 {
    if counts.total == 0 {
        return 0;
    }
    let percent = (counts.completed * 200 + counts.total) / (counts.total * 2);
    percent.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn item(id: u32, text: &str, category: &str, completed: bool) -> Item {
        Item::new(ItemId(id), text.to_string(), category.to_string(), completed)
    }

    fn query(filter: Filter, search: &str) -> ViewQuery {
        ViewQuery {
            filter,
            search: search.to_string(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item(1, "Call Bob", "Trabajo", false),
            item(2, "call mom", "Otros", true),
            item(3, "Buy milk", "Compras", false),
        ]
    }

    fn visible_texts(projection: &Projection) -> Vec<&str> {
        projection.visible.iter().map(|v| v.item.text.as_str()).collect()
    }

    #[test]
    fn test_all_filter_shows_everything_in_order() {
        let items = sample();
        let projection = project(&items, &ViewQuery::default());
        assert_eq!(visible_texts(&projection), vec!["Call Bob", "call mom", "Buy milk"]);
        assert_eq!(projection.visible.len(), projection.counts.total);
        assert_eq!(projection.visible[2].position, 2);
        assert!(!projection.is_empty);
    }

    #[test]
    fn test_completed_and_pending_filters() {
        let items = sample();
        let done = project(&items, &query(Filter::Completed, ""));
        assert!(done.visible.iter().all(|v| v.item.completed));
        assert_eq!(visible_texts(&done), vec!["call mom"]);
        assert_eq!(done.visible[0].position, 1);

        let pending = project(&items, &query(Filter::Pending, ""));
        assert!(pending.visible.iter().all(|v| !v.item.completed));
        assert_eq!(pending.visible.len(), 2);
    }

    #[test]
    fn test_search_matches_text_or_category_case_insensitively() {
        let items = sample();
        let calls = project(&items, &query(Filter::All, "CALL"));
        assert_eq!(visible_texts(&calls), vec!["Call Bob", "call mom"]);

        let bob = project(&items, &query(Filter::All, "bob"));
        assert_eq!(visible_texts(&bob), vec!["Call Bob"]);

        let by_category = project(&items, &query(Filter::All, "compr"));
        assert_eq!(visible_texts(&by_category), vec!["Buy milk"]);
    }

    #[test]
    fn test_search_applies_after_filter() {
        let items = sample();
        let projection = project(&items, &query(Filter::Pending, "call"));
        assert_eq!(visible_texts(&projection), vec!["Call Bob"]);
    }

    #[test]
    fn test_counts_always_add_up() {
        let items = sample();
        let projection = project(&items, &query(Filter::Completed, "zzz"));
        let c = projection.counts;
        assert_eq!(c.completed + c.pending, c.total);
        assert_eq!((c.total, c.completed, c.pending), (3, 1, 2));
        assert_eq!(c.for_filter(Filter::Pending), 2);
        assert_eq!(c.for_filter(Filter::All), 3);
    }

    #[test]
    fn test_empty_reasons() {
        let none = project(&[], &ViewQuery::default());
        assert!(none.is_empty);
        assert_eq!(none.empty_reason, Some(EmptyReason::NoItems));
        assert!(!none.show_remove_all);

        let items = vec![item(1, "Call Bob", "Trabajo", false), item(2, "call mom", "Otros", false)];
        let hidden = project(&items, &query(Filter::Completed, ""));
        assert!(hidden.is_empty);
        assert_eq!(hidden.empty_reason, Some(EmptyReason::NoMatches));
        assert_eq!(hidden.counts.total, 2);
        assert!(!hidden.show_clear_completed);
        assert!(hidden.show_remove_all);
    }

    #[test]
    fn test_progress_rounding() {
        let counts = |total, completed| Counts {
            total,
            completed,
            pending: total - completed,
        };
        assert_eq!(progress_percent(counts(0, 0)), 0);
        assert_eq!(progress_percent(counts(3, 1)), 33);
        assert_eq!(progress_percent(counts(3, 2)), 67);
        assert_eq!(progress_percent(counts(8, 1)), 13);
        assert_eq!(progress_percent(counts(200, 1)), 1);
        assert_eq!(progress_percent(counts(4, 4)), 100);
    }
}
