//! UI Components
//!
//! Leptos components rendering the checklist.

mod new_item_form;
mod item_row;
mod item_list;
mod filter_bar;
mod stats_panel;
mod bulk_actions;
mod theme_toggle;

pub use new_item_form::NewItemForm;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use filter_bar::{FilterBar, SearchBox};
pub use stats_panel::StatsPanel;
pub use bulk_actions::BulkActions;
pub use theme_toggle::ThemeToggle;
