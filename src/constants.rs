//! Application-wide constants
//!
//! Storage keys, category choices and UI timings shared across modules.

/// localStorage slot holding the serialized list
pub const LIST_STORAGE_KEY: &str = "lista";

/// localStorage slot holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Category used when none is chosen
pub const DEFAULT_CATEGORY: &str = "Otros";

/// Categories offered by the new-item form
pub const CATEGORIES: &[&str] = &[
    "Otros",
    "Trabajo",
    "Personal",
    "Compras",
    "Hogar",
    "Salud",
];

/// Length of the slide-out transition before a deleted row is removed
pub const REMOVE_TRANSITION_MS: u32 = 300;

/// Confirmation prompts for the destructive bulk actions
pub const CONFIRM_CLEAR_COMPLETED: &str =
    "¿Estás seguro de que deseas limpiar los artículos completados?";
pub const CONFIRM_REMOVE_ALL: &str = "¿Estás seguro de que deseas borrar toda la lista?";

/// Console log level for release builds
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
