//! Snipex - A text snippet expansion engine.
//!
//! Snippets pair a trigger with one or more replacements. Replacements may embed
//! control markers (`%\n` newline, `%\t` tab, `%\s` space, `%\e` cursor) that are
//! resolved into literal text plus the caret position to use after insertion.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod expansion;
pub mod loader;
pub mod models;
pub mod snippet;
pub mod storage;
pub mod symbol;

// Re-export
pub use config::{get_config_dir, get_db_file_path};
pub use error::{Result, SnipexError};
pub use expansion::{match_trigger, plan_expansion, ExpansionPlan, ExpansionPreview};
pub use loader::{load_entry, Catalog, ClassifiedSnippet};
pub use models::SnippetEntry;
pub use snippet::{Lhs, Rhs, RhsInfo, Snippet, SnippetType};
pub use storage::{add_snippet, delete_snippet, load_snippets, update_snippet};
pub use symbol::Symbol;
