use crate::config::{ensure_config_dir, get_db_file_path, DB_FILENAME};
use crate::error::{Result, SnipexError};
use crate::models::SnippetEntry;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load all snippets from the database
pub fn load_snippets() -> Result<Vec<SnippetEntry>> {
    load_snippets_from(&get_db_file_path())
}

/// Load all snippets from the database file at `path`
pub fn load_snippets_from(path: &Path) -> Result<Vec<SnippetEntry>> {
    if !path.exists() {
        return Err(SnipexError::DatabaseNotFound(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;

    // Handle empty database file
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let entries: Vec<SnippetEntry> = serde_json::from_str(&content)?;
    debug!(count = entries.len(), path = %path.display(), "loaded snippet definitions");
    Ok(entries)
}

/// Save snippets to the database file
pub fn save_snippets(snippets: &[SnippetEntry]) -> Result<()> {
    let config_dir = ensure_config_dir()?;
    save_snippets_to(&config_dir.join(DB_FILENAME), snippets)
}

/// Save snippets to the database file at `path`
pub fn save_snippets_to(path: &Path, snippets: &[SnippetEntry]) -> Result<()> {
    let serialized = serde_json::to_string_pretty(&snippets)?;
    fs::write(path, serialized)?;
    debug!(count = snippets.len(), path = %path.display(), "saved snippet definitions");
    Ok(())
}

/// Add a new snippet
pub fn add_snippet(trigger: String, replacements: Vec<String>) -> Result<()> {
    let config_dir = ensure_config_dir()?;
    add_snippet_to(&config_dir.join(DB_FILENAME), trigger, replacements)
}

pub fn add_snippet_to(path: &Path, trigger: String, replacements: Vec<String>) -> Result<()> {
    let mut snippets = match load_snippets_from(path) {
        Ok(s) => s,
        Err(SnipexError::DatabaseNotFound(_)) => vec![],
        Err(e) => return Err(e),
    };

    let entry = SnippetEntry::new(trigger, replacements);
    entry.validate()?;
    if find_snippet(&snippets, &entry.trigger).is_some() {
        return Err(SnipexError::DuplicateTrigger(entry.trigger));
    }

    snippets.push(entry);
    save_snippets_to(path, &snippets)
}

/// Delete a snippet by trigger
pub fn delete_snippet(trigger: &str) -> Result<()> {
    delete_snippet_from(&get_db_file_path(), trigger)
}

pub fn delete_snippet_from(path: &Path, trigger: &str) -> Result<()> {
    let mut snippets = load_snippets_from(path)?;
    let before = snippets.len();
    snippets.retain(|entry| entry.trigger != trigger);

    if snippets.len() == before {
        return Err(SnipexError::SnippetNotFound(trigger.to_string()));
    }

    save_snippets_to(path, &snippets)
}

/// Update an existing snippet
pub fn update_snippet(trigger: &str, replacements: Vec<String>) -> Result<()> {
    update_snippet_in(&get_db_file_path(), trigger, replacements)
}

pub fn update_snippet_in(path: &Path, trigger: &str, replacements: Vec<String>) -> Result<()> {
    let mut snippets = load_snippets_from(path)?;

    let entry = snippets
        .iter_mut()
        .find(|entry| entry.trigger == trigger)
        .ok_or_else(|| SnipexError::SnippetNotFound(trigger.to_string()))?;

    entry.update_replacements(replacements);
    entry.validate()?;

    save_snippets_to(path, &snippets)
}

/// Find a snippet by trigger
pub fn find_snippet<'a>(snippets: &'a [SnippetEntry], trigger: &str) -> Option<&'a SnippetEntry> {
    snippets.iter().find(|entry| entry.trigger == trigger)
}
