use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnipexError};
use crate::snippet::SnippetType;

/// A stored, unresolved snippet definition.
///
/// `trigger` is the raw trigger source and `replacements` the raw replacement
/// candidates, markers and all. Resolution happens when the definition is loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SnippetEntry {
    pub trigger: String,
    pub replacements: Vec<String>,
    pub timestamp: String,
}

impl SnippetEntry {
    pub fn new(trigger: String, replacements: Vec<String>) -> Self {
        Self {
            trigger,
            replacements,
            timestamp: Local::now().to_rfc3339(),
        }
    }

    pub fn update_replacements(&mut self, replacements: Vec<String>) {
        self.replacements = replacements;
        self.timestamp = Local::now().to_rfc3339();
    }

    pub fn snippet_type(&self) -> SnippetType {
        SnippetType::classify(&self.trigger, self.replacements.len())
    }

    /// Check the definition can be loaded
    pub fn validate(&self) -> Result<()> {
        if self.trigger.is_empty() {
            return Err(SnipexError::InvalidDefinition(
                "trigger must not be empty".to_string(),
            ));
        }
        if self.replacements.is_empty() {
            return Err(SnipexError::InvalidDefinition(format!(
                "'{}' has no replacement",
                self.trigger
            )));
        }
        Ok(())
    }

    pub fn formatted_time(&self) -> String {
        let entry_time = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.with_timezone(&Local))
            .unwrap_or_else(|_| Local::now());

        let now = Local::now();
        let duration = now.signed_duration_since(entry_time);

        if duration.num_seconds() < 60 {
            format!("{}s ago", duration.num_seconds())
        } else if duration.num_minutes() < 60 {
            format!("{}m ago", duration.num_minutes())
        } else if duration.num_hours() < 24 {
            format!("{}h ago", duration.num_hours())
        } else {
            format!("{}d ago", duration.num_days())
        }
    }
}
