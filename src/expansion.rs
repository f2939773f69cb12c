use serde::Serialize;
use tracing::debug;

use crate::loader::{Catalog, ClassifiedSnippet};
use crate::snippet::Snippet;

/// The edit an editor integration performs to expand a trigger: delete the
/// trigger before the caret, insert the replacement, then move the caret back.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExpansionPlan {
    pub delete: usize,
    pub insert: String,
    pub cursor_back: usize,
    pub has_newline: bool,
}

/// Text and caret position after a plan has been applied to a buffer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExpansionPreview {
    pub text: String,
    /// Caret offset in characters from the start of `text`.
    pub caret: usize,
}

impl ExpansionPlan {
    pub fn for_snippet(snippet: &Snippet) -> Self {
        Self {
            delete: snippet.lhs.chars().count(),
            insert: snippet.rhs.data.clone(),
            cursor_back: snippet.rhs.info.cursor_end,
            has_newline: snippet.rhs.info.has_newline,
        }
    }

    /// Apply the plan to `buffer`, treating its end as the caret.
    pub fn apply(&self, buffer: &str) -> ExpansionPreview {
        let kept = buffer.chars().count().saturating_sub(self.delete);
        let mut text: String = buffer.chars().take(kept).collect();
        text.push_str(&self.insert);

        let caret = text.chars().count().saturating_sub(self.cursor_back);
        ExpansionPreview { text, caret }
    }
}

/// Find the definition whose trigger the buffer ends with.
///
/// Triggers must match exactly; when several match, the longest one wins.
pub fn match_trigger<'a>(buffer: &str, catalog: &'a Catalog) -> Option<&'a ClassifiedSnippet> {
    catalog
        .iter()
        .filter(|item| !item.trigger.is_empty() && buffer.ends_with(item.trigger.as_str()))
        .max_by_key(|item| item.trigger.chars().count())
}

/// Plan the expansion of the trigger at the end of `buffer`, using replacement
/// candidate `choice`.
pub fn plan_expansion(buffer: &str, catalog: &Catalog, choice: usize) -> Option<ExpansionPlan> {
    let item = match_trigger(buffer, catalog)?;
    let snippet = item.candidate(choice)?;

    debug!(
        trigger = %item.trigger,
        kind = %item.kind,
        choice,
        "planned snippet expansion"
    );
    Some(ExpansionPlan::for_snippet(snippet))
}
