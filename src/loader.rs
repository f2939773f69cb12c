//! Turns stored definitions into classified, resolved snippets.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::SnippetEntry;
use crate::snippet::{Lhs, Snippet, SnippetType};
use crate::symbol::Symbol;

/// One loaded definition: its shape plus one resolved snippet per candidate.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClassifiedSnippet {
    pub kind: SnippetType,
    pub trigger: Lhs,
    pub snippets: Vec<Snippet>,
}

impl ClassifiedSnippet {
    pub fn candidate(&self, choice: usize) -> Option<&Snippet> {
        self.snippets.get(choice)
    }
}

/// Validate, classify and resolve a single definition.
pub fn load_entry(entry: &SnippetEntry) -> Result<ClassifiedSnippet> {
    entry.validate()?;

    let kind = entry.snippet_type();
    let snippets = entry
        .replacements
        .iter()
        .map(|raw| Snippet::new(entry.trigger.clone(), Symbol::replace_symbols_on_parse(raw)))
        .collect();

    Ok(ClassifiedSnippet {
        kind,
        trigger: entry.trigger.clone(),
        snippets,
    })
}

/// Every loaded definition, in definition order, indexed by trigger.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<ClassifiedSnippet>,
    by_trigger: HashMap<Lhs, usize>,
}

impl Catalog {
    pub fn from_entries(entries: &[SnippetEntry]) -> Result<Self> {
        let mut catalog = Catalog::default();

        for entry in entries {
            if catalog.by_trigger.contains_key(&entry.trigger) {
                warn!(trigger = %entry.trigger, "skipping duplicate snippet definition");
                continue;
            }

            let item = load_entry(entry)?;
            catalog.by_trigger.insert(item.trigger.clone(), catalog.items.len());
            catalog.items.push(item);
        }

        debug!(count = catalog.items.len(), "built snippet catalog");
        Ok(catalog)
    }

    pub fn get(&self, trigger: &str) -> Option<&ClassifiedSnippet> {
        self.by_trigger.get(trigger).map(|&i| &self.items[i])
    }

    pub fn of_type(&self, kind: SnippetType) -> impl Iterator<Item = &ClassifiedSnippet> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedSnippet> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_by_type(&self) -> BTreeMap<SnippetType, usize> {
        let mut counts: BTreeMap<SnippetType, usize> =
            SnippetType::ALL.iter().map(|&kind| (kind, 0)).collect();
        for item in &self.items {
            *counts.entry(item.kind).or_default() += 1;
        }
        counts
    }
}
