use crate::cli::{Commands, Snipex};
use crate::config::get_db_file_path;
use crate::error::Result;
use crate::expansion::plan_expansion;
use crate::loader::Catalog;
use crate::models::SnippetEntry;
use crate::snippet::SnippetType;
use crate::storage::{add_snippet, delete_snippet, load_snippets, update_snippet};
use crate::symbol::Symbol;
use clap::CommandFactory;
use serde::Serialize;

#[derive(Serialize)]
struct ListedSnippet<'a> {
    trigger: &'a str,
    kind: SnippetType,
    replacements: &'a [String],
    timestamp: &'a str,
}

pub fn handle_command(command: Option<Commands>) -> Result<()> {
    match command {
        Some(command) => handle_subcommand(command),
        None => {
            Snipex::command().print_help()?;
            Ok(())
        }
    }
}

fn handle_subcommand(command: Commands) -> Result<()> {
    match command {
        Commands::Resolve { raw, json } => handle_resolve(&raw, json),
        Commands::Add {
            shortcut,
            replacements,
        } => add_snippet(shortcut, escape_all(replacements))
            .map(|_| println!("Snippet added successfully")),
        Commands::Delete { shortcut } => {
            delete_snippet(&shortcut).map(|_| println!("Snippet deleted successfully"))
        }
        Commands::Update {
            shortcut,
            replacements,
        } => update_snippet(&shortcut, escape_all(replacements))
            .map(|_| println!("Snippet updated successfully")),
        Commands::List { json } => handle_list(json),
        Commands::Expand {
            buffer,
            choice,
            json,
        } => handle_expand(&buffer, choice, json),
        Commands::Types => {
            for kind in SnippetType::ALL {
                println!("{} {} {}", kind.ordinal(), kind, kind.description());
            }
            Ok(())
        }
        Commands::Path => {
            println!("{}", get_db_file_path().display());
            Ok(())
        }
    }
}

// Literal line breaks typed at a shell are stored as markers.
fn escape_all(replacements: Vec<String>) -> Vec<String> {
    replacements
        .iter()
        .map(|raw| Symbol::escape_symbols(raw))
        .collect()
}

fn handle_resolve(raw: &str, json: bool) -> Result<()> {
    let rhs = Symbol::replace_symbols_on_parse(raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&rhs)?);
    } else {
        println!("data: {:?}", rhs.data);
        println!("has_newline: {}", rhs.info.has_newline);
        println!("cursor_end: {}", rhs.info.cursor_end);
    }
    Ok(())
}

fn handle_list(json: bool) -> Result<()> {
    let entries = load_snippets()?;

    if json {
        let listed: Vec<ListedSnippet> = entries.iter().map(listed).collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No snippets defined. Add one with 'snipex add -s <shortcut> -c <snippet>'.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{:>7} [{}] {:?} -> {}",
            entry.formatted_time(),
            entry.snippet_type(),
            entry.trigger,
            entry.replacements.join(" | ")
        );
    }
    Ok(())
}

fn listed(entry: &SnippetEntry) -> ListedSnippet<'_> {
    ListedSnippet {
        trigger: &entry.trigger,
        kind: entry.snippet_type(),
        replacements: &entry.replacements,
        timestamp: &entry.timestamp,
    }
}

fn handle_expand(buffer: &str, choice: usize, json: bool) -> Result<()> {
    let entries = load_snippets()?;
    let catalog = Catalog::from_entries(&entries)?;

    let Some(plan) = plan_expansion(buffer, &catalog, choice) else {
        println!("No snippet matches the end of {:?}", buffer);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let preview = plan.apply(buffer);
    println!("delete: {}", plan.delete);
    println!("insert: {:?}", plan.insert);
    println!("cursor_back: {}", plan.cursor_back);
    println!("result: {:?}", preview.text);
    println!("caret: {}", preview.caret);
    Ok(())
}
