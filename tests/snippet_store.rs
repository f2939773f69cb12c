use pretty_assertions::assert_eq;
use snipex::config::{ensure_dir_with_db, DB_FILENAME};
use snipex::storage::{
    add_snippet_to, delete_snippet_from, find_snippet, load_snippets_from, update_snippet_in,
};
use snipex::{plan_expansion, Catalog, SnipexError, SnippetType};
use std::fs;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn add_update_delete_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let db = ensure_dir_with_db(tmp.path()).unwrap();

    add_snippet_to(&db, "sig".to_string(), strings(&["Regards,%\\nSam"])).unwrap();
    add_snippet_to(&db, "greet".to_string(), strings(&["Hello", "Hi"])).unwrap();

    let entries = load_snippets_from(&db).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].trigger, "sig");
    assert_eq!(entries[1].snippet_type(), SnippetType::SLMR);

    update_snippet_in(&db, "sig", strings(&["Cheers"])).unwrap();
    let entries = load_snippets_from(&db).unwrap();
    assert_eq!(
        find_snippet(&entries, "sig").unwrap().replacements,
        strings(&["Cheers"])
    );

    delete_snippet_from(&db, "greet").unwrap();
    let entries = load_snippets_from(&db).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(find_snippet(&entries, "greet").is_none());
}

#[test]
fn add_creates_missing_database() {
    let tmp = tempfile::tempdir().unwrap();
    let db = tmp.path().join(DB_FILENAME);

    add_snippet_to(&db, "sig".to_string(), strings(&["Regards"])).unwrap();
    assert_eq!(load_snippets_from(&db).unwrap().len(), 1);
}

#[test]
fn duplicate_and_missing_triggers_are_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let db = ensure_dir_with_db(tmp.path()).unwrap();
    add_snippet_to(&db, "sig".to_string(), strings(&["Regards"])).unwrap();

    assert!(matches!(
        add_snippet_to(&db, "sig".to_string(), strings(&["Again"])),
        Err(SnipexError::DuplicateTrigger(t)) if t == "sig"
    ));
    assert!(matches!(
        delete_snippet_from(&db, "nope"),
        Err(SnipexError::SnippetNotFound(_))
    ));
    assert!(matches!(
        update_snippet_in(&db, "nope", strings(&["x"])),
        Err(SnipexError::SnippetNotFound(_))
    ));
    assert!(matches!(
        add_snippet_to(&db, String::new(), strings(&["x"])),
        Err(SnipexError::InvalidDefinition(_))
    ));
}

#[test]
fn stored_markers_stay_byte_exact() {
    let tmp = tempfile::tempdir().unwrap();
    let db = ensure_dir_with_db(tmp.path()).unwrap();
    add_snippet_to(&db, "td".to_string(), strings(&["<td>%\\e</td>%\\n"])).unwrap();

    let raw = fs::read_to_string(&db).unwrap();
    assert!(raw.contains(r#""<td>%\\e</td>%\\n""#));
}

#[test]
fn stored_definitions_expand() {
    let tmp = tempfile::tempdir().unwrap();
    let db = ensure_dir_with_db(tmp.path()).unwrap();
    add_snippet_to(
        &db,
        "ifb".to_string(),
        strings(&["if (%\\e) {%\\n%\\t%\\n}"]),
    )
    .unwrap();
    add_snippet_to(
        &db,
        "todo\nlist".to_string(),
        strings(&["- [ ]%\\s", "- [x]%\\s"]),
    )
    .unwrap();

    let catalog = Catalog::from_entries(&load_snippets_from(&db).unwrap()).unwrap();
    assert_eq!(catalog.get("ifb").unwrap().kind, SnippetType::SLSR);
    assert_eq!(catalog.get("todo\nlist").unwrap().kind, SnippetType::MLMR);

    let plan = plan_expansion("    ifb", &catalog, 0).unwrap();
    assert_eq!(plan.insert, "if () {\n\t\n}");
    assert_eq!(plan.cursor_back, 7);

    let preview = plan.apply("    ifb");
    assert_eq!(preview.text, "    if () {\n\t\n}");
    assert_eq!(preview.caret, 8);

    let plan = plan_expansion("todo\nlist", &catalog, 1).unwrap();
    assert_eq!(plan.insert, "- [x] ");
    assert_eq!(plan.delete, 9);
    assert_eq!(plan.apply("todo\nlist").text, "- [x] ");
}
