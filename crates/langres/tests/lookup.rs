use langres::{DirResources, I18n, Language};
use std::fs;
use tempfile::TempDir;

#[test]
fn billing_falls_back_to_language_agnostic_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("application.properties"),
        "currentLanguage=cn\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("billing.properties"), "welcome=您好\n").unwrap();

    let i18n = I18n::new(DirResources::new(temp_dir.path()));
    assert!(i18n.is_language(Language::Cn));

    let billing = i18n.resource("billing");
    assert_eq!(billing.get_string("welcome", "Hello"), "您好");
}

#[test]
fn fallback_file_merges_like_an_exact_one() {
    let content = "p.greeting=hi\np.farewell=bye\n";

    let exact_dir = TempDir::new().unwrap();
    fs::write(exact_dir.path().join("p-en.properties"), content).unwrap();
    let exact = I18n::with_language(DirResources::new(exact_dir.path()), "en");
    let _ = exact.resource("p");

    let agnostic_dir = TempDir::new().unwrap();
    fs::write(agnostic_dir.path().join("p.properties"), content).unwrap();
    let agnostic = I18n::with_language(DirResources::new(agnostic_dir.path()), "en");
    let _ = agnostic.resource("p");

    for key in ["p.greeting", "p.farewell"] {
        assert_eq!(exact.table().get(key), agnostic.table().get(key));
    }
    assert_eq!(exact.table().len(), agnostic.table().len());
}

#[test]
fn ghost_project_always_resolves_fallback_text() {
    let temp_dir = TempDir::new().unwrap();
    let i18n = I18n::new(DirResources::new(temp_dir.path()));

    let ghost = i18n.resource("ghost");
    assert_eq!(ghost.get_string("anything", "fallback"), "fallback");
    assert!(i18n.table().is_empty());
}

#[test]
fn accessors_of_one_context_share_loaded_entries() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("menu.properties"),
        "menu.1=Open\nmenu.2=Save\n",
    )
    .unwrap();

    let i18n = I18n::with_language(DirResources::new(temp_dir.path()), "en");
    let _ = i18n.resource("menu");

    // A later accessor for an unrelated project still sees the shared table.
    let other = i18n.resource("ghost");
    assert_eq!(other.get_string("menu.1", "?"), "Open");

    let mut out = Vec::new();
    other.debug_list("menu", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "menu.1=Open\nmenu.2=Save\n");
}
