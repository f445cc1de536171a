use langres::Language;

// Reading before any init installs a default working-directory context;
// with no application.properties there, the language defaults to en.
#[test]
fn uninitialized_access_defaults_to_english() {
    assert_eq!(langres_singleton::current_language(), "en");
    assert!(langres_singleton::is_language(Language::En));

    let ghost = langres_singleton::resource("ghost");
    assert_eq!(ghost.get_string("anything", "fallback"), "fallback");
    assert!(langres_singleton::debug_list("ghost").is_ok());
}
