#![doc = include_str!("../README.md")]

use langres::{DirResources, I18n, Language, LanguageResource, ResourceProvider};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::OnceLock;

static CONTEXT: OnceLock<I18n> = OnceLock::new();

/// Installs the process-wide context built from `provider`.
///
/// The first caller wins: a later call leaves the installed context in
/// place and logs a warning. Safe to race; `OnceLock` guarantees exactly
/// one installation.
pub fn init(provider: impl ResourceProvider + 'static) {
    let context = I18n::new(provider);
    if CONTEXT.set(context).is_err() {
        log::warn!("Language resource context already initialized.");
    }
}

/// Installs a process-wide context reading resources from `root`.
pub fn init_from_dir(root: impl Into<PathBuf>) {
    init(DirResources::new(root));
}

fn context() -> &'static I18n {
    CONTEXT.get_or_init(|| I18n::new(DirResources::new(".")))
}

/// The active language code.
pub fn current_language() -> String {
    context().current_language().to_string()
}

/// Returns true iff the active code equals `language`.
pub fn is_language(language: Language) -> bool {
    context().is_language(language)
}

/// Accessor for `project_id` using the current language.
pub fn resource(project_id: &str) -> LanguageResource {
    context().resource(project_id)
}

/// Accessor for `project_id` with an explicit language code. An empty code
/// substitutes the current language.
pub fn resource_with_language(project_id: &str, user_language: &str) -> LanguageResource {
    context().resource_with_language(project_id, user_language)
}

/// Prints `key=value` lines for `<type_identifier>.1`, `.2`, ... to stdout,
/// stopping at the first missing index.
pub fn debug_list(type_identifier: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (key, value) in context().table().indexed_entries(type_identifier) {
        writeln!(out, "{key}={value}")?;
    }
    Ok(())
}
