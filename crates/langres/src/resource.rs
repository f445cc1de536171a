use crate::properties;
use crate::provider::ResourceProvider;
use crate::table::ResourceTable;
use std::io::{self, Write};
use std::sync::Arc;

/// Accessor serving localized strings for one project.
///
/// Construction loads the project's resource file into the shared table:
/// `<project>-<language>.properties` when present, otherwise the
/// language-agnostic `<project>.properties`. A project with neither file
/// contributes nothing, and lookups resolve to caller-supplied fallback
/// text. Construction never fails.
pub struct LanguageResource {
    language: String,
    table: Arc<ResourceTable>,
}

impl LanguageResource {
    pub(crate) fn load(
        provider: &dyn ResourceProvider,
        table: Arc<ResourceTable>,
        project_id: &str,
        language: &str,
    ) -> Self {
        let localized = format!("{project_id}-{language}.properties");
        let agnostic = format!("{project_id}.properties");

        match read_first(provider, [&localized, &agnostic]) {
            Ok(Some((name, content))) => {
                table.merge(properties::parse(&content));
                log::info!("read resource: {name}");
            }
            Ok(None) => log::warn!("{agnostic} does not exist."),
            Err(err) => log::error!("Failed to load the settings: {err}"),
        }

        Self {
            language: language.to_string(),
            table,
        }
    }

    /// Language code this accessor resolved at construction.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the stored text for `key`, or `fallback` unchanged when the
    /// key has no entry.
    pub fn get_string(&self, key: &str, fallback: &str) -> String {
        let stored = self.table.get(key);
        if stored.is_none() {
            log::info!(
                "Language {} string resource key {key} does not exist.",
                self.language
            );
        }
        let value = stored.unwrap_or_else(|| fallback.to_string());
        log::debug!(
            "language {}, key {key}, input {fallback}, output {value}",
            self.language
        );
        value
    }

    /// Writes `key=value` lines for `<type_identifier>.1`, `.2`, ... in
    /// index order, stopping at the first missing index.
    pub fn debug_list<W: Write>(&self, type_identifier: &str, out: &mut W) -> io::Result<()> {
        for (key, value) in self.table.indexed_entries(type_identifier) {
            writeln!(out, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Reads the first existing resource among `names`.
///
/// A read failure on an existing candidate is an error; later candidates
/// are not tried.
fn read_first<'a>(
    provider: &dyn ResourceProvider,
    names: impl IntoIterator<Item = &'a String>,
) -> Result<Option<(&'a str, String)>, crate::ResourceError> {
    for name in names {
        if let Some(content) = provider.read(name)? {
            return Ok(Some((name.as_str(), content)));
        }
    }
    Ok(None)
}
