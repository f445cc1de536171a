use crate::language::Language;
use crate::properties;
use crate::provider::ResourceProvider;
use crate::resource::LanguageResource;
use crate::table::ResourceTable;
use std::sync::Arc;

/// Name of the base configuration resource read at context construction.
pub const BASE_CONFIG: &str = "application.properties";

/// Configuration key selecting the current language.
pub const CURRENT_LANGUAGE_KEY: &str = "currentLanguage";

/// Explicitly constructed localization context: the current language plus
/// the resource table and provider shared by every accessor it hands out.
///
/// Cloning is cheap; clones share the same underlying table.
#[derive(Clone)]
pub struct I18n {
    language: String,
    table: Arc<ResourceTable>,
    provider: Arc<dyn ResourceProvider>,
}

impl I18n {
    /// Builds a context by reading [`CURRENT_LANGUAGE_KEY`] from
    /// [`BASE_CONFIG`] through `provider`.
    ///
    /// A missing configuration resource or key falls back to `en`; a read
    /// failure is logged and treated the same way. Construction never
    /// fails.
    pub fn new(provider: impl ResourceProvider + 'static) -> Self {
        let provider: Arc<dyn ResourceProvider> = Arc::new(provider);
        let language = read_current_language(provider.as_ref());
        log::info!("currentLanguage value: {language}");
        Self {
            language,
            table: Arc::new(ResourceTable::new()),
            provider,
        }
    }

    /// Builds a context with an explicit language code, bypassing the base
    /// configuration. The code is taken verbatim.
    pub fn with_language(
        provider: impl ResourceProvider + 'static,
        language: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            table: Arc::new(ResourceTable::new()),
            provider: Arc::new(provider),
        }
    }

    /// The active language code.
    pub fn current_language(&self) -> &str {
        &self.language
    }

    /// Returns true iff the active code equals `language`.
    ///
    /// Codes outside the supported set never match.
    pub fn is_language(&self, language: Language) -> bool {
        self.language == language.code()
    }

    /// The table holding every entry loaded through this context so far.
    pub fn table(&self) -> &ResourceTable {
        &self.table
    }

    /// Accessor for `project_id` using the current language.
    pub fn resource(&self, project_id: &str) -> LanguageResource {
        self.resource_with_language(project_id, "")
    }

    /// Accessor for `project_id` with an explicit language code. An empty
    /// code substitutes the current language.
    pub fn resource_with_language(&self, project_id: &str, user_language: &str) -> LanguageResource {
        let language = if user_language.is_empty() {
            self.language.as_str()
        } else {
            user_language
        };
        LanguageResource::load(
            self.provider.as_ref(),
            Arc::clone(&self.table),
            project_id,
            language,
        )
    }
}

fn read_current_language(provider: &dyn ResourceProvider) -> String {
    let default = Language::default().code().to_string();
    match provider.read(BASE_CONFIG) {
        Ok(Some(content)) => {
            log::info!("read resource: {BASE_CONFIG}");
            let entries = properties::parse(&content);
            properties::get(&entries, CURRENT_LANGUAGE_KEY)
                .map(str::to_string)
                .unwrap_or(default)
        }
        Ok(None) => {
            log::warn!("{BASE_CONFIG} does not exist.");
            default
        }
        Err(err) => {
            log::error!("Failed to load the settings from {BASE_CONFIG}: {err}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::DirResources;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_language_from_base_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(BASE_CONFIG),
            "currentLanguage=tw\n",
        )
        .unwrap();

        let i18n = I18n::new(DirResources::new(temp_dir.path()));
        assert_eq!(i18n.current_language(), "tw");
        assert!(i18n.is_language(Language::Tw));
        assert!(!i18n.is_language(Language::En));
    }

    #[test]
    fn test_defaults_to_english_without_base_config() {
        let temp_dir = TempDir::new().unwrap();
        let i18n = I18n::new(DirResources::new(temp_dir.path()));
        assert_eq!(i18n.current_language(), "en");
        assert!(i18n.is_language(Language::En));
    }

    #[test]
    fn test_defaults_to_english_without_language_key() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(BASE_CONFIG), "other=value\n").unwrap();

        let i18n = I18n::new(DirResources::new(temp_dir.path()));
        assert_eq!(i18n.current_language(), "en");
    }

    #[test]
    fn test_unsupported_code_kept_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(BASE_CONFIG),
            "currentLanguage=fr\n",
        )
        .unwrap();

        let i18n = I18n::new(DirResources::new(temp_dir.path()));
        assert_eq!(i18n.current_language(), "fr");
        for language in Language::ALL {
            assert!(!i18n.is_language(language));
        }
    }

    #[test]
    fn test_clones_share_the_table() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("shared.properties"), "shared.key=yes\n").unwrap();

        let i18n = I18n::with_language(DirResources::new(temp_dir.path()), "en");
        let clone = i18n.clone();
        let _ = i18n.resource("shared");

        assert_eq!(clone.table().get("shared.key").as_deref(), Some("yes"));
    }
}
