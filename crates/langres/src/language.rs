use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Locale variants with first-class support.
///
/// The current language of an [`I18n`](crate::I18n) context is stored as a
/// raw code string, so unrecognized values coming from configuration
/// survive verbatim; this enum provides the comparable constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    Cn,
    /// Traditional Chinese.
    Tw,
    /// Singapore variant.
    Sg,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 4] = [Language::En, Language::Cn, Language::Tw, Language::Sg];

    /// The code used in configuration values and resource file names.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cn => "cn",
            Language::Tw => "tw",
            Language::Sg => "sg",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error produced when parsing a code outside the supported set.
#[derive(Debug, Error)]
#[error("unsupported language code '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
