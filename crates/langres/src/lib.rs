#![doc = include_str!("../README.md")]

mod context;
mod error;
mod language;
pub mod properties;
mod provider;
mod resource;
mod table;

pub use context::{BASE_CONFIG, CURRENT_LANGUAGE_KEY, I18n};
pub use error::ResourceError;
pub use language::{Language, UnknownLanguage};
pub use provider::{DirResources, EmbeddedResources, ResourceProvider};
pub use resource::LanguageResource;
pub use table::ResourceTable;
