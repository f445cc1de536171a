use crate::error::ResourceError;
use rust_embed::RustEmbed;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Source of named key=value resources.
///
/// Implementations answer `Ok(None)` for a resource that does not exist,
/// reserving errors for resources that exist but cannot be read.
pub trait ResourceProvider: Send + Sync {
    /// Returns the contents of the named resource, or `None` when absent.
    fn read(&self, name: &str) -> Result<Option<String>, ResourceError>;
}

/// Reads resources from a directory on disk.
#[derive(Clone, Debug)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceProvider for DirResources {
    fn read(&self, name: &str) -> Result<Option<String>, ResourceError> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(None);
        }
        match fs_err::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(source) => Err(ResourceError::Read {
                name: name.to_string(),
                source,
            }),
        }
    }
}

/// Reads resources embedded in the binary via [`RustEmbed`].
///
/// The deployed analogue of bundling `.properties` files alongside the
/// application instead of shipping a resource directory.
#[derive(Debug)]
pub struct EmbeddedResources<T: RustEmbed> {
    _assets: PhantomData<T>,
}

impl<T: RustEmbed> EmbeddedResources<T> {
    pub const fn new() -> Self {
        Self {
            _assets: PhantomData,
        }
    }
}

impl<T: RustEmbed> Default for EmbeddedResources<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RustEmbed + Send + Sync> ResourceProvider for EmbeddedResources<T> {
    fn read(&self, name: &str) -> Result<Option<String>, ResourceError> {
        match T::get(name) {
            Some(file) => String::from_utf8(file.data.into_owned())
                .map(Some)
                .map_err(|_| ResourceError::InvalidUtf8 {
                    name: name.to_string(),
                }),
            None => Ok(None),
        }
    }
}
