use std::io;
use thiserror::Error;

/// Errors surfaced by [`ResourceProvider`](crate::ResourceProvider)
/// implementations.
///
/// These never reach lookup callers: loaders log them and degrade to "no
/// entries loaded", so user-visible behavior is always a returned string.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource exists but could not be read.
    #[error("failed to read resource '{name}': {source}")]
    Read {
        /// Resource name as requested from the provider.
        name: String,
        #[source]
        source: io::Error,
    },
    /// The resource content is not valid UTF-8.
    #[error("resource '{name}' is not valid UTF-8")]
    InvalidUtf8 {
        /// Resource name as requested from the provider.
        name: String,
    },
}
