use thiserror::Error;

/// Terminal outcomes of a dictionary lookup.
///
/// Missing directories, unreadable descriptors and absent platform settings
/// never surface here; they only shrink the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No dictionary of any kind was found in any search location.
    #[error("No valid dictionaries were found")]
    NotFound,

    /// Dictionaries exist, but none matches the requested locale.
    #[error("Specified dictionary variant was not found: {requested}")]
    NoMatch {
        /// The requested tag after any variant override was applied.
        requested: String,
    },
}
