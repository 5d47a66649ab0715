//! Errors reported while registering, discovering and generating routes

use std::path::PathBuf;

/// Result alias used across the router crate
pub type Result<T, E = RouteError> = std::result::Result<T, E>;

/// Failures surfaced by the registry, page discovery and checked generation
///
/// Route derivation itself never fails; these conditions are caught at the
/// registration boundary or when a collision policy asks for it.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// A page id outside the pages root or with the wrong extension
    #[error("malformed page id `{id}`: expected `{root}/...{extension}`")]
    MalformedKey {
        id: String,
        root: String,
        extension: String,
    },

    /// A page module registered without a component
    #[error("page `{id}` has no default component")]
    MissingDefaultExport { id: String },

    /// Two or more pages derive the same URL pattern
    #[error("route `{path}` is claimed by {}", sources.join(", "))]
    PathCollision { path: String, sources: Vec<String> },

    /// The pages directory does not exist under the project directory
    #[error("pages directory not found: {}", path.display())]
    PagesDirNotFound { path: PathBuf },

    /// A file system path that cannot be expressed as a page id
    #[error("page path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
