//! Page identifiers and the shapes pages are registered with

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Default pages root every page id starts with
pub const DEFAULT_PAGES_ROOT: &str = "/src/pages";

/// Default page file extension every page id ends with
pub const DEFAULT_PAGE_EXTENSION: &str = ".tsx";

/// Location of a page file relative to the project, e.g. `/src/pages/login/index.tsx`
///
/// Ordering is plain byte order of the string, which is the order the
/// registry hands pages to the generator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageFileId(String);

impl PageFileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PageFileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageFileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PageFileId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageFileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PageFileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Where pages live and which extension marks a page file
///
/// # Examples
///
/// ```
/// use voyage_router::PagesLayout;
///
/// let layout = PagesLayout::default();
/// assert!(layout.accepts("/src/pages/login/index.tsx"));
/// assert!(!layout.accepts("/src/components/Button.tsx"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesLayout {
    #[serde(default = "default_root", deserialize_with = "deserialize_root")]
    pub root: String,

    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_root() -> String {
    DEFAULT_PAGES_ROOT.to_string()
}

fn default_extension() -> String {
    DEFAULT_PAGE_EXTENSION.to_string()
}

/// `/src/pages/` and `/src/pages` name the same root
fn trim_root(root: &str) -> String {
    root.trim_end_matches('/').to_string()
}

fn deserialize_root<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|root| trim_root(&root))
}

impl Default for PagesLayout {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
        }
    }
}

impl PagesLayout {
    pub fn new(root: impl Into<String>, extension: impl Into<String>) -> Self {
        let root: String = root.into();
        Self {
            root: trim_root(&root),
            extension: extension.into(),
        }
    }

    /// Whether `id` sits under the pages root and carries the page extension
    ///
    /// The root must be followed by a `/`, so `/src/pagesextra/a.tsx` is not
    /// a page of `/src/pages`.
    pub fn accepts(&self, id: &str) -> bool {
        id.strip_prefix(self.root_prefix())
            .map_or(false, |rest| rest.starts_with('/'))
            && id.ends_with(self.extension.as_str())
    }

    /// The root without trailing slashes, even when `root` was assigned directly
    pub fn root_prefix(&self) -> &str {
        self.root.trim_end_matches('/')
    }
}

/// A registered page: its renderable entry point is mandatory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor<C> {
    pub component: C,
}

impl<C> PageDescriptor<C> {
    pub fn new(component: C) -> Self {
        Self { component }
    }
}

/// Loosely shaped page module as produced by an external loader
///
/// Only accepted at the registry boundary, where a missing `default`
/// component is rejected instead of surfacing at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModule<C> {
    pub default: Option<C>,
}

impl<C> PageModule<C> {
    pub fn with_default(component: C) -> Self {
        Self {
            default: Some(component),
        }
    }

    pub fn empty() -> Self {
        Self { default: None }
    }
}

impl<C> Default for PageModule<C> {
    fn default() -> Self {
        Self::empty()
    }
}
