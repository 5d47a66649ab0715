//! Page registry: the validated set of pages routes are generated from

use std::collections::BTreeMap;

use tracing::debug;

use crate::{PageDescriptor, PageFileId, PageModule, PagesLayout, Result, RouteError};

/// Validated mapping from page ids to their components
///
/// Built once at startup and read-only afterwards. Iteration is in
/// lexicographic page id order, which fixes the order of generated routes.
///
/// # Examples
///
/// ```
/// use voyage_router::{generate_routes, PageRegistry};
///
/// let registry = PageRegistry::default()
///     .with_page("/src/pages/login/index.tsx", "Login")?
///     .with_page("/src/pages/index.tsx", "Landing")?;
///
/// let paths: Vec<String> = generate_routes(&registry).into_iter().map(|r| r.path).collect();
/// assert_eq!(paths, vec!["/", "/login"]);
/// # Ok::<(), voyage_router::RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PageRegistry<C> {
    layout: PagesLayout,
    pages: BTreeMap<PageFileId, PageDescriptor<C>>,
}

impl<C> PageRegistry<C> {
    /// Creates an empty registry for the given layout
    pub fn new(layout: PagesLayout) -> Self {
        Self {
            layout,
            pages: BTreeMap::new(),
        }
    }

    /// Registers a page, replacing any page already registered under `id`
    ///
    /// Fails with [`RouteError::MalformedKey`] when `id` is outside the pages
    /// root or lacks the page extension.
    pub fn register(&mut self, id: impl Into<PageFileId>, component: C) -> Result<()> {
        let id = id.into();
        self.check_id(&id)?;

        if self.pages.insert(id.clone(), PageDescriptor::new(component)).is_some() {
            debug!(page = %id, "replaced registered page");
        } else {
            debug!(page = %id, "registered page");
        }

        Ok(())
    }

    /// Registers a loosely shaped module
    ///
    /// Fails with [`RouteError::MissingDefaultExport`] when the module has no
    /// component, in addition to the id checks of [`PageRegistry::register`].
    pub fn register_module(&mut self, id: impl Into<PageFileId>, module: PageModule<C>) -> Result<()> {
        let id = id.into();
        self.check_id(&id)?;

        match module.default {
            Some(component) => self.register(id, component),
            None => Err(RouteError::MissingDefaultExport { id: id.into_string() }),
        }
    }

    /// Builder form of [`PageRegistry::register`]
    pub fn with_page(mut self, id: impl Into<PageFileId>, component: C) -> Result<Self> {
        self.register(id, component)?;
        Ok(self)
    }

    pub fn layout(&self) -> &PagesLayout {
        &self.layout
    }

    pub fn get(&self, id: &str) -> Option<&PageDescriptor<C>> {
        self.pages.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pages.contains_key(id)
    }

    /// Pages in lexicographic id order
    pub fn iter(&self) -> impl Iterator<Item = (&PageFileId, &C)> {
        self.pages.iter().map(|(id, page)| (id, &page.component))
    }

    pub fn ids(&self) -> impl Iterator<Item = &PageFileId> {
        self.pages.keys()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn check_id(&self, id: &PageFileId) -> Result<()> {
        if self.layout.accepts(id.as_str()) {
            Ok(())
        } else {
            Err(RouteError::MalformedKey {
                id: id.to_string(),
                root: self.layout.root.clone(),
                extension: self.layout.extension.clone(),
            })
        }
    }
}

impl<C> Default for PageRegistry<C> {
    fn default() -> Self {
        Self::new(PagesLayout::default())
    }
}
