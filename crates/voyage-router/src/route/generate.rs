//! Route table generation from registered pages

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::parser::derive_route_path;
use crate::{PageFileId, PageRegistry, PagesLayout, Result, RouteError};

/// A generated route: URL pattern plus the page it renders
///
/// `component` and `source` borrow from the registry the route was generated
/// from; the generator never owns or mutates them.
#[derive(Debug, Serialize)]
pub struct RouteDescriptor<'r, C> {
    /// URL pattern like `/itineraries/:id`, always starting with `/`
    pub path: String,
    /// Renderable entry point of the page
    pub component: &'r C,
    /// Page id the pattern was derived from
    pub source: &'r PageFileId,
}

impl<C> Clone for RouteDescriptor<'_, C> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            component: self.component,
            source: self.source,
        }
    }
}

impl<C> PartialEq for RouteDescriptor<'_, C> {
    /// Same pattern bound to the very same component and source
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && std::ptr::eq(self.component, other.component)
            && self.source == other.source
    }
}

/// What to do when several pages derive the same pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Keep every route and warn; the router serves the last registration
    #[default]
    LastWins,
    /// Refuse to produce a route table
    Reject,
}

/// A pattern claimed by more than one page
///
/// Patterns that differ only in ASCII case collide too, since the router
/// matches static segments case-insensitively by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// First spelling of the pattern in generation order
    pub path: String,
    /// Every distinct spelling, starting with `path`
    pub variants: Vec<String>,
    /// Claiming pages in generation order
    pub sources: Vec<PageFileId>,
}

impl Collision {
    /// Whether the claiming patterns differ only by case
    pub fn is_case_only(&self) -> bool {
        self.variants.len() > 1
    }
}

impl From<Collision> for RouteError {
    fn from(collision: Collision) -> Self {
        RouteError::PathCollision {
            path: collision.path,
            sources: collision
                .sources
                .into_iter()
                .map(PageFileId::into_string)
                .collect(),
        }
    }
}

/// Generates one route per entry, in the entries' own iteration order
///
/// Total over any input: no validation, no sorting, no deduplication.
pub fn generate_routes_from<'r, C, I>(entries: I, layout: &PagesLayout) -> Vec<RouteDescriptor<'r, C>>
where
    C: 'r,
    I: IntoIterator<Item = (&'r PageFileId, &'r C)>,
{
    entries
        .into_iter()
        .map(|(source, component)| {
            let path = derive_route_path(source.as_str(), layout);
            debug!(page = %source, route = %path, "derived route");
            RouteDescriptor {
                path,
                component,
                source,
            }
        })
        .collect()
}

/// Generates the route table for a registry, in lexicographic page id order
///
/// # Examples
///
/// ```
/// use voyage_router::{generate_routes, PageRegistry};
///
/// let registry = PageRegistry::default()
///     .with_page("/src/pages/itineraries/[id].tsx", "ItineraryDetail")?;
///
/// let routes = generate_routes(&registry);
/// assert_eq!(routes[0].path, "/itineraries/:id");
/// assert_eq!(*routes[0].component, "ItineraryDetail");
/// # Ok::<(), voyage_router::RouteError>(())
/// ```
pub fn generate_routes<C>(registry: &PageRegistry<C>) -> Vec<RouteDescriptor<'_, C>> {
    generate_routes_from(registry.iter(), registry.layout())
}

/// Generates the route table and applies a collision policy
pub fn generate_checked<C>(
    registry: &PageRegistry<C>,
    policy: CollisionPolicy,
) -> Result<Vec<RouteDescriptor<'_, C>>> {
    let routes = generate_routes(registry);
    let collisions = find_collisions(&routes);

    match policy {
        CollisionPolicy::Reject => {
            if let Some(collision) = collisions.into_iter().next() {
                return Err(collision.into());
            }
        }
        CollisionPolicy::LastWins => {
            for collision in &collisions {
                if collision.is_case_only() {
                    warn!(
                        route = %collision.path,
                        variants = ?collision.variants,
                        "routes differ only by case; other spellings reach the first exact match"
                    );
                    continue;
                }
                let winner = collision.sources.last().map(PageFileId::as_str).unwrap_or_default();
                warn!(
                    route = %collision.path,
                    pages = collision.sources.len(),
                    winner,
                    "route claimed by several pages"
                );
            }
        }
    }

    Ok(routes)
}

/// Patterns claimed by two or more routes, ordered by first appearance
///
/// Patterns are compared ignoring ASCII case.
pub fn find_collisions<C>(routes: &[RouteDescriptor<'_, C>]) -> Vec<Collision> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Collision> = Vec::new();

    for route in routes {
        match index.get(&route.path.to_ascii_lowercase()) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.sources.push(route.source.clone());
                if !group.variants.contains(&route.path) {
                    group.variants.push(route.path.clone());
                }
            }
            None => {
                index.insert(route.path.to_ascii_lowercase(), groups.len());
                groups.push(Collision {
                    path: route.path.clone(),
                    variants: vec![route.path.clone()],
                    sources: vec![route.source.clone()],
                });
            }
        }
    }

    groups.retain(|group| group.sources.len() > 1);
    groups
}
