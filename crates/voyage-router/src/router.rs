//! URL matching over a generated route table

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::warn;

use crate::path::{normalize_path, strip_query};
use crate::route::pattern::{segments, PatternSegment};
use crate::{PageFileId, RouteDescriptor};

/// Result of matching a URL against the route table
#[derive(Debug, Clone)]
pub struct RouteMatch<'r, C> {
    /// The matched route
    pub route: RouteDescriptor<'r, C>,
    /// Percent-decoded values bound to the route's `:name` segments
    pub params: HashMap<String, String>,
}

impl<'r, C> RouteMatch<'r, C> {
    pub fn component(&self) -> &'r C {
        self.route.component
    }

    /// The matched pattern, e.g. `/itineraries/:id`
    pub fn pattern(&self) -> &str {
        &self.route.path
    }

    pub fn source(&self) -> &'r PageFileId {
        self.route.source
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Client-side router built from generated routes
///
/// Routes are kept in priority order: fewer dynamic segments first, ties in
/// registration order. Registering a pattern that already exists replaces
/// the earlier route, so the last registration wins.
///
/// # Examples
///
/// ```
/// use voyage_router::{generate_routes, PageRegistry, Router};
///
/// let registry = PageRegistry::default()
///     .with_page("/src/pages/itineraries/[id].tsx", "Detail")?
///     .with_page("/src/pages/itineraries/new.tsx", "NewItinerary")?;
///
/// let router = Router::from_routes(generate_routes(&registry));
///
/// let found = router.match_url("/itineraries/new").unwrap();
/// assert_eq!(*found.component(), "NewItinerary");
///
/// let found = router.match_url("/itineraries/42").unwrap();
/// assert_eq!(found.param("id"), Some("42"));
/// # Ok::<(), voyage_router::RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Router<'r, C> {
    routes: Vec<RouteDescriptor<'r, C>>,
    case_insensitive: bool,
}

impl<'r, C> Router<'r, C> {
    /// Creates an empty router with case-insensitive static segments
    pub fn new() -> Self {
        Self::with_case_insensitive(true)
    }

    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        Self {
            routes: Vec::new(),
            case_insensitive,
        }
    }

    /// Creates a router registering `routes` in order
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = RouteDescriptor<'r, C>>,
    {
        Self::new().with_routes(routes)
    }

    pub fn with_route(mut self, route: RouteDescriptor<'r, C>) -> Self {
        self.add_route(route);
        self
    }

    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = RouteDescriptor<'r, C>>,
    {
        for route in routes {
            self.add_route(route);
        }
        self
    }

    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.case_insensitive = case_insensitive;
    }

    pub fn add_route(&mut self, route: RouteDescriptor<'r, C>) {
        match self.routes.iter_mut().find(|r| r.path == route.path) {
            Some(existing) => {
                warn!(
                    route = %route.path,
                    replaced = %existing.source,
                    by = %route.source,
                    "route registered twice, keeping the last one"
                );
                *existing = route;
            }
            None => {
                self.routes.push(route);
                // stable: equal priorities keep registration order
                self.routes.sort_by_key(|r| priority(&r.path));
            }
        }
    }

    /// Matches a URL and returns the best route
    ///
    /// The query string and fragment are ignored, the path is normalized and
    /// each segment is percent-decoded before matching. Routes with fewer
    /// dynamic segments win; among those, an exact-case match beats a
    /// case-insensitive one, then registration order decides.
    pub fn match_url(&self, url: &str) -> Option<RouteMatch<'r, C>> {
        let path = normalize_path(strip_query(url));
        let decoded: Vec<Cow<'_, str>> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect();
        let url_segments: Vec<&str> = decoded.iter().map(|s| s.as_ref()).collect();

        let mut best: Option<(usize, bool, &RouteDescriptor<'r, C>, HashMap<String, String>)> = None;

        for route in &self.routes {
            let rank = priority(&route.path);
            if let Some((best_rank, exact, _, _)) = &best {
                if rank > *best_rank || *exact {
                    break;
                }
            }

            if let Some((params, exact)) = match_segments(&route.path, &url_segments, self.case_insensitive) {
                let better = match &best {
                    None => true,
                    Some((_, best_exact, _, _)) => exact && !best_exact,
                };
                if better {
                    best = Some((rank, exact, route, params));
                }
            }
        }

        best.map(|(_, _, route, params)| RouteMatch {
            route: route.clone(),
            params,
        })
    }

    /// Routes in matching order
    pub fn routes(&self) -> &[RouteDescriptor<'r, C>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<C> Default for Router<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower is matched first
fn priority(pattern: &str) -> usize {
    segments(pattern).filter(PatternSegment::is_dynamic).count()
}

fn decode_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Binds `url_segments` (already decoded) to a pattern
///
/// The flag is true when every static segment matched with exact case.
fn match_segments(
    pattern: &str,
    url_segments: &[&str],
    case_insensitive: bool,
) -> Option<(HashMap<String, String>, bool)> {
    let pattern_segments: Vec<PatternSegment<'_>> = segments(pattern).collect();
    if pattern_segments.len() != url_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    let mut exact = true;

    for (segment, value) in pattern_segments.iter().zip(url_segments) {
        match segment {
            PatternSegment::Static(text) => {
                if text == value {
                    continue;
                }
                if case_insensitive && text.eq_ignore_ascii_case(value) {
                    exact = false;
                } else {
                    return None;
                }
            }
            PatternSegment::Param(name) => {
                params.insert(name.to_string(), value.to_string());
            }
        }
    }

    Some((params, exact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_counts_dynamic_segments() {
        assert_eq!(priority("/"), 0);
        assert_eq!(priority("/itineraries/new"), 0);
        assert_eq!(priority("/itineraries/:id"), 1);
        assert_eq!(priority("/:a/:b"), 2);
    }

    #[test]
    fn test_decode_segment() {
        assert_eq!(decode_segment("S%C3%A3o%20Paulo"), "São Paulo");
        assert_eq!(decode_segment("plain"), "plain");
        // invalid UTF-8 after decoding is kept as written
        assert_eq!(decode_segment("%FF"), "%FF");
    }

    #[test]
    fn test_match_segments_binds_params() {
        assert!(match_segments("/trips/:city", &["São Paulo"], true).is_none());

        let (params, exact) = match_segments("/trips/:city", &["trips", "São Paulo"], true).unwrap();
        assert_eq!(params.get("city").map(String::as_str), Some("São Paulo"));
        assert!(exact);
    }

    #[test]
    fn test_match_segments_case_handling() {
        let (_, exact) = match_segments("/Dashboard", &["dashboard"], true).unwrap();
        assert!(!exact);
        assert!(match_segments("/Dashboard", &["dashboard"], false).is_none());
        assert!(match_segments("/Dashboard", &["Dashboard"], false).is_some());
    }

    #[test]
    fn test_root_matches_only_empty_url() {
        assert!(match_segments("/", &[], true).is_some());
        assert!(match_segments("/", &["login"], true).is_none());
    }
}
