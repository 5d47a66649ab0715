//! Segment classification for derived URL patterns

/// One segment of a URL pattern like `/itineraries/:id`
///
/// # Examples
///
/// ```
/// use voyage_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("about"), PatternSegment::Static("about"));
/// assert_eq!(classify_segment(":id"), PatternSegment::Param("id"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    /// Literal text that must match the URL segment
    Static(&'a str),
    /// `:name` binding one URL segment
    Param(&'a str),
}

impl PatternSegment<'_> {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, PatternSegment::Param(_))
    }
}

/// Classifies one pattern segment
pub fn classify_segment(segment: &str) -> PatternSegment<'_> {
    match segment.strip_prefix(':') {
        Some(name) => PatternSegment::Param(name),
        None => PatternSegment::Static(segment),
    }
}

/// Splits a pattern into classified segments, ignoring empty ones
pub fn segments(pattern: &str) -> impl Iterator<Item = PatternSegment<'_>> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
}

/// Names of the dynamic segments in a pattern, in order
///
/// ```
/// use voyage_router::route::pattern::param_names;
///
/// assert_eq!(param_names("/users/:id/trips/:trip"), vec!["id", "trip"]);
/// ```
pub fn param_names(pattern: &str) -> Vec<&str> {
    segments(pattern)
        .filter_map(|segment| match segment {
            PatternSegment::Param(name) => Some(name),
            PatternSegment::Static(_) => None,
        })
        .collect()
}
