//! URL path validation and normalization
//!
//! All functions are pure and never fail; malformed input is repaired.

use std::borrow::Cow;

/// Whether a URL path is already canonical
///
/// Canonical means: starts with `/`, contains no `//` or `\`, and has no
/// trailing `/` unless it is the root itself.
///
/// # Examples
///
/// ```
/// use voyage_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/itineraries/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("login"));
/// assert!(!is_valid_path("/login/"));
/// assert!(!is_valid_path("/itineraries//42"));
/// assert!(!is_valid_path("/itineraries\\42"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalizes a URL path to canonical form
///
/// Borrows when the input is already canonical and allocates only when it
/// has to repair trailing or doubled slashes and backslashes.
///
/// ```
/// use std::borrow::Cow;
/// use voyage_router::path::normalize_path;
///
/// assert!(matches!(normalize_path("/dashboard"), Cow::Borrowed("/dashboard")));
/// assert_eq!(normalize_path("/dashboard/"), "/dashboard");
/// assert_eq!(normalize_path("\\users\\7"), "/users/7");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Drops the query string and fragment from a URL path
///
/// ```
/// use voyage_router::path::strip_query;
///
/// assert_eq!(strip_query("/itineraries/42?tab=budget#top"), "/itineraries/42");
/// assert_eq!(strip_query("/login"), "/login");
/// ```
pub fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_valid_borrows() {
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
        assert!(matches!(normalize_path("/login"), Cow::Borrowed("/login")));
    }

    #[test]
    fn test_normalize_path_repairs() {
        assert_eq!(normalize_path("/signup/"), "/signup");
        assert_eq!(normalize_path("/itineraries///42"), "/itineraries/42");
        assert_eq!(normalize_path("itineraries/42"), "/itineraries/42");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_strip_query_fragment_only() {
        assert_eq!(strip_query("/dashboard#recent"), "/dashboard");
        assert_eq!(strip_query("?q=1"), "");
    }
}
