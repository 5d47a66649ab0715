//! Page id → URL pattern derivation
//!
//! Pure string pipeline: same input, same output, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::PagesLayout;

/// Bracket group `[name]`, matched non-greedily so sibling groups convert independently
static BRACKET_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Trailing segment collapsed into its parent directory
const INDEX_SEGMENT: &str = "/index";

/// Derives the URL pattern for a page id
///
/// Steps, in order:
/// 1. strip the pages root from the start
/// 2. strip the page extension from the end
/// 3. drop a trailing `/index` segment (case-sensitive)
/// 4. turn every `[name]` into `:name`
/// 5. an empty result is the root path `/`
///
/// Steps 1 and 2 are no-ops when the prefix or suffix is absent, so a key
/// outside the pages root yields a path that still contains the foreign
/// prefix. The registry rejects such keys before they get here.
///
/// # Examples
///
/// ```
/// use voyage_router::{derive_route_path, PagesLayout};
///
/// let layout = PagesLayout::default();
/// assert_eq!(derive_route_path("/src/pages/index.tsx", &layout), "/");
/// assert_eq!(derive_route_path("/src/pages/settings/index.tsx", &layout), "/settings");
/// assert_eq!(derive_route_path("/src/pages/itineraries/[id].tsx", &layout), "/itineraries/:id");
/// assert_eq!(derive_route_path("/src/pages/[a]/[b].tsx", &layout), "/:a/:b");
/// ```
pub fn derive_route_path(id: &str, layout: &PagesLayout) -> String {
    let relative = id.strip_prefix(layout.root_prefix()).unwrap_or(id);
    let without_ext = relative
        .strip_suffix(layout.extension.as_str())
        .unwrap_or(relative);
    let collapsed = without_ext.strip_suffix(INDEX_SEGMENT).unwrap_or(without_ext);

    let pattern = BRACKET_PARAM.replace_all(collapsed, ":$1");

    if pattern.is_empty() {
        "/".to_string()
    } else {
        pattern.into_owned()
    }
}
