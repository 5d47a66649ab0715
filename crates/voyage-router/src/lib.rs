//! # Voyage Router
//!
//! File-system based routing for the Voyage travel planner:
//! - Page files under a pages root (`/src/pages/**/*.tsx`) become URL patterns
//! - `index` files map to their parent directory (`/settings/index.tsx` → `/settings`)
//! - Bracketed segments become dynamic parameters (`[id]` → `:id`)
//!
//! Pages are registered explicitly in a [`PageRegistry`] (or discovered from
//! disk at startup), turned into [`RouteDescriptor`]s by [`generate_routes`],
//! and served by a [`Router`].
//!
//! ## Example
//!
//! ```
//! use voyage_router::{generate_routes, PageRegistry, Router};
//!
//! let registry = PageRegistry::default()
//!     .with_page("/src/pages/index.tsx", "Landing")?
//!     .with_page("/src/pages/Dashboard/index.tsx", "Dashboard")?
//!     .with_page("/src/pages/itineraries/[id].tsx", "Itinerary")?;
//!
//! let routes = generate_routes(&registry);
//! let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
//! assert_eq!(paths, vec!["/Dashboard", "/", "/itineraries/:id"]);
//!
//! let router = Router::from_routes(routes);
//! let found = router.match_url("/dashboard").unwrap();
//! assert_eq!(*found.component(), "Dashboard");
//! # Ok::<(), voyage_router::RouteError>(())
//! ```

mod discover;
mod error;
mod page;
pub mod path;
mod registry;
pub mod route;
mod router;

pub use discover::{discover_pages, is_page_file, pages_dir, registry_from_dir};
pub use error::{Result, RouteError};
pub use page::{
    PageDescriptor, PageFileId, PageModule, PagesLayout, DEFAULT_PAGES_ROOT, DEFAULT_PAGE_EXTENSION,
};
pub use path::{is_valid_path, normalize_path};
pub use registry::PageRegistry;
pub use route::{
    derive_route_path, find_collisions, generate_checked, generate_routes, generate_routes_from,
    Collision, CollisionPolicy, RouteDescriptor,
};
pub use router::{RouteMatch, Router};
