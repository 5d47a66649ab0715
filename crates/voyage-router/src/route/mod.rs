//! Route derivation for file-based pages
//!
//! - [`parser`] turns one page id into a URL pattern
//! - [`generate`] builds the route table for a whole registry
//! - [`pattern`] classifies pattern segments for matching

pub mod generate;
pub mod parser;
pub mod pattern;

pub use generate::{
    find_collisions, generate_checked, generate_routes, generate_routes_from, Collision,
    CollisionPolicy, RouteDescriptor,
};
pub use parser::derive_route_path;
pub use pattern::{classify_segment, param_names, PatternSegment};
