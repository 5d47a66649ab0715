//! Integration tests for URL matching over generated routes
//!
//! Uses the travel planner's own page set: landing, auth screens, the
//! dashboard and itinerary pages.

use pretty_assertions::assert_eq;
use voyage_router::*;

fn app_registry() -> PageRegistry<&'static str> {
    PageRegistry::default()
        .with_page("/src/pages/index.tsx", "Landing")
        .and_then(|r| r.with_page("/src/pages/login/index.tsx", "Login"))
        .and_then(|r| r.with_page("/src/pages/signup/index.tsx", "Signup"))
        .and_then(|r| r.with_page("/src/pages/Dashboard/index.tsx", "Dashboard"))
        .and_then(|r| r.with_page("/src/pages/itineraries/new.tsx", "NewItinerary"))
        .and_then(|r| r.with_page("/src/pages/itineraries/[id].tsx", "Itinerary"))
        .and_then(|r| r.with_page("/src/pages/itineraries/edit/[id].tsx", "EditItinerary"))
        .unwrap()
}

#[test]
fn test_root_matches_landing() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    let found = router.match_url("/").unwrap();
    assert_eq!(*found.component(), "Landing");
    assert!(found.params.is_empty());
}

#[test]
fn test_lowercase_navigation_reaches_capitalized_page() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    let found = router.match_url("/dashboard").unwrap();
    assert_eq!(*found.component(), "Dashboard");
    assert_eq!(found.route.path, "/Dashboard");
}

#[test]
fn test_case_sensitive_router() {
    let registry = app_registry();
    let router = Router::with_case_insensitive(false).with_routes(generate_routes(&registry));

    assert!(router.match_url("/dashboard").is_none());
    assert!(router.match_url("/Dashboard").is_some());
}

#[test]
fn test_static_route_beats_dynamic_sibling() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    assert_eq!(*router.match_url("/itineraries/new").unwrap().component(), "NewItinerary");

    let found = router.match_url("/itineraries/65f0c2").unwrap();
    assert_eq!(*found.component(), "Itinerary");
    assert_eq!(found.pattern(), "/itineraries/:id");
    assert_eq!(found.source().as_str(), "/src/pages/itineraries/[id].tsx");
    assert_eq!(found.param("id"), Some("65f0c2"));
}

#[test]
fn test_nested_dynamic_route() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    let found = router.match_url("/itineraries/edit/abc123").unwrap();
    assert_eq!(*found.component(), "EditItinerary");
    assert_eq!(found.param("id"), Some("abc123"));
}

#[test]
fn test_url_noise_is_ignored() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    assert_eq!(*router.match_url("/login/").unwrap().component(), "Login");
    assert_eq!(*router.match_url("//signup?ref=home").unwrap().component(), "Signup");
    assert_eq!(
        router.match_url("/itineraries/42#budget").unwrap().param("id"),
        Some("42")
    );
}

#[test]
fn test_params_are_percent_decoded() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    let found = router.match_url("/itineraries/Tokyo%20%26%20Kyoto").unwrap();
    assert_eq!(found.param("id"), Some("Tokyo & Kyoto"));
}

#[test]
fn test_unknown_url_does_not_match() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    assert!(router.match_url("/settings").is_none());
    assert!(router.match_url("/itineraries").is_none());
    assert!(router.match_url("/itineraries/1/2/3").is_none());
}

#[test]
fn test_routes_listed_in_priority_order() {
    let registry = app_registry();
    let router = Router::from_routes(generate_routes(&registry));

    let dynamic_counts: Vec<usize> = router
        .routes()
        .iter()
        .map(|r| route::param_names(&r.path).len())
        .collect();

    let mut sorted = dynamic_counts.clone();
    sorted.sort();
    assert_eq!(dynamic_counts, sorted);
    assert_eq!(router.len(), registry.len());
}

#[test]
fn test_two_params_bind_independently() {
    let registry = PageRegistry::default()
        .with_page("/src/pages/[a]/[b].tsx", "Pair")
        .unwrap();
    let router = Router::from_routes(generate_routes(&registry));

    let found = router.match_url("/paris/rome").unwrap();
    assert_eq!(found.param("a"), Some("paris"));
    assert_eq!(found.param("b"), Some("rome"));
}

#[test]
fn test_empty_router() {
    let router: Router<'_, &str> = Router::default();
    assert!(router.is_empty());
    assert!(router.match_url("/").is_none());
}

#[test]
fn test_exact_case_page_wins_over_case_insensitive_match() {
    let registry = PageRegistry::default()
        .with_page("/src/pages/About.tsx", "Upper")
        .and_then(|r| r.with_page("/src/pages/about.tsx", "Lower"))
        .unwrap();
    let routes = generate_routes(&registry);
    assert_eq!(find_collisions(&routes).len(), 1);

    let router = Router::from_routes(routes);
    assert_eq!(*router.match_url("/about").unwrap().component(), "Lower");
    assert_eq!(*router.match_url("/About").unwrap().component(), "Upper");
    // no exact spelling: first registered wins
    assert_eq!(*router.match_url("/ABOUT").unwrap().component(), "Upper");
}

#[test]
fn test_case_insensitive_static_still_beats_dynamic() {
    let registry = PageRegistry::default()
        .with_page("/src/pages/Dashboard/index.tsx", "Dashboard")
        .and_then(|r| r.with_page("/src/pages/[slug].tsx", "Slug"))
        .unwrap();
    let router = Router::from_routes(generate_routes(&registry));

    assert_eq!(*router.match_url("/dashboard").unwrap().component(), "Dashboard");
    assert_eq!(*router.match_url("/paris").unwrap().component(), "Slug");
}

#[test]
fn test_static_segments_match_after_decoding() {
    let registry = PageRegistry::default()
        .with_page("/src/pages/about us.tsx", "AboutUs")
        .and_then(|r| r.with_page("/src/pages/trips/[city].tsx", "Trip"))
        .unwrap();
    let router = Router::from_routes(generate_routes(&registry));

    assert_eq!(*router.match_url("/about%20us").unwrap().component(), "AboutUs");
    assert_eq!(*router.match_url("/About%20Us").unwrap().component(), "AboutUs");
    assert_eq!(router.match_url("/trips/Rio%20de%20Janeiro").unwrap().param("city"), Some("Rio de Janeiro"));
}
