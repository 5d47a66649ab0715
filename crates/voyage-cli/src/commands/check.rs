use anyhow::Result;
use colored::Colorize;
use voyage_router::{find_collisions, generate_checked};

use super::Project;

/// Fails on discovery errors, and on collisions when the policy is `reject`
pub fn execute(project: &Project) -> Result<()> {
    let policy = project.config.routing.on_collision;

    println!("{}", "Checking pages...".green().bold());

    let registry = project.registry()?;
    let routes = generate_checked(&registry, policy)?;
    let collisions = find_collisions(&routes);

    for collision in &collisions {
        let pages: Vec<_> = collision.sources.iter().map(|s| s.as_str()).collect();
        println!(
            "{} {} <- {}",
            "⚠".yellow(),
            collision.variants.join(" | ").yellow(),
            pages.join(", ")
        );
    }

    println!(
        "{} {} pages, {} routes, {} collisions",
        "✓".green(),
        registry.len(),
        routes.len(),
        collisions.len()
    );

    Ok(())
}
