use anyhow::{Context, Result};
use colored::Colorize;
use voyage_router::{generate_routes, CollisionPolicy};

use super::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Aligned columns
    Table,
    /// Array of `{path, component, source}` objects
    Json,
}

pub fn execute(project: &Project, format: Format) -> Result<()> {
    let registry = project.registry()?;
    let routes = generate_routes(&registry);

    if format == Format::Json {
        let json = serde_json::to_string_pretty(&routes).context("Failed to serialize routes")?;
        println!("{}", json);
        return Ok(());
    }

    if routes.is_empty() {
        println!("{}", "No pages found".yellow());
        return Ok(());
    }

    let width = routes.iter().map(|r| r.path.len()).max().unwrap_or(0);
    let header = format!("{:width$}", "ROUTE", width = width);
    println!("{}  {}", header.bold(), "PAGE".bold());

    let collided = voyage_router::find_collisions(&routes);
    for route in &routes {
        let path = format!("{:width$}", route.path, width = width);
        let page = project.display_path(route.component);
        if collided.iter().any(|c| c.variants.contains(&route.path)) {
            println!("{}  {} {}", path.yellow(), page, "(collision)".yellow());
        } else {
            println!("{}  {}", path.cyan(), page);
        }
    }

    println!();
    println!("{} routes from {} pages", routes.len(), registry.len());

    if !collided.is_empty() && project.config.routing.on_collision == CollisionPolicy::LastWins {
        println!(
            "{}",
            "⚠ Some routes are claimed by several pages; the last one listed wins".yellow()
        );
    }

    Ok(())
}
