use anyhow::{bail, Result};
use colored::Colorize;
use voyage_router::{generate_checked, Router};

use super::Project;

/// Resolve `url` the way the app would and print the page it renders
pub fn execute(project: &Project, url: &str) -> Result<()> {
    let registry = project.registry()?;
    let routes = generate_checked(&registry, project.config.routing.on_collision)?;
    let router = Router::with_case_insensitive(project.config.routing.case_insensitive).with_routes(routes);

    let Some(found) = router.match_url(url) else {
        bail!("no route matches {}", url);
    };

    println!("{} {}", "Route:".bold(), found.pattern().cyan());
    println!("{} {}", "Page: ".bold(), project.display_path(found.component()));

    let mut params: Vec<_> = found.params.iter().collect();
    params.sort();
    for (name, value) in params {
        println!("  {} = {}", name.green(), value);
    }

    Ok(())
}
