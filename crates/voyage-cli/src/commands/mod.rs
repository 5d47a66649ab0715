pub mod check;
pub mod r#match;
pub mod routes;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use voyage_router::{registry_from_dir, PageRegistry};

use crate::config::Config;

/// A project directory together with its loaded configuration
pub struct Project {
    pub dir: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn new(dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    /// Walk the pages directory into a registry whose components are file paths
    pub fn registry(&self) -> Result<PageRegistry<PathBuf>> {
        let layout = self.config.routing.layout();
        registry_from_dir(&self.dir, &layout)
            .with_context(|| format!("Failed to discover pages in {:?}", self.dir))
    }

    /// Path shown to the user for a page file
    pub fn display_path<'a>(&self, file: &'a Path) -> std::borrow::Cow<'a, str> {
        file.strip_prefix(&self.dir).unwrap_or(file).to_string_lossy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use voyage_router::{generate_routes, CollisionPolicy};

    fn project_with(pages: &[&str]) -> (tempfile::TempDir, Project) {
        let dir = tempfile::tempdir().unwrap();
        for page in pages {
            let file = dir.path().join("src/pages").join(page);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(&file, "export default function Page() {}").unwrap();
        }
        let project = Project::new(dir.path(), Config::default());
        (dir, project)
    }

    #[test]
    fn test_registry_uses_configured_layout() {
        let (_dir, project) = project_with(&["index.tsx", "login/index.tsx", "itineraries/[id].tsx"]);
        let registry = project.registry().unwrap();

        let paths: Vec<_> = generate_routes(&registry).into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/itineraries/:id", "/login"]);
    }

    #[test]
    fn test_display_path_is_project_relative() {
        let (_dir, project) = project_with(&["About.tsx"]);
        let file = project.dir.join("src/pages/About.tsx");
        assert_eq!(project.display_path(&file), "src/pages/About.tsx");
    }

    #[test]
    fn test_check_passes_without_collisions() {
        let (_dir, project) = project_with(&["index.tsx", "login/index.tsx"]);
        assert!(check::execute(&project).is_ok());
    }

    #[test]
    fn test_check_fails_on_collision_under_reject() {
        let (_dir, mut project) = project_with(&["about.tsx", "about/index.tsx"]);
        assert!(check::execute(&project).is_ok());

        project.config.routing.on_collision = CollisionPolicy::Reject;
        let err = check::execute(&project).unwrap_err();
        assert!(err.to_string().contains("/about"));
    }

    #[test]
    fn test_check_rejects_case_only_collision() {
        let (_dir, mut project) = project_with(&["About.tsx", "about.tsx"]);
        project.config.routing.on_collision = CollisionPolicy::Reject;
        assert!(check::execute(&project).is_err());
    }

    #[test]
    fn test_match_known_and_unknown_urls() {
        let (_dir, project) = project_with(&["index.tsx", "itineraries/[id].tsx"]);

        assert!(r#match::execute(&project, "/itineraries/42?tab=days").is_ok());

        let err = r#match::execute(&project, "/settings").unwrap_err();
        assert_eq!(err.to_string(), "no route matches /settings");
    }

    #[test]
    fn test_match_respects_reject_policy() {
        let (_dir, mut project) = project_with(&["about.tsx", "about/index.tsx"]);
        project.config.routing.on_collision = CollisionPolicy::Reject;
        assert!(r#match::execute(&project, "/about").is_err());
    }

    #[test]
    fn test_routes_in_both_formats() {
        let (_dir, project) = project_with(&["index.tsx", "about.tsx", "about/index.tsx"]);
        assert!(routes::execute(&project, routes::Format::Table).is_ok());
        assert!(routes::execute(&project, routes::Format::Json).is_ok());
    }

    #[test]
    fn test_commands_fail_without_pages_dir() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path(), Config::default());

        assert!(check::execute(&project).is_err());
        assert!(routes::execute(&project, routes::Format::Table).is_err());
    }

    #[test]
    fn test_missing_pages_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path(), Config::default());

        let err = project.registry().unwrap_err();
        assert!(err.to_string().starts_with("Failed to discover pages"));
    }
}
