// Configuration parsing from voyage.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use voyage_router::{CollisionPolicy, PagesLayout, DEFAULT_PAGES_ROOT, DEFAULT_PAGE_EXTENSION};

pub const CONFIG_FILE: &str = "voyage.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Prefix every page id starts with (default: "/src/pages")
    #[serde(default = "default_pages_root")]
    pub pages_root: String,

    /// Page file extension (default: ".tsx")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Whether static segments match case-insensitively (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    /// `last-wins` or `reject`
    #[serde(default)]
    pub on_collision: CollisionPolicy,
}

fn default_name() -> String {
    "voyage-app".to_string()
}

fn default_pages_root() -> String {
    DEFAULT_PAGES_ROOT.to_string()
}

fn default_extension() -> String {
    DEFAULT_PAGE_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            pages_root: default_pages_root(),
            extension: default_extension(),
            case_insensitive: true,
            on_collision: CollisionPolicy::default(),
        }
    }
}

impl RoutingConfig {
    pub fn layout(&self) -> PagesLayout {
        PagesLayout::new(self.pages_root.as_str(), self.extension.as_str())
    }
}

impl Config {
    /// Load configuration; a missing or empty file yields defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
