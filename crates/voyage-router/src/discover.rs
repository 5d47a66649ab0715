//! Startup discovery of page files on disk

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{PageFileId, PageRegistry, PagesLayout, Result, RouteError};

/// Directory holding the pages of a project: `<project_dir>/<root>`
pub fn pages_dir(project_dir: &Path, layout: &PagesLayout) -> PathBuf {
    project_dir.join(layout.root.trim_matches('/'))
}

/// Whether a file name is a page file
///
/// Page files carry the page extension and start with an ASCII letter, a
/// digit, or `[` (dynamic segment). Anything else, such as `_layout.tsx`
/// or dot files, is not routed.
pub fn is_page_file(file_name: &str, extension: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(extension) else {
        return false;
    };

    match stem.chars().next() {
        Some(first) => first.is_ascii_alphanumeric() || first == '[',
        None => false,
    }
}

/// Finds every page under the project's pages directory
///
/// Returns page ids sorted lexicographically, with `/` separators on every
/// platform.
pub fn discover_pages(project_dir: &Path, layout: &PagesLayout) -> Result<Vec<PageFileId>> {
    Ok(walk_pages(project_dir, layout)?
        .into_iter()
        .map(|(id, _)| id)
        .collect())
}

/// Builds a registry whose components are the page files' paths on disk
pub fn registry_from_dir(project_dir: &Path, layout: &PagesLayout) -> Result<PageRegistry<PathBuf>> {
    let mut registry = PageRegistry::new(layout.clone());
    for (id, file) in walk_pages(project_dir, layout)? {
        registry.register(id, file)?;
    }
    Ok(registry)
}

fn walk_pages(project_dir: &Path, layout: &PagesLayout) -> Result<Vec<(PageFileId, PathBuf)>> {
    let root = pages_dir(project_dir, layout);
    if !root.is_dir() {
        return Err(RouteError::PagesDirNotFound { path: root });
    }

    let mut pages = Vec::new();

    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| RouteError::NonUtf8Path {
                path: entry.path().to_path_buf(),
            })?;

        if !is_page_file(file_name, &layout.extension) {
            debug!(file = %entry.path().display(), "skipping non-page file");
            continue;
        }

        let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        let id = page_id_for(relative, layout)?;
        pages.push((id, entry.path().to_path_buf()));
    }

    pages.sort_by(|a, b| a.0.cmp(&b.0));
    info!(dir = %root.display(), pages = pages.len(), "discovered pages");

    Ok(pages)
}

/// `users/[id]/index.tsx` → `/src/pages/users/[id]/index.tsx`
fn page_id_for(relative: &Path, layout: &PagesLayout) -> Result<PageFileId> {
    let segments = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment),
            _ => None,
        })
        .map(|segment| {
            segment.to_str().ok_or_else(|| RouteError::NonUtf8Path {
                path: relative.to_path_buf(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PageFileId::new(format!(
        "{}/{}",
        layout.root.trim_end_matches('/'),
        segments.join("/")
    )))
}
