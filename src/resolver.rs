//! Directory-to-gallery resolution.
//!
//! Resolves a directory of images under the public root into an ordered
//! listing of root-relative URLs, either flat or grouped into per-subfolder
//! projects. Filesystem errors never escape this module: a missing or
//! unreadable directory resolves to an empty listing so the gallery always
//! renders, worst case as "no images yet".

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::sort::natural_cmp;

/// Recognized image extensions (lowercase, without the dot).
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif", "gif"];

/// Filtering rules for a listing.
///
/// One explicit parameter object shared by every call site, so the junk
/// rules and extension set cannot drift between endpoints.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Recognized image extensions, compared case-insensitively.
    pub extensions: Vec<String>,
    /// Drop files smaller than this many bytes (guards against zero-byte or
    /// truncated uploads). When set, files that cannot be stat'ed are also
    /// dropped. Off by default.
    pub min_bytes: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            min_bytes: None,
        }
    }
}

/// A subfolder of images treated as one gallery unit. `images` is never
/// empty and `cover` is always `images[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub cover: String,
    pub images: Vec<String>,
}

/// Resolves directories into gallery listings. Read-only and side-effect
/// free, so it is safe to share and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// List image URLs for the regular files directly under `dir`, in
    /// ascending numeric-aware order.
    ///
    /// `url_prefix` is the public mount point of `dir` (e.g. `/profile`);
    /// each returned entry is `{prefix}/{filename}`. Output is a pure
    /// function of the current directory contents.
    pub fn list_flat(&self, dir: &Path, url_prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if is_junk(&name) || !self.has_recognized_extension(&name) {
                    return None;
                }
                if let Some(min) = self.config.min_bytes {
                    // Unstatable files are filtered out, not errors
                    if entry.metadata().ok()?.len() < min {
                        debug!(%name, min, "dropping undersized file");
                        return None;
                    }
                }
                Some(name)
            })
            .collect();

        names.sort_by(|a, b| natural_cmp(a, b));

        let prefix = url_prefix.trim_end_matches('/');
        names
            .into_iter()
            .map(|name| format!("{}/{}", prefix, name))
            .collect()
    }

    /// Group the immediate subfolders of `dir` into projects, newest
    /// (highest-numbered) folder first; images within a project keep the
    /// ascending order of [`Self::list_flat`].
    ///
    /// Folders that end up with zero qualifying images are dropped, so an
    /// unreadable subfolder degrades to an absent project rather than
    /// failing the whole listing.
    pub fn list_grouped(&self, dir: &Path, url_prefix: &str) -> Vec<Project> {
        let mut folders: Vec<String> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(|s| s.to_string()))
            .filter(|name| !is_junk(name))
            .collect();

        // Most recent work first
        folders.sort_by(|a, b| natural_cmp(b, a));

        let prefix = url_prefix.trim_end_matches('/');
        folders
            .into_iter()
            .filter_map(|folder| {
                let images =
                    self.list_flat(&dir.join(&folder), &format!("{}/{}", prefix, folder));
                let cover = images.first()?.clone();
                Some(Project {
                    id: folder,
                    cover,
                    images,
                })
            })
            .collect()
    }

    fn has_recognized_extension(&self, name: &str) -> bool {
        let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_lowercase();
        self.config.extensions.iter().any(|e| *e == ext)
    }
}

/// OS/tooling artifacts that must never be treated as gallery content:
/// dotfiles (which covers `.DS_Store` and `._*` AppleDouble shadows) and
/// Windows thumbnail caches.
pub fn is_junk(name: &str) -> bool {
    name.starts_with('.') || name.eq_ignore_ascii_case("thumbs.db")
}
