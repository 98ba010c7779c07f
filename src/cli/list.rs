use std::path::Path;

use crate::resolver::{Resolver, ResolverConfig};

/// Options for a flat listing
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Public URL prefix; defaults to `/` + the directory's own name
    pub prefix: Option<String>,
    /// Drop files smaller than this many bytes
    pub min_bytes: Option<u64>,
}

/// List image URLs for the files directly under `dir`, in ascending
/// numeric-aware order. A missing directory yields an empty list.
pub fn run_list(dir: &Path, options: ListOptions) -> Vec<String> {
    let resolver = Resolver::new(ResolverConfig {
        min_bytes: options.min_bytes,
        ..ResolverConfig::default()
    });

    let prefix = options.prefix.unwrap_or_else(|| default_prefix(dir));
    resolver.list_flat(dir, &prefix)
}

/// `public/profile` is mounted at `/profile`, so the default URL prefix is
/// the directory's own name.
pub(crate) fn default_prefix(dir: &Path) -> String {
    dir.file_name()
        .and_then(|n| n.to_str())
        .map(|n| format!("/{}", n))
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_uses_directory_name_as_prefix() {
        let temp = TempDir::new().unwrap();
        let profile = temp.path().join("profile");
        fs::create_dir(&profile).unwrap();
        fs::write(profile.join("1.jpg"), "img").unwrap();

        let images = run_list(&profile, ListOptions::default());
        assert_eq!(images, vec!["/profile/1.jpg"]);
    }

    #[test]
    fn test_list_explicit_prefix() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.png"), "img").unwrap();

        let images = run_list(
            temp.path(),
            ListOptions {
                prefix: Some("/gallery".to_string()),
                min_bytes: None,
            },
        );
        assert_eq!(images, vec!["/gallery/a.png"]);
    }

    #[test]
    fn test_list_min_bytes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tiny.jpg"), "x").unwrap();
        fs::write(temp.path().join("big.jpg"), vec![0u8; 32]).unwrap();

        let images = run_list(
            temp.path(),
            ListOptions {
                prefix: Some("/p".to_string()),
                min_bytes: Some(16),
            },
        );
        assert_eq!(images, vec!["/p/big.jpg"]);
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let images = run_list(Path::new("/nonexistent/profile"), ListOptions::default());
        assert!(images.is_empty());
    }
}
