use std::path::Path;

use crate::resolver::{Project, Resolver, ResolverConfig};

/// Options for a grouped listing
#[derive(Debug, Default)]
pub struct ProjectsOptions {
    /// Public URL prefix; defaults to `/` + the directory's own name
    pub prefix: Option<String>,
    /// Drop files smaller than this many bytes
    pub min_bytes: Option<u64>,
}

/// Group the subfolders of `dir` into projects, newest folder first.
/// A missing directory yields an empty list.
pub fn run_projects(dir: &Path, options: ProjectsOptions) -> Vec<Project> {
    let resolver = Resolver::new(ResolverConfig {
        min_bytes: options.min_bytes,
        ..ResolverConfig::default()
    });

    let prefix = options
        .prefix
        .unwrap_or_else(|| super::list::default_prefix(dir));
    resolver.list_grouped(dir, &prefix)
}
