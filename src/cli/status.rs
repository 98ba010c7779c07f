use std::path::Path;

use crate::resolver::Resolver;

/// Summary of what the resolver currently finds under a public root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub profile_images: usize,
    pub portfolio_images: usize,
    pub projects: usize,
    pub project_images: usize,
}

/// Report image and project counts for the conventional `profile/` and
/// `portfolio/` directories under `public_dir`. Missing directories count
/// as zero.
pub fn run_status(public_dir: &Path) -> StatusReport {
    let resolver = Resolver::default();

    let profile_images = resolver
        .list_flat(&public_dir.join("profile"), "/profile")
        .len();
    let portfolio_images = resolver
        .list_flat(&public_dir.join("portfolio"), "/portfolio")
        .len();
    let projects = resolver.list_grouped(&public_dir.join("portfolio"), "/portfolio");

    StatusReport {
        profile_images,
        portfolio_images,
        projects: projects.len(),
        project_images: projects.iter().map(|p| p.images.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_status_counts() {
        let temp = TempDir::new().unwrap();
        let profile = temp.path().join("profile");
        fs::create_dir(&profile).unwrap();
        fs::write(profile.join("me.jpg"), "img").unwrap();

        let portfolio = temp.path().join("portfolio");
        fs::create_dir_all(portfolio.join("1")).unwrap();
        fs::write(portfolio.join("1/a.jpg"), "img").unwrap();
        fs::write(portfolio.join("1/b.jpg"), "img").unwrap();
        fs::create_dir_all(portfolio.join("2")).unwrap();
        fs::write(portfolio.join("2/a.jpg"), "img").unwrap();
        fs::write(portfolio.join("hero.png"), "img").unwrap();

        let report = run_status(temp.path());
        assert_eq!(
            report,
            StatusReport {
                profile_images: 1,
                portfolio_images: 1,
                projects: 2,
                project_images: 3,
            }
        );
    }

    #[test]
    fn test_status_empty_root() {
        let temp = TempDir::new().unwrap();
        let report = run_status(temp.path());
        assert_eq!(report.profile_images, 0);
        assert_eq!(report.projects, 0);
    }
}
