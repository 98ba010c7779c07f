use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use galman::cli::{run_list, run_projects, run_status, ListOptions, ProjectsOptions};
use galman::logging::init_logging;
use galman::resolver::{Resolver, ResolverConfig};
use galman::serve::run_serve;

#[derive(Parser)]
#[command(name = "galman")]
#[command(about = "Portfolio gallery server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the gallery API and images over HTTP
    Serve {
        /// Public root containing profile/ and portfolio/ directories
        #[arg(default_value = "public")]
        path: PathBuf,
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
        /// Drop files smaller than this many bytes (8192 guards against
        /// truncated uploads)
        #[arg(long)]
        min_bytes: Option<u64>,
    },
    /// Print the flat image listing for a directory
    List {
        /// Directory to list
        path: PathBuf,
        /// Public URL prefix (defaults to /<directory name>)
        #[arg(long)]
        prefix: Option<String>,
        /// Drop files smaller than this many bytes
        #[arg(long)]
        min_bytes: Option<u64>,
    },
    /// Print the grouped project listing for a directory
    Projects {
        /// Directory whose subfolders are projects
        path: PathBuf,
        /// Public URL prefix (defaults to /<directory name>)
        #[arg(long)]
        prefix: Option<String>,
        /// Drop files smaller than this many bytes
        #[arg(long)]
        min_bytes: Option<u64>,
    },
    /// Show gallery content counts for a public root
    Status {
        /// Public root containing profile/ and portfolio/ directories
        #[arg(default_value = "public")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging - guard must be held for logs to flush
    let _guard = init_logging().ok();

    let cli = Cli::parse();
    run_command(cli)
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            path,
            port,
            min_bytes,
        } => {
            let resolver = Resolver::new(ResolverConfig {
                min_bytes,
                ..ResolverConfig::default()
            });
            run_serve(&path, port, resolver)?;
        }
        Commands::List {
            path,
            prefix,
            min_bytes,
        } => {
            let images = run_list(&path, ListOptions { prefix, min_bytes });
            for image in &images {
                println!("{}", image);
            }
            println!("{} images", images.len());
        }
        Commands::Projects {
            path,
            prefix,
            min_bytes,
        } => {
            let projects = run_projects(&path, ProjectsOptions { prefix, min_bytes });
            for project in &projects {
                println!("{} ({} images, cover {})", project.id, project.images.len(), project.cover);
            }
            println!("{} projects", projects.len());
        }
        Commands::Status { path } => {
            let report = run_status(&path);
            println!("Profile:   {} images", report.profile_images);
            println!(
                "Portfolio: {} projects, {} images ({} top-level)",
                report.projects, report.project_images, report.portfolio_images
            );
        }
    }

    Ok(())
}
