mod list;
mod projects;
mod status;

pub use list::{run_list, ListOptions};
pub use projects::{run_projects, ProjectsOptions};
pub use status::{run_status, StatusReport};
