use serde::Serialize;

use crate::resolver::Project;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ImagesResponse {
    pub images: Vec<String>,
}

#[derive(Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectResponse>,
}

#[derive(Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub cover: String,
    pub images: Vec<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            cover: p.cover,
            images: p.images,
        }
    }
}
