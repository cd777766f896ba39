pub mod create_project;
pub mod download_artifact;
pub mod list_projects;
