pub mod create_project;
pub mod download_artifact;
pub mod get_feed;

pub use create_project::create_project_handler;
pub use download_artifact::download_artifact_handler;
pub use get_feed::get_feed_handler;
