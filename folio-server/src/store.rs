//! In-memory project store.
//!
//! The portfolio data is a fixed seed list today. The trait seam keeps the
//! handlers unchanged if a real store ever replaces it.

use folio_core::Project;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not serve the read
    #[error("{message}")]
    Unavailable { message: String },
}

pub trait ProjectStore: Send + Sync {
    /// Return every project, in insertion order.
    fn find_all(&self) -> Result<Vec<Project>, StoreError>;
}

/// Static seed data, immutable for the process lifetime.
#[derive(Debug)]
pub struct StaticProjectStore {
    projects: Vec<Project>,
}

impl Default for StaticProjectStore {
    fn default() -> Self {
        Self {
            projects: vec![
                Project::new(
                    1,
                    "Project Alpha",
                    "Portfolio landing page with a project showcase",
                )
                .with_url("https://example.com/alpha"),
                Project::new(2, "Project Beta", "Contact-form microservice"),
                Project::new(3, "Project Gamma", "Static-site generator experiment")
                    .with_url("https://example.com/gamma"),
            ],
        }
    }
}

impl ProjectStore for StaticProjectStore {
    fn find_all(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.clone())
    }
}
