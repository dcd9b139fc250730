pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::contact_submission::ContactSubmission;
pub use models::project::Project;
