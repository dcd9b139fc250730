pub mod contact_submission;
pub mod project;
