pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod store;

pub use api::{
    contact::{contact::submit_contact, contact_response::ContactResponse},
    error::ApiError,
    error::Result as ApiResult,
    projects::{project_dto::ProjectDto, projects::list_projects},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
pub use crate::store::{ProjectStore, StaticProjectStore, StoreError};
