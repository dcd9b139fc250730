#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_core::Project;
use folio_server::state::AppState;
use folio_server::store::{ProjectStore, StaticProjectStore, StoreError};

use std::sync::Arc;

/// Create AppState backed by the static seed data
pub fn create_test_app_state() -> AppState {
    AppState {
        store: Arc::new(StaticProjectStore::default()),
    }
}

/// A store that always fails, for exercising the 500 path
pub struct FailingStore {
    pub message: String,
}

impl ProjectStore for FailingStore {
    fn find_all(&self) -> Result<Vec<Project>, StoreError> {
        Err(StoreError::Unavailable {
            message: self.message.clone(),
        })
    }
}

/// Create AppState whose store fails every read with the given message
pub fn create_failing_app_state(message: &str) -> AppState {
    AppState {
        store: Arc::new(FailingStore {
            message: message.to_string(),
        }),
    }
}
