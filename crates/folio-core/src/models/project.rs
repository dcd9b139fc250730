//! Project entity - a displayable portfolio item.

use serde::{Deserialize, Serialize};

/// A portfolio project served by the listing endpoint.
/// Immutable for the lifetime of the process; there is no CRUD surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Optional link to a live deployment or repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Project {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
