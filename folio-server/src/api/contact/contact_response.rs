use serde::Serialize;

/// Contact acknowledgment response. Never echoes the submitted data.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}

impl ContactResponse {
    pub fn acknowledged() -> Self {
        Self {
            message: String::from("Thanks for reaching out"),
        }
    }
}
