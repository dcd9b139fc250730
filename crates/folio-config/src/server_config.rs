use crate::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    /// Listening port; 0 means "auto-assign" - the OS picks a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}
