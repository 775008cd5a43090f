use std::fmt;

/// Prefix shared by every JSON endpoint of the Proxmox VE API.
pub const API_PREFIX: &str = "/api2/json";

/// An absolute API path below `/api2/json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath(String);

impl ApiPath {
    /// Normalizes `path` so that it always starts with a slash.
    pub fn new(path: &str) -> Self {
        if path.starts_with('/') {
            Self(path.to_string())
        } else {
            Self(format!("/{path}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
