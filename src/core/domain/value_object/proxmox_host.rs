use crate::core::domain::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A Proxmox host name or IP address.
///
/// Only the bare host is stored: no scheme, no port, no path. IPv6 literals
/// may be given with or without brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProxmoxHost(String);

impl ProxmoxHost {
    /// Creates a validated host.
    pub fn new(host: impl Into<String>) -> Result<Self, ValidationError> {
        let host = host.into();
        validate_host(&host)?;
        Ok(Self(host))
    }

    /// Returns the host as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the host in the form it takes inside a URL authority.
    #[must_use]
    pub fn url_host(&self) -> String {
        if self.0.contains(':') && !self.0.starts_with('[') {
            format!("[{}]", self.0)
        } else {
            self.0.clone()
        }
    }
}

impl TryFrom<String> for ProxmoxHost {
    type Error = ValidationError;

    fn try_from(host: String) -> Result<Self, Self::Error> {
        Self::new(host)
    }
}

impl From<ProxmoxHost> for String {
    fn from(host: ProxmoxHost) -> Self {
        host.0
    }
}

/// Validates a host name.
pub(crate) fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Field {
            field: "hostname".to_string(),
            message: "Hostname cannot be empty".to_string(),
        });
    }
    if host.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(
            "Hostname cannot contain whitespace".to_string(),
        ));
    }
    if host.contains('/') {
        return Err(ValidationError::Format(
            "Hostname must not include a scheme or path".to_string(),
        ));
    }
    Ok(())
}
