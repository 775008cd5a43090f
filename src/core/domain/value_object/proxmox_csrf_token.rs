use serde::{Deserialize, Serialize};
use std::fmt;

/// A Proxmox CSRF protection token, sent as the `CSRFPreventionToken` header.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxmoxCSRFToken(String);

impl ProxmoxCSRFToken {
    pub const HEADER_NAME: &'static str = "CSRFPreventionToken";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProxmoxCSRFToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProxmoxCSRFToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let token = ProxmoxCSRFToken::new("4EEC61E2:token");
        assert!(!format!("{token:?}").contains("4EEC61E2"));
        assert_eq!(token.as_str(), "4EEC61E2:token");
    }
}
