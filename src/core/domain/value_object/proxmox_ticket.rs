use serde::{Deserialize, Serialize};
use std::fmt;

/// A Proxmox authentication ticket, sent back as the `PVEAuthCookie` cookie.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxmoxTicket(String);

impl ProxmoxTicket {
    pub const COOKIE_NAME: &'static str = "PVEAuthCookie";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the ticket value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the ticket as a cookie header value.
    #[must_use]
    pub fn as_cookie_header(&self) -> String {
        format!("{}={}", Self::COOKIE_NAME, self.0)
    }
}

impl fmt::Debug for ProxmoxTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProxmoxTicket(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_header() {
        let ticket = ProxmoxTicket::new("PVE:root@pam:4EEC61E2::sig");
        assert_eq!(
            ticket.as_cookie_header(),
            "PVEAuthCookie=PVE:root@pam:4EEC61E2::sig"
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let ticket = ProxmoxTicket::new("PVE:root@pam:4EEC61E2::sig");
        assert!(!format!("{ticket:?}").contains("4EEC61E2::sig"));
    }
}
