use crate::core::domain::value_object::{
    ProxmoxCSRFToken, ProxmoxHost, ProxmoxPort, ProxmoxTicket,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated Proxmox session: the ticket pair and the host it belongs to.
///
/// Sessions carry no expiry information. The remote side invalidates tickets
/// after about two hours; renewing them is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    csrf_token: ProxmoxCSRFToken,
    ticket: ProxmoxTicket,
    hostname: ProxmoxHost,
    port: ProxmoxPort,
}

impl Session {
    pub fn new(
        csrf_token: ProxmoxCSRFToken,
        ticket: ProxmoxTicket,
        hostname: ProxmoxHost,
        port: ProxmoxPort,
    ) -> Self {
        Self {
            csrf_token,
            ticket,
            hostname,
            port,
        }
    }

    pub fn csrf_token(&self) -> &ProxmoxCSRFToken {
        &self.csrf_token
    }

    pub fn ticket(&self) -> &ProxmoxTicket {
        &self.ticket
    }

    pub fn hostname(&self) -> &ProxmoxHost {
        &self.hostname
    }

    pub fn port(&self) -> ProxmoxPort {
        self.port
    }

    /// Returns a copy of the token pair.
    pub fn tokens(&self) -> AuthTokens {
        AuthTokens {
            csrf_token: self.csrf_token.as_str().to_string(),
            auth_cookie: self.ticket.as_str().to_string(),
        }
    }
}

/// The CSRF token and auth cookie of a session, as plain strings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub csrf_token: String,
    pub auth_cookie: String,
}

impl fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTokens")
            .field("csrf_token", &"***")
            .field("auth_cookie", &"***")
            .finish()
    }
}
