use crate::core::domain::{
    error::{ProxmoxResult, ValidationError},
    model::proxmox_connection::ProxmoxConnection,
    value_object::{ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm, ProxmoxUsername},
};
use serde::Deserialize;
use std::{env, fmt};

/// Connection settings supplied by the caller before logging in.
///
/// Fields are checked only when the configuration is used by
/// [`ApiClient::login`](crate::ApiClient::login): hostname, username and
/// password must be non-empty, `realm` falls back to `pam` and `port` to `8006`.
///
/// # Examples
///
/// ```
/// use proxmox_request::ConnectionConfig;
///
/// let config = ConnectionConfig::new("pve.example.com", "root", "secret")
///     .realm("pve")
///     .port(8006);
/// assert_eq!(config.hostname, "pve.example.com");
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub hostname: String,
    pub username: String,
    pub password: String,
    pub realm: Option<String>,
    pub port: Option<u16>,
}

impl ConnectionConfig {
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            password: password.into(),
            realm: None,
            port: None,
        }
    }

    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Reads the configuration from `PROXMOX_HOST`, `PROXMOX_USERNAME`,
    /// `PROXMOX_PASSWORD` and the optional `PROXMOX_REALM` / `PROXMOX_PORT`.
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Config` if a required variable is missing or the
    /// port is not a number.
    pub fn from_env() -> ProxmoxResult<Self> {
        let port = match env::var("PROXMOX_PORT") {
            Ok(port) => parse_port(&port)?,
            Err(_) => None,
        };

        Ok(Self {
            hostname: required_var("PROXMOX_HOST")?,
            username: required_var("PROXMOX_USERNAME")?,
            password: required_var("PROXMOX_PASSWORD")?,
            realm: env::var("PROXMOX_REALM").ok(),
            port,
        })
    }

    /// Validates the settings and applies the realm and port defaults.
    pub(crate) fn validate(&self) -> ProxmoxResult<ProxmoxConnection> {
        Ok(ProxmoxConnection::new(
            ProxmoxHost::new(self.hostname.as_str())?,
            ProxmoxPort::or_default(self.port),
            ProxmoxUsername::new(self.username.as_str())?,
            ProxmoxPassword::new(self.password.as_str())?,
            ProxmoxRealm::or_default(self.realm.as_deref()),
        ))
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"***")
            .field("realm", &self.realm)
            .field("port", &self.port)
            .finish()
    }
}

/// Parses a port setting. Blank values count as absent.
fn parse_port(raw: &str) -> Result<Option<u16>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u16>()
        .map(Some)
        .map_err(|e| ValidationError::Format(format!("PROXMOX_PORT is not a valid port: {e}")))
}

fn required_var(name: &str) -> Result<String, ValidationError> {
    env::var(name).map_err(|_| ValidationError::Field {
        field: name.to_string(),
        message: format!("{name} is not set"),
    })
}
