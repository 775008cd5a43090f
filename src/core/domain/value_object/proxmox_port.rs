use serde::{Deserialize, Serialize};

/// A Proxmox API port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxmoxPort(u16);

impl ProxmoxPort {
    /// The port `pveproxy` listens on.
    pub const DEFAULT: u16 = 8006;

    /// Resolves an optional port, treating `None` and `0` as "use the default".
    pub fn or_default(port: Option<u16>) -> Self {
        match port {
            Some(port) if port != 0 => Self(port),
            _ => Self(Self::DEFAULT),
        }
    }

    /// Creates a new port without validation.
    pub(crate) fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl Default for ProxmoxPort {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
