use crate::core::domain::value_object::{
    ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm, ProxmoxUsername,
};

/// A validated login target, with realm and port defaults applied.
#[derive(Debug, Clone)]
pub struct ProxmoxConnection {
    proxmox_host: ProxmoxHost,
    proxmox_port: ProxmoxPort,
    proxmox_username: ProxmoxUsername,
    proxmox_password: ProxmoxPassword,
    proxmox_realm: ProxmoxRealm,
}

impl ProxmoxConnection {
    pub(crate) fn new(
        proxmox_host: ProxmoxHost,
        proxmox_port: ProxmoxPort,
        proxmox_username: ProxmoxUsername,
        proxmox_password: ProxmoxPassword,
        proxmox_realm: ProxmoxRealm,
    ) -> Self {
        Self {
            proxmox_host,
            proxmox_port,
            proxmox_username,
            proxmox_password,
            proxmox_realm,
        }
    }

    pub fn host(&self) -> &ProxmoxHost {
        &self.proxmox_host
    }

    pub fn port(&self) -> ProxmoxPort {
        self.proxmox_port
    }

    pub fn username(&self) -> &ProxmoxUsername {
        &self.proxmox_username
    }

    pub(crate) fn password(&self) -> &ProxmoxPassword {
        &self.proxmox_password
    }

    pub fn realm(&self) -> &ProxmoxRealm {
        &self.proxmox_realm
    }
}
