pub mod connection_config;
pub mod proxmox_connection;
pub mod session;
pub mod tls_verification;
