//! A small async client for the Proxmox VE REST API.
//!
//! The client exchanges user credentials for a ticket, keeps the resulting
//! session, and forwards `GET`, `PUT`, `POST` and `DELETE` calls to any path
//! below `/api2/json`, failing on every status other than `200 OK`.
//!
//! # Examples
//!
//! ```no_run
//! use proxmox_request::{ApiClient, ConnectionConfig, ProxmoxResult, TlsVerification};
//!
//! #[tokio::main]
//! async fn main() -> ProxmoxResult<()> {
//!     let config = ConnectionConfig::new("proxmox.example.com", "root", "password")
//!         .realm("pam")
//!         .port(8006);
//!
//!     let mut client = ApiClient::new();
//!     client.login(&config, TlsVerification::strict()).await?;
//!
//!     let nodes = client.request("nodes", None::<&()>, "GET").await?;
//!     let nodes: serde_json::Value = nodes.data()?;
//!     println!("{nodes}");
//!     Ok(())
//! }
//! ```

mod auth;
mod core;

#[cfg(test)]
mod tests;

pub use crate::core::{
    domain::{
        error::{ProxmoxError, ProxmoxResult, ValidationError},
        model::{
            connection_config::ConnectionConfig,
            proxmox_connection::ProxmoxConnection,
            session::{AuthTokens, Session},
            tls_verification::TlsVerification,
        },
        value_object::{
            API_PREFIX, ApiPath, HttpMethod, ProxmoxCSRFToken, ProxmoxHost, ProxmoxPassword,
            ProxmoxPort, ProxmoxRealm, ProxmoxTicket, ProxmoxUsername,
        },
    },
    infrastructure::{api_client::ApiClient, api_response::ApiResponse},
};
