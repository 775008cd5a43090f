//! Logs in to a Proxmox server, lists the cluster nodes and prints the
//! session tokens.
//!
//! Reads `PROXMOX_HOST`, `PROXMOX_USERNAME`, `PROXMOX_PASSWORD` and the
//! optional `PROXMOX_REALM` / `PROXMOX_PORT` from the environment.

use proxmox_request::{ApiClient, ConnectionConfig, ProxmoxResult, TlsVerification};

#[tokio::main]
async fn main() -> ProxmoxResult<()> {
    let config = ConnectionConfig::from_env()?;

    let mut client = ApiClient::new();
    // Self-signed certificates are the norm on fresh installs.
    client.login(&config, TlsVerification::default()).await?;
    println!("Authenticated: {}", client.is_authenticated());

    if let Some(tokens) = client.get_authentication() {
        println!("Session Token: {}", tokens.auth_cookie);
        println!("CSRF Token: {}", tokens.csrf_token);
    }

    let nodes: serde_json::Value = client.get("/nodes").await?.data()?;
    for node in nodes.as_array().into_iter().flatten() {
        println!(
            "{} ({})",
            node["node"].as_str().unwrap_or("?"),
            node["status"].as_str().unwrap_or("unknown")
        );
    }

    Ok(())
}
