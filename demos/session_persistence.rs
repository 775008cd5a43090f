//! Session persistence workflow for a Proxmox client.
//!
//! This program authenticates against a Proxmox server, stores the session
//! to disk, checks it is still accepted, and restores it into a new client
//! instance without performing a second login.

use proxmox_request::{ApiClient, ConnectionConfig, Session, TlsVerification};
use std::{error::Error, fs::File};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ConnectionConfig::from_env()?;
    let tls = TlsVerification::default();

    // Build and authenticate the initial client.
    let mut client = ApiClient::new();
    client.login(&config, tls).await?;

    // Persist the authenticated session to disk.
    let session_path = "session.json";
    if let Some(session) = client.session() {
        serde_json::to_writer_pretty(File::create(session_path)?, session)?;
        println!("Session saved to {}", session_path);
    }

    // Load it back and make sure the server still accepts it.
    let session: Session = serde_json::from_reader(File::open(session_path)?)?;
    let tokens = session.tokens();
    let still_valid = client
        .test_authentication(
            &tokens.csrf_token,
            &tokens.auth_cookie,
            session.hostname().as_str(),
            session.port().get(),
            tls,
        )
        .await?;
    println!("Saved session still valid: {}", still_valid);

    let mut new_client = ApiClient::new();
    new_client.restore_session(session);
    println!("Session loaded. Authenticated: {}", new_client.is_authenticated());

    // Ensure both clients share the same authentication token.
    assert_eq!(client.get_authentication(), new_client.get_authentication());

    // Remove the persisted session file.
    std::fs::remove_file(session_path)?;

    Ok(())
}
