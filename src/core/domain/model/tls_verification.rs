/// TLS checks applied to connections made by the client.
///
/// Both checks are disabled by default, since Proxmox VE ships with a
/// self-signed certificate. Use [`TlsVerification::strict`] in production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlsVerification {
    /// Verify the server certificate chain.
    pub verify_ssl: bool,
    /// Verify that the certificate matches the host name.
    pub verify_host: bool,
}

impl TlsVerification {
    pub fn new(verify_ssl: bool, verify_host: bool) -> Self {
        Self {
            verify_ssl,
            verify_host,
        }
    }

    /// Verifies both the certificate chain and the host name.
    pub fn strict() -> Self {
        Self::new(true, true)
    }
}
