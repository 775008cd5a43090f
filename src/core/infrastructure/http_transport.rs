//! reqwest plumbing shared by the client and the auth services.

use crate::core::domain::{
    error::{ProxmoxResult, ValidationError},
    model::tls_verification::TlsVerification,
    value_object::{API_PREFIX, ApiPath, ProxmoxCSRFToken, ProxmoxHost, ProxmoxPort, ProxmoxTicket},
};
use reqwest::{
    Client, RequestBuilder,
    header::{ACCEPT, COOKIE, HeaderMap, HeaderValue},
    redirect,
};
use tracing::debug;
use url::Url;

/// Builds a reqwest client honouring the given TLS checks.
///
/// Redirects are not followed, so a 3xx answer reaches the status check
/// untouched.
pub(crate) fn build_http_client(tls: TlsVerification) -> ProxmoxResult<Client> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    debug!(
        verify_ssl = tls.verify_ssl,
        verify_host = tls.verify_host,
        "building HTTP client"
    );

    let client = Client::builder()
        .default_headers(default_headers)
        .danger_accept_invalid_certs(!tls.verify_ssl)
        .danger_accept_invalid_hostnames(!tls.verify_host)
        .redirect(redirect::Policy::none())
        .build()?;
    Ok(client)
}

/// The scheme, host and port every API URL is built from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint<'a> {
    secure: bool,
    host: &'a ProxmoxHost,
    port: ProxmoxPort,
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(secure: bool, host: &'a ProxmoxHost, port: ProxmoxPort) -> Self {
        Self { secure, host, port }
    }

    /// Returns `{scheme}://{host}:{port}/api2/json{path}`.
    pub(crate) fn url(&self, path: &ApiPath) -> ProxmoxResult<Url> {
        let scheme = if self.secure { "https" } else { "http" };
        let raw = format!(
            "{}://{}:{}{}{}",
            scheme,
            self.host.url_host(),
            self.port.get(),
            API_PREFIX,
            path
        );
        let url = Url::parse(&raw)
            .map_err(|e| ValidationError::Format(format!("Invalid API URL '{raw}': {e}")))?;
        Ok(url)
    }
}

/// Attaches the `CSRFPreventionToken` header and the `PVEAuthCookie` cookie.
pub(crate) fn with_auth_headers(
    builder: RequestBuilder,
    csrf_token: &ProxmoxCSRFToken,
    ticket: &ProxmoxTicket,
) -> RequestBuilder {
    builder
        .header(ProxmoxCSRFToken::HEADER_NAME, csrf_token.as_str())
        .header(COOKIE, ticket.as_cookie_header())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProxmoxError;

    fn host(name: &str) -> ProxmoxHost {
        ProxmoxHost::new(name).unwrap()
    }

    #[test]
    fn test_endpoint_url() {
        let host = host("pve.example.com");
        let endpoint = Endpoint::new(true, &host, ProxmoxPort::default());
        let url = endpoint.url(&ApiPath::new("nodes")).unwrap();
        assert_eq!(url.as_str(), "https://pve.example.com:8006/api2/json/nodes");
    }

    #[test]
    fn test_endpoint_url_plain_http_and_ipv6() {
        let host = host("::1");
        let endpoint = Endpoint::new(false, &host, ProxmoxPort::or_default(Some(8080)));
        let url = endpoint.url(&ApiPath::new("/version")).unwrap();
        assert_eq!(url.as_str(), "http://[::1]:8080/api2/json/version");
    }

    #[test]
    fn test_endpoint_url_rejects_garbage_host() {
        let host = host("bad<host");
        let endpoint = Endpoint::new(true, &host, ProxmoxPort::default());
        assert!(matches!(
            endpoint.url(&ApiPath::new("nodes")),
            Err(ProxmoxError::Config(_))
        ));
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(TlsVerification::default()).is_ok());
        assert!(build_http_client(TlsVerification::strict()).is_ok());
    }
}
