use crate::core::{
    domain::{
        error::ProxmoxResult,
        model::tls_verification::TlsVerification,
        value_object::{ApiPath, ProxmoxCSRFToken, ProxmoxTicket},
    },
    infrastructure::http_transport::{Endpoint, build_http_client, with_auth_headers},
};
use reqwest::StatusCode;
use tracing::debug;

const CHECK_PATH: &str = "/cluster";

/// Checks whether a ticket pair is still accepted by a server.
///
/// The check runs on its own HTTP client so it never disturbs the state of an
/// [`ApiClient`](crate::ApiClient).
pub struct SessionCheckService;

impl SessionCheckService {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        endpoint: Endpoint<'_>,
        csrf_token: &ProxmoxCSRFToken,
        ticket: &ProxmoxTicket,
        tls: TlsVerification,
    ) -> ProxmoxResult<bool> {
        let http_client = build_http_client(tls)?;
        let url = endpoint.url(&ApiPath::new(CHECK_PATH))?;

        let response = with_auth_headers(http_client.get(url.clone()), csrf_token, ticket)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), %url, "session check answered");
        Ok(status == StatusCode::OK)
    }
}

impl Default for SessionCheckService {
    fn default() -> Self {
        Self::new()
    }
}
