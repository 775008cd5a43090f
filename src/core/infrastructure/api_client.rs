//! HTTP client that logs in to a Proxmox VE server and forwards API calls.

use crate::{
    auth::application::service::{login_service::LoginService, session_check_service::SessionCheckService},
    core::{
        domain::{
            error::{ProxmoxError, ProxmoxResult},
            model::{
                connection_config::ConnectionConfig,
                proxmox_connection::ProxmoxConnection,
                session::{AuthTokens, Session},
                tls_verification::TlsVerification,
            },
            value_object::{
                ApiPath, HttpMethod, ProxmoxCSRFToken, ProxmoxHost, ProxmoxPort, ProxmoxTicket,
            },
        },
        infrastructure::{
            api_response::ApiResponse,
            http_transport::{Endpoint, build_http_client, with_auth_headers},
        },
    },
};
use reqwest::{Client, Request, header::CONTENT_LENGTH};
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use url::Url;

/// A client for the Proxmox VE REST API.
///
/// The client starts unauthenticated. A session is obtained either with
/// [`ApiClient::login`] or installed directly with
/// [`ApiClient::set_authentication`]; every request afterwards carries the
/// session's `CSRFPreventionToken` header and `PVEAuthCookie` cookie. Any
/// answer other than `200 OK` is turned into [`ProxmoxError::HttpStatus`].
///
/// The underlying HTTP client is built on first use and reused for all calls
/// until a login asks for different TLS checks.
///
/// # Examples
///
/// ```no_run
/// use proxmox_request::{ApiClient, ConnectionConfig, ProxmoxResult, TlsVerification};
///
/// #[tokio::main]
/// async fn main() -> ProxmoxResult<()> {
///     let mut client = ApiClient::new();
///     let config = ConnectionConfig::new("pve.example.com", "root", "secret");
///     client.login(&config, TlsVerification::strict()).await?;
///
///     let nodes = client.request("/nodes", None::<&()>, "GET").await?;
///     println!("{}", nodes.body());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    secure: bool,
    tls: TlsVerification,
    connection: Option<ProxmoxConnection>,
    session: Option<Session>,
    http_client: OnceCell<Client>,
}

impl ApiClient {
    /// Creates an unauthenticated client talking HTTPS.
    pub fn new() -> Self {
        Self {
            secure: true,
            tls: TlsVerification::default(),
            connection: None,
            session: None,
            http_client: OnceCell::new(),
        }
    }

    /// Selects HTTPS (`true`, the default) or plain HTTP for every URL the
    /// client builds.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Authenticates against the server described by `config`.
    ///
    /// Realm and port fall back to `pam` and `8006`. On success the returned
    /// ticket pair becomes the client's session; on failure the previous
    /// session, if any, is kept.
    ///
    /// # Errors
    ///
    /// - `ProxmoxError::Config` if hostname, username or password is empty
    /// - `ProxmoxError::Transport` if the server cannot be reached
    /// - `ProxmoxError::Authentication` if no usable ticket comes back
    /// - `ProxmoxError::HttpStatus` for unexpected status codes
    pub async fn login(
        &mut self,
        config: &ConnectionConfig,
        tls: TlsVerification,
    ) -> ProxmoxResult<()> {
        let connection = config.validate()?;

        // Client state only changes once the ticket exchange has succeeded.
        let candidate = if self.tls != tls {
            Some(build_http_client(tls)?)
        } else {
            None
        };

        let session = {
            let http_client = match &candidate {
                Some(client) => client,
                None => self.http_client().await?,
            };
            LoginService::new()
                .execute(http_client, &connection, self.secure)
                .await?
        };

        if let Some(client) = candidate {
            self.tls = tls;
            self.http_client = OnceCell::from(client);
        }
        self.session = Some(session);
        self.connection = Some(connection);
        Ok(())
    }

    /// Returns the TLS checks applied by the shared HTTP client.
    pub fn tls(&self) -> TlsVerification {
        self.tls
    }

    /// Installs a session obtained elsewhere, bypassing the login handshake.
    ///
    /// Replaces any existing session.
    ///
    /// # Errors
    ///
    /// Returns `ProxmoxError::Config` if `hostname` is empty or malformed.
    pub fn set_authentication(
        &mut self,
        csrf_token: impl Into<String>,
        auth_cookie: impl Into<String>,
        hostname: impl Into<String>,
        port: u16,
    ) -> ProxmoxResult<()> {
        let hostname = ProxmoxHost::new(hostname)?;
        info!(host = hostname.as_str(), port, "session installed");

        self.session = Some(Session::new(
            ProxmoxCSRFToken::new(csrf_token),
            ProxmoxTicket::new(auth_cookie),
            hostname,
            ProxmoxPort::new_unchecked(port),
        ));
        self.connection = None;
        Ok(())
    }

    /// Installs a previously saved [`Session`].
    pub fn restore_session(&mut self, session: Session) {
        info!(
            host = session.hostname().as_str(),
            port = session.port().get(),
            "session restored"
        );
        self.session = Some(session);
        self.connection = None;
    }

    /// Returns the current CSRF token and auth cookie, if a session exists.
    pub fn get_authentication(&self) -> Option<AuthTokens> {
        self.session.as_ref().map(Session::tokens)
    }

    /// Returns the current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the validated target of the last successful login.
    pub fn connection(&self) -> Option<&ProxmoxConnection> {
        self.connection.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Forgets the current session. The HTTP client is kept.
    pub fn logout(&mut self) {
        self.session = None;
        self.connection = None;
    }

    /// Checks whether a ticket pair is accepted by `hostname:port` by probing
    /// `GET /api2/json/cluster` with a throwaway HTTP client.
    ///
    /// Returns `Ok(true)` only for a `200 OK` answer. The client's own session
    /// is not touched.
    ///
    /// # Errors
    ///
    /// - `ProxmoxError::Config` if `hostname` is empty or malformed
    /// - `ProxmoxError::Transport` if the server cannot be reached
    pub async fn test_authentication(
        &self,
        csrf_token: &str,
        auth_cookie: &str,
        hostname: &str,
        port: u16,
        tls: TlsVerification,
    ) -> ProxmoxResult<bool> {
        let hostname = ProxmoxHost::new(hostname)?;
        let endpoint = Endpoint::new(self.secure, &hostname, ProxmoxPort::new_unchecked(port));
        SessionCheckService::new()
            .execute(
                endpoint,
                &ProxmoxCSRFToken::new(csrf_token),
                &ProxmoxTicket::new(auth_cookie),
                tls,
            )
            .await
    }

    /// Sends `method` to `path` below `/api2/json`.
    ///
    /// `path` may be given with or without its leading slash. `params` become
    /// the query string for `GET` and `DELETE` and a form body for `PUT` and
    /// `POST`. `method` must be one of `GET`, `PUT`, `POST` or `DELETE`.
    ///
    /// # Errors
    ///
    /// - `ProxmoxError::UnsupportedMethod` for any other method
    /// - `ProxmoxError::NotAuthenticated` if no session exists
    /// - `ProxmoxError::Transport` if the request cannot be sent
    /// - `ProxmoxError::HttpStatus` if the status is not `200`
    pub async fn request<P>(
        &self,
        path: &str,
        params: Option<&P>,
        method: &str,
    ) -> ProxmoxResult<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        let method: HttpMethod = method.parse()?;
        self.execute_request(method, path, params).await
    }

    /// Same as [`ApiClient::request`] with an already typed method.
    pub async fn request_with<P>(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&P>,
    ) -> ProxmoxResult<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        self.execute_request(method, path, params).await
    }

    pub async fn get(&self, path: &str) -> ProxmoxResult<ApiResponse> {
        self.execute_request(HttpMethod::Get, path, None::<&()>)
            .await
    }

    pub async fn post<P>(&self, path: &str, params: &P) -> ProxmoxResult<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        self.execute_request(HttpMethod::Post, path, Some(params))
            .await
    }

    pub async fn put<P>(&self, path: &str, params: &P) -> ProxmoxResult<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        self.execute_request(HttpMethod::Put, path, Some(params))
            .await
    }

    pub async fn delete(&self, path: &str) -> ProxmoxResult<ApiResponse> {
        self.execute_request(HttpMethod::Delete, path, None::<&()>)
            .await
    }

    /// Fails with `ProxmoxError::HttpStatus` unless the status is exactly 200.
    pub fn assert_valid_response(response: ApiResponse, url: &Url) -> ProxmoxResult<ApiResponse> {
        if response.status() == 200 {
            return Ok(response);
        }

        warn!(status = response.status(), %url, "request failed");
        Err(ProxmoxError::HttpStatus {
            status: response.status(),
            url: url.to_string(),
            body: response.into_body(),
        })
    }

    async fn execute_request<P>(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&P>,
    ) -> ProxmoxResult<ApiResponse>
    where
        P: Serialize + ?Sized,
    {
        let session = self.session.as_ref().ok_or(ProxmoxError::NotAuthenticated)?;

        let endpoint = Endpoint::new(self.secure, session.hostname(), session.port());
        let url = endpoint.url(&ApiPath::new(path))?;

        let http_client = self.http_client().await?;
        let mut req_builder = with_auth_headers(
            http_client.request(method.into(), url.clone()),
            session.csrf_token(),
            session.ticket(),
        );

        if let Some(params) = params {
            req_builder = match method {
                HttpMethod::Get | HttpMethod::Delete => req_builder.query(params),
                HttpMethod::Put | HttpMethod::Post => req_builder.form(params),
            };
        }

        let request = strip_stale_content_length(method, req_builder.build()?);

        debug!(%method, %url, "dispatching request");
        let response = http_client.execute(request).await?;
        let response = ApiResponse::from_response(response).await?;

        Self::assert_valid_response(response, &url)
    }

    async fn http_client(&self) -> ProxmoxResult<&Client> {
        let tls = self.tls;
        self.http_client
            .get_or_try_init(|| async move { build_http_client(tls) })
            .await
    }
}

/// DELETE requests never carry a `Content-Length` header, whatever set it on
/// the built request.
fn strip_stale_content_length(method: HttpMethod, mut request: Request) -> Request {
    if method == HttpMethod::Delete {
        request.headers_mut().remove(CONTENT_LENGTH);
    }
    request
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
