use crate::{
    auth::application::{
        request::login_request::LoginRequest, response::login_response::LoginResponse,
    },
    core::{
        domain::{
            error::{ProxmoxError, ProxmoxResult},
            model::{proxmox_connection::ProxmoxConnection, session::Session},
            value_object::{ApiPath, ProxmoxCSRFToken, ProxmoxTicket},
        },
        infrastructure::http_transport::Endpoint,
    },
};
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

const TICKET_PATH: &str = "/access/ticket";

/// Exchanges user credentials for a Proxmox ticket.
pub struct LoginService;

impl LoginService {
    pub fn new() -> Self {
        Self
    }

    /// Performs `POST /api2/json/access/ticket` and turns the answer into a
    /// [`Session`] bound to the connection's host and port.
    ///
    /// # Errors
    ///
    /// - `ProxmoxError::Transport` if the server cannot be reached
    /// - `ProxmoxError::Authentication` if the credentials are rejected or the
    ///   answer carries no usable ticket
    /// - `ProxmoxError::HttpStatus` for any other non-200 status
    pub async fn execute(
        &self,
        http_client: &Client,
        connection: &ProxmoxConnection,
        secure: bool,
    ) -> ProxmoxResult<Session> {
        let endpoint = Endpoint::new(secure, connection.host(), connection.port());
        let url = endpoint.url(&ApiPath::new(TICKET_PATH))?;

        let response = http_client
            .post(url.clone())
            .form(&LoginRequest::from(connection))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => self.handle_successful_login(response, connection).await,
            StatusCode::UNAUTHORIZED => {
                warn!(
                    username = connection.username().as_str(),
                    realm = connection.realm().as_str(),
                    "login rejected"
                );
                Err(ProxmoxError::Authentication(
                    "Invalid credentials provided".to_string(),
                ))
            }
            status => {
                warn!(status = status.as_u16(), %url, "unexpected login response");
                Err(ProxmoxError::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                    body: response.text().await?,
                })
            }
        }
    }

    async fn handle_successful_login(
        &self,
        response: reqwest::Response,
        connection: &ProxmoxConnection,
    ) -> ProxmoxResult<Session> {
        let body = response.text().await?;
        let login_response: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            ProxmoxError::Authentication(format!("Failed to parse login response: {e}"))
        })?;

        let data = login_response
            .data
            .ok_or_else(|| ProxmoxError::Authentication("response data empty".to_string()))?;

        let (Some(ticket), Some(csrf_token)) = (
            data.ticket.filter(|t| !t.is_empty()),
            data.csrf_token.filter(|t| !t.is_empty()),
        ) else {
            return Err(ProxmoxError::Authentication(
                "response data lacks ticket or CSRFPreventionToken".to_string(),
            ));
        };

        info!(
            host = connection.host().as_str(),
            port = connection.port().get(),
            username = connection.username().as_str(),
            "login succeeded"
        );

        Ok(Session::new(
            ProxmoxCSRFToken::new(csrf_token),
            ProxmoxTicket::new(ticket),
            connection.host().clone(),
            connection.port(),
        ))
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ConnectionConfig, TlsVerification,
        core::infrastructure::http_transport::build_http_client,
    };
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, header, method, path},
    };

    fn create_test_connection(mock_server: &MockServer) -> ProxmoxConnection {
        ConnectionConfig::new(
            mock_server.address().ip().to_string(),
            "testuser",
            "testpass",
        )
        .port(mock_server.address().port())
        .validate()
        .unwrap()
    }

    async fn run_login(mock_server: &MockServer) -> ProxmoxResult<Session> {
        let connection = create_test_connection(mock_server);
        let client = build_http_client(TlsVerification::default()).unwrap();
        LoginService::new()
            .execute(&client, &connection, false)
            .await
    }

    #[tokio::test]
    async fn test_login_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("username=testuser"))
            .and(body_string_contains("password=testpass"))
            .and(body_string_contains("realm=pam"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "ticket": "PVE:testuser@pam:4EEC61E2::sig",
                    "CSRFPreventionToken": "4EEC61E2:token",
                    "username": "testuser@pam"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = run_login(&mock_server).await.unwrap();
        assert_eq!(session.ticket().as_str(), "PVE:testuser@pam:4EEC61E2::sig");
        assert_eq!(session.csrf_token().as_str(), "4EEC61E2:token");
        assert_eq!(
            session.hostname().as_str(),
            mock_server.address().ip().to_string()
        );
        assert_eq!(session.port().get(), mock_server.address().port());
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = run_login(&mock_server).await;
        assert!(matches!(result, Err(ProxmoxError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_login_missing_data() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let result = run_login(&mock_server).await;
        assert!(
            matches!(result, Err(ProxmoxError::Authentication(ref m)) if m == "response data empty")
        );
    }

    #[tokio::test]
    async fn test_login_null_data() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": null})),
            )
            .mount(&mock_server)
            .await;

        let result = run_login(&mock_server).await;
        assert!(matches!(result, Err(ProxmoxError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_login_incomplete_data() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "ticket": "PVE:testuser@pam:4EEC61E2::sig" }
            })))
            .mount(&mock_server)
            .await;

        let result = run_login(&mock_server).await;
        assert!(matches!(result, Err(ProxmoxError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_login_non_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = run_login(&mock_server).await;
        assert!(matches!(result, Err(ProxmoxError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_login_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api2/json/access/ticket"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let result = run_login(&mock_server).await;
        match result {
            Err(ProxmoxError::HttpStatus { status, body, .. }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_unreachable_host() {
        // Bind a port, then free it so nothing listens there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let connection = ConnectionConfig::new("127.0.0.1", "testuser", "testpass")
            .port(port)
            .validate()
            .unwrap();
        let client = build_http_client(TlsVerification::default()).unwrap();
        let result = LoginService::new().execute(&client, &connection, false).await;
        assert!(matches!(result, Err(ProxmoxError::Transport(_))));
    }
}
