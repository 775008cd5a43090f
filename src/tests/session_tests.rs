use crate::{ApiClient, ConnectionConfig, ProxmoxResult, Session, TlsVerification};
use std::io::Write;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[test]
fn test_set_then_get_authentication() {
    let mut client = ApiClient::new();
    client
        .set_authentication("4EEC61E2:token", "PVE:root@pam:4EEC61E2::sig", "pve.local", 8006)
        .unwrap();

    let tokens = client.get_authentication().unwrap();
    assert_eq!(tokens.csrf_token, "4EEC61E2:token");
    assert_eq!(tokens.auth_cookie, "PVE:root@pam:4EEC61E2::sig");

    let session = client.session().unwrap();
    assert_eq!(session.hostname().as_str(), "pve.local");
    assert_eq!(session.port().get(), 8006);
}

#[test]
fn test_set_authentication_overwrites_session() {
    let mut client = ApiClient::new();
    client.set_authentication("a", "b", "pve1.local", 8006).unwrap();
    client.set_authentication("c", "d", "pve2.local", 8007).unwrap();

    let tokens = client.get_authentication().unwrap();
    assert_eq!((tokens.csrf_token.as_str(), tokens.auth_cookie.as_str()), ("c", "d"));
    assert_eq!(client.session().unwrap().hostname().as_str(), "pve2.local");
}

#[test]
fn test_tokens_debug_is_redacted() {
    let mut client = ApiClient::new();
    client
        .set_authentication("4EEC61E2:token", "PVE:root@pam:4EEC61E2::sig", "pve.local", 8006)
        .unwrap();

    let tokens = client.get_authentication().unwrap();
    let debug = format!("{tokens:?} {:?}", client.session().unwrap());
    assert!(!debug.contains("4EEC61E2"));
    assert!(debug.contains("pve.local"));
}

#[test]
fn test_no_authentication_before_login() {
    let client = ApiClient::new();
    assert!(client.get_authentication().is_none());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_authentication_accepts_valid_session() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/cluster"))
        .and(header("CSRFPreventionToken", "check-csrf"))
        .and(header("cookie", "PVEAuthCookie=check-ticket"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new().secure(false);
    let valid = client
        .test_authentication(
            "check-csrf",
            "check-ticket",
            &mock_server.address().ip().to_string(),
            mock_server.address().port(),
            TlsVerification::default(),
        )
        .await
        .unwrap();
    assert!(valid);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_authentication_rejects_expired_session_without_side_effects() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/json/cluster"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let mut client = ApiClient::new().secure(false);
    client
        .set_authentication("own-csrf", "own-ticket", "pve.local", 8006)
        .unwrap();
    let before = client.session().cloned();

    let valid = client
        .test_authentication(
            "stale-csrf",
            "stale-ticket",
            &mock_server.address().ip().to_string(),
            mock_server.address().port(),
            TlsVerification::default(),
        )
        .await
        .unwrap();
    assert!(!valid);
    assert_eq!(client.session().cloned(), before);
}

#[tokio::test]
async fn test_session_persistence() -> ProxmoxResult<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api2/json/access/ticket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "ticket": "PVE:testuser@pam:4EEC61E2::sig",
                "CSRFPreventionToken": "4EEC61E2:token"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api2/json/version"))
        .and(header("cookie", "PVEAuthCookie=PVE:testuser@pam:4EEC61E2::sig"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{}}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = ApiClient::new().secure(false);
    let config = ConnectionConfig::new(
        mock_server.address().ip().to_string(),
        "testuser",
        "testpass",
    )
    .port(mock_server.address().port());
    client.login(&config, TlsVerification::default()).await?;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, client.session().unwrap())?;
    file.flush().unwrap();

    let saved = std::fs::read_to_string(file.path()).unwrap();
    let session: Session = serde_json::from_str(&saved)?;

    let mut restored = ApiClient::new().secure(false);
    restored.restore_session(session);
    assert_eq!(restored.get_authentication(), client.get_authentication());

    restored.get("/version").await?;
    Ok(())
}

#[test]
fn test_session_with_bad_hostname_is_rejected() {
    let raw = r#"{"csrf_token":"t","ticket":"c","hostname":"","port":8006}"#;
    assert!(serde_json::from_str::<Session>(raw).is_err());
}
