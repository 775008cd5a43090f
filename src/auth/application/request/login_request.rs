use crate::core::domain::model::proxmox_connection::ProxmoxConnection;
use serde::Serialize;

/// Form body of `POST /access/ticket`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub realm: &'a str,
}

impl<'a> From<&'a ProxmoxConnection> for LoginRequest<'a> {
    fn from(connection: &'a ProxmoxConnection) -> Self {
        Self {
            username: connection.username().as_str(),
            password: connection.password().as_str(),
            realm: connection.realm().as_str(),
        }
    }
}
