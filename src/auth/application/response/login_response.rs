use serde::Deserialize;

/// Body of a `POST /access/ticket` answer. Proxmox sends `{"data": null}`
/// when it has nothing to hand out, so every level is optional.
#[derive(Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub data: Option<LoginResponseData>,
}

#[derive(Deserialize)]
pub struct LoginResponseData {
    pub ticket: Option<String>,
    #[serde(rename = "CSRFPreventionToken")]
    pub csrf_token: Option<String>,
}
