use crate::core::domain::error::ProxmoxResult;
use reqwest::header::HeaderMap;
use serde::{Deserialize, de::DeserializeOwned};

/// A raw API response: status, headers and the undecoded body.
///
/// The client does not interpret the payload. Use [`ApiResponse::json`] or
/// [`ApiResponse::data`] to decode it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

impl ApiResponse {
    pub(crate) async fn from_response(response: reqwest::Response) -> ProxmoxResult<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Decodes the whole body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> ProxmoxResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decodes the `data` member of the standard `{"data": ...}` envelope.
    pub fn data<T: DeserializeOwned>(&self) -> ProxmoxResult<T> {
        let envelope: DataEnvelope<T> = serde_json::from_str(&self.body)?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProxmoxError;

    fn response(body: &str) -> ApiResponse {
        ApiResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_data_unwraps_envelope() {
        let response = response(r#"{"data":{"version":"8.2.4","release":"8.2"}}"#);
        let data: serde_json::Value = response.data().unwrap();
        assert_eq!(data["version"], "8.2.4");
    }

    #[test]
    fn test_json_returns_whole_body() {
        let response = response(r#"{"data":[1,2,3]}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["data"][2], 3);
    }

    #[test]
    fn test_decode_failure() {
        let response = response("<html>gateway timeout</html>");
        let result: ProxmoxResult<serde_json::Value> = response.json();
        assert!(matches!(result, Err(ProxmoxError::Decode(_))));
    }
}
