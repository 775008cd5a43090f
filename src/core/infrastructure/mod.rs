pub mod api_client;
pub mod api_response;
pub(crate) mod http_transport;
