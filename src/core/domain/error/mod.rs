use thiserror::Error;

/// The main error type for Proxmox API operations.
///
/// Every failure of the client surfaces as one of these variants: bad
/// configuration, transport failures, rejected logins, unsupported methods
/// and non-200 responses.
#[derive(Error, Debug)]
pub enum ProxmoxError {
    /// Missing or malformed connection settings
    ///
    /// # Fields
    /// * `0` - The validation failure describing the offending field
    #[error("Configuration error: {0}")]
    Config(#[from] ValidationError),

    /// The HTTP transport failed (DNS, connection refused, TLS handshake...)
    ///
    /// # Fields
    /// * `0` - The underlying reqwest error
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The ticket exchange reached the server but yielded no usable session
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The caller asked for a method other than GET, PUT, POST or DELETE
    #[error("HTTP request method not allowed: {0}")]
    UnsupportedMethod(String),

    /// The server answered with a status other than 200
    ///
    /// The raw body is kept for diagnostics but left out of the message, since
    /// it may carry sensitive data.
    #[error("Got non-200 HTTP code {status} for request {url}")]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// A request was issued before any session existed
    #[error("Not authenticated: log in or install a session first")]
    NotAuthenticated,

    /// A response body could not be decoded into the requested type
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a ProxmoxError
pub type ProxmoxResult<T> = Result<T, ProxmoxError>;
