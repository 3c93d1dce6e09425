use std::fmt;

/// Why a bearer token payload could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// No payload segment between the dots.
    MissingPayload,
    /// The payload segment is not valid base64url.
    Base64,
    /// The decoded payload bytes are not UTF-8.
    Utf8,
    /// The payload text is not the expected claims JSON.
    Json,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingPayload => write!(f, "token has no payload segment"),
            DecodeError::Base64 => write!(f, "token payload is not valid base64url"),
            DecodeError::Utf8 => write!(f, "token payload is not valid UTF-8"),
            DecodeError::Json => write!(f, "token payload is not valid claims JSON"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Transport-level failure talking to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Transport(String),
    /// Non-success HTTP status without a readable envelope in the body.
    Http(u16),
    /// HTTP 401: the backend no longer accepts the session.
    Unauthorized,
    /// The response body did not match the expected shape.
    Body(String),
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport(message.into())
    }

    pub fn body(message: impl Into<String>) -> Self {
        ApiError::Body(message.into())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(message) => write!(f, "transport error: {}", message),
            ApiError::Http(status) => write!(f, "unexpected HTTP status {}", status),
            ApiError::Unauthorized => write!(f, "session rejected by the backend"),
            ApiError::Body(message) => write!(f, "unreadable response body: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Why a login attempt did not establish a session.
///
/// Every variant leaves the session state and store untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    /// The backend reported the attempt as failed (`status: false`).
    Rejected { message: String },
    /// Success response without an access token.
    MissingToken,
    /// The issued token could not be decoded.
    BadToken(DecodeError),
    /// The issued token carries no roles.
    MissingRole,
    /// The request failed before the backend reported an outcome.
    Api(ApiError),
    /// A newer attempt started while this one was in flight.
    Superseded,
}

impl LoginError {
    pub fn rejected(message: impl Into<String>) -> Self {
        LoginError::Rejected {
            message: message.into(),
        }
    }

    /// Human-readable message for the login form.
    pub fn friendly_message(&self) -> String {
        match self {
            LoginError::Rejected { message } => message.clone(),
            LoginError::MissingToken | LoginError::BadToken(_) | LoginError::MissingRole => {
                "The server returned an unusable session. Please try again.".to_string()
            }
            LoginError::Api(_) => "Could not reach the server. Please try again.".to_string(),
            LoginError::Superseded => String::new(),
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Rejected { message } => write!(f, "login rejected: {}", message),
            LoginError::MissingToken => write!(f, "login response carried no access token"),
            LoginError::BadToken(e) => write!(f, "issued token could not be decoded: {}", e),
            LoginError::MissingRole => write!(f, "issued token carries no roles"),
            LoginError::Api(e) => write!(f, "login request failed: {}", e),
            LoginError::Superseded => write!(f, "login superseded by a newer attempt"),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<ApiError> for LoginError {
    fn from(e: ApiError) -> Self {
        LoginError::Api(e)
    }
}

impl From<DecodeError> for LoginError {
    fn from(e: DecodeError) -> Self {
        LoginError::BadToken(e)
    }
}
