//! Error types for the PawHub client.
//!
//! One unified error type with explicit variants for transport failures,
//! authentication problems, API rejections, and input validation, so
//! callers can route each class differently (blocking notification vs.
//! non-blocking toast vs. silent discard).

use std::fmt;
use thiserror::Error;

/// The unified error type for PawHub client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (missing or rejected credential).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The API answered with a non-2xx status.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid id, URL, amount).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Any other HTTP-level failure (body decode, protocol violation).
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The operation requires a signed-in session.
    #[error("not signed in")]
    NotSignedIn,

    /// The server rejected the bearer credential.
    #[error("credential rejected")]
    CredentialRejected,

    /// The signed-in account lacks the required role.
    #[error("forbidden: {reason}")]
    Forbidden { reason: String },
}

/// A non-2xx response from the platform API.
///
/// Carries the HTTP status plus whatever the server's JSON error envelope
/// provided. Callers decide retry policy; the client never retries.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code, if the server sent one.
    pub code: Option<String>,
    /// Human-readable message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check if the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid resource identifier.
    #[error("invalid resource id '{value}': {reason}")]
    ResourceId { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Unknown pet species.
    #[error("unknown species '{value}'")]
    Species { value: String },

    /// Unknown currency code.
    #[error("unknown currency code '{value}'")]
    Currency { value: String },

    /// Invalid monetary amount.
    #[error("invalid amount {value}: {reason}")]
    Amount { value: f64, reason: String },

    /// A patch named a field the target record does not carry.
    #[error("record has no field '{field}'")]
    UnknownField { field: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
