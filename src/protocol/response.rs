//! Response definitions
//!
//! Status codes and their reason phrases.

use std::fmt;

/// Response status codes for protocol version 1.0 (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl ResponseCode {
    /// Numeric code
    pub fn code(&self) -> u16 {
        match self {
            ResponseCode::Ok => 200,
            ResponseCode::BadRequest => 400,
            ResponseCode::NotFound => 404,
            ResponseCode::MethodNotAllowed => 405,
            ResponseCode::InternalServerError => 500,
        }
    }

    /// Fixed human-readable reason phrase
    pub fn reason(&self) -> &'static str {
        match self {
            ResponseCode::Ok => "OK",
            ResponseCode::BadRequest => "Bad Request",
            ResponseCode::NotFound => "Not Found",
            ResponseCode::MethodNotAllowed => "Method Not Allowed",
            ResponseCode::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ResponseCode {
    /// Renders as the status-line fragment, e.g. `200 OK`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}
