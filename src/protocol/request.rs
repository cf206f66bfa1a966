//! Request definitions
//!
//! The structured form of a parsed RHCP request.

/// Methods supported by protocol version 1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Set,
}

impl Method {
    /// Map a raw header token to a supported method.
    ///
    /// Returns `None` for tokens outside the supported set. The header still
    /// parses with an unknown token; membership is checked afterwards so the
    /// failure surfaces as 405 rather than 400.
    pub fn from_token(token: &str) -> Option<Method> {
        match token {
            "GET" => Some(Method::Get),
            "SET" => Some(Method::Set),
            _ => None,
        }
    }

    /// The wire spelling of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Set => "SET",
        }
    }
}

/// Header line of a request: `<method> <object> <version>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Raw method token, kept verbatim (see [`Method::from_token`])
    pub method: String,

    /// Key of the status record the request addresses
    pub object: String,

    /// Protocol version token from the header line
    pub version: String,
}

/// Body field names allowed in version 1.0 (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    /// Capability probe (`Request: status`), valid only with GET
    Request,

    /// Status value to record (`Status: on|off`), valid only with SET
    Status,
}

/// A single `Name: value` body line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub value: String,
}

/// A fully parsed request
///
/// Produced only by a successful parse; any syntactic or semantic violation
/// yields no `Request` value at all. Immutable once built, consumed once per
/// connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub header: Header,
    pub body: Vec<Field>,
}
