//! Protocol Module
//!
//! Defines the RHCP line protocol: request grammar, response codes, the
//! version-specific engine, and the version registry.
//!
//! ## Wire Format (version "1.0")
//!
//! ### Request
//! ```text
//! <METHOD> <OBJECT> <VERSION>\r\n
//! [<FieldName>: <FieldValue>\r\n]*
//! \r\n
//! ```
//!
//! - `METHOD` is `GET` or `SET`
//! - A GET request carries no value field; `Request: status` is the only
//!   body line ever valid with it (a capability probe)
//! - A SET request carries one body line: `Status: on` or `Status: off`
//!
//! ### Response
//! ```text
//! RHCP/<VERSION> <CODE> <REASON>\r\n
//! [Object: <key>\r\nStatus: <value>\r\n]
//! \r\n
//! ```
//!
//! Object/Status lines are present only for code 200.
//!
//! ### Response Codes
//! - 200 OK
//! - 400 Bad Request (malformed or unparsable request)
//! - 404 Not Found (object unknown)
//! - 405 Method Not Allowed (method outside the supported set)
//! - 500 Internal Server Error (store failure, or unsupported version at
//!   the transport layer)

mod request;
mod response;
mod v1;
mod registry;

pub use request::{Field, FieldName, Header, Method, Request};
pub use response::ResponseCode;
pub use v1::{EngineV1, PROTOCOL_TAG_V1};
pub use registry::{extract_version, Engine};
