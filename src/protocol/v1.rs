//! Protocol engine for RHCP/1.0
//!
//! Parses a raw request, validates it, executes GET/SET against a status
//! store, and formats the response. Parsing is all-or-nothing: any
//! violation discards the whole request.

use crate::protocol::request::{Field, FieldName, Header, Method, Request};
use crate::protocol::response::ResponseCode;
use crate::store::StatusStore;

/// Tag prefixed to every RHCP/1.0 response line
pub const PROTOCOL_TAG_V1: &str = "RHCP/1.0";

/// Engine for protocol version 1.0
///
/// Stateless apart from the request it is handed; create one per connection
/// and give each invocation its own view of the store. The engine does no
/// locking of its own, so concurrent callers must serialize the whole
/// load-mutate-persist sequence around SET.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineV1;

impl EngineV1 {
    pub fn new() -> Self {
        EngineV1
    }

    /// Parse a raw request into its structured form.
    ///
    /// Grammar: CRLF-separated lines, at least 4 of them, the last two
    /// empty (the request terminates with a blank line after the body).
    /// Line 1 must split into exactly 3 space-separated tokens. Every
    /// non-blank remaining line before the terminal pair is a body field
    /// and must split into exactly 2 parts on `": "`.
    ///
    /// Field semantics checked here:
    /// - field name must be `Request` or `Status`
    /// - `Request` must carry the value `status` and never appears with SET
    /// - `Status` must carry `on` or `off` and never appears with GET
    ///
    /// Any violation returns `None`; there is no partial request.
    pub fn parse(&self, raw: &str) -> Option<Request> {
        let lines: Vec<&str> = raw.split("\r\n").collect();
        let count = lines.len();
        if count < 4 {
            return None;
        }
        if !lines[count - 1].is_empty() || !lines[count - 2].is_empty() {
            return None;
        }

        let tokens: Vec<&str> = lines[0].split(' ').collect();
        if tokens.len() != 3 {
            return None;
        }
        let header = Header {
            method: tokens[0].to_string(),
            object: tokens[1].to_string(),
            version: tokens[2].to_string(),
        };

        let mut body = Vec::new();
        for line in &lines[1..count - 2] {
            // a zero-field request frames with the same blank-line pair,
            // so blank lines in the body region are not fields
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(": ").collect();
            if parts.len() != 2 {
                return None;
            }

            let name = match parts[0] {
                "Request" => FieldName::Request,
                "Status" => FieldName::Status,
                _ => return None,
            };
            let value = parts[1];

            match name {
                FieldName::Request => {
                    if value != "status" || header.method == "SET" {
                        return None;
                    }
                }
                FieldName::Status => {
                    if (value != "on" && value != "off") || header.method == "GET" {
                        return None;
                    }
                }
            }

            body.push(Field {
                name,
                value: value.to_string(),
            });
        }

        Some(Request { header, body })
    }

    /// Check a parse result and resolve the method.
    ///
    /// A failed parse reports 400 before any method check; a well-formed
    /// request with a method outside the supported set reports 405.
    pub fn validate<'a>(
        &self,
        parsed: Option<&'a Request>,
    ) -> std::result::Result<(&'a Request, Method), ResponseCode> {
        let request = parsed.ok_or(ResponseCode::BadRequest)?;
        let method =
            Method::from_token(&request.header.method).ok_or(ResponseCode::MethodNotAllowed)?;
        Ok((request, method))
    }

    /// Execute a raw request against the store and format the response.
    ///
    /// The store is loaded in full per request and, for SET, rewritten in
    /// full afterwards. Records are scanned in order; the first key match
    /// wins. Load or persist failures map to 500, a missing object to 404.
    pub fn process(&self, raw: &str, store: &dyn StatusStore) -> String {
        let parsed = self.parse(raw);
        let (request, method) = match self.validate(parsed.as_ref()) {
            Ok(valid) => valid,
            Err(code) => return self.response(code, None, None),
        };

        let mut records = match store.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("store load failed: {}", err);
                return self.response(ResponseCode::InternalServerError, None, None);
            }
        };

        let matched = match records
            .iter()
            .position(|record| record.key == request.header.object)
        {
            Some(index) => index,
            None => return self.response(ResponseCode::NotFound, None, None),
        };

        match method {
            Method::Get => {
                let record = &records[matched];
                self.response(ResponseCode::Ok, Some(&record.key), Some(&record.value))
            }
            Method::Set => {
                // 1.0 carries a single meaningful field; the first one wins
                let new_status = match request.body.first() {
                    Some(field) => field.value.clone(),
                    None => return self.response(ResponseCode::BadRequest, None, None),
                };
                records[matched].value = new_status;

                if let Err(err) = store.persist(&records) {
                    tracing::warn!("store persist failed: {}", err);
                    return self.response(ResponseCode::InternalServerError, None, None);
                }

                let record = &records[matched];
                self.response(ResponseCode::Ok, Some(&record.key), Some(&record.value))
            }
        }
    }

    /// Format a response string for this protocol version.
    ///
    /// 200 carries Object/Status lines; every other code is a bare status
    /// line followed by the terminal blank line.
    pub fn response(
        &self,
        code: ResponseCode,
        object: Option<&str>,
        status: Option<&str>,
    ) -> String {
        if code != ResponseCode::Ok {
            return format!("{} {}\r\n\r\n", PROTOCOL_TAG_V1, code);
        }
        format!(
            "{} {}\r\nObject: {}\r\nStatus: {}\r\n\r\n",
            PROTOCOL_TAG_V1,
            code,
            object.unwrap_or_default(),
            status.unwrap_or_default(),
        )
    }
}
