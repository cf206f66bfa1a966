//! Version Registry
//!
//! Maps a protocol version string extracted from raw request text to a
//! concrete engine. Unknown versions produce no engine; the transport then
//! composes a 500-class response itself.

use crate::protocol::v1::EngineV1;
use crate::store::StatusStore;

/// The closed set of protocol engines, one variant per supported revision.
///
/// Adding a revision means adding a variant and a `resolve` arm; existing
/// variants are never modified.
#[derive(Debug, Clone, Copy)]
pub enum Engine {
    V1_0(EngineV1),
}

impl Engine {
    /// Resolve a version string to an engine by exact match.
    pub fn resolve(version: &str) -> Option<Engine> {
        match version {
            "1.0" => Some(Engine::V1_0(EngineV1::new())),
            _ => None,
        }
    }

    /// Run a raw request through the version-specific engine.
    pub fn process(&self, raw: &str, store: &dyn StatusStore) -> String {
        match self {
            Engine::V1_0(engine) => engine.process(raw, store),
        }
    }
}

/// Extract the protocol version token from raw request text.
///
/// Scans for the first `RHCP/` that is immediately followed by a run of
/// non-CR/LF characters and returns that run. No such occurrence yields
/// `None`.
pub fn extract_version(raw: &str) -> Option<&str> {
    const PREFIX: &str = "RHCP/";

    let mut haystack = raw;
    while let Some(pos) = haystack.find(PREFIX) {
        let rest = &haystack[pos + PREFIX.len()..];
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        if end > 0 {
            return Some(&rest[..end]);
        }
        haystack = rest;
    }
    None
}
