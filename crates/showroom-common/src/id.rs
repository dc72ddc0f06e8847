use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id used to tag the log lines of a single request.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Opaque identifier of a conversation thread owned by the assistant service.
///
/// The value is minted remotely; this side only stores and echoes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

/// Longest thread id accepted from a client.
pub const MAX_THREAD_ID_LEN: usize = 128;

/// A client-supplied thread id that is not a bare identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid thread id: {0:?}")]
pub struct InvalidThreadId(pub String);

impl ThreadId {
    /// Wrap an id minted by the assistant service.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accept an id from an untrusted caller.
    ///
    /// Only ASCII letters, digits, `_` and `-` are allowed, so the id can
    /// only ever name one path segment of the remote API.
    pub fn parse(id: &str) -> Result<Self, InvalidThreadId> {
        let valid = !id.is_empty()
            && id.len() <= MAX_THREAD_ID_LEN
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(InvalidThreadId(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_length() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
    }

    #[test]
    fn correlation_id_is_hex() {
        let cid = new_correlation_id();
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn correlation_id_is_unique() {
        let a = new_correlation_id();
        let b = new_correlation_id();
        assert_ne!(a, b);
    }

    #[test]
    fn thread_id_display() {
        let tid = ThreadId::new("thread_abc123");
        assert_eq!(tid.to_string(), "thread_abc123");
        assert_eq!(tid.as_str(), "thread_abc123");
    }

    #[test]
    fn parse_accepts_service_ids() {
        let tid = ThreadId::parse("thread_abc-123XYZ").unwrap();
        assert_eq!(tid.as_str(), "thread_abc-123XYZ");
    }

    #[test]
    fn parse_rejects_path_and_query_characters() {
        for bad in [
            "",
            "../assistants/asst_123?x=",
            "thread/1",
            "thread?x=1",
            "thread%2F1",
            "thread 1",
            "thread.1",
            "тред",
        ] {
            assert_eq!(
                ThreadId::parse(bad),
                Err(InvalidThreadId(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_overlong_id() {
        let long = "a".repeat(MAX_THREAD_ID_LEN + 1);
        assert!(ThreadId::parse(&long).is_err());
        assert!(ThreadId::parse(&long[1..]).is_ok());
    }

    #[test]
    fn thread_id_serializes_as_plain_string() {
        let tid = ThreadId::new("thread_abc123");
        let json = serde_json::to_string(&tid).unwrap();
        assert_eq!(json, "\"thread_abc123\"");

        let back: ThreadId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tid);
    }
}
