use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of a single format parameter (`a=fmtp`).
///
/// Tokens that read back as the same unsigned integer are kept as numbers so
/// that `packetization-mode=1` and a JSON `1` compare equal; everything else,
/// including `profile-level-id=42e01f`, stays text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodecParameterValue {
    Number(u64),
    Text(String),
}

impl CodecParameterValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            CodecParameterValue::Number(n) => Some(*n),
            CodecParameterValue::Text(t) => t.parse().ok(),
        }
    }
}

impl From<&str> for CodecParameterValue {
    fn from(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) if n.to_string() == raw => CodecParameterValue::Number(n),
            _ => CodecParameterValue::Text(raw.to_owned()),
        }
    }
}

impl From<u64> for CodecParameterValue {
    fn from(n: u64) -> Self {
        CodecParameterValue::Number(n)
    }
}

impl fmt::Display for CodecParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecParameterValue::Number(n) => write!(f, "{n}"),
            CodecParameterValue::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Codec specific parameters, keyed by name in declaration order.
pub type CodecParameters = IndexMap<String, CodecParameterValue>;
