//! Parsing of `a=fmtp` configuration strings into codec parameters.

use crate::rtp_capabilities::{CodecParameterValue, CodecParameters};

/// Parses `key=value;key=value` into an ordered parameter map.
///
/// Keys and values are trimmed, a key without `=` is kept as a flag with an
/// empty text value, empty segments are skipped and a repeated key keeps its
/// first position with the last value.
pub fn parse_parameters(config: &str) -> CodecParameters {
    let mut parameters = CodecParameters::new();
    for segment in config.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (segment, ""),
        };
        if key.is_empty() {
            continue;
        }

        parameters.insert(key.to_owned(), CodecParameterValue::from(value));
    }

    parameters
}
