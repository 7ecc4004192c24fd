//! Parsed session description tree.
//!
//! These records mirror the JSON produced by `sdp-transform` style parsers: a
//! session with a list of media sections, each carrying its rtpmap, fmtp,
//! rtcp-fb, extmap, ssrc, ssrc-group and candidate lines as typed entries.
//! Only the fields the extractor reads are modelled; unknown fields are
//! ignored when deserializing.


pub mod fmtp;

use serde::{Deserialize, Deserializer, Serialize};
use shared::error::{Error, Result};

use crate::rtp_capabilities::{PayloadType, RtpCodecKind};

/// Semantics of an `a=ssrc-group` pairing a media SSRC with its retransmission SSRC.
pub const SSRC_GROUP_SEMANTICS_FID: &str = "FID";

pub const SSRC_ATTRIBUTE_CNAME: &str = "cname";
pub const SSRC_ATTRIBUTE_MSID: &str = "msid";
pub const SSRC_ATTRIBUTE_MSLABEL: &str = "mslabel";
pub const SSRC_ATTRIBUTE_LABEL: &str = "label";

/// RTP component id; RTCP shares it when rtcp-mux is in use.
pub const COMPONENT_RTP: u16 = 1;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionDocument {
    pub media: Vec<MediaSection>,
    /// Session level `a=fingerprint`.
    pub fingerprint: Option<Fingerprint>,
    /// Session level `a=ice-lite` marker, present when the peer is ICE lite.
    pub icelite: Option<String>,
}

impl SessionDocument {
    /// Deserializes a parser's JSON output.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| Error::ErrInvalidDocument(err.to_string()))
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaSection {
    /// Media type of the `m=` line: audio, video or application.
    #[serde(rename = "type")]
    pub kind: String,
    pub port: u16,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub mid: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub ice_ufrag: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub ice_pwd: Option<String>,
    /// DTLS `a=setup` value: active, passive or actpass.
    pub setup: Option<String>,
    pub fingerprint: Option<Fingerprint>,
    pub rtp: Vec<RtpMap>,
    pub fmtp: Vec<Fmtp>,
    pub rtcp_fb: Vec<RtcpFb>,
    pub ext: Vec<ExtMap>,
    pub ssrcs: Vec<SsrcAttribute>,
    pub ssrc_groups: Vec<SsrcGroup>,
    pub candidates: Vec<CandidateLine>,
}

impl MediaSection {
    /// Codec kind of the section, `None` for application or unknown sections.
    pub fn codec_kind(&self) -> Option<RtpCodecKind> {
        self.kind.parse().ok()
    }

    /// A section is active when it has an ICE user fragment and a non-zero port.
    pub fn is_active(&self) -> bool {
        self.port != 0 && self.ice_ufrag.as_deref().is_some_and(|ufrag| !ufrag.is_empty())
    }
}

/// `a=rtpmap:<payload> <codec>/<rate>[/<encoding>]`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtpMap {
    pub payload: PayloadType,
    pub codec: String,
    pub rate: u32,
    /// Channel count for audio codecs.
    pub encoding: Option<u16>,
}

/// `a=fmtp:<payload> <config>`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fmtp {
    pub payload: PayloadType,
    pub config: String,
}

/// `a=rtcp-fb:<payload> <type> [<subtype>]`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtcpFb {
    /// Payload type or `*`.
    #[serde(deserialize_with = "string_or_number")]
    pub payload: String,
    #[serde(rename = "type")]
    pub typ: String,
    pub subtype: Option<String>,
}

/// `a=extmap:<value> <uri>`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtMap {
    pub value: u16,
    pub uri: String,
}

/// `a=ssrc:<id> <attribute>[:<value>]`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsrcAttribute {
    pub id: u32,
    pub attribute: String,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub value: Option<String>,
}

/// `a=ssrc-group:<semantics> <ssrc> <ssrc> ...`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsrcGroup {
    pub semantics: String,
    /// Space separated SSRC list as written in the document.
    #[serde(deserialize_with = "string_or_number")]
    pub ssrcs: String,
}

impl SsrcGroup {
    /// SSRCs of the group in declaration order; tokens that are not valid
    /// SSRCs are skipped.
    pub fn ssrc_list(&self) -> Vec<u32> {
        self.ssrcs
            .split_whitespace()
            .filter_map(|ssrc| ssrc.parse().ok())
            .collect()
    }
}

/// `a=candidate:<foundation> <component> <transport> <priority> <ip> <port> typ <type> ...`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateLine {
    #[serde(deserialize_with = "string_or_number")]
    pub foundation: String,
    pub component: u16,
    pub transport: String,
    pub priority: u32,
    pub ip: String,
    pub port: u16,
    #[serde(rename = "type")]
    pub typ: String,
}

/// `a=fingerprint:<type> <hash>`
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fingerprint {
    #[serde(rename = "type")]
    pub typ: String,
    pub hash: String,
}

// Parsers turn numeric looking tokens (mid "0", foundation "1", ...) into JSON
// numbers, so identifier fields accept both shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StringOrNumber::deserialize(deserializer)?.into())
}

fn opt_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(Into::into))
}
