//! RTP capability records exchanged between the extractor, the negotiator and
//! the transport engine.
//!
//! The shapes follow the ORTC/W3C dictionaries: an [`RTCRtpCapabilities`] holds
//! the codecs, header extensions and FEC mechanisms an endpoint can use.


pub mod codec_parameters;
pub mod rtcp_feedback;
pub mod rtp_codec;
pub mod rtp_header_extension_capability;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::Error;

pub use codec_parameters::{CodecParameterValue, CodecParameters};
pub use rtcp_feedback::*;
pub use rtp_codec::*;
pub use rtp_header_extension_capability::*;

/// RTP payload type, 0..=127 on the wire.
pub type PayloadType = u8;

/// Codec kind identifying the media type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RtpCodecKind {
    /// Audio codec
    Audio,

    /// Video codec
    Video,
}

impl FromStr for RtpCodecKind {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "audio" => Ok(RtpCodecKind::Audio),
            "video" => Ok(RtpCodecKind::Video),
            _ => Err(Error::Other(format!("unknown codec kind: {raw}"))),
        }
    }
}

impl fmt::Display for RtpCodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RtpCodecKind::Audio => "audio",
            RtpCodecKind::Video => "video",
        };
        write!(f, "{s}")
    }
}

/// RTPCapabilities represents the capabilities of an endpoint
/// <https://w3c.github.io/webrtc-pc/#rtcrtpcapabilities>
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCRtpCapabilities {
    pub codecs: Vec<RTCRtpCodecCapability>,
    pub header_extensions: Vec<RTCRtpHeaderExtensionCapability>,
    /// Always empty when produced by extraction, FEC is not supported.
    pub fec_mechanisms: Vec<String>,
}

impl RTCRtpCapabilities {
    /// Returns the codecs of the given kind in declaration order.
    pub fn codecs_by_kind(&self, kind: RtpCodecKind) -> Vec<&RTCRtpCodecCapability> {
        self.codecs.iter().filter(|c| c.kind == kind).collect()
    }

    /// Finds the RTX payload type associated with a given primary payload type.
    ///
    /// Searches for an RTX codec whose APT (Associated Payload Type) parameter
    /// equals `primary`.
    pub fn find_rtx_payload_type(&self, primary: PayloadType) -> Option<PayloadType> {
        self.codecs
            .iter()
            .find(|c| c.is_rtx() && c.apt() == Some(primary))
            .map(|c| c.preferred_payload_type)
    }
}
