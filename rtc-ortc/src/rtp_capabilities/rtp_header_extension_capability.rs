use serde::{Deserialize, Serialize};

use super::RtpCodecKind;

pub const SDES_MID_URI: &str = "urn:ietf:params:rtp-hdrext:sdes:mid";
pub const SDES_RTP_STREAM_ID_URI: &str = "urn:ietf:params:rtp-hdrext:sdes:rtp-stream-id";
pub const SDES_REPAIR_RTP_STREAM_ID_URI: &str =
    "urn:ietf:params:rtp-hdrext:sdes:repaired-rtp-stream-id";
pub const AUDIO_LEVEL_URI: &str = "urn:ietf:params:rtp-hdrext:ssrc-audio-level";
pub const ABS_SEND_TIME_URI: &str = "http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time";
pub const TRANSPORT_CC_URI: &str =
    "http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01";

/// RTP header extension capability.
///
/// Defines an RFC 5285 RTP header extension together with the id the
/// endpoint would like to use for it.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#dom-rtcrtpcapabilities-headerextensions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCRtpHeaderExtensionCapability {
    pub kind: RtpCodecKind,
    /// URI identifying the header extension
    pub uri: String,
    pub preferred_id: u16,
    /// Only meaningful on negotiated output; extraction leaves it `false`.
    #[serde(default)]
    pub preferred_encrypt: bool,
}
