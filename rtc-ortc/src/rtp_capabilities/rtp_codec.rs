use serde::{Deserialize, Serialize};
use unicase::UniCase;

use super::codec_parameters::{CodecParameterValue, CodecParameters};
use super::rtcp_feedback::RTCPFeedback;
use super::{PayloadType, RtpCodecKind};

/// RTX (Retransmission) codec name.
///
/// Not a real codec: an RTX entry points at its primary through the `apt`
/// parameter. Matching is case-insensitive.
pub const CODEC_NAME_RTX: &str = "rtx";

/// Format parameter carrying the associated primary payload type of an RTX entry.
pub const PARAMETER_APT: &str = "apt";

/// RTP codec capability providing information about a supported codec.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#dictionary-rtcrtpcodeccapability-members)
/// * [ORTC](https://draft.ortc.org/#rtcrtpcodeccapability*)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCRtpCodecCapability {
    pub preferred_payload_type: PayloadType,
    pub kind: RtpCodecKind,
    /// MIME type of the codec, always `<kind>/<name>` (e.g. "video/VP8")
    pub mime_type: String,
    pub name: String,
    /// Codec clock rate in Hz
    pub clock_rate: u32,
    /// Number of channels, at least 1
    pub num_channels: u16,
    pub parameters: CodecParameters,
    pub rtcp_feedback: Vec<RTCPFeedback>,
}

impl RTCRtpCodecCapability {
    pub fn new(
        kind: RtpCodecKind,
        name: &str,
        clock_rate: u32,
        preferred_payload_type: PayloadType,
    ) -> Self {
        RTCRtpCodecCapability {
            preferred_payload_type,
            kind,
            mime_type: format!("{kind}/{name}"),
            name: name.to_owned(),
            clock_rate,
            num_channels: 1,
            parameters: CodecParameters::new(),
            rtcp_feedback: vec![],
        }
    }

    /// Creates the RTX companion of `primary` sent with `payload_type`.
    pub fn new_rtx(primary: &RTCRtpCodecCapability, payload_type: PayloadType) -> Self {
        RTCRtpCodecCapability::new(
            primary.kind,
            CODEC_NAME_RTX,
            primary.clock_rate,
            payload_type,
        )
        .with_parameter(
            PARAMETER_APT,
            CodecParameterValue::Number(primary.preferred_payload_type as u64),
        )
    }

    pub fn with_channels(mut self, num_channels: u16) -> Self {
        self.num_channels = num_channels.max(1);
        self
    }

    pub fn with_parameter(mut self, name: &str, value: impl Into<CodecParameterValue>) -> Self {
        self.parameters.insert(name.to_owned(), value.into());
        self
    }

    pub fn with_rtcp_feedback(mut self, rtcp_feedback: Vec<RTCPFeedback>) -> Self {
        self.rtcp_feedback = rtcp_feedback;
        self
    }

    /// Reports whether this entry is a retransmission codec rather than a media codec.
    pub fn is_rtx(&self) -> bool {
        UniCase::new(self.name.as_str()) == UniCase::new(CODEC_NAME_RTX)
    }

    /// Associated primary payload type, when the `apt` parameter holds one.
    pub fn apt(&self) -> Option<PayloadType> {
        self.parameters
            .get(PARAMETER_APT)
            .and_then(CodecParameterValue::as_u64)
            .and_then(|apt| PayloadType::try_from(apt).ok())
    }

    /// Reports whether `other` describes the same codec: same name ignoring
    /// case, same kind and same clock rate.
    pub(crate) fn is_same_codec(&self, other: &RTCRtpCodecCapability) -> bool {
        UniCase::new(self.name.as_str()) == UniCase::new(other.name.as_str())
            && self.kind == other.kind
            && self.clock_rate == other.clock_rate
    }
}

/// Keeps the parameters of `remote`, in `remote`'s order, that `local`
/// declares with an identical value.
pub(crate) fn codec_parameters_intersection(
    remote: &CodecParameters,
    local: &CodecParameters,
) -> CodecParameters {
    remote
        .iter()
        .filter(|(name, value)| local.get(*name) == Some(*value))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
