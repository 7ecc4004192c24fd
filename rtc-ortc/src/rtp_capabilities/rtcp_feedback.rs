use serde::{Deserialize, Serialize};

/// Transport-wide congestion control feedback type
pub const TYPE_RTCP_FB_TRANSPORT_CC: &str = "transport-cc";

/// Google REMB (Receiver Estimated Maximum Bitrate) feedback type
pub const TYPE_RTCP_FB_GOOG_REMB: &str = "goog-remb";

/// Codec Control Message feedback type
pub const TYPE_RTCP_FB_CCM: &str = "ccm";

/// Negative Acknowledgment feedback type
pub const TYPE_RTCP_FB_NACK: &str = "nack";

/// RTCP feedback parameters for specifying additional packet types.
///
/// Used to signal support for specific RTCP feedback mechanisms such as NACK, PLI, FIR, etc.
///
/// ## Specifications
///
/// * [ORTC](https://draft.ortc.org/#dom-rtcrtcpfeedback)
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCPFeedback {
    /// The type of feedback mechanism.
    ///
    /// Valid values: `ccm`, `nack`, `goog-remb`, `transport-cc`
    #[serde(rename = "type")]
    pub typ: String,

    /// Additional parameter specific to the feedback type, empty when absent.
    ///
    /// For example: `type="nack" parameter="pli"` indicates Picture Loss Indicator packets.
    pub parameter: String,
}

impl RTCPFeedback {
    pub fn new(typ: &str, parameter: &str) -> Self {
        RTCPFeedback {
            typ: typ.to_owned(),
            parameter: parameter.to_owned(),
        }
    }
}

/// Computes the intersection of two RTCP feedback lists.
///
/// Returns the entries of `a`, in `a`'s order, that also appear in `b` with
/// the same type and parameter.
pub(crate) fn rtcp_feedback_intersection(
    a: &[RTCPFeedback],
    b: &[RTCPFeedback],
) -> Vec<RTCPFeedback> {
    let mut out = vec![];
    for a_feedback in a {
        for b_feedback in b {
            if a_feedback.typ == b_feedback.typ && a_feedback.parameter == b_feedback.parameter {
                out.push(a_feedback.clone());
                break;
            }
        }
    }

    out
}
