use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rtp_capabilities::RtpCodecKind;

/// Per source metadata of a media stream announced with `a=ssrc` lines.
///
/// A retransmission SSRC never gets its own entry; it is folded into the
/// `rtx_ssrc` of its primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub ssrc: u32,
    pub kind: RtpCodecKind,
    pub rtx_ssrc: Option<u32>,
    pub stream_id: Option<String>,
    pub track_id: Option<String>,
    pub cname: Option<String>,
}

impl TrackInfo {
    pub(crate) fn new(ssrc: u32, kind: RtpCodecKind, rtx_ssrc: Option<u32>) -> Self {
        TrackInfo {
            ssrc,
            kind,
            rtx_ssrc,
            stream_id: None,
            track_id: None,
            cname: None,
        }
    }
}

/// Track infos keyed by primary SSRC, in the order the SSRCs were first seen.
pub type TrackInfos = IndexMap<u32, TrackInfo>;

/// Media kind of each section keyed by its mid, in document order.
pub type MidMap = IndexMap<String, String>;
