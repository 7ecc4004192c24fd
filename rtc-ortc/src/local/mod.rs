//! Local capability provider.
//!
//! The negotiator never enumerates what this endpoint can encode or decode; it
//! asks a [`LocalCapabilityProvider`]. [`MediaEngine`] is the configurable
//! implementation, and a plain [`RTCRtpCapabilities`] works as a fixed one.

pub mod media_engine;

pub use media_engine::MediaEngine;

use crate::rtp_capabilities::{
    RTCPFeedback, RTCRtpCapabilities, RtpCodecKind, SDES_MID_URI, SDES_REPAIR_RTP_STREAM_ID_URI,
    SDES_RTP_STREAM_ID_URI, TRANSPORT_CC_URI, TYPE_RTCP_FB_NACK, TYPE_RTCP_FB_TRANSPORT_CC,
};
use shared::error::Result;

/// Source of the full set of RTP capabilities this endpoint supports,
/// independent of any remote peer.
pub trait LocalCapabilityProvider {
    fn local_rtp_capabilities(&self) -> RTCRtpCapabilities;
}

impl LocalCapabilityProvider for RTCRtpCapabilities {
    fn local_rtp_capabilities(&self) -> RTCRtpCapabilities {
        self.clone()
    }
}

/// Registers the RTP header extensions required for simulcast streaming.
///
/// - **SDES MID** (`urn:ietf:params:rtp-hdrext:sdes:mid`): Media identification
/// - **SDES RtpStreamId** (`urn:ietf:params:rtp-hdrext:sdes:rtp-stream-id`): Stream identification
/// - **SDES RepairedRtpStreamId** (`urn:ietf:params:rtp-hdrext:sdes:repaired-rtp-stream-id`): Repair stream identification
///
/// # References
///
/// - [RFC 8852](https://datatracker.ietf.org/doc/html/rfc8852) - RTP Stream Identifier Source Description Extensions
pub fn configure_simulcast_extension_headers(media_engine: &mut MediaEngine) -> Result<()> {
    media_engine.register_header_extension(SDES_MID_URI, RtpCodecKind::Video)?;
    media_engine.register_header_extension(SDES_RTP_STREAM_ID_URI, RtpCodecKind::Video)?;
    media_engine.register_header_extension(SDES_REPAIR_RTP_STREAM_ID_URI, RtpCodecKind::Video)?;

    Ok(())
}

/// Registers transport-wide congestion control for both media kinds: the
/// `transport-cc` feedback on every registered codec and the transport-wide
/// sequence number header extension.
///
/// # References
///
/// - [draft-holmer-rmcat-transport-wide-cc](https://datatracker.ietf.org/doc/html/draft-holmer-rmcat-transport-wide-cc-extensions-01)
pub fn configure_twcc(media_engine: &mut MediaEngine) -> Result<()> {
    for kind in [RtpCodecKind::Video, RtpCodecKind::Audio] {
        media_engine.register_feedback(RTCPFeedback::new(TYPE_RTCP_FB_TRANSPORT_CC, ""), kind);
        media_engine.register_header_extension(TRANSPORT_CC_URI, kind)?;
    }

    Ok(())
}

/// Registers generic NACK and PLI feedback on every video codec.
pub fn configure_nack(media_engine: &mut MediaEngine) {
    media_engine.register_feedback(RTCPFeedback::new(TYPE_RTCP_FB_NACK, ""), RtpCodecKind::Video);
    media_engine.register_feedback(
        RTCPFeedback::new(TYPE_RTCP_FB_NACK, "pli"),
        RtpCodecKind::Video,
    );
}
