//! Media engine configuration for codecs and RTP extensions.
//!
//! The media engine is the endpoint's full capability set: what it can encode
//! and decode regardless of the peer. Negotiation narrows it down against a
//! remote description.
//!
//! # Examples
//!
//! ```
//! use rtc_ortc::local::{LocalCapabilityProvider, MediaEngine};
//! use rtc_ortc::rtp_capabilities::{AUDIO_LEVEL_URI, RtpCodecKind};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut media_engine = MediaEngine::default();
//! media_engine.register_default_codecs();
//! media_engine.register_header_extension(AUDIO_LEVEL_URI, RtpCodecKind::Audio)?;
//!
//! let capabilities = media_engine.local_rtp_capabilities();
//! assert!(!capabilities.codecs.is_empty());
//! # Ok(())
//! # }
//! ```


use std::ops::RangeInclusive;

use log::debug;
use shared::error::{Error, Result};

use super::LocalCapabilityProvider;
use crate::rtp_capabilities::*;

const VALID_EXT_IDS: RangeInclusive<u16> = 1..=14;

#[derive(Default, Debug, Clone)]
pub(crate) struct MediaEngineHeaderExtension {
    pub(crate) uri: String,
    pub(crate) id: u16,
    pub(crate) is_audio: bool,
    pub(crate) is_video: bool,
}

/// Media engine managing the codecs and RTP header extensions an endpoint supports.
///
/// # Thread Safety
///
/// ⚠️ MediaEngine is **not** safe for concurrent use during configuration.
/// Configure it completely before handing it to the negotiator.
#[derive(Default, Debug, Clone)]
pub struct MediaEngine {
    pub(crate) codecs: Vec<RTCRtpCodecCapability>,
    pub(crate) header_extensions: Vec<MediaEngineHeaderExtension>,
}

impl MediaEngine {
    /// Registers standard WebRTC codecs for audio and video.
    ///
    /// **Audio Codecs:**
    /// - Opus (48kHz, stereo, with FEC)
    /// - G.722 (8kHz wideband)
    /// - PCMU/G.711 μ-law (8kHz)
    /// - PCMA/G.711 A-law (8kHz)
    ///
    /// **Video Codecs**, each with an RTX companion and RTCP feedback:
    /// - VP8
    /// - VP9 (profiles 0 and 1)
    /// - H.264 (constrained baseline and baseline, packetization modes 0 and 1)
    /// - AV1
    /// - H.265/HEVC
    pub fn register_default_codecs(&mut self) {
        for codec in [
            RTCRtpCodecCapability::new(RtpCodecKind::Audio, "opus", 48000, 111)
                .with_channels(2)
                .with_parameter("minptime", 10u64)
                .with_parameter("useinbandfec", 1u64),
            RTCRtpCodecCapability::new(RtpCodecKind::Audio, "G722", 8000, 9),
            RTCRtpCodecCapability::new(RtpCodecKind::Audio, "PCMU", 8000, 0),
            RTCRtpCodecCapability::new(RtpCodecKind::Audio, "PCMA", 8000, 8),
        ] {
            self.register_codec(codec);
        }

        let video_rtcp_feedback = vec![
            RTCPFeedback::new(TYPE_RTCP_FB_GOOG_REMB, ""),
            RTCPFeedback::new(TYPE_RTCP_FB_CCM, "fir"),
            RTCPFeedback::new(TYPE_RTCP_FB_NACK, ""),
            RTCPFeedback::new(TYPE_RTCP_FB_NACK, "pli"),
        ];
        let h264 = |payload_type: PayloadType, packetization_mode: u64, profile_level_id: &str| {
            RTCRtpCodecCapability::new(RtpCodecKind::Video, "H264", 90000, payload_type)
                .with_parameter("level-asymmetry-allowed", 1u64)
                .with_parameter("packetization-mode", packetization_mode)
                .with_parameter("profile-level-id", profile_level_id)
        };
        for (codec, rtx_payload_type) in [
            (
                RTCRtpCodecCapability::new(RtpCodecKind::Video, "VP8", 90000, 96),
                97,
            ),
            (
                RTCRtpCodecCapability::new(RtpCodecKind::Video, "VP9", 90000, 98)
                    .with_parameter("profile-id", 0u64),
                99,
            ),
            (
                RTCRtpCodecCapability::new(RtpCodecKind::Video, "VP9", 90000, 100)
                    .with_parameter("profile-id", 1u64),
                101,
            ),
            (h264(102, 1, "42001f"), 103),
            (h264(104, 0, "42001f"), 105),
            (h264(106, 1, "42e01f"), 107),
            (h264(108, 0, "42e01f"), 109),
            (
                RTCRtpCodecCapability::new(RtpCodecKind::Video, "AV1", 90000, 45)
                    .with_parameter("profile", 0u64),
                46,
            ),
            (
                RTCRtpCodecCapability::new(RtpCodecKind::Video, "H265", 90000, 116),
                117,
            ),
        ] {
            let codec = codec.with_rtcp_feedback(video_rtcp_feedback.clone());
            let rtx = RTCRtpCodecCapability::new_rtx(&codec, rtx_payload_type);
            self.register_codec(codec);
            self.register_codec(rtx);
        }
    }

    /// add_codec will append codec if it not exists
    fn add_codec(codecs: &mut Vec<RTCRtpCodecCapability>, codec: RTCRtpCodecCapability) {
        for c in codecs.iter() {
            if c.mime_type == codec.mime_type
                && c.preferred_payload_type == codec.preferred_payload_type
            {
                debug!(
                    "codec {} with payload type {} already registered",
                    codec.mime_type, codec.preferred_payload_type
                );
                return;
            }
        }
        codecs.push(codec);
    }

    /// Registers a codec this endpoint can encode and decode.
    ///
    /// A codec with the same MIME type and payload type as an already
    /// registered one is ignored.
    pub fn register_codec(&mut self, codec: RTCRtpCodecCapability) {
        MediaEngine::add_codec(&mut self.codecs, codec);
    }

    /// Adds a header extension to the MediaEngine.
    ///
    /// Each URI gets one id shared by both kinds, allocated in registration
    /// order from 1 to 14. Registering the same URI again only enables it for
    /// `kind`.
    pub fn register_header_extension(&mut self, uri: &str, kind: RtpCodecKind) -> Result<()> {
        let ext = match self.header_extensions.iter().position(|ext| ext.uri == uri) {
            Some(index) => &mut self.header_extensions[index],
            None => {
                let id = self.header_extensions.len() as u16 + 1;
                if !VALID_EXT_IDS.contains(&id) {
                    return Err(Error::ErrRegisterHeaderExtensionNoFreeID);
                }
                self.header_extensions.push(MediaEngineHeaderExtension {
                    uri: uri.to_owned(),
                    id,
                    ..Default::default()
                });
                let last = self.header_extensions.len() - 1;
                &mut self.header_extensions[last]
            }
        };

        match kind {
            RtpCodecKind::Audio => ext.is_audio = true,
            RtpCodecKind::Video => ext.is_video = true,
        }

        Ok(())
    }

    /// register_feedback adds feedback mechanism to already registered codecs.
    pub fn register_feedback(&mut self, feedback: RTCPFeedback, kind: RtpCodecKind) {
        for codec in &mut self.codecs {
            if codec.kind == kind && !codec.is_rtx() && !codec.rtcp_feedback.contains(&feedback)
            {
                codec.rtcp_feedback.push(feedback.clone());
            }
        }
    }

    /// Returns the id allocated to a header extension URI, if registered.
    pub fn get_header_extension_id(&self, uri: &str) -> Option<u16> {
        self.header_extensions
            .iter()
            .find(|ext| ext.uri == uri)
            .map(|ext| ext.id)
    }
}

impl LocalCapabilityProvider for MediaEngine {
    fn local_rtp_capabilities(&self) -> RTCRtpCapabilities {
        let mut header_extensions = vec![];
        for ext in &self.header_extensions {
            for (enabled, kind) in [
                (ext.is_audio, RtpCodecKind::Audio),
                (ext.is_video, RtpCodecKind::Video),
            ] {
                if enabled {
                    header_extensions.push(RTCRtpHeaderExtensionCapability {
                        kind,
                        uri: ext.uri.clone(),
                        preferred_id: ext.id,
                        preferred_encrypt: false,
                    });
                }
            }
        }

        RTCRtpCapabilities {
            codecs: self.codecs.clone(),
            header_extensions,
            fec_mechanisms: vec![],
        }
    }
}
