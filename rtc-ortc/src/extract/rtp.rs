use indexmap::IndexMap;
use log::trace;

use crate::document::SessionDocument;
use crate::document::fmtp;
use crate::rtp_capabilities::{
    PayloadType, RTCPFeedback, RTCRtpCapabilities, RTCRtpCodecCapability,
    RTCRtpHeaderExtensionCapability,
};

/// Extracts the RTP capabilities advertised by the audio and video sections.
///
/// Codecs are keyed by payload type: a later rtpmap with the same payload type
/// replaces the earlier codec but keeps its position. fmtp and rtcp-fb lines
/// for undeclared payload types are ignored. Header extensions are unique per
/// (kind, uri), the first declaration wins. FEC mechanisms are never filled.
pub fn extract_rtp_capabilities(document: &SessionDocument) -> RTCRtpCapabilities {
    let mut codecs: IndexMap<PayloadType, RTCRtpCodecCapability> = IndexMap::new();
    let mut header_extensions: Vec<RTCRtpHeaderExtensionCapability> = vec![];

    for media in &document.media {
        let Some(kind) = media.codec_kind() else {
            continue;
        };

        for rtp in &media.rtp {
            let codec = RTCRtpCodecCapability::new(kind, &rtp.codec, rtp.rate, rtp.payload)
                .with_channels(rtp.encoding.unwrap_or(1));
            codecs.insert(rtp.payload, codec);
        }

        for fmtp in &media.fmtp {
            match codecs.get_mut(&fmtp.payload) {
                Some(codec) => codec.parameters = fmtp::parse_parameters(&fmtp.config),
                None => trace!("ignoring fmtp for undeclared payload type {}", fmtp.payload),
            }
        }

        for fb in &media.rtcp_fb {
            let codec = match fb.payload.parse::<PayloadType>() {
                Ok(payload_type) => codecs.get_mut(&payload_type),
                Err(_) => None,
            };
            match codec {
                Some(codec) => codec.rtcp_feedback.push(RTCPFeedback {
                    typ: fb.typ.clone(),
                    parameter: fb.subtype.clone().unwrap_or_default(),
                }),
                None => trace!("ignoring rtcp-fb {} for payload type {}", fb.typ, fb.payload),
            }
        }

        for ext in &media.ext {
            if header_extensions
                .iter()
                .any(|e| e.kind == kind && e.uri == ext.uri)
            {
                continue;
            }

            header_extensions.push(RTCRtpHeaderExtensionCapability {
                kind,
                uri: ext.uri.clone(),
                preferred_id: ext.value,
                preferred_encrypt: false,
            });
        }
    }

    RTCRtpCapabilities {
        codecs: codecs.into_values().collect(),
        header_extensions,
        fec_mechanisms: vec![],
    }
}
