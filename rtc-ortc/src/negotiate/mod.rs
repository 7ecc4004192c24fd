//! Negotiation of the locally usable RTP capabilities against a remote peer.


use std::collections::HashMap;

use log::{debug, trace};

use crate::local::LocalCapabilityProvider;
use crate::rtp_capabilities::rtcp_feedback::rtcp_feedback_intersection;
use crate::rtp_capabilities::rtp_codec::codec_parameters_intersection;
use crate::rtp_capabilities::{
    PayloadType, RTCRtpCapabilities, RTCRtpCodecCapability, RTCRtpHeaderExtensionCapability,
};

/// Narrows the local capabilities down to what the remote peer can use.
///
/// Codecs are matched on name (ignoring case), kind and clock rate and keep the
/// remote's payload type numbering. Parameters survive only when both sides
/// declare the same value, feedback only when both sides declare the same
/// (type, parameter). RTX entries are not matched but rebuilt for every
/// negotiated codec the remote pairs with an RTX payload type, and appended
/// after all primary codecs. Header extensions keep the remote's id.
///
/// Anything without a local counterpart is dropped; that is a normal outcome,
/// not an error.
pub fn get_negotiated_rtp_capabilities<P>(
    remote: &RTCRtpCapabilities,
    local: &P,
) -> RTCRtpCapabilities
where
    P: LocalCapabilityProvider + ?Sized,
{
    let local = local.local_rtp_capabilities();

    // apt -> remote rtx payload type
    let mut rtx_payload_types: HashMap<PayloadType, PayloadType> = HashMap::new();
    for remote_codec in remote.codecs.iter().filter(|c| c.is_rtx()) {
        match remote_codec.apt() {
            Some(apt) => {
                rtx_payload_types.insert(apt, remote_codec.preferred_payload_type);
            }
            None => debug!(
                "dropping remote rtx payload type {} without a valid apt",
                remote_codec.preferred_payload_type
            ),
        }
    }

    let mut codecs: Vec<RTCRtpCodecCapability> = vec![];
    for remote_codec in remote.codecs.iter().filter(|c| !c.is_rtx()) {
        let Some(local_codec) = local
            .codecs
            .iter()
            .find(|local_codec| local_codec.is_same_codec(remote_codec))
        else {
            debug!(
                "no local codec for remote {}/{} payload type {}",
                remote_codec.mime_type, remote_codec.clock_rate, remote_codec.preferred_payload_type
            );
            continue;
        };

        codecs.push(RTCRtpCodecCapability {
            preferred_payload_type: remote_codec.preferred_payload_type,
            kind: local_codec.kind,
            mime_type: local_codec.mime_type.clone(),
            name: local_codec.name.clone(),
            clock_rate: local_codec.clock_rate,
            num_channels: local_codec.num_channels,
            parameters: codec_parameters_intersection(
                &remote_codec.parameters,
                &local_codec.parameters,
            ),
            rtcp_feedback: rtcp_feedback_intersection(
                &local_codec.rtcp_feedback,
                &remote_codec.rtcp_feedback,
            ),
        });
    }

    // payload types of the primaries are final now
    let rtx_codecs: Vec<RTCRtpCodecCapability> = codecs
        .iter()
        .filter_map(|codec| {
            rtx_payload_types
                .get(&codec.preferred_payload_type)
                .map(|rtx_payload_type| RTCRtpCodecCapability::new_rtx(codec, *rtx_payload_type))
        })
        .collect();
    codecs.extend(rtx_codecs);

    let mut header_extensions: Vec<RTCRtpHeaderExtensionCapability> = vec![];
    for remote_ext in &remote.header_extensions {
        match local
            .header_extensions
            .iter()
            .find(|ext| ext.kind == remote_ext.kind && ext.uri == remote_ext.uri)
        {
            Some(local_ext) => header_extensions.push(RTCRtpHeaderExtensionCapability {
                kind: local_ext.kind,
                uri: local_ext.uri.clone(),
                preferred_id: remote_ext.preferred_id,
                preferred_encrypt: remote_ext.preferred_encrypt,
            }),
            None => debug!(
                "no local {} header extension for {}",
                remote_ext.kind, remote_ext.uri
            ),
        }
    }

    let fec_mechanisms: Vec<String> = remote
        .fec_mechanisms
        .iter()
        .filter(|mechanism| local.fec_mechanisms.contains(mechanism))
        .cloned()
        .collect();

    trace!(
        "negotiated {} codecs, {} header extensions",
        codecs.len(),
        header_extensions.len()
    );

    RTCRtpCapabilities {
        codecs,
        header_extensions,
        fec_mechanisms,
    }
}
