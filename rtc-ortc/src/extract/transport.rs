use crate::document::{COMPONENT_RTP, SessionDocument};
use crate::transport::{RTCDtlsFingerprint, RTCDtlsParameters, RTCDtlsRole};
use crate::transport::{RTCIceCandidate, RTCIceParameters};
use shared::error::{Error, Result};

use super::active_media_section;

/// Extracts the remote DTLS role and certificate fingerprint from the active
/// media section, falling back to the session level fingerprint.
pub fn extract_dtls_parameters(document: &SessionDocument) -> Result<RTCDtlsParameters> {
    let media = active_media_section(document)?;

    let setup = media.setup.as_deref().ok_or(Error::ErrMissingDtlsSetup)?;
    let role = RTCDtlsRole::from_setup(setup)?;

    let fingerprint = media
        .fingerprint
        .as_ref()
        .or(document.fingerprint.as_ref())
        .ok_or(Error::ErrMissingDtlsFingerprint)?;

    Ok(RTCDtlsParameters {
        role,
        fingerprints: vec![RTCDtlsFingerprint {
            algorithm: fingerprint.typ.clone(),
            value: fingerprint.hash.clone(),
        }],
    })
}

/// Extracts the remote ICE credentials of the active media section.
pub fn extract_ice_parameters(document: &SessionDocument) -> Result<RTCIceParameters> {
    let media = active_media_section(document)?;

    Ok(RTCIceParameters {
        username_fragment: media.ice_ufrag.clone().unwrap_or_default(),
        password: media.ice_pwd.clone().unwrap_or_default(),
        ice_lite: document.icelite.is_some(),
    })
}

/// Extracts the RTP component candidates of the active media section.
///
/// rtcp-mux is assumed, so candidates of any other component are dropped.
pub fn extract_ice_candidates(document: &SessionDocument) -> Result<Vec<RTCIceCandidate>> {
    let media = active_media_section(document)?;

    Ok(media
        .candidates
        .iter()
        .filter(|candidate| candidate.component == COMPONENT_RTP)
        .map(|candidate| RTCIceCandidate {
            foundation: candidate.foundation.clone(),
            ip: candidate.ip.clone(),
            port: candidate.port,
            priority: candidate.priority,
            protocol: candidate.transport.to_lowercase(),
            typ: candidate.typ.clone(),
        })
        .collect())
}
