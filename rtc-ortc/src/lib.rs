//! # RTC ORTC - Capabilities from Session Descriptions
//!
//! Turns a remote peer's parsed session description into the typed parameter
//! records a sans-I/O transport engine consumes, and negotiates RTP
//! capabilities against what this endpoint supports.
//!
//! The crate never parses SDP text. It reads the JSON tree an
//! `sdp-transform` style parser produces ([`document::SessionDocument`]) and
//! projects it onto:
//!
//! - [`RTCRtpCapabilities`]: codecs, header extensions and FEC mechanisms
//! - [`RTCDtlsParameters`]: DTLS role and certificate fingerprints
//! - [`RTCIceParameters`] and [`RTCIceCandidate`]s of the bundled transport
//! - [`MidMap`]: media kind per mid
//! - [`TrackInfos`]: per SSRC metadata with retransmission SSRCs folded in
//!
//! ## Quick Start
//!
//! ```
//! use rtc_ortc::document::SessionDocument;
//! use rtc_ortc::local::MediaEngine;
//! use rtc_ortc::{extract_rtp_capabilities, get_negotiated_rtp_capabilities};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = SessionDocument::from_json(
//!     r#"{
//!         "media": [{
//!             "type": "video",
//!             "port": 9,
//!             "rtp": [
//!                 {"payload": 96, "codec": "VP8", "rate": 90000},
//!                 {"payload": 97, "codec": "rtx", "rate": 90000}
//!             ],
//!             "fmtp": [{"payload": 97, "config": "apt=96"}]
//!         }]
//!     }"#,
//! )?;
//!
//! let mut media_engine = MediaEngine::default();
//! media_engine.register_default_codecs();
//!
//! let remote = extract_rtp_capabilities(&document);
//! let negotiated = get_negotiated_rtp_capabilities(&remote, &media_engine);
//! assert_eq!(negotiated.codecs.len(), 2);
//! assert_eq!(negotiated.find_rtx_payload_type(96), Some(97));
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Extraction fails only on malformed documents: no active media section, a
//! missing or unknown DTLS setup, or no fingerprint at all. Every such error
//! reports [`is_malformed_document`](shared::error::Error::is_malformed_document).
//! Negotiation never fails; codecs and extensions without a local counterpart
//! are dropped.

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub use shared;

pub mod document;
pub mod extract;
pub mod local;
pub mod negotiate;
pub mod rtp_capabilities;
pub mod track_info;
pub mod transport;

pub use extract::{
    extract_dtls_parameters, extract_ice_candidates, extract_ice_parameters, extract_mid_map,
    extract_rtp_capabilities, extract_track_infos,
};
pub use local::{LocalCapabilityProvider, MediaEngine};
pub use negotiate::get_negotiated_rtp_capabilities;
pub use rtp_capabilities::{
    RTCRtpCapabilities, RTCRtpCodecCapability, RTCRtpHeaderExtensionCapability, RtpCodecKind,
};
pub use track_info::{MidMap, TrackInfo, TrackInfos};
pub use transport::{RTCDtlsParameters, RTCDtlsRole, RTCIceCandidate, RTCIceParameters};
