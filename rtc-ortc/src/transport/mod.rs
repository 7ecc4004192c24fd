//! DTLS and ICE transport parameters taken from a remote session description.

pub mod dtls;
pub mod ice;

pub use dtls::{RTCDtlsFingerprint, RTCDtlsParameters, RTCDtlsRole};
pub use ice::{RTCIceCandidate, RTCIceParameters};
