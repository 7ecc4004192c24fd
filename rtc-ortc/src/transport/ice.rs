use serde::{Deserialize, Serialize};

/// ICEParameters includes the ICE username fragment
/// and password and other ICE-related parameters.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceParameters {
    pub username_fragment: String,
    pub password: String,
    #[serde(rename = "icelite")]
    pub ice_lite: bool,
}

/// ICECandidate represents a remote ICE candidate of the RTP component.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#rtcicecandidate-interface)
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCIceCandidate {
    pub foundation: String,
    pub ip: String,
    pub port: u16,
    pub priority: u32,
    /// Lower-cased transport, "udp" or "tcp".
    pub protocol: String,
    #[serde(rename = "type")]
    pub typ: String,
}
