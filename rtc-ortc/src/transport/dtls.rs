use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

/// RTCDtlsRole indicates the role of the DTLS transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RTCDtlsRole {
    /// DTLSRoleAuto defines the DTLS role is determined based on
    /// the resolved ICE role: the ICE controlled role acts as the DTLS
    /// client and the ICE controlling role acts as the DTLS server.
    #[serde(rename = "auto")]
    Auto,

    /// DTLSRoleClient defines the DTLS client role.
    #[serde(rename = "client")]
    Client,

    /// DTLSRoleServer defines the DTLS server role.
    #[serde(rename = "server")]
    Server,
}

impl fmt::Display for RTCDtlsRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCDtlsRole::Auto => write!(f, "auto"),
            RTCDtlsRole::Client => write!(f, "client"),
            RTCDtlsRole::Server => write!(f, "server"),
        }
    }
}

impl RTCDtlsRole {
    /// Maps an `a=setup` value to the role the remote peer takes.
    ///
    /// <https://tools.ietf.org/html/rfc5763>
    /// Any value other than active, passive or actpass is an error.
    pub fn from_setup(setup: &str) -> Result<Self> {
        match setup {
            "active" => Ok(RTCDtlsRole::Client),
            "passive" => Ok(RTCDtlsRole::Server),
            "actpass" => Ok(RTCDtlsRole::Auto),
            _ => Err(Error::ErrUnknownDtlsSetup(setup.to_owned())),
        }
    }

    /// The `a=setup` value announcing this role.
    pub fn to_setup(self) -> &'static str {
        match self {
            RTCDtlsRole::Client => "active",
            RTCDtlsRole::Server => "passive",
            RTCDtlsRole::Auto => "actpass",
        }
    }
}

/// DTLS certificate fingerprint for authentication.
///
/// The fingerprint is carried verbatim from the session description; it is not
/// checked against any certificate here.
///
/// # Specifications
///
/// - [RFC 8122] - Updates to RFC 4572
/// - [W3C RTCDtlsFingerprint]
///
/// [RFC 8122]: https://datatracker.ietf.org/doc/html/rfc8122
/// [W3C RTCDtlsFingerprint]: https://w3c.github.io/webrtc-pc/#rtcdtlsfingerprint
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCDtlsFingerprint {
    /// Hash function algorithm name, such as `"sha-256"`.
    pub algorithm: String,

    /// Certificate fingerprint value, colon separated hex bytes.
    pub value: String,
}

/// DTLSParameters holds information relating to DTLS configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCDtlsParameters {
    pub role: RTCDtlsRole,
    pub fingerprints: Vec<RTCDtlsFingerprint>,
}
