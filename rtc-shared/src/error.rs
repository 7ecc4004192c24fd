use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// ErrNoActiveMediaSection indicates that no media section carries both an
    /// ice-ufrag and a non-zero port, so there is no transport to describe.
    #[error("sdp: no active media section with ice-ufrag and non-zero port")]
    ErrNoActiveMediaSection,
    /// ErrMissingDtlsSetup indicates the active media section has no setup attribute.
    #[error("sdp: missing DTLS setup attribute")]
    ErrMissingDtlsSetup,
    #[error("sdp: unknown DTLS setup value: {0}")]
    ErrUnknownDtlsSetup(String),
    /// ErrMissingDtlsFingerprint indicates neither the active media section nor
    /// the session carries a fingerprint attribute.
    #[error("sdp: missing DTLS fingerprint")]
    ErrMissingDtlsFingerprint,
    #[error("sdp: invalid document: {0}")]
    ErrInvalidDocument(String),
    /// ErrRegisterHeaderExtensionNoFreeID indicates that there was no extension ID available which
    /// in turn means that all 14 available id(1..14) have been used.
    #[error("no header extension ID was free to use(this means the maximum of 14 extensions have been registered)")]
    ErrRegisterHeaderExtensionNoFreeID,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Reports whether the error stems from a structurally unusable session
    /// description. Retrying extraction on the same document cannot succeed.
    pub fn is_malformed_document(&self) -> bool {
        matches!(
            self,
            Error::ErrNoActiveMediaSection
                | Error::ErrMissingDtlsSetup
                | Error::ErrUnknownDtlsSetup(_)
                | Error::ErrMissingDtlsFingerprint
                | Error::ErrInvalidDocument(_)
        )
    }
}
