//! Projection of a parsed session description onto typed capability and
//! parameter records.
//!
//! Every function here is a pure read of the [`SessionDocument`]; a fresh
//! record is built on each call.

#[cfg(test)]
mod extract_test;

mod media;
mod rtp;
mod transport;

pub use media::{extract_mid_map, extract_track_infos};
pub use rtp::extract_rtp_capabilities;
pub use transport::{extract_dtls_parameters, extract_ice_candidates, extract_ice_parameters};

use crate::document::{MediaSection, SessionDocument};
use shared::error::{Error, Result};

/// Returns the media section describing the bundled transport: the first one
/// with an ICE user fragment and a non-zero port.
pub fn active_media_section(document: &SessionDocument) -> Result<&MediaSection> {
    document
        .media
        .iter()
        .find(|media| media.is_active())
        .ok_or(Error::ErrNoActiveMediaSection)
}
