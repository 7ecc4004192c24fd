use std::collections::{HashMap, HashSet};

use log::trace;

use crate::document::{
    SSRC_ATTRIBUTE_CNAME, SSRC_ATTRIBUTE_LABEL, SSRC_ATTRIBUTE_MSID, SSRC_ATTRIBUTE_MSLABEL,
    SSRC_GROUP_SEMANTICS_FID, SessionDocument,
};
use crate::track_info::{MidMap, TrackInfo, TrackInfos};

/// Maps every section's mid to its media type, in document order.
///
/// Inactive sections are kept; sections without a mid are skipped.
pub fn extract_mid_map(document: &SessionDocument) -> MidMap {
    let mut mid_map = MidMap::new();
    for media in &document.media {
        if let Some(mid) = &media.mid {
            mid_map.insert(mid.clone(), media.kind.clone());
        }
    }

    mid_map
}

/// Builds the track infos of every audio and video source.
///
/// FID groups are resolved first, over the whole document rather than per
/// section, so a retransmission SSRC never becomes a track of its own however
/// its `a=ssrc-group` and `a=ssrc` lines are ordered. An FID group declared in
/// one section therefore also excludes its retransmission SSRC from every
/// other section.
pub fn extract_track_infos(document: &SessionDocument) -> TrackInfos {
    let mut rtx_ssrcs: HashMap<u32, u32> = HashMap::new();
    let mut excluded: HashSet<u32> = HashSet::new();

    for media in &document.media {
        if media.codec_kind().is_none() {
            continue;
        }

        for group in &media.ssrc_groups {
            if group.semantics != SSRC_GROUP_SEMANTICS_FID {
                continue;
            }

            match group.ssrc_list()[..] {
                [ssrc, rtx_ssrc, ..] => {
                    rtx_ssrcs.insert(ssrc, rtx_ssrc);
                    excluded.insert(rtx_ssrc);
                }
                _ => trace!("ignoring FID group without an rtx ssrc: {}", group.ssrcs),
            }
        }
    }

    let mut track_infos = TrackInfos::new();
    for media in &document.media {
        let Some(kind) = media.codec_kind() else {
            continue;
        };

        for attribute in &media.ssrcs {
            if excluded.contains(&attribute.id) {
                continue;
            }

            let info = track_infos.entry(attribute.id).or_insert_with(|| {
                TrackInfo::new(attribute.id, kind, rtx_ssrcs.get(&attribute.id).copied())
            });

            match attribute.attribute.as_str() {
                SSRC_ATTRIBUTE_CNAME => info.cname = attribute.value.clone(),
                SSRC_ATTRIBUTE_MSID => {
                    let msid = attribute.value.as_deref().unwrap_or_default();
                    let mut tokens = msid.split_whitespace();
                    info.stream_id = tokens.next().map(str::to_owned);
                    info.track_id = tokens.next().map(str::to_owned);
                }
                SSRC_ATTRIBUTE_MSLABEL => info.stream_id = attribute.value.clone(),
                SSRC_ATTRIBUTE_LABEL => info.track_id = attribute.value.clone(),
                _ => {}
            }
        }
    }

    track_infos
}
