use std::collections::HashSet;

use super::*;
use crate::document::{
    CandidateLine, ExtMap, Fingerprint, Fmtp, RtcpFb, RtpMap, SsrcAttribute, SsrcGroup,
};
use crate::rtp_capabilities::{CodecParameterValue, RTCPFeedback, RtpCodecKind};
use crate::transport::{RTCDtlsFingerprint, RTCDtlsRole};

fn rtp(payload: u8, codec: &str, rate: u32) -> RtpMap {
    RtpMap {
        payload,
        codec: codec.to_owned(),
        rate,
        encoding: None,
    }
}

fn rtcp_fb(payload: &str, typ: &str, subtype: Option<&str>) -> RtcpFb {
    RtcpFb {
        payload: payload.to_owned(),
        typ: typ.to_owned(),
        subtype: subtype.map(str::to_owned),
    }
}

fn ext(value: u16, uri: &str) -> ExtMap {
    ExtMap {
        value,
        uri: uri.to_owned(),
    }
}

fn ssrc(id: u32, attribute: &str, value: &str) -> SsrcAttribute {
    SsrcAttribute {
        id,
        attribute: attribute.to_owned(),
        value: Some(value.to_owned()),
    }
}

fn fid(ssrcs: &str) -> SsrcGroup {
    SsrcGroup {
        semantics: "FID".to_owned(),
        ssrcs: ssrcs.to_owned(),
    }
}

fn active_section(kind: &str, mid: &str) -> MediaSection {
    MediaSection {
        kind: kind.to_owned(),
        port: 9,
        mid: Some(mid.to_owned()),
        ice_ufrag: Some("someufrag".to_owned()),
        ice_pwd: Some("somepassword".to_owned()),
        setup: Some("actpass".to_owned()),
        fingerprint: Some(Fingerprint {
            typ: "sha-256".to_owned(),
            hash: "AB:CD:EF".to_owned(),
        }),
        ..Default::default()
    }
}

#[test]
fn test_extract_rtp_capabilities() {
    let audio = MediaSection {
        rtp: vec![RtpMap {
            encoding: Some(2),
            ..rtp(111, "opus", 48000)
        }],
        fmtp: vec![Fmtp {
            payload: 111,
            config: "minptime=10;useinbandfec=1".to_owned(),
        }],
        rtcp_fb: vec![rtcp_fb("111", "transport-cc", None)],
        ext: vec![ext(1, "urn:ietf:params:rtp-hdrext:ssrc-audio-level")],
        ..active_section("audio", "0")
    };
    let video = MediaSection {
        rtp: vec![rtp(96, "VP8", 90000), rtp(97, "rtx", 90000)],
        fmtp: vec![Fmtp {
            payload: 97,
            config: "apt=96".to_owned(),
        }],
        rtcp_fb: vec![
            rtcp_fb("96", "nack", None),
            rtcp_fb("96", "nack", Some("pli")),
            rtcp_fb("96", "ccm", Some("fir")),
        ],
        ext: vec![ext(4, "urn:ietf:params:rtp-hdrext:sdes:mid")],
        ..active_section("video", "1")
    };
    let document = SessionDocument {
        media: vec![audio, video],
        ..Default::default()
    };

    let caps = extract_rtp_capabilities(&document);

    let payload_types: Vec<u8> = caps.codecs.iter().map(|c| c.preferred_payload_type).collect();
    assert_eq!(payload_types, vec![111, 96, 97]);

    let opus = &caps.codecs[0];
    assert_eq!(opus.kind, RtpCodecKind::Audio);
    assert_eq!(opus.mime_type, "audio/opus");
    assert_eq!(opus.num_channels, 2);
    assert_eq!(
        opus.parameters.get("useinbandfec"),
        Some(&CodecParameterValue::Number(1))
    );
    assert_eq!(opus.rtcp_feedback, vec![RTCPFeedback::new("transport-cc", "")]);

    let vp8 = &caps.codecs[1];
    assert_eq!(vp8.num_channels, 1);
    assert_eq!(
        vp8.rtcp_feedback,
        vec![
            RTCPFeedback::new("nack", ""),
            RTCPFeedback::new("nack", "pli"),
            RTCPFeedback::new("ccm", "fir"),
        ]
    );

    let rtx = &caps.codecs[2];
    assert!(rtx.is_rtx());
    assert_eq!(rtx.apt(), Some(96));

    assert_eq!(caps.header_extensions.len(), 2);
    assert_eq!(caps.header_extensions[0].kind, RtpCodecKind::Audio);
    assert_eq!(caps.header_extensions[1].preferred_id, 4);
    assert!(caps.fec_mechanisms.is_empty());
}

#[test]
fn test_extract_rtp_capabilities_duplicate_payload_type() {
    let video = MediaSection {
        rtp: vec![
            rtp(96, "VP8", 90000),
            rtp(98, "VP9", 90000),
            rtp(96, "H264", 90000),
        ],
        ..active_section("video", "0")
    };
    let document = SessionDocument {
        media: vec![video],
        ..Default::default()
    };

    let caps = extract_rtp_capabilities(&document);

    let codecs: Vec<(u8, &str)> = caps
        .codecs
        .iter()
        .map(|c| (c.preferred_payload_type, c.name.as_str()))
        .collect();
    assert_eq!(codecs, vec![(96, "H264"), (98, "VP9")]);
}

#[test]
fn test_extract_rtp_capabilities_orphans_ignored() {
    let video = MediaSection {
        rtp: vec![rtp(96, "VP8", 90000)],
        fmtp: vec![Fmtp {
            payload: 100,
            config: "profile-id=2".to_owned(),
        }],
        rtcp_fb: vec![
            rtcp_fb("*", "transport-cc", None),
            rtcp_fb("100", "nack", None),
            rtcp_fb("96", "goog-remb", None),
        ],
        ..active_section("video", "0")
    };
    let application = MediaSection {
        rtp: vec![rtp(120, "webrtc-datachannel", 0)],
        ext: vec![ext(1, "urn:ietf:params:rtp-hdrext:sdes:mid")],
        ..active_section("application", "1")
    };
    let document = SessionDocument {
        media: vec![video, application],
        ..Default::default()
    };

    let caps = extract_rtp_capabilities(&document);

    assert_eq!(caps.codecs.len(), 1);
    assert!(caps.codecs[0].parameters.is_empty());
    assert_eq!(
        caps.codecs[0].rtcp_feedback,
        vec![RTCPFeedback::new("goog-remb", "")]
    );
    assert!(caps.header_extensions.is_empty());
}

#[test]
fn test_extract_header_extensions_first_wins() {
    let mid_uri = "urn:ietf:params:rtp-hdrext:sdes:mid";
    let first = MediaSection {
        ext: vec![ext(3, mid_uri), ext(5, mid_uri)],
        ..active_section("video", "0")
    };
    let second = MediaSection {
        ext: vec![ext(9, mid_uri)],
        ..active_section("video", "1")
    };
    let audio = MediaSection {
        ext: vec![ext(7, mid_uri)],
        ..active_section("audio", "2")
    };
    let document = SessionDocument {
        media: vec![first, second, audio],
        ..Default::default()
    };

    let caps = extract_rtp_capabilities(&document);

    let got: Vec<(RtpCodecKind, u16)> = caps
        .header_extensions
        .iter()
        .map(|e| (e.kind, e.preferred_id))
        .collect();
    assert_eq!(
        got,
        vec![(RtpCodecKind::Video, 3), (RtpCodecKind::Audio, 7)]
    );
}

#[test]
fn test_extract_dtls_parameters() -> Result<()> {
    let document = SessionDocument {
        media: vec![active_section("audio", "0")],
        ..Default::default()
    };

    let dtls = extract_dtls_parameters(&document)?;
    assert_eq!(dtls.role, RTCDtlsRole::Auto);
    assert_eq!(
        dtls.fingerprints,
        vec![RTCDtlsFingerprint {
            algorithm: "sha-256".to_owned(),
            value: "AB:CD:EF".to_owned(),
        }]
    );

    Ok(())
}

#[test]
fn test_extract_dtls_parameters_session_fingerprint() -> Result<()> {
    let document = SessionDocument {
        media: vec![MediaSection {
            fingerprint: None,
            setup: Some("active".to_owned()),
            ..active_section("video", "0")
        }],
        fingerprint: Some(Fingerprint {
            typ: "sha-512".to_owned(),
            hash: "01:02".to_owned(),
        }),
        ..Default::default()
    };

    let dtls = extract_dtls_parameters(&document)?;
    assert_eq!(dtls.role, RTCDtlsRole::Client);
    assert_eq!(dtls.fingerprints.len(), 1);
    assert_eq!(dtls.fingerprints[0].algorithm, "sha-512");

    Ok(())
}

#[test]
fn test_extract_dtls_parameters_errors() {
    let tests = vec![
        (
            "unknown setup",
            MediaSection {
                setup: Some("holdconn".to_owned()),
                ..active_section("audio", "0")
            },
            Error::ErrUnknownDtlsSetup("holdconn".to_owned()),
        ),
        (
            "missing setup",
            MediaSection {
                setup: None,
                ..active_section("audio", "0")
            },
            Error::ErrMissingDtlsSetup,
        ),
        (
            "missing fingerprint",
            MediaSection {
                fingerprint: None,
                ..active_section("audio", "0")
            },
            Error::ErrMissingDtlsFingerprint,
        ),
        (
            "no ufrag",
            MediaSection {
                ice_ufrag: None,
                ..active_section("audio", "0")
            },
            Error::ErrNoActiveMediaSection,
        ),
    ];

    for (name, media, expected) in tests {
        let document = SessionDocument {
            media: vec![media],
            ..Default::default()
        };
        let err = extract_dtls_parameters(&document).err();
        assert_eq!(err, Some(expected), "{name} failed");
    }
}

#[test]
fn test_no_active_media_section() {
    let document = SessionDocument {
        media: vec![
            MediaSection {
                port: 0,
                ..active_section("audio", "0")
            },
            MediaSection {
                ice_ufrag: Some(String::new()),
                ..active_section("video", "1")
            },
        ],
        ..Default::default()
    };

    assert_eq!(
        active_media_section(&document).err(),
        Some(Error::ErrNoActiveMediaSection)
    );
    assert_eq!(
        extract_dtls_parameters(&document).err(),
        Some(Error::ErrNoActiveMediaSection)
    );
    assert_eq!(
        extract_ice_parameters(&document).err(),
        Some(Error::ErrNoActiveMediaSection)
    );
    assert_eq!(
        extract_ice_candidates(&document).err(),
        Some(Error::ErrNoActiveMediaSection)
    );

    let empty = SessionDocument::default();
    assert!(
        extract_ice_parameters(&empty)
            .err()
            .is_some_and(|err| err.is_malformed_document())
    );
}

#[test]
fn test_extract_ice_parameters() -> Result<()> {
    let document = SessionDocument {
        media: vec![
            MediaSection {
                port: 0,
                ice_ufrag: Some("rejected".to_owned()),
                ..active_section("audio", "0")
            },
            MediaSection {
                ice_ufrag: Some("F7gI".to_owned()),
                ice_pwd: Some("x9cml/YzichV2+XlhiMu8g".to_owned()),
                ..active_section("video", "1")
            },
        ],
        icelite: Some("ice-lite".to_owned()),
        ..Default::default()
    };

    let ice = extract_ice_parameters(&document)?;
    assert_eq!(ice.username_fragment, "F7gI");
    assert_eq!(ice.password, "x9cml/YzichV2+XlhiMu8g");
    assert!(ice.ice_lite);

    let full = SessionDocument {
        icelite: None,
        ..document
    };
    assert!(!extract_ice_parameters(&full)?.ice_lite);

    Ok(())
}

#[test]
fn test_extract_ice_candidates() -> Result<()> {
    let candidate = |foundation: &str, component: u16, transport: &str| CandidateLine {
        foundation: foundation.to_owned(),
        component,
        transport: transport.to_owned(),
        priority: 2122260223,
        ip: "10.0.0.1".to_owned(),
        port: 50000,
        typ: "host".to_owned(),
    };
    let document = SessionDocument {
        media: vec![
            MediaSection {
                candidates: vec![
                    candidate("1", 1, "UDP"),
                    candidate("1", 2, "UDP"),
                    candidate("2", 1, "TCP"),
                ],
                ..active_section("audio", "0")
            },
            MediaSection {
                candidates: vec![candidate("9", 1, "udp")],
                ..active_section("video", "1")
            },
        ],
        ..Default::default()
    };

    let candidates = extract_ice_candidates(&document)?;
    let got: Vec<(&str, &str)> = candidates
        .iter()
        .map(|c| (c.foundation.as_str(), c.protocol.as_str()))
        .collect();
    assert_eq!(got, vec![("1", "udp"), ("2", "tcp")]);
    assert_eq!(candidates[0].priority, 2122260223);
    assert_eq!(candidates[0].typ, "host");

    Ok(())
}

#[test]
fn test_extract_mid_map() {
    let document = SessionDocument {
        media: vec![
            active_section("audio", "audio0"),
            MediaSection {
                port: 0,
                ..active_section("video", "video1")
            },
            MediaSection {
                mid: None,
                ..active_section("video", "unused")
            },
            active_section("application", "data"),
        ],
        ..Default::default()
    };

    let mid_map = extract_mid_map(&document);
    let got: Vec<(&str, &str)> = mid_map
        .iter()
        .map(|(mid, kind)| (mid.as_str(), kind.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![
            ("audio0", "audio"),
            ("video1", "video"),
            ("data", "application")
        ]
    );
}

#[test]
fn test_extract_track_infos() {
    let tests = vec![
        (
            "group before attributes",
            vec![fid("111 222")],
            vec![
                ssrc(111, "cname", "user@host"),
                ssrc(111, "msid", "stream1 track1"),
                ssrc(222, "cname", "user@host"),
                ssrc(222, "msid", "stream1 track1"),
            ],
        ),
        (
            "attributes before group",
            vec![fid("111 222")],
            vec![
                ssrc(222, "msid", "stream1 track1"),
                ssrc(111, "msid", "stream1 track1"),
                ssrc(111, "cname", "user@host"),
            ],
        ),
    ];

    for (name, ssrc_groups, ssrcs) in tests {
        let document = SessionDocument {
            media: vec![MediaSection {
                ssrc_groups,
                ssrcs,
                ..active_section("video", "0")
            }],
            ..Default::default()
        };

        let track_infos = extract_track_infos(&document);
        assert_eq!(track_infos.len(), 1, "{name} failed");

        let info = &track_infos[&111];
        assert_eq!(info.kind, RtpCodecKind::Video, "{name} failed");
        assert_eq!(info.rtx_ssrc, Some(222), "{name} failed");
        assert_eq!(info.stream_id.as_deref(), Some("stream1"), "{name} failed");
        assert_eq!(info.track_id.as_deref(), Some("track1"), "{name} failed");
        assert_eq!(info.cname.as_deref(), Some("user@host"), "{name} failed");
        assert!(!track_infos.contains_key(&222), "{name} failed");
    }
}

#[test]
fn test_extract_track_infos_plan_b_labels() {
    let audio = MediaSection {
        ssrcs: vec![
            ssrc(1001, "cname", "c"),
            ssrc(1001, "mslabel", "stream-a"),
            ssrc(1001, "label", "track-a"),
            ssrc(1001, "x-unknown", "ignored"),
        ],
        ..active_section("audio", "0")
    };
    let video = MediaSection {
        ssrc_groups: vec![
            SsrcGroup {
                semantics: "SIM".to_owned(),
                ssrcs: "2001 2002".to_owned(),
            },
            fid("2001"),
        ],
        ssrcs: vec![
            ssrc(2001, "msid", "stream-v"),
            ssrc(2002, "label", "track-v2"),
            ssrc(2001, "mslabel", "stream-v-override"),
        ],
        ..active_section("video", "1")
    };
    let data = MediaSection {
        ssrcs: vec![ssrc(3001, "cname", "c")],
        ..active_section("application", "2")
    };
    let document = SessionDocument {
        media: vec![audio, video, data],
        ..Default::default()
    };

    let track_infos = extract_track_infos(&document);
    let ssrcs: Vec<u32> = track_infos.keys().copied().collect();
    assert_eq!(ssrcs, vec![1001, 2001, 2002]);

    let audio_info = &track_infos[&1001];
    assert_eq!(audio_info.kind, RtpCodecKind::Audio);
    assert_eq!(audio_info.stream_id.as_deref(), Some("stream-a"));
    assert_eq!(audio_info.track_id.as_deref(), Some("track-a"));
    assert_eq!(audio_info.rtx_ssrc, None);

    let video_info = &track_infos[&2001];
    assert_eq!(video_info.stream_id.as_deref(), Some("stream-v-override"));
    assert_eq!(video_info.track_id, None);
    assert_eq!(video_info.cname, None);
    assert_eq!(video_info.rtx_ssrc, None);

    assert_eq!(track_infos[&2002].track_id.as_deref(), Some("track-v2"));
}

#[test]
fn test_track_infos_never_contain_rtx_ssrc() {
    let document = SessionDocument {
        media: vec![
            MediaSection {
                ssrcs: vec![ssrc(20, "cname", "c"), ssrc(10, "cname", "c")],
                ..active_section("video", "0")
            },
            MediaSection {
                ssrc_groups: vec![fid("10 20"), fid("30 40")],
                ssrcs: vec![ssrc(40, "cname", "c"), ssrc(30, "cname", "c")],
                ..active_section("video", "1")
            },
        ],
        ..Default::default()
    };

    let track_infos = extract_track_infos(&document);
    let rtx_ssrcs: HashSet<u32> = track_infos.values().filter_map(|t| t.rtx_ssrc).collect();

    assert_eq!(rtx_ssrcs, HashSet::from([20, 40]));
    assert!(track_infos.keys().all(|ssrc| !rtx_ssrcs.contains(ssrc)));
    assert_eq!(track_infos.len(), 2);
}
