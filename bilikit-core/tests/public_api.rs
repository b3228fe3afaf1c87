//! Tests for the public surface of bilikit-core
//!
//! Run with: cargo test -p bilikit-core --test public_api

use std::collections::HashMap;

use bilikit_core::id::{extract_aid, extract_bvid};
use bilikit_core::{
    at_uids, av_to_bv, bv_to_av, mention_ctrl_json, parse_mentions, CodecError, MentionControl,
    VideoId, MENTION_KIND,
};

fn at(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

#[test]
fn test_known_pairs_both_ways() {
    for (aid, bvid) in [
        (170_001, "BV17x411w7KC"),
        (455_017_605, "BV1Q541167Qg"),
        (882_584_971, "BV1mK4y1C7Bz"),
    ] {
        assert_eq!(av_to_bv(aid).unwrap(), bvid);
        assert_eq!(bv_to_av(bvid).unwrap(), aid);
    }
}

#[test]
fn test_bvid_from_url_to_aid() {
    let url = "https://www.bilibili.com/video/BV17x411w7KC/?spm_id_from=333.788";
    let bvid = extract_bvid(url).unwrap();
    let id: VideoId = bvid.parse().unwrap();
    assert_eq!(id.to_aid().unwrap(), 170_001);
    assert_eq!(extract_aid("https://www.bilibili.com/video/av170001"), Some(170_001));
}

#[test]
fn test_out_of_range_is_reported() {
    let err = VideoId::Aid(1 << 40).to_bvid().unwrap_err();
    assert!(matches!(err, CodecError::OutOfRange { aid } if aid == 1 << 40));
}

#[test]
fn test_mentions_count_characters_not_bytes() {
    let text = "转发 @小明 看看 @Bob ";
    let controls = parse_mentions(MENTION_KIND, text, &at(&[("小明", 10)])).unwrap();
    assert_eq!(
        controls,
        vec![
            MentionControl {
                location: 3,
                kind: MENTION_KIND,
                length: 4,
                data: "10".to_string(),
            },
            MentionControl {
                location: 10,
                kind: MENTION_KIND,
                length: 5,
                data: "0".to_string(),
            },
        ]
    );
}

#[test]
fn test_post_fields() {
    let names = at(&[("bob", 30), ("amy", 4)]);
    let text = "@amy and @bob ";
    assert_eq!(
        mention_ctrl_json(MENTION_KIND, text, &names).unwrap(),
        r#"[{"location":0,"type":1,"length":5,"data":"4"},{"location":9,"type":1,"length":5,"data":"30"}]"#
    );
    assert_eq!(at_uids(&names), "4,30");
}
