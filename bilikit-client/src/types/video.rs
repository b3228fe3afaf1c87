//! Video payloads

use serde::{Deserialize, Serialize};

/// Full info from `x/web-interface/view`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInfo {
    pub aid: i64,
    pub bvid: String,
    /// Number of parts
    pub videos: i32,
    pub tid: i32,
    pub tname: String,
    /// 1 original, 2 repost
    pub copyright: i32,
    pub pic: String,
    pub title: String,
    pub pubdate: i64,
    pub ctime: i64,
    pub desc: String,
    pub state: i32,
    /// Seconds, all parts
    pub duration: i64,
    pub owner: Option<VideoOwner>,
    pub stat: Option<VideoStat>,
    pub dynamic: String,
    /// cid of the first part
    pub cid: i64,
    pub dimension: Option<VideoDimension>,
    pub pages: Vec<VideoPage>,
    pub mission_id: i64,
    pub redirect_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoOwner {
    pub mid: i64,
    pub name: String,
    pub face: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoStat {
    pub aid: i64,
    pub view: i64,
    pub danmaku: i64,
    pub reply: i64,
    pub favorite: i64,
    pub coin: i64,
    pub share: i64,
    pub now_rank: i64,
    pub his_rank: i64,
    pub like: i64,
    pub dislike: i64,
    pub argue_msg: String,
    pub evaluation: String,
}

/// Stats from `x/web-interface/archive/stat`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSingleStat {
    pub aid: i64,
    pub bvid: String,
    pub view: i64,
    pub danmaku: i64,
    pub reply: i64,
    pub favorite: i64,
    pub coin: i64,
    pub share: i64,
    pub now_rank: i64,
    pub his_rank: i64,
    pub like: i64,
    pub dislike: i64,
    pub no_reprint: i32,
    pub copyright: i32,
    pub argue_msg: String,
    pub evaluation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPage {
    pub cid: i64,
    pub page: i32,
    /// `vupload` for regular uploads
    pub from: String,
    pub part: String,
    pub duration: i64,
    pub vid: String,
    pub weblink: String,
    pub dimension: Option<VideoDimension>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoDimension {
    pub width: i32,
    pub height: i32,
    /// 1 when width and height are swapped
    pub rotate: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoTag {
    pub tag_id: i64,
    pub tag_name: String,
    pub cover: String,
    pub head_cover: String,
    pub content: String,
    pub short_content: String,
    #[serde(rename = "type")]
    pub kind: i32,
    pub state: i32,
    pub ctime: i64,
    pub count: Option<VideoTagCount>,
    pub is_atten: i32,
    pub liked: i32,
    pub hated: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoTagCount {
    pub view: i64,
    #[serde(rename = "use")]
    pub used: i64,
    pub atten: i64,
}

/// Viewer counts, rendered by the site as text such as `"1000+"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlineNum {
    /// All clients
    pub total: String,
    /// Web only
    #[serde(rename = "count")]
    pub web: String,
}

/// Outcome of a like + coin + favourite in one call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripleResult {
    pub like: bool,
    pub coin: bool,
    pub fav: bool,
    pub multiply: i32,
}

/// Stream qualities for the `qn` parameter
pub mod video_quality {
    pub const Q360P: i32 = 16;
    pub const Q480P: i32 = 32;
    pub const Q720P: i32 = 64;
    pub const Q1080P: i32 = 80;
    pub const Q1080P_PLUS: i32 = 112;
    pub const Q4K: i32 = 120;
}

/// Stream format flags for the `fnval` parameter
pub mod video_fnval {
    pub const FLV: i32 = 0;
    pub const MP4: i32 = 1;
    pub const DASH: i32 = 16;
}

/// Query for `x/player/playurl`; see [`video_quality`] and [`video_fnval`].
pub(crate) fn play_url_params(aid: i64, cid: i64, qn: i32, fnval: i32) -> crate::transport::Params {
    crate::transport::params([
        ("avid", aid.to_string()),
        ("cid", cid.to_string()),
        ("qn", qn.to_string()),
        ("fnval", fnval.to_string()),
        ("fnver", "0".to_string()),
        ("fourk", "1".to_string()),
    ])
}

/// Stream URLs from `x/player/playurl`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPlayUrlResult {
    pub from: String,
    pub result: String,
    pub message: String,
    /// Quality actually served
    pub quality: i32,
    pub format: String,
    /// Milliseconds
    pub timelength: i64,
    /// Comma separated
    pub accept_format: String,
    pub accept_description: Vec<String>,
    pub accept_quality: Vec<i32>,
    pub video_codecid: i32,
    pub seek_param: String,
    pub seek_type: String,
    /// flv/mp4 segments
    pub durl: Vec<VideoPlayDurl>,
    /// Present for DASH requests only
    pub dash: Option<VideoPlayUrlDash>,
    pub support_formats: Vec<VideoPlayUrlFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPlayDurl {
    pub order: i32,
    /// Milliseconds
    pub length: i64,
    /// Bytes
    pub size: i64,
    pub ahead: String,
    pub vhead: String,
    /// Valid for 120 minutes
    pub url: String,
    pub backup_url: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPlayUrlFormat {
    pub quality: i32,
    pub format: String,
    pub new_description: String,
    pub display_desc: String,
    pub superscript: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPlayUrlDash {
    pub duration: i64,
    pub min_buffer_time: f64,
    pub video: Vec<VideoPlayUrlDashMedia>,
    pub audio: Vec<VideoPlayUrlDashMedia>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPlayUrlDashMedia {
    pub id: i32,
    pub base_url: String,
    pub backup_url: Vec<String>,
    pub bandwidth: i64,
    pub mime_type: String,
    pub codecs: String,
    /// Video only
    pub width: i32,
    pub height: i32,
    pub frame_rate: String,
    pub sar: String,
    pub start_with_sap: i32,
    pub segment_base: Option<VideoPlayUrlDashSegment>,
    pub codecid: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPlayUrlDashSegment {
    pub initialization: String,
    pub index_range: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_info_deserialize() {
        let info: VideoInfo = serde_json::from_str(
            r#"{
                "aid":170001,"bvid":"BV17x411w7KC","videos":10,"tid":193,"copyright":2,
                "title":"【MV】保加利亚妖王AZIS视频合辑","duration":2412,
                "owner":{"mid":122541,"name":"冰封.虾子","face":"http://i0.hdslb.com/face.jpg"},
                "stat":{"aid":170001,"view":3000000,"like":100},
                "cid":279786,
                "pages":[{"cid":279786,"page":1,"from":"vupload","part":"Азис","duration":240,
                          "dimension":{"width":0,"height":0,"rotate":0}}]
            }"#,
        )
        .unwrap();
        assert_eq!(info.aid, 170_001);
        assert_eq!(info.bvid, "BV17x411w7KC");
        assert_eq!(info.owner.unwrap().mid, 122_541);
        assert_eq!(info.stat.unwrap().like, 100);
        assert_eq!(info.pages.len(), 1);
        assert_eq!(info.pages[0].part, "Азис");
    }

    #[test]
    fn test_tag_renames() {
        let tag: VideoTag = serde_json::from_str(
            r#"{"tag_id":1,"tag_name":"音乐","type":3,"count":{"view":0,"use":12,"atten":4}}"#,
        )
        .unwrap();
        assert_eq!(tag.kind, 3);
        assert_eq!(tag.count.unwrap().used, 12);
    }

    #[test]
    fn test_online_num() {
        let num: OnlineNum = serde_json::from_str(r#"{"total":"1000+","count":"300+"}"#).unwrap();
        assert_eq!(num.total, "1000+");
        assert_eq!(num.web, "300+");
    }

    #[test]
    fn test_play_url_params() {
        let params = play_url_params(170_001, 279_786, video_quality::Q1080P, video_fnval::DASH);
        assert_eq!(params["avid"], "170001");
        assert_eq!(params["cid"], "279786");
        assert_eq!(params["qn"], "80");
        assert_eq!(params["fnval"], "16");
        assert_eq!(params["fourk"], "1");
    }

    #[test]
    fn test_play_url_dash() {
        let play: VideoPlayUrlResult = serde_json::from_str(
            r#"{"quality":80,"format":"flv","timelength":240000,"accept_quality":[80,64,32,16],
                "dash":{"duration":240,"min_buffer_time":1.5,
                        "video":[{"id":80,"base_url":"https://v/80.m4s","width":1920,"height":1080,
                                  "segment_base":{"initialization":"0-900","index_range":"901-1500"}}],
                        "audio":[{"id":30280,"base_url":"https://a/30280.m4s"}]}}"#,
        )
        .unwrap();
        assert_eq!(play.quality, video_quality::Q1080P);
        assert!(play.durl.is_empty());
        let dash = play.dash.unwrap();
        assert_eq!(dash.video[0].width, 1920);
        assert_eq!(
            dash.video[0].segment_base.as_ref().unwrap().index_range,
            "901-1500"
        );
        assert_eq!(dash.audio[0].id, 30280);
    }
}
