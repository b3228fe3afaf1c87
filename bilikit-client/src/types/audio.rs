//! Audio (music) payloads

use serde::{Deserialize, Serialize};

use crate::transport::{params, Params};

/// Audio stream quality codes for the `quality` parameter
pub mod audio_quality {
    /// 128K
    pub const SMOOTH: i32 = 0;
    /// 192K
    pub const STANDARD: i32 = 1;
    /// 320K
    pub const HIGH: i32 = 2;
    /// FLAC, members only
    pub const LOSSLESS: i32 = 3;
    /// Preview clip, reported in [`super::AudioPlayUrl::kind`]
    pub const PREVIEW: i32 = -1;
}

/// Query for `audio/music-service-c/url`; see [`audio_quality`].
pub(crate) fn audio_play_url_params(auid: i64, quality: i32) -> Params {
    params([
        ("songid", auid.to_string()),
        ("quality", quality.to_string()),
        ("privilege", "2".to_string()),
        ("mid", "2".to_string()),
        ("platform", "web".to_string()),
    ])
}

/// The `sid` query most song endpoints take.
pub(crate) fn audio_sid(auid: i64) -> Params {
    params([("sid", auid.to_string())])
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioInfo {
    /// auid
    pub id: i64,
    pub uid: i64,
    pub uname: String,
    pub author: String,
    pub title: String,
    pub cover: String,
    pub intro: String,
    /// lrc lyric URL
    pub lyric: String,
    pub crtype: i32,
    /// Seconds
    pub duration: i64,
    pub passtime: i64,
    pub curtime: i64,
    /// Linked video, 0 when none
    pub aid: i64,
    pub bvid: String,
    pub cid: i64,
    pub msid: i64,
    pub attr: i32,
    pub limit: i32,
    #[serde(rename = "activityId")]
    pub activity_id: i64,
    pub limitdesc: String,
    pub ctime: i64,
    pub statistic: Option<AudioInfoStat>,
    #[serde(rename = "vipInfo")]
    pub vip_info: Option<AudioInfoVip>,
    /// Folders holding the song; login only
    #[serde(rename = "collectIds")]
    pub collect_ids: Vec<i64>,
    pub coin_num: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioInfoStat {
    pub sid: i64,
    pub play: i64,
    pub collect: i64,
    pub comment: i64,
    pub share: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioInfoVip {
    #[serde(rename = "type")]
    pub kind: i32,
    pub status: i32,
    /// Unix milliseconds
    pub due_date: i64,
    pub vip_pay_type: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTag {
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: i64,
    pub key: i64,
    /// Tag name
    pub info: String,
}

/// Credits of one role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioMember {
    pub list: Vec<AudioMemberEntry>,
    /// 1 singer, 2 lyrics, 3 music, 4 arrangement, 127 uploader
    #[serde(rename = "type")]
    pub kind: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioMemberEntry {
    pub mid: i64,
    pub name: String,
    pub member_id: i64,
}

/// Stream URLs for one song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioPlayUrl {
    pub sid: i64,
    /// See [`audio_quality`]
    #[serde(rename = "type")]
    pub kind: i32,
    pub info: String,
    /// Seconds the URLs stay valid
    pub timeout: i64,
    /// Bytes, 0 for a preview
    pub size: i64,
    pub cdns: Vec<String>,
    pub qualities: Vec<AudioPlayUrlQuality>,
    pub title: String,
    pub cover: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioPlayUrlQuality {
    #[serde(rename = "type")]
    pub kind: i32,
    pub desc: String,
    pub size: i64,
    pub bps: String,
    pub tag: String,
    /// 1 when membership is required
    pub require: i32,
    pub requiredesc: String,
}

/// One page of the account's song lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioMyFavLists {
    pub cur_page: i32,
    pub page_count: i32,
    pub total_size: i32,
    pub page_size: i32,
    pub data: Vec<AudioFavList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioFavList {
    pub id: i64,
    pub uid: i64,
    pub uname: String,
    pub title: String,
    /// 1 for the default list
    #[serde(rename = "type")]
    pub kind: i32,
    pub published: i32,
    pub cover: String,
    pub ctime: i64,
    /// Number of songs
    pub song: i32,
    pub desc: String,
    pub sids: Vec<i64>,
    #[serde(rename = "menuId")]
    pub menu_id: i64,
    pub statistic: Option<AudioInfoStat>,
}
