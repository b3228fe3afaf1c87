//! Favourite folder payloads

use serde::{Deserialize, Serialize};

use super::VideoOwner;

/// Resource type codes used in `{id}:{type}` resource strings
pub mod fav_res_type {
    pub const VIDEO: i32 = 2;
    pub const AUDIO: i32 = 12;
    pub const COLLECTION: i32 = 21;
}

/// Folders created by a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesList {
    pub count: i32,
    /// `null` on the wire when the user has no public folders
    #[serde(deserialize_with = "super::null_as_default")]
    pub list: Vec<FavInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavInfo {
    /// Full mlid: original id plus the last two digits of the owner's mid
    pub id: i64,
    pub fid: i64,
    pub mid: i64,
    pub attr: i32,
    pub title: String,
    pub fav_state: i32,
    pub media_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavDetail {
    pub id: i64,
    pub fid: i64,
    pub mid: i64,
    pub attr: i32,
    pub title: String,
    pub cover: String,
    pub upper: Option<FavDetailUpper>,
    pub cover_type: i32,
    pub cnt_info: Option<FavDetailCnt>,
    #[serde(rename = "type")]
    pub kind: i32,
    pub intro: String,
    pub ctime: i64,
    pub mtime: i64,
    pub state: i32,
    /// Login only
    pub fav_state: i32,
    /// Login only
    pub like_state: i32,
    pub media_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavDetailUpper {
    pub mid: i64,
    pub name: String,
    pub face: String,
    pub followed: bool,
    pub vip_type: i32,
    /// Misspelled on the wire
    #[serde(rename = "vip_statue")]
    pub vip_status: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavDetailCnt {
    pub collect: i64,
    pub play: i64,
    pub thumb_up: i64,
    pub share: i64,
}

/// One resource id in a folder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavRes {
    /// avid, auid or collection id depending on `kind`
    pub id: i64,
    /// See [`fav_res_type`]
    #[serde(rename = "type")]
    pub kind: i32,
}

impl FavRes {
    /// `{id}:{type}`, the form the batch copy/move/delete endpoints take.
    #[must_use]
    pub fn resource(&self) -> String {
        format!("{}:{}", self.id, self.kind)
    }
}

/// One page of a folder's contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavResDetail {
    pub info: Option<FavDetail>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub medias: Vec<FavResDetailMedia>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavResDetailMedia {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub title: String,
    pub cover: String,
    pub intro: String,
    /// Number of parts
    pub page: i32,
    pub duration: i64,
    pub upper: Option<VideoOwner>,
    pub attr: i32,
    pub cnt_info: Option<FavResDetailMediaCnt>,
    pub link: String,
    pub ctime: i64,
    pub pubtime: i64,
    pub fav_time: i64,
    pub bvid: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavResDetailMediaCnt {
    pub collect: i64,
    pub play: i64,
    pub danmaku: i64,
}

/// Filters for a folder content listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavResQuery {
    pub media_id: i64,
    /// Partition id, 0 for all
    pub tid: i32,
    pub keyword: String,
    /// `mtime` (default), `view` or `pubtime`
    pub order: String,
    pub kind: i32,
    pub pn: u32,
    /// Small values only; the server rejects large pages
    pub ps: u32,
}

impl FavResQuery {
    /// First page of 20, newest favourites first.
    #[must_use]
    pub fn new(media_id: i64) -> Self {
        Self {
            media_id,
            tid: 0,
            keyword: String::new(),
            order: "mtime".to_string(),
            kind: 0,
            pn: 1,
            ps: 20,
        }
    }

    pub(crate) fn to_params(&self) -> crate::transport::Params {
        crate::transport::params([
            ("media_id", self.media_id.to_string()),
            ("tid", self.tid.to_string()),
            ("keyword", self.keyword.clone()),
            ("order", self.order.clone()),
            ("type", self.kind.to_string()),
            ("pn", self.pn.to_string()),
            ("ps", self.ps.to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_list_null() {
        let list: FavoritesList = serde_json::from_str(r#"{"count":0,"list":null}"#).unwrap();
        assert!(list.list.is_empty());

        let list: FavoritesList = serde_json::from_str(
            r#"{"count":1,"list":[{"id":1052622027,"fid":10526220,"mid":9272727,"title":"default","media_count":3}]}"#,
        )
        .unwrap();
        assert_eq!(list.list[0].id, 1_052_622_027);
        assert_eq!(list.list[0].media_count, 3);
    }

    #[test]
    fn test_fav_detail_renames() {
        let detail: FavDetail = serde_json::from_str(
            r#"{"id":1,"type":11,"upper":{"mid":2,"vip_statue":1},"cnt_info":{"collect":5,"play":70}}"#,
        )
        .unwrap();
        assert_eq!(detail.kind, 11);
        assert_eq!(detail.upper.unwrap().vip_status, 1);
        assert_eq!(detail.cnt_info.unwrap().play, 70);
    }

    #[test]
    fn test_fav_res_resource_string() {
        let res: Vec<FavRes> =
            serde_json::from_str(r#"[{"id":21822819,"type":2},{"id":15664,"type":12}]"#).unwrap();
        let strings: Vec<String> = res.iter().map(FavRes::resource).collect();
        assert_eq!(strings, ["21822819:2", "15664:12"]);
    }

    #[test]
    fn test_res_query_params() {
        let mut query = FavResQuery::new(77);
        query.keyword = "mv".to_string();
        let params = query.to_params();
        assert_eq!(params["media_id"], "77");
        assert_eq!(params["order"], "mtime");
        assert_eq!(params["keyword"], "mv");
        assert_eq!(params["type"], "0");
        assert_eq!(params["pn"], "1");
        assert_eq!(params["ps"], "20");
    }
}
