//! Response payloads
//!
//! Field names follow the JSON the endpoints return. Every struct tolerates
//! missing fields, since the site omits keys freely.

mod account;
mod audio;
mod charge;
mod dynamic;
mod fav;
mod interact;
mod live;
mod video;

pub use account::{
    Account, ExpRewardStat, FollowingsDetail, FollowingsItem, NavInfo, NavInfoLevel, NavInfoWallet,
    NavStat, OfficialVerify, RelationStat, VipLabel, VipStat,
};
pub use audio::{
    audio_quality, AudioFavList, AudioInfo, AudioInfoStat, AudioInfoVip, AudioMember,
    AudioMemberEntry, AudioMyFavLists, AudioPlayUrl, AudioPlayUrlQuality, AudioTag,
};
pub use charge::{
    ChargeBpResult, ChargeCreateQrCode, ChargeItem, ChargeItemVip, ChargeQrCodeStatus,
    ChargeSource, ChargeSpaceList, ChargeVideoList, ChargeVideoShow,
};
pub use dynamic::{pictures_json, DraftRequest, DynaDraft, DynaGetDraft, DynaUploadPic};
pub(crate) use dynamic::{DraftIdData, DynamicIdData, PublishData};
pub use fav::{
    fav_res_type, FavDetail, FavDetailCnt, FavDetailUpper, FavInfo, FavRes, FavResDetail,
    FavResDetailMedia, FavResDetailMediaCnt, FavResQuery, FavoritesList,
};
pub use interact::{
    comment_mode, comment_type, danmaku_mode, Comment, CommentContent, CommentCursor,
    CommentFolder, CommentMain, CommentMember, CommentMemberLevel, CommentNotice, CommentPage,
    CommentReply, CommentSend, CommentTop, CommentUpAction, CommentUpper, DanmakuPostResult,
};
pub use live::{LiveRoomInfoById, LiveRoomInfoByMid, LiveWsConf, LiveWsHost, LiveWsServer};
pub(crate) use audio::{audio_play_url_params, audio_sid};
pub(crate) use live::SpaceAccInfo;
pub(crate) use video::play_url_params;
pub use video::{
    video_fnval, video_quality, OnlineNum, TripleResult, VideoDimension, VideoInfo, VideoOwner,
    VideoPage, VideoPlayDurl, VideoPlayUrlDash, VideoPlayUrlDashMedia, VideoPlayUrlDashSegment,
    VideoPlayUrlFormat, VideoPlayUrlResult, VideoSingleStat, VideoStat, VideoTag, VideoTagCount,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Lists the site sends as `null` when empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Location data for the caller's IP
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoInfo {
    pub addr: String,
    pub country: String,
    pub province: String,
    pub city: String,
    pub isp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zone_id: i64,
    pub country_code: i32,
}
