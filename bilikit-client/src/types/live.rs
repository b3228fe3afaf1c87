//! Live room payloads

use serde::{Deserialize, Serialize};

/// Room summary attached to a user's space info
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveRoomInfoByMid {
    /// 0 no room, 1 has a room
    #[serde(rename = "roomStatus")]
    pub room_status: i32,
    #[serde(rename = "roundStatus")]
    pub round_status: i32,
    /// 0 offline, 1 live
    #[serde(rename = "liveStatus")]
    pub live_status: i32,
    pub url: String,
    pub title: String,
    pub cover: String,
    pub online: i64,
    /// Real room id
    pub roomid: i64,
    pub broadcast_type: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveRoomInfoById {
    pub room_id: i64,
    pub short_id: i64,
    pub uid: i64,
    pub need_p2p: i32,
    pub is_hidden: bool,
    pub is_locked: bool,
    pub is_portrait: bool,
    pub live_status: i32,
    pub hidden_till: i64,
    pub lock_till: i64,
    pub encrypted: bool,
    pub pwd_verified: bool,
    /// -1 when offline
    pub live_time: i64,
    pub room_shield: i32,
    pub is_sp: i32,
    pub special_type: i32,
    pub all_special_types: Vec<i32>,
}

/// Danmaku websocket servers for a room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveWsConf {
    pub refresh_row_factor: f64,
    pub refresh_rate: i32,
    pub max_delay: i32,
    pub port: u16,
    pub host: String,
    pub host_server_list: Vec<LiveWsHost>,
    pub server_list: Vec<LiveWsServer>,
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveWsHost {
    pub host: String,
    pub port: u16,
    pub wss_port: u16,
    pub ws_port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveWsServer {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SpaceAccInfo {
    pub live_room: Option<LiveRoomInfoByMid>,
}
