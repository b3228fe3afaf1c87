//! Charge (paid support) payloads

use serde::{Deserialize, Serialize};

/// Where a charge comes from, sent as `otype`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeSource {
    /// From the user's space; `oid` is the user's mid
    Up,
    /// From a video; `oid` is the aid
    Archive,
}

impl ChargeSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Archive => "archive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeBpResult {
    pub mid: i64,
    pub up_mid: i64,
    /// Needed to leave a message afterwards
    pub order_no: String,
    /// Sent as a string by the server
    pub bp_num: String,
    pub exp: i32,
    /// 4 success, -2 below the minimum, -4 not enough B coins
    pub status: i32,
    pub msg: String,
}

impl ChargeBpResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 4
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeCreateQrCode {
    /// Payment QR content
    pub qr_code_url: String,
    pub qr_token: String,
    pub exp: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeQrCodeStatus {
    pub qr_token: String,
    /// Set once paid
    pub order_no: String,
    pub mid: i64,
    /// 1 paid, 2 not scanned, 3 scanned but unconfirmed
    pub status: i32,
}

/// Supporters shown in a user's space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeSpaceList {
    pub display_num: i32,
    /// Supporters this month
    pub count: i32,
    pub total_count: i32,
    pub list: Vec<ChargeItem>,
}

/// Supporters shown under a video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeVideoList {
    pub show_info: Option<ChargeVideoShow>,
    pub av_count: i32,
    pub count: i32,
    pub total_count: i32,
    pub special_day: i32,
    pub display_num: i32,
    pub list: Vec<ChargeItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeVideoShow {
    pub show: bool,
    pub state: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeItem {
    pub mid: i64,
    pub pay_mid: i64,
    pub rank: i32,
    pub uname: String,
    pub avatar: String,
    pub message: String,
    pub msg_deleted: i32,
    pub vip_info: Option<ChargeItemVip>,
    pub trend_type: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChargeItemVip {
    pub vip_type: i32,
    pub vip_due_msec: i64,
    pub vip_status: i32,
}
