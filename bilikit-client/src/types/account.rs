//! Account and relation payloads

use serde::{Deserialize, Serialize};

/// Basic profile of the logged-in account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub mid: i64,
    pub uname: String,
    pub userid: String,
    pub sign: String,
    /// `YYYY-MM-DD`
    pub birthday: String,
    pub sex: String,
    /// True while no nickname has been chosen
    pub nick_free: bool,
    pub rank: String,
}

/// Navigation bar info, which holds most of the user's state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavInfo {
    #[serde(rename = "isLogin")]
    pub is_login: bool,
    pub email_verified: i32,
    pub face: String,
    pub level_info: Option<NavInfoLevel>,
    pub mid: i64,
    pub mobile_verified: i32,
    /// Coins owned
    pub money: f64,
    pub moral: i32,
    pub uname: String,
    /// Membership expiry, Unix milliseconds
    #[serde(rename = "vipDueDate")]
    pub vip_due_date: i64,
    #[serde(rename = "vipStatus")]
    pub vip_status: i32,
    #[serde(rename = "vipType")]
    pub vip_type: i32,
    pub vip_pay_type: i32,
    pub vip_label: Option<VipLabel>,
    pub vip_nickname_color: String,
    pub wallet: Option<NavInfoWallet>,
    pub has_shop: bool,
    pub shop_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavInfoLevel {
    pub current_level: i32,
    pub current_min: i64,
    pub current_exp: i64,
    /// `"--"` at the top level, so kept untyped
    pub next_exp: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavInfoWallet {
    pub mid: i64,
    pub bcoin_balance: f64,
    pub coupon_balance: f64,
    pub coupon_due_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VipLabel {
    pub path: String,
    pub text: String,
    /// `vip`, `annual_vip`, `ten_annual_vip` ...
    pub label_theme: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavStat {
    pub following: i64,
    pub follower: i64,
    pub dynamic_count: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VipStat {
    pub mid: i64,
    /// 0 none, 1 monthly, 2 yearly
    pub vip_type: i32,
    pub vip_status: i32,
    /// Unix milliseconds
    pub vip_due_date: i64,
    pub vip_pay_type: i32,
    pub theme_type: i32,
}

/// Completion of the daily experience tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpRewardStat {
    pub login: bool,
    pub watch: bool,
    /// Experience earned from coins today, capped at 50
    pub coins: i32,
    pub share: bool,
    pub email: bool,
    pub tel: bool,
    pub safe_question: bool,
    pub identify_card: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationStat {
    pub mid: i64,
    pub following: i64,
    /// Only visible to the owner
    pub whisper: i64,
    /// Only visible to the owner
    pub black: i64,
    pub follower: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowingsDetail {
    pub re_version: i64,
    pub total: i64,
    pub list: Vec<FollowingsItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowingsItem {
    pub mid: i64,
    pub attribute: i32,
    /// Follow time, Unix seconds
    pub mtime: i64,
    pub tag: Option<Vec<i64>>,
    pub special: i32,
    pub uname: String,
    pub face: String,
    pub sign: String,
    pub official_verify: Option<OfficialVerify>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficialVerify {
    #[serde(rename = "type")]
    pub kind: i32,
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialize() {
        let account: Account = serde_json::from_str(
            r#"{"mid":12345,"uname":"bili","userid":"bili_12345","sign":"","birthday":"2000-01-01","sex":"保密","nick_free":false,"rank":"正式会员"}"#,
        )
        .unwrap();
        assert_eq!(account.mid, 12345);
        assert_eq!(account.uname, "bili");
        assert_eq!(account.sex, "保密");
    }

    #[test]
    fn test_nav_info_tolerates_missing_fields() {
        let nav: NavInfo = serde_json::from_str(
            r#"{"isLogin":true,"mid":7,"uname":"x","vipStatus":1,"level_info":{"current_level":6,"current_min":28800,"current_exp":30000,"next_exp":"--"}}"#,
        )
        .unwrap();
        assert!(nav.is_login);
        assert_eq!(nav.vip_status, 1);
        let level = nav.level_info.unwrap();
        assert_eq!(level.current_level, 6);
        assert_eq!(level.next_exp, "--");
        assert!(nav.wallet.is_none());
    }

    #[test]
    fn test_followings_detail() {
        let detail: FollowingsDetail = serde_json::from_str(
            r#"{"re_version":0,"total":1,"list":[{"mid":2,"uname":"碧诗","official_verify":{"type":0,"desc":"bilibili创始人"}}]}"#,
        )
        .unwrap();
        assert_eq!(detail.total, 1);
        assert_eq!(detail.list[0].mid, 2);
        assert_eq!(detail.list[0].official_verify.as_ref().unwrap().desc, "bilibili创始人");
    }
}
