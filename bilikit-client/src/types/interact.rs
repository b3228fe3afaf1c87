//! Comment and danmaku payloads

use serde::{Deserialize, Serialize};

/// Result of posting a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSend {
    pub success_action: i32,
    pub success_toast: String,
    pub need_captcha: bool,
    pub need_captcha_v2: bool,
    pub url: String,
    pub url_v2: String,
    pub rpid: i64,
    pub rpid_str: String,
    /// Comment being answered, 0 for a top-level comment
    pub dialog: i64,
    pub dialog_str: String,
    /// Root of the thread, 0 for a top-level comment
    pub root: i64,
    pub root_str: String,
    pub parent: i64,
    pub parent_str: String,
    /// The stored comment
    pub reply: Option<Comment>,
}

/// Comment area type codes used by the `type` parameter
pub mod comment_type {
    pub const VIDEO: i32 = 1;
    pub const DYNAMIC_DRAW: i32 = 11;
    pub const DYNAMIC: i32 = 17;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DanmakuPostResult {
    pub action: String,
    pub dmid: u64,
    pub dmid_str: String,
    pub visible: bool,
}

/// Danmaku display modes
pub mod danmaku_mode {
    pub const NORMAL: i32 = 1;
    pub const BOTTOM: i32 = 4;
    pub const TOP: i32 = 5;
    pub const ADVANCED: i32 = 7;
}

/// One comment, as listed in a comment area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub rpid: i64,
    pub oid: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub mid: i64,
    /// 0 for a top-level comment
    pub root: i64,
    pub parent: i64,
    pub dialog: i64,
    /// Number of replies
    pub count: i64,
    pub rcount: i64,
    /// Absent where the area has no floors
    pub floor: Option<i64>,
    pub state: i32,
    pub fansgrade: i32,
    pub attr: i64,
    pub ctime: i64,
    pub rpid_str: String,
    pub root_str: String,
    pub parent_str: String,
    pub like: i64,
    /// 1 liked, 2 disliked; login only
    pub action: i32,
    pub member: CommentMember,
    pub content: CommentContent,
    /// Preview of the replies, one level deep
    #[serde(deserialize_with = "super::null_as_default")]
    pub replies: Vec<Comment>,
    pub folder: CommentFolder,
    pub up_action: CommentUpAction,
    pub invisible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentMember {
    /// A string on the wire
    pub mid: String,
    pub uname: String,
    pub sex: String,
    pub sign: String,
    pub avatar: String,
    pub rank: String,
    pub level_info: CommentMemberLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentMemberLevel {
    pub current_level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentContent {
    pub message: String,
    /// 1 web, 2 android, 3 ios, 4 wp
    pub plat: i32,
    pub device: String,
    /// Users mentioned in the message
    #[serde(deserialize_with = "super::null_as_default")]
    pub members: Vec<CommentMember>,
    pub max_line: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentFolder {
    pub has_folded: bool,
    pub is_folded: bool,
    pub rule: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentUpAction {
    pub like: bool,
    pub reply: bool,
}

/// Sort modes for [`crate::CommClient::comment_get_main`]
pub mod comment_mode {
    pub const HOT: i32 = 3;
    pub const HOT_AND_TIME: i32 = 1;
    pub const TIME: i32 = 2;
}

/// One page of a comment area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentMain {
    pub cursor: CommentCursor,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hots: Vec<Comment>,
    pub notice: Option<CommentNotice>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub replies: Vec<Comment>,
    pub top: CommentTop,
    pub folder: CommentFolder,
    pub upper: CommentUpper,
    pub show_bvid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentCursor {
    pub all_count: i64,
    pub is_begin: bool,
    pub prev: i64,
    /// Pass back as `next` for the following page
    pub next: i64,
    pub is_end: bool,
    pub mode: i32,
    pub show_type: i32,
    pub support_mode: Vec<i32>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentNotice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub link: String,
}

/// Pinned comments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentTop {
    pub admin: Option<Box<Comment>>,
    pub upper: Option<Box<Comment>>,
    pub vote: Option<Box<Comment>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentUpper {
    pub mid: i64,
}

/// A root comment with one page of its replies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentReply {
    pub page: CommentPage,
    pub root: Comment,
    #[serde(deserialize_with = "super::null_as_default")]
    pub replies: Vec<Comment>,
    pub upper: CommentUpper,
    pub show_bvid: bool,
    pub show_text: String,
    pub show_type: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentPage {
    pub count: i64,
    pub num: i64,
    pub size: i64,
}
