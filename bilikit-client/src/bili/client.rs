//! Authenticated client: construction, transport hooks and the account,
//! relation, video, comment, danmaku and live endpoints. Favourites, audio,
//! charge and dynamics live in their own modules.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::auth::CookieAuth;
use crate::config::{ClientConfig, Endpoints};
use crate::error::ClientError;
use crate::transport::{params, parse, BaseClient, FileUpload, Method, Params, Requester, Response};
use crate::types::{
    play_url_params, Account, CommentSend, DanmakuPostResult, ExpRewardStat, NavInfo, NavStat,
    TripleResult, VideoInfo, VideoPlayUrlResult, VideoTag, VipStat,
};

/// Client for endpoints that act on behalf of a logged-in account.
///
/// Every request carries the session cookies; every POST, including uploads,
/// carries `csrf=<bili_jct>`.
#[derive(Debug, Clone)]
pub struct BiliClient {
    base: BaseClient,
    auth: CookieAuth,
    me: Option<Account>,
}

impl BiliClient {
    /// Build a client and load the account it belongs to.
    pub async fn new(auth: CookieAuth, config: &ClientConfig) -> Result<Self, ClientError> {
        let mut client = Self::with_account(auth, config, None)?;
        let me = client.get_me().await?;
        info!(mid = me.mid, uname = %me.uname, "bilibili account loaded");
        client.me = Some(me);
        Ok(client)
    }

    /// Build a client without the account lookup.
    pub fn with_account(
        auth: CookieAuth,
        config: &ClientConfig,
        me: Option<Account>,
    ) -> Result<Self, ClientError> {
        auth.validate()?;
        Ok(Self {
            base: BaseClient::new(config)?,
            auth,
            me,
        })
    }

    /// Account fetched at construction, if any
    #[must_use]
    pub const fn me(&self) -> Option<&Account> {
        self.me.as_ref()
    }

    #[must_use]
    pub const fn auth(&self) -> &CookieAuth {
        &self.auth
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        self.base.endpoints()
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.base.set_user_agent(user_agent);
    }

    pub fn set_http_client(&mut self, http: reqwest::Client) {
        self.base.set_http_client(http);
    }

    /// mid of the session, from the loaded account or the `DedeUserID` cookie
    pub(super) fn mid(&self) -> i64 {
        self.me
            .as_ref()
            .map(|me| me.mid)
            .or_else(|| self.auth.dede_user_id.parse().ok())
            .unwrap_or_default()
    }

    /// Multipart upload with the session cookies and a `csrf` field.
    pub async fn upload(
        &self,
        base: &str,
        endpoint: &str,
        params: &Params,
        files: Vec<FileUpload>,
    ) -> Result<Bytes, ClientError> {
        let mut params = params.clone();
        params.insert("csrf".to_string(), self.auth.bili_jct.clone());
        let cookie = self.auth.cookie_header();
        self.base
            .upload(base, endpoint, &params, files, Some(&cookie))
            .await
    }

    /// [`BiliClient::upload`] followed by envelope decoding.
    pub async fn upload_parse(
        &self,
        base: &str,
        endpoint: &str,
        params: &Params,
        files: Vec<FileUpload>,
    ) -> Result<Response, ClientError> {
        let raw = self.upload(base, endpoint, params, files).await?;
        parse(&raw)
    }

    // ========== Account ==========

    pub async fn get_me(&self) -> Result<Account, ClientError> {
        self.raw_parse(&self.endpoints().api, "x/member/web/account", Method::Get, &Params::new())
            .await?
            .decode()
    }

    /// Navigation bar info, which carries most of the account state.
    pub async fn get_nav_info(&self) -> Result<NavInfo, ClientError> {
        self.raw_parse(&self.endpoints().api, "x/web-interface/nav", Method::Get, &Params::new())
            .await?
            .decode()
    }

    pub async fn get_nav_stat(&self) -> Result<NavStat, ClientError> {
        self.raw_parse(&self.endpoints().api, "x/web-interface/nav/stat", Method::Get, &Params::new())
            .await?
            .decode()
    }

    pub async fn get_vip_stat(&self) -> Result<VipStat, ClientError> {
        self.raw_parse(&self.endpoints().api, "x/vip/web/user/info", Method::Get, &Params::new())
            .await?
            .decode()
    }

    /// Daily experience tasks. The coin figure lags behind.
    pub async fn get_exp_reward_stat(&self) -> Result<ExpRewardStat, ClientError> {
        self.raw_parse(&self.endpoints().api, "x/member/web/exp/reward", Method::Get, &Params::new())
            .await?
            .decode()
    }

    // ========== Relation ==========

    /// Follow (`true`) or unfollow a user.
    pub async fn follow_user(&self, mid: i64, follow: bool) -> Result<(), ClientError> {
        let form = params([
            ("fid", mid.to_string()),
            ("act", if follow { "1" } else { "2" }.to_string()),
            ("re_src", "11".to_string()),
            ("spmid", "333.999.0.0".to_string()),
            ("extend_content", format!(r#"{{"entity":"user","entity_id":{mid}}}"#)),
        ]);
        self.raw_parse(&self.endpoints().api, "x/relation/modify", Method::Post, &form)
            .await?;
        Ok(())
    }

    /// mids of everyone the account follows.
    pub async fn followings_get_my(&self) -> Result<Vec<i64>, ClientError> {
        #[derive(Deserialize)]
        struct Attention {
            #[serde(default)]
            list: Vec<i64>,
        }

        let data: Attention = self
            .raw_parse(
                &self.endpoints().vc,
                "feed/v1/feed/get_attention_list",
                Method::Get,
                &Params::new(),
            )
            .await?
            .decode()?;
        Ok(data.list)
    }

    // ========== Video ==========

    /// Like (`true`) or un-like a video.
    pub async fn video_add_like(&self, aid: i64, like: bool) -> Result<(), ClientError> {
        let form = params([
            ("aid", aid.to_string()),
            ("like", if like { "1" } else { "2" }.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/web-interface/archive/like", Method::Post, &form)
            .await?;
        Ok(())
    }

    pub async fn video_is_liked(&self, aid: i64) -> Result<bool, ClientError> {
        let liked: i64 = self
            .raw_parse(
                &self.endpoints().api,
                "x/web-interface/archive/has/like",
                Method::Get,
                &params([("aid", aid.to_string())]),
            )
            .await?
            .decode()?;
        Ok(liked == 1)
    }

    /// Throw `num` coins (at most 2), optionally liking too.
    pub async fn video_add_coins(&self, aid: i64, num: u8, like: bool) -> Result<(), ClientError> {
        let form = params([
            ("aid", aid.to_string()),
            ("multiply", num.to_string()),
            ("select_like", if like { "1" } else { "0" }.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/web-interface/coin/add", Method::Post, &form)
            .await?;
        Ok(())
    }

    /// Coins the account has thrown at a video.
    pub async fn video_is_added_coins(&self, aid: i64) -> Result<i32, ClientError> {
        #[derive(Deserialize)]
        struct Coins {
            #[serde(default)]
            multiply: i32,
        }

        let coins: Coins = self
            .raw_parse(
                &self.endpoints().api,
                "x/web-interface/archive/coins",
                Method::Get,
                &params([("aid", aid.to_string())]),
            )
            .await?
            .decode()?;
        Ok(coins.multiply)
    }

    /// Add to / remove from favourite folders. Returns the "prompt" flag,
    /// set when the uploader is not followed.
    pub async fn video_set_favour(
        &self,
        aid: i64,
        add_media_ids: &[i64],
        del_media_ids: &[i64],
    ) -> Result<bool, ClientError> {
        #[derive(Deserialize)]
        struct Prompt {
            #[serde(default)]
            prompt: bool,
        }

        let form = params([
            ("rid", aid.to_string()),
            ("type", "2".to_string()),
            ("add_media_ids", join_ids(add_media_ids)),
            ("del_media_ids", join_ids(del_media_ids)),
        ]);
        let prompt: Prompt = self
            .raw_parse(
                &self.endpoints().api,
                "medialist/gateway/coll/resource/deal",
                Method::Post,
                &form,
            )
            .await?
            .decode()?;
        Ok(prompt.prompt)
    }

    pub async fn video_is_favoured(&self, aid: i64) -> Result<bool, ClientError> {
        #[derive(Deserialize)]
        struct Favoured {
            #[serde(default)]
            favoured: bool,
        }

        let fav: Favoured = self
            .raw_parse(
                &self.endpoints().api,
                "x/v2/fav/video/favoured",
                Method::Get,
                &params([("aid", aid.to_string())]),
            )
            .await?
            .decode()?;
        Ok(fav.favoured)
    }

    /// Like, coin and favourite in one call.
    pub async fn video_triple(&self, aid: i64) -> Result<TripleResult, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/web-interface/archive/like/triple",
            Method::Post,
            &params([("aid", aid.to_string())]),
        )
        .await?
        .decode()
    }

    /// Record a share. Returns the video's new share count.
    pub async fn video_share(&self, aid: i64) -> Result<i64, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/web-interface/share/add",
            Method::Post,
            &params([("aid", aid.to_string())]),
        )
        .await?
        .decode()
    }

    /// Video info as seen by this account (works for login-only videos).
    pub async fn video_get_info(&self, aid: i64) -> Result<VideoInfo, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/web-interface/view",
            Method::Get,
            &params([("aid", aid.to_string())]),
        )
        .await?
        .decode()
    }

    /// Save the watch position (seconds) of part `cid`.
    pub async fn video_report_progress(
        &self,
        aid: i64,
        cid: i64,
        progress: i64,
    ) -> Result<(), ClientError> {
        let form = params([
            ("aid", aid.to_string()),
            ("cid", cid.to_string()),
            ("progress", progress.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/v2/history/report", Method::Post, &form)
            .await?;
        Ok(())
    }

    /// Playback heartbeat, normally sent every 15 seconds.
    pub async fn video_heartbeat(
        &self,
        aid: i64,
        cid: i64,
        played_time: i64,
    ) -> Result<(), ClientError> {
        let form = params([
            ("aid", aid.to_string()),
            ("cid", cid.to_string()),
            ("mid", self.mid().to_string()),
            ("start_ts", Utc::now().timestamp().to_string()),
            ("played_time", played_time.to_string()),
        ]);
        self.raw_parse(
            &self.endpoints().api,
            "x/click-interface/web/heartbeat",
            Method::Post,
            &form,
        )
        .await?;
        Ok(())
    }

    /// Tags of a video, with this account's like, hate and follow state.
    pub async fn video_get_tags(&self, aid: i64) -> Result<Vec<VideoTag>, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/tag/archive/tags",
            Method::Get,
            &params([("aid", aid.to_string())]),
        )
        .await?
        .decode()
    }

    /// Stream URLs for part `cid`. Member-only qualities need this client.
    pub async fn video_get_play_url(
        &self,
        aid: i64,
        cid: i64,
        qn: i32,
        fnval: i32,
    ) -> Result<VideoPlayUrlResult, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/player/playurl",
            Method::Get,
            &play_url_params(aid, cid, qn, fnval),
        )
        .await?
        .decode()
    }

    // ========== Comment ==========

    /// Post a comment. `kind` is the comment area type (see
    /// [`crate::types::comment_type`]); `root` and `parent` are 0 for a
    /// top-level comment.
    pub async fn comment_send(
        &self,
        oid: i64,
        kind: i32,
        content: &str,
        platform: i32,
        root: i64,
        parent: i64,
    ) -> Result<CommentSend, ClientError> {
        let form = params([
            ("oid", oid.to_string()),
            ("type", kind.to_string()),
            ("root", root.to_string()),
            ("parent", parent.to_string()),
            ("ordering", "heat".to_string()),
            ("message", content.to_string()),
            ("plat", platform.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/v2/reply/add", Method::Post, &form)
            .await?
            .decode()
    }

    pub async fn comment_like(
        &self,
        oid: i64,
        kind: i32,
        rpid: i64,
        like: bool,
    ) -> Result<(), ClientError> {
        self.comment_action("x/v2/reply/action", oid, kind, rpid, like)
            .await
    }

    pub async fn comment_hate(
        &self,
        oid: i64,
        kind: i32,
        rpid: i64,
        hate: bool,
    ) -> Result<(), ClientError> {
        self.comment_action("x/v2/reply/hate", oid, kind, rpid, hate)
            .await
    }

    async fn comment_action(
        &self,
        endpoint: &str,
        oid: i64,
        kind: i32,
        rpid: i64,
        on: bool,
    ) -> Result<(), ClientError> {
        let form = params([
            ("oid", oid.to_string()),
            ("type", kind.to_string()),
            ("rpid", rpid.to_string()),
            ("action", if on { "1" } else { "0" }.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, endpoint, Method::Post, &form)
            .await?;
        Ok(())
    }

    /// Delete one of the account's comments, or one in an area it manages.
    pub async fn comment_del(&self, oid: i64, kind: i32, rpid: i64) -> Result<(), ClientError> {
        let form = params([
            ("oid", oid.to_string()),
            ("type", kind.to_string()),
            ("rpid", rpid.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/v2/reply/del", Method::Post, &form)
            .await?;
        Ok(())
    }

    // ========== Danmaku ==========

    /// Post a danmaku on part `cid` at `progress` milliseconds.
    #[allow(clippy::too_many_arguments)]
    pub async fn danmaku_post(
        &self,
        kind: i32,
        aid: i64,
        cid: i64,
        msg: &str,
        progress: i64,
        color: u32,
        fontsize: i32,
        pool: i32,
        mode: i32,
    ) -> Result<DanmakuPostResult, ClientError> {
        let rnd = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| Utc::now().timestamp());
        let form = params([
            ("type", kind.to_string()),
            ("oid", cid.to_string()),
            ("msg", msg.to_string()),
            ("aid", aid.to_string()),
            ("progress", progress.to_string()),
            ("color", color.to_string()),
            ("fontsize", fontsize.to_string()),
            ("pool", pool.to_string()),
            ("mode", mode.to_string()),
            ("rnd", rnd.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/v2/dm/post", Method::Post, &form)
            .await?
            .decode()
    }

    /// Recall one of the account's danmaku (within two minutes). Returns the
    /// server message, which states the recalls left today.
    pub async fn danmaku_recall(&self, cid: i64, dmid: u64) -> Result<String, ClientError> {
        let form = params([("cid", cid.to_string()), ("dmid", dmid.to_string())]);
        let resp = self
            .raw_parse(&self.endpoints().api, "x/dm/recall", Method::Post, &form)
            .await?;
        Ok(resp.message)
    }

    /// `op`: 1 like, 2 cancel.
    pub async fn danmaku_like(&self, cid: i64, dmid: u64, op: i32) -> Result<(), ClientError> {
        let form = params([
            ("oid", cid.to_string()),
            ("dmid", dmid.to_string()),
            ("op", op.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/v2/dm/thumbup/add", Method::Post, &form)
            .await?;
        Ok(())
    }

    // ========== Live ==========

    /// Send a danmaku to a live room. `room_id` must be the real room id.
    pub async fn live_send_danmaku(
        &self,
        room_id: i64,
        color: u32,
        fontsize: i32,
        mode: i32,
        msg: &str,
        bubble: i32,
    ) -> Result<(), ClientError> {
        let form = params([
            ("roomid", room_id.to_string()),
            ("color", color.to_string()),
            ("fontsize", fontsize.to_string()),
            ("mode", mode.to_string()),
            ("msg", msg.to_string()),
            ("bubble", bubble.to_string()),
            ("rnd", Utc::now().timestamp().to_string()),
        ]);
        self.raw_parse(&self.endpoints().live, "msg/send", Method::Post, &form)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Requester for BiliClient {
    async fn raw(
        &self,
        base: &str,
        endpoint: &str,
        method: Method,
        params: &Params,
    ) -> Result<Bytes, ClientError> {
        let cookie = self.auth.cookie_header();
        if method == Method::Post {
            let mut params = params.clone();
            params.insert("csrf".to_string(), self.auth.bili_jct.clone());
            return self
                .base
                .raw(base, endpoint, method, &params, Some(&cookie))
                .await;
        }
        self.base
            .raw(base, endpoint, method, params, Some(&cookie))
            .await
    }
}

pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
