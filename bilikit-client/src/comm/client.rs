//! Anonymous client for public endpoints

use async_trait::async_trait;
use bilikit_core::bv_to_av;
use bytes::Bytes;
use serde::Deserialize;
use tracing::debug;

use crate::config::{ClientConfig, Endpoints};
use crate::error::ClientError;
use crate::transport::{params, BaseClient, Method, Params, Requester};
use crate::types::{
    play_url_params, ChargeSpaceList, ChargeVideoList, CommentMain, CommentReply,
    FollowingsDetail, GeoInfo, LiveRoomInfoById, LiveRoomInfoByMid, LiveWsConf, OnlineNum,
    RelationStat, SpaceAccInfo, VideoInfo, VideoPage, VideoPlayUrlResult, VideoSingleStat,
    VideoTag,
};

/// Client for public endpoints. Sends no cookies and no csrf token.
#[derive(Debug, Clone)]
pub struct CommClient {
    base: BaseClient,
}

impl CommClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            base: BaseClient::new(config)?,
        })
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

    /// Location of the caller's public IP, as the site sees it.
    pub async fn get_geo_info(&self) -> Result<GeoInfo, ClientError> {
        self.raw_parse(&self.endpoints().api, "x/web-interface/zone", Method::Get, &Params::new())
            .await?
            .decode()
    }

    /// Server time, Unix seconds.
    pub async fn get_unix_now(&self) -> Result<i64, ClientError> {
        #[derive(Deserialize)]
        struct Now {
            #[serde(default)]
            now: i64,
        }

        let now: Now = self
            .raw_parse(&self.endpoints().api, "x/report/click/now", Method::Get, &Params::new())
            .await?
            .decode()?;
        Ok(now.now)
    }

    /// Page `pn` of a user's followings, `ps` per page (max 50).
    pub async fn followings_get_detail(
        &self,
        mid: i64,
        pn: u32,
        ps: u32,
    ) -> Result<FollowingsDetail, ClientError> {
        let query = params([
            ("vmid", mid.to_string()),
            ("pn", pn.to_string()),
            ("ps", ps.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/relation/followings", Method::Get, &query)
            .await?
            .decode()
    }

    /// Following and follower counts. `whisper` and `black` stay 0 here.
    pub async fn get_relation_stat(&self, mid: i64) -> Result<RelationStat, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/relation/stat",
            Method::Get,
            &params([("vmid", mid.to_string())]),
        )
        .await?
        .decode()
    }

    pub async fn video_get_stat(&self, aid: i64) -> Result<VideoSingleStat, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/web-interface/archive/stat",
            Method::Get,
            &params([("aid", aid.to_string())]),
        )
        .await?
        .decode()
    }

    /// Full video info. Login-only videos fail here; use the authenticated client.
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

    /// [`CommClient::video_get_info`] addressed by BV id.
    pub async fn video_get_info_by_bvid(&self, bvid: &str) -> Result<VideoInfo, ClientError> {
        let aid = bv_to_av(bvid)?;
        debug!(bvid, aid, "resolved bvid");
        self.video_get_info(aid).await
    }

    pub async fn video_get_description(&self, aid: i64) -> Result<String, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/web-interface/archive/desc",
            Method::Get,
            &params([("aid", aid.to_string())]),
        )
        .await?
        .decode()
    }

    pub async fn video_get_page_list(&self, aid: i64) -> Result<Vec<VideoPage>, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/player/pagelist",
            Method::Get,
            &params([("aid", aid.to_string())]),
        )
        .await?
        .decode()
    }

    /// Current viewers of part `cid`.
    pub async fn video_get_online_num(&self, aid: i64, cid: i64) -> Result<OnlineNum, ClientError> {
        let query = params([("aid", aid.to_string()), ("cid", cid.to_string())]);
        self.raw_parse(&self.endpoints().api, "x/player/online/total", Method::Get, &query)
            .await?
            .decode()
    }

    /// Tags of a video. `is_atten`, `liked` and `hated` are always 0 anonymously.
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

    /// Stream URLs for part `cid`. Anonymous requests top out at 480P.
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

    /// This month's supporters shown in a user's space.
    pub async fn charge_space_get_list(&self, mid: i64) -> Result<ChargeSpaceList, ClientError> {
        self.raw_parse(
            &self.endpoints().elec,
            "api/query.rank.do",
            Method::Get,
            &params([("mid", mid.to_string())]),
        )
        .await?
        .decode()
    }

    /// Supporters shown under one of the user's videos.
    pub async fn charge_video_get_list(
        &self,
        mid: i64,
        aid: i64,
    ) -> Result<ChargeVideoList, ClientError> {
        let query = params([("mid", mid.to_string()), ("aid", aid.to_string())]);
        self.raw_parse(&self.endpoints().api, "x/web-interface/elec/show", Method::Get, &query)
            .await?
            .decode()
    }

    /// Live room of a user; `None` when the space info carries no room.
    pub async fn live_get_room_info_by_mid(
        &self,
        mid: i64,
    ) -> Result<Option<LiveRoomInfoByMid>, ClientError> {
        let info: SpaceAccInfo = self
            .raw_parse(
                &self.endpoints().api,
                "x/space/acc/info",
                Method::Get,
                &params([("mid", mid.to_string())]),
            )
            .await?
            .decode()?;
        Ok(info.live_room)
    }

    /// Room info by short or real room id.
    pub async fn live_get_room_info_by_id(
        &self,
        room_id: i64,
    ) -> Result<LiveRoomInfoById, ClientError> {
        self.raw_parse(
            &self.endpoints().live,
            "xlive/web-room/v1/index/getRoomPlayInfo",
            Method::Get,
            &params([("room_id", room_id.to_string())]),
        )
        .await?
        .decode()
    }

    pub async fn live_get_ws_conf(&self, room_id: i64) -> Result<LiveWsConf, ClientError> {
        self.raw_parse(
            &self.endpoints().live,
            "room/v1/Danmu/getConf",
            Method::Get,
            &params([("room_id", room_id.to_string())]),
        )
        .await?
        .decode()
    }

    /// Number of comments on `oid` in comment area `kind`.
    pub async fn comment_get_count(&self, oid: i64, kind: i32) -> Result<i64, ClientError> {
        #[derive(Deserialize)]
        struct Count {
            #[serde(default)]
            count: i64,
        }

        let query = params([("oid", oid.to_string()), ("type", kind.to_string())]);
        let count: Count = self
            .raw_parse(&self.endpoints().api, "x/v2/reply/count", Method::Get, &query)
            .await?
            .decode()?;
        Ok(count.count)
    }

    /// One page of a comment area.
    ///
    /// `mode` is one of [`crate::types::comment_mode`]. `next` starts at 0;
    /// pass back [`crate::types::CommentCursor::next`] for the following page.
    pub async fn comment_get_main(
        &self,
        oid: i64,
        kind: i32,
        mode: i32,
        next: i64,
        ps: u32,
    ) -> Result<CommentMain, ClientError> {
        let query = params([
            ("oid", oid.to_string()),
            ("type", kind.to_string()),
            ("mode", mode.to_string()),
            ("next", next.to_string()),
            ("ps", ps.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/v2/reply/main", Method::Get, &query)
            .await?
            .decode()
    }

    /// Root comment `root` with page `pn` of its replies, `ps` per page (1 to 49).
    pub async fn comment_get_reply(
        &self,
        oid: i64,
        kind: i32,
        root: i64,
        pn: u32,
        ps: u32,
    ) -> Result<CommentReply, ClientError> {
        let query = params([
            ("oid", oid.to_string()),
            ("type", kind.to_string()),
            ("root", root.to_string()),
            ("pn", pn.to_string()),
            ("ps", ps.to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, "x/v2/reply/reply", Method::Get, &query)
            .await?
            .decode()
    }
}

#[async_trait]
impl Requester for CommClient {
    async fn raw(
        &self,
        base: &str,
        endpoint: &str,
        method: Method,
        params: &Params,
    ) -> Result<Bytes, ClientError> {
        self.base.raw(base, endpoint, method, params, None).await
    }
}
