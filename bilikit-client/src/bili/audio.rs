//! Audio (music) endpoints

use super::client::BiliClient;
use crate::error::ClientError;
use crate::transport::{params, Method, Requester};
use crate::types::{audio_play_url_params, audio_sid, AudioInfo, AudioMyFavLists, AudioPlayUrl};

impl BiliClient {
    /// Song info, with the folders holding it for this account.
    pub async fn audio_get_info(&self, auid: i64) -> Result<AudioInfo, ClientError> {
        self.raw_parse(
            &self.endpoints().main,
            "audio/music-service-c/web/song/info",
            Method::Get,
            &audio_sid(auid),
        )
        .await?
        .decode()
    }

    /// Page `pn` of the song lists the account created.
    pub async fn audio_get_my_fav_lists(
        &self,
        pn: u32,
        ps: u32,
    ) -> Result<AudioMyFavLists, ClientError> {
        let query = params([("pn", pn.to_string()), ("ps", ps.to_string())]);
        self.raw_parse(
            &self.endpoints().main,
            "audio/music-service-c/web/collections/list",
            Method::Get,
            &query,
        )
        .await?
        .decode()
    }

    /// Stream URLs. Lossless needs a member account.
    pub async fn audio_get_play_url(
        &self,
        auid: i64,
        quality: i32,
    ) -> Result<AudioPlayUrl, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "audio/music-service-c/url",
            Method::Get,
            &audio_play_url_params(auid, quality),
        )
        .await?
        .decode()
    }

    pub async fn audio_is_favored(&self, auid: i64) -> Result<bool, ClientError> {
        self.raw_parse(
            &self.endpoints().main,
            "audio/music-service-c/web/collections/songs-coll",
            Method::Get,
            &audio_sid(auid),
        )
        .await?
        .decode()
    }

    /// Coins the account has thrown at a song.
    pub async fn audio_is_coined(&self, auid: i64) -> Result<i32, ClientError> {
        self.raw_parse(
            &self.endpoints().main,
            "audio/music-service-c/web/coin/audio",
            Method::Get,
            &audio_sid(auid),
        )
        .await?
        .decode()
    }
}
