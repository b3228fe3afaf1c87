//! Public audio (music) endpoints

use super::client::CommClient;
use crate::error::ClientError;
use crate::transport::{Method, Requester};
use crate::types::{
    audio_play_url_params, audio_sid, AudioInfo, AudioInfoStat, AudioMember, AudioPlayUrl,
    AudioTag,
};

impl CommClient {
    /// Song info. `collect_ids` stays empty anonymously.
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

    /// Genre tags of a song.
    pub async fn audio_get_tags(&self, auid: i64) -> Result<Vec<AudioTag>, ClientError> {
        self.raw_parse(
            &self.endpoints().main,
            "audio/music-service-c/web/tag/song",
            Method::Get,
            &audio_sid(auid),
        )
        .await?
        .decode()
    }

    /// Credits, grouped by role.
    pub async fn audio_get_members(&self, auid: i64) -> Result<Vec<AudioMember>, ClientError> {
        self.raw_parse(
            &self.endpoints().main,
            "audio/music-service-c/web/member/song",
            Method::Get,
            &audio_sid(auid),
        )
        .await?
        .decode()
    }

    /// Lyrics as lrc text, empty when the song has none.
    pub async fn audio_get_lyric(&self, auid: i64) -> Result<String, ClientError> {
        let lyric: Option<String> = self
            .raw_parse(
                &self.endpoints().main,
                "audio/music-service-c/web/song/lyric",
                Method::Get,
                &audio_sid(auid),
            )
            .await?
            .decode()?;
        Ok(lyric.unwrap_or_default())
    }

    /// Play, favourite, comment and share counts. No coin count; see
    /// [`CommClient::audio_get_info`].
    pub async fn audio_get_stat(&self, auid: i64) -> Result<AudioInfoStat, ClientError> {
        self.raw_parse(
            &self.endpoints().main,
            "audio/music-service-c/web/stat/song",
            Method::Get,
            &audio_sid(auid),
        )
        .await?
        .decode()
    }

    /// Stream URLs, up to 320K anonymously.
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
}
