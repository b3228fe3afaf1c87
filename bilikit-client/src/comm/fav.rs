//! Public favourite folder endpoints
//!
//! Private folders answer with an API error here; read them through
//! [`crate::BiliClient`].

use super::client::CommClient;
use crate::error::ClientError;
use crate::transport::{params, Method, Requester};
use crate::types::{FavDetail, FavRes, FavResDetail, FavResQuery, FavoritesList};

impl CommClient {
    /// Public folders created by `mid`.
    pub async fn fav_get(&self, mid: i64) -> Result<FavoritesList, ClientError> {
        let list: Option<FavoritesList> = self
            .raw_parse(
                &self.endpoints().api,
                "x/v3/fav/folder/created/list-all",
                Method::Get,
                &params([("up_mid", mid.to_string())]),
            )
            .await?
            .decode()?;
        Ok(list.unwrap_or_default())
    }

    /// Folder metadata. `fav_state` and `like_state` stay 0 anonymously.
    pub async fn fav_get_detail(&self, media_id: i64) -> Result<FavDetail, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/v3/fav/folder/info",
            Method::Get,
            &params([("media_id", media_id.to_string())]),
        )
        .await?
        .decode()
    }

    pub async fn fav_get_res(&self, media_id: i64) -> Result<Vec<FavRes>, ClientError> {
        let res: Option<Vec<FavRes>> = self
            .raw_parse(
                &self.endpoints().api,
                "x/v3/fav/resource/ids",
                Method::Get,
                &params([("media_id", media_id.to_string())]),
            )
            .await?
            .decode()?;
        Ok(res.unwrap_or_default())
    }

    pub async fn fav_get_res_detail(&self, query: &FavResQuery) -> Result<FavResDetail, ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/v3/fav/resource/list",
            Method::Get,
            &query.to_params(),
        )
        .await?
        .decode()
    }
}
