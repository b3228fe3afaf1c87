//! Favourite folder endpoints

use super::client::{join_ids, BiliClient};
use crate::error::ClientError;
use crate::transport::{params, Method, Params, Requester};
use crate::types::{FavDetail, FavRes, FavResDetail, FavResQuery, FavoritesList};

/// `{id}:{type},...` as the batch endpoints expect
fn join_resources(resources: &[FavRes]) -> String {
    resources
        .iter()
        .map(FavRes::resource)
        .collect::<Vec<_>>()
        .join(",")
}

fn folder_form(title: &str, intro: &str, private: bool, cover: &str) -> Params {
    params([
        ("title", title.to_string()),
        ("intro", intro.to_string()),
        ("privacy", if private { "1" } else { "0" }.to_string()),
        ("cover", cover.to_string()),
    ])
}

impl BiliClient {
    /// Every folder the account created, private ones included.
    pub async fn fav_get_my(&self) -> Result<FavoritesList, ClientError> {
        let list: Option<FavoritesList> = self
            .raw_parse(
                &self.endpoints().api,
                "x/v3/fav/folder/created/list-all",
                Method::Get,
                &params([("up_mid", self.mid().to_string())]),
            )
            .await?
            .decode()?;
        Ok(list.unwrap_or_default())
    }

    /// Folder metadata, including the like and favourite state for this account.
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

    /// Create a folder. `cover` is reviewed by the site; pass `""` for none.
    pub async fn fav_add(
        &self,
        title: &str,
        intro: &str,
        private: bool,
        cover: &str,
    ) -> Result<FavDetail, ClientError> {
        let form = folder_form(title, intro, private, cover);
        self.raw_parse(&self.endpoints().api, "x/v3/fav/folder/add", Method::Post, &form)
            .await?
            .decode()
    }

    pub async fn fav_edit(
        &self,
        media_id: i64,
        title: &str,
        intro: &str,
        private: bool,
        cover: &str,
    ) -> Result<FavDetail, ClientError> {
        let mut form = folder_form(title, intro, private, cover);
        form.insert("media_id".to_string(), media_id.to_string());
        self.raw_parse(&self.endpoints().api, "x/v3/fav/folder/edit", Method::Post, &form)
            .await?
            .decode()
    }

    pub async fn fav_del(&self, media_ids: &[i64]) -> Result<(), ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/v3/fav/folder/del",
            Method::Post,
            &params([("media_ids", join_ids(media_ids))]),
        )
        .await?;
        Ok(())
    }

    /// Ids of everything in a folder.
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

    /// One filtered page of a folder's contents.
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

    pub async fn fav_copy_res(
        &self,
        from: i64,
        to: i64,
        resources: &[FavRes],
    ) -> Result<(), ClientError> {
        self.fav_transfer("x/v3/fav/resource/copy", from, to, resources)
            .await
    }

    pub async fn fav_move_res(
        &self,
        from: i64,
        to: i64,
        resources: &[FavRes],
    ) -> Result<(), ClientError> {
        self.fav_transfer("x/v3/fav/resource/move", from, to, resources)
            .await
    }

    async fn fav_transfer(
        &self,
        endpoint: &str,
        from: i64,
        to: i64,
        resources: &[FavRes],
    ) -> Result<(), ClientError> {
        let form = params([
            ("src_media_id", from.to_string()),
            ("tar_media_id", to.to_string()),
            ("mid", self.mid().to_string()),
            ("resources", join_resources(resources)),
            ("platform", "web".to_string()),
        ]);
        self.raw_parse(&self.endpoints().api, endpoint, Method::Post, &form)
            .await?;
        Ok(())
    }

    pub async fn fav_del_res(&self, media_id: i64, resources: &[FavRes]) -> Result<(), ClientError> {
        let form = params([
            ("media_id", media_id.to_string()),
            ("resources", join_resources(resources)),
        ]);
        self.raw_parse(
            &self.endpoints().api,
            "x/v3/fav/resource/batch-del",
            Method::Post,
            &form,
        )
        .await?;
        Ok(())
    }

    /// Drop entries whose video or audio no longer exists.
    pub async fn fav_clean_res(&self, media_id: i64) -> Result<(), ClientError> {
        self.raw_parse(
            &self.endpoints().api,
            "x/v3/fav/resource/clean",
            Method::Post,
            &params([("media_id", media_id.to_string())]),
        )
        .await?;
        Ok(())
    }
}
