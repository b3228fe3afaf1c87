//! Dynamic (feed post) endpoints
//!
//! Posts may mention users as `@name ` (note the trailing space). The caller
//! supplies the name to mid mapping; every posting call turns it into the
//! `at_uids` list and the mention control JSON before touching the network,
//! so a mention error never leaves a half-made post behind.

use std::collections::HashMap;

use bilikit_core::{at_uids, mention_ctrl_json, MENTION_KIND};
use bytes::Bytes;
use tracing::debug;

use super::client::BiliClient;
use crate::error::ClientError;
use crate::transport::{params, FileUpload, Method, Params, Requester};
use crate::types::{
    pictures_json, DraftIdData, DraftRequest, DynaGetDraft, DynaUploadPic, DynamicIdData,
    PublishData,
};

/// `(at_uids, control json)` for a post body
fn mention_fields(
    content: &str,
    at: &HashMap<String, i64>,
) -> Result<(String, String), ClientError> {
    let ctrl = mention_ctrl_json(MENTION_KIND, content, at)?;
    Ok((at_uids(at), ctrl))
}

/// The `request` field of the draft endpoints
fn draft_request(
    content: &str,
    at: &HashMap<String, i64>,
    pics: &[DynaUploadPic],
) -> Result<String, ClientError> {
    let (uids, ctrl) = mention_fields(content, at)?;
    let pictures = pictures_json(pics)?;
    Ok(serde_json::to_string(&DraftRequest::new(content, pictures, uids, ctrl))?)
}

impl BiliClient {
    /// Create a text post. Returns the new dynamic id.
    ///
    /// Emotes use their `[name]` escapes, topics are wrapped as `#topic#`.
    pub async fn dyna_create_plain(
        &self,
        content: &str,
        at: &HashMap<String, i64>,
    ) -> Result<i64, ClientError> {
        let (uids, ctrl) = mention_fields(content, at)?;
        let form = params([
            ("dynamic_id", "0".to_string()),
            ("type", "4".to_string()),
            ("rid", "0".to_string()),
            ("content", content.to_string()),
            ("at_uids", uids),
            ("ctrl", ctrl),
        ]);
        let data: DynamicIdData = self
            .raw_parse(
                &self.endpoints().vc,
                "dynamic_svr/v1/dynamic_svr/create",
                Method::Post,
                &form,
            )
            .await?
            .decode()?;
        debug!(dynamic_id = data.dynamic_id, "created dynamic");
        Ok(data.dynamic_id)
    }

    /// Like (`true`) or un-like a post.
    pub async fn dyna_like(&self, dynamic_id: i64, like: bool) -> Result<(), ClientError> {
        let form = params([
            ("dynamic_id", dynamic_id.to_string()),
            ("up", if like { "1" } else { "2" }.to_string()),
        ]);
        self.raw_parse(
            &self.endpoints().vc,
            "dynamic_like/v1/dynamic_like/thumb",
            Method::Post,
            &form,
        )
        .await?;
        Ok(())
    }

    /// Upload images for a draw post, one request per image.
    pub async fn dyna_upload_pics(&self, pics: Vec<Bytes>) -> Result<Vec<DynaUploadPic>, ClientError> {
        let form = params([("biz", "dyn"), ("category", "daily")]);
        let mut uploaded = Vec::with_capacity(pics.len());
        for pic in pics {
            // the server sniffs the real type from the bytes
            let file = FileUpload::new("file_up", "1.jpg", pic);
            let pic: DynaUploadPic = self
                .upload_parse(
                    &self.endpoints().api,
                    "x/dynamic/feed/draw/upload_bfs",
                    &form,
                    vec![file],
                )
                .await?
                .decode()?;
            uploaded.push(pic);
        }
        Ok(uploaded)
    }

    /// Create a post with images from [`BiliClient::dyna_upload_pics`].
    /// Returns the new dynamic id.
    pub async fn dyna_create_draw(
        &self,
        content: &str,
        at: &HashMap<String, i64>,
        pics: &[DynaUploadPic],
    ) -> Result<i64, ClientError> {
        let (uids, ctrl) = mention_fields(content, at)?;
        let form = params([
            ("biz", "3".to_string()),
            ("category", "3".to_string()),
            ("type", "0".to_string()),
            ("pictures", pictures_json(pics)?),
            ("content", content.to_string()),
            ("at_uids", uids),
            ("at_control", ctrl),
        ]);
        let data: DynamicIdData = self
            .raw_parse(
                &self.endpoints().vc,
                "dynamic_svr/v1/dynamic_svr/create_draw",
                Method::Post,
                &form,
            )
            .await?
            .decode()?;
        Ok(data.dynamic_id)
    }

    /// Repost `dynamic_id` with a comment.
    pub async fn dyna_repost(
        &self,
        dynamic_id: i64,
        content: &str,
        at: &HashMap<String, i64>,
    ) -> Result<(), ClientError> {
        let (uids, ctrl) = mention_fields(content, at)?;
        let form = params([
            ("dynamic_id", dynamic_id.to_string()),
            ("content", content.to_string()),
            ("at_uids", uids),
            ("ctrl", ctrl),
        ]);
        self.raw_parse(
            &self.endpoints().vc,
            "dynamic_repost/v1/dynamic_repost/repost",
            Method::Post,
            &form,
        )
        .await?;
        Ok(())
    }

    pub async fn dyna_del(&self, dynamic_id: i64) -> Result<(), ClientError> {
        self.raw_parse(
            &self.endpoints().vc,
            "dynamic_svr/v1/dynamic_svr/rm_dynamic",
            Method::Post,
            &params([("dynamic_id", dynamic_id.to_string())]),
        )
        .await?;
        Ok(())
    }

    /// Schedule a post for `publish_time` (Unix seconds). Returns the draft id.
    pub async fn dyna_create_draft(
        &self,
        content: &str,
        at: &HashMap<String, i64>,
        pics: &[DynaUploadPic],
        publish_time: i64,
    ) -> Result<i64, ClientError> {
        let form = params([
            ("type", "4".to_string()),
            ("publish_time", publish_time.to_string()),
            ("request", draft_request(content, at, pics)?),
        ]);
        let data: DraftIdData = self
            .raw_parse(
                &self.endpoints().vc,
                "dynamic_draft/v1/dynamic_draft/add_draft",
                Method::Post,
                &form,
            )
            .await?
            .decode()?;
        debug!(draft_id = data.draft_id, publish_time, "scheduled dynamic");
        Ok(data.draft_id)
    }

    /// Replace the content and time of a scheduled post.
    pub async fn dyna_modify_draft(
        &self,
        draft_id: i64,
        content: &str,
        at: &HashMap<String, i64>,
        pics: &[DynaUploadPic],
        publish_time: i64,
    ) -> Result<(), ClientError> {
        let form = params([
            ("draft_id", draft_id.to_string()),
            ("type", "2".to_string()),
            ("publish_time", publish_time.to_string()),
            ("request", draft_request(content, at, pics)?),
        ]);
        self.raw_parse(
            &self.endpoints().vc,
            "dynamic_draft/v1/dynamic_draft/modify_draft",
            Method::Post,
            &form,
        )
        .await?;
        Ok(())
    }

    pub async fn dyna_del_draft(&self, draft_id: i64) -> Result<(), ClientError> {
        self.raw_parse(
            &self.endpoints().vc,
            "dynamic_draft/v1/dynamic_draft/rm_draft",
            Method::Post,
            &params([("draft_id", draft_id.to_string())]),
        )
        .await?;
        Ok(())
    }

    /// Publish a scheduled post now. Returns the new dynamic id.
    ///
    /// A successful envelope can still carry a publish failure in
    /// `create_ec`; that surfaces as [`ClientError::Publish`].
    pub async fn dyna_publish_draft(&self, draft_id: i64) -> Result<i64, ClientError> {
        let data: PublishData = self
            .raw_parse(
                &self.endpoints().vc,
                "dynamic_draft/v1/dynamic_draft/publish_now",
                Method::Post,
                &params([("draft_id", draft_id.to_string())]),
            )
            .await?
            .decode()?;
        if data.create_ec != 0 {
            return Err(ClientError::Publish { code: data.create_ec });
        }
        Ok(data.dynamic_id)
    }

    /// All scheduled posts of the account.
    pub async fn dyna_get_drafts(&self) -> Result<DynaGetDraft, ClientError> {
        self.raw_parse(
            &self.endpoints().vc,
            "dynamic_draft/v1/dynamic_draft/get_drafts",
            Method::Get,
            &Params::new(),
        )
        .await?
        .decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_mention_fields() {
        let (uids, ctrl) = mention_fields("hi @bob @carol ", &at(&[("carol", 9), ("bob", 3)])).unwrap();
        assert_eq!(uids, "3,9");
        assert_eq!(
            ctrl,
            r#"[{"location":3,"type":1,"length":5,"data":"3"},{"location":8,"type":1,"length":7,"data":"9"}]"#
        );
    }

    #[test]
    fn test_mention_fields_without_mentions() {
        let (uids, ctrl) = mention_fields("plain", &HashMap::new()).unwrap();
        assert_eq!(uids, "");
        assert_eq!(ctrl, "[]");
    }

    #[test]
    fn test_draft_request_embeds_controls() {
        let json = draft_request("@bob hi", &at(&[("bob", 3)]), &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["from"], "create.dynamic.web");
        assert_eq!(value["pictures"], "[]");
        assert_eq!(value["at_uids"], "3");
        assert_eq!(
            value["at_control"],
            r#"[{"location":0,"type":1,"length":5,"data":"3"}]"#
        );
    }
}
