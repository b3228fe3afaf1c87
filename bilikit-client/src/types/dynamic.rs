//! Dynamic (feed post) payloads

use serde::{Deserialize, Serialize};

/// An image uploaded for a dynamic post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynaUploadPic {
    pub image_url: String,
    pub image_width: i32,
    pub image_height: i32,
}

/// Entry of the `pictures` JSON array the draw endpoints take
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DynaPic<'a> {
    img_src: &'a str,
    img_width: i32,
    img_height: i32,
}

/// Serialize uploaded images into the `pictures` field.
pub fn pictures_json(pics: &[DynaUploadPic]) -> Result<String, serde_json::Error> {
    let pics: Vec<DynaPic<'_>> = pics
        .iter()
        .map(|p| DynaPic {
            img_src: &p.image_url,
            img_width: p.image_width,
            img_height: p.image_height,
        })
        .collect();
    serde_json::to_string(&pics)
}

/// Body of the `request` field for scheduled posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftRequest {
    pub biz: i32,
    pub category: i32,
    #[serde(rename = "type")]
    pub kind: i32,
    pub pictures: String,
    pub description: String,
    pub from: String,
    pub content: String,
    pub at_uids: String,
    pub at_control: String,
}

impl DraftRequest {
    /// Draw-style draft from the web editor.
    #[must_use]
    pub fn new(content: &str, pictures: String, at_uids: String, at_control: String) -> Self {
        Self {
            biz: 3,
            category: 3,
            kind: 0,
            pictures,
            description: content.to_string(),
            from: "create.dynamic.web".to_string(),
            content: content.to_string(),
            at_uids,
            at_control,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DynaGetDraft {
    pub drafts: Vec<DynaDraft>,
}

/// A scheduled post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DynaDraft {
    pub draft_id: i64,
    pub uid: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub publish_time: i64,
    /// Post body; shape depends on the post type
    pub request: serde_json::Value,
    pub update_time: i64,
    /// 0 pending
    pub publish_status: i32,
    pub error_code: i64,
    pub error_msg: String,
    pub user_profile: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DynamicIdData {
    pub dynamic_id: i64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DraftIdData {
    pub draft_id: i64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PublishData {
    pub dynamic_id: i64,
    pub create_ec: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pictures_json() {
        let pics = vec![
            DynaUploadPic {
                image_url: "https://i0.hdslb.com/bfs/album/a.jpg".to_string(),
                image_width: 1920,
                image_height: 1080,
            },
            DynaUploadPic {
                image_url: "https://i0.hdslb.com/bfs/album/b.png".to_string(),
                image_width: 64,
                image_height: 64,
            },
        ];
        assert_eq!(
            pictures_json(&pics).unwrap(),
            r#"[{"img_src":"https://i0.hdslb.com/bfs/album/a.jpg","img_width":1920,"img_height":1080},{"img_src":"https://i0.hdslb.com/bfs/album/b.png","img_width":64,"img_height":64}]"#
        );
        assert_eq!(pictures_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_draft_request_shape() {
        let req = DraftRequest::new("hi @bob ", "[]".to_string(), "1".to_string(), "[]".to_string());
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["biz"], 3);
        assert_eq!(json["category"], 3);
        assert_eq!(json["type"], 0);
        assert_eq!(json["from"], "create.dynamic.web");
        assert_eq!(json["description"], "hi @bob ");
        assert_eq!(json["content"], "hi @bob ");
        assert_eq!(json["at_uids"], "1");
    }

    #[test]
    fn test_drafts_deserialize() {
        let drafts: DynaGetDraft = serde_json::from_str(
            r#"{"drafts":[{"draft_id":123,"uid":7,"type":4,"publish_time":1700000000,"request":"{\"content\":\"x\"}","publish_status":0}]}"#,
        )
        .unwrap();
        assert_eq!(drafts.drafts.len(), 1);
        assert_eq!(drafts.drafts[0].draft_id, 123);
        assert_eq!(drafts.drafts[0].kind, 4);
    }
}
