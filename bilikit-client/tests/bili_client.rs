//! Integration tests for the authenticated client
//!
//! Run with: cargo test -p bilikit-client --test bili_client

use std::collections::HashMap;

use bilikit_client::types::{fav_res_type, video_fnval, video_quality, Account, ChargeSource, FavRes};
use bilikit_client::{BiliClient, ClientConfig, ClientError, CookieAuth, Endpoints};
use bytes::Bytes;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const COOKIE: &str = "DedeUserID=777;SESSDATA=sess;DedeUserID__ckMd5=md5";

fn auth() -> CookieAuth {
    CookieAuth {
        dede_user_id: "777".to_string(),
        dede_user_id_ck_md5: "md5".to_string(),
        sessdata: "sess".to_string(),
        bili_jct: "jct".to_string(),
    }
}

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        user_agent: Some("bilikit-test/1.0".to_string()),
        endpoints: Endpoints::all(&server.uri()),
        ..ClientConfig::default()
    }
}

fn client(server: &MockServer) -> BiliClient {
    BiliClient::with_account(auth(), &config(server), None).unwrap()
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "message": "0",
        "ttl": 1,
        "data": data,
    }))
}

fn form(req: &Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&req.body)
        .into_owned()
        .collect()
}

fn at(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

#[tokio::test]
async fn test_new_loads_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/member/web/account"))
        .and(header("cookie", COOKIE))
        .respond_with(ok(json!({
            "mid": 777,
            "uname": "tester",
            "userid": "bili_777",
            "sign": "hello",
            "birthday": "2000-01-01",
            "sex": "保密",
            "nick_free": false,
            "rank": "正式会员",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BiliClient::new(auth(), &config(&server)).await.unwrap();
    let me = client.me().unwrap();
    assert_eq!(me.mid, 777);
    assert_eq!(me.uname, "tester");
}

#[tokio::test]
async fn test_new_fails_when_session_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/member/web/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": -101,
            "message": "账号未登录",
            "ttl": 1,
        })))
        .mount(&server)
        .await;

    let err = BiliClient::new(auth(), &config(&server)).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { code: -101, .. }));
}

#[tokio::test]
async fn test_new_rejects_missing_cookies_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let auth = CookieAuth {
        sessdata: String::new(),
        ..auth()
    };
    let err = BiliClient::new(auth, &config(&server)).await.unwrap_err();
    assert!(matches!(err, ClientError::Auth(_)));
}

#[tokio::test]
async fn test_post_carries_csrf_and_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/x/web-interface/archive/like"))
        .and(header("cookie", COOKIE))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).video_add_like(170_001, true).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["aid"], "170001");
    assert_eq!(body["like"], "1");
    assert_eq!(body["csrf"], "jct");
}

#[tokio::test]
async fn test_get_has_no_csrf() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/web-interface/archive/has/like"))
        .and(query_param("aid", "170001"))
        .and(header("cookie", COOKIE))
        .respond_with(ok(json!(1)))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).video_is_liked(170_001).await.unwrap());

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or_default().contains("csrf"));
}

#[tokio::test]
async fn test_heartbeat_uses_cookie_mid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/x/click-interface/web/heartbeat"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).video_heartbeat(1, 2, 15).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["mid"], "777");
    assert_eq!(body["played_time"], "15");
    assert!(body["start_ts"].parse::<i64>().unwrap() > 0);
}

#[tokio::test]
async fn test_set_favour_joins_folder_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/medialist/gateway/coll/resource/deal"))
        .respond_with(ok(json!({"prompt": true})))
        .expect(1)
        .mount(&server)
        .await;

    let prompt = client(&server)
        .video_set_favour(99, &[1, 2], &[])
        .await
        .unwrap();
    assert!(prompt);

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["rid"], "99");
    assert_eq!(body["type"], "2");
    assert_eq!(body["add_media_ids"], "1,2");
    assert_eq!(body["del_media_ids"], "");
}

#[tokio::test]
async fn test_danmaku_recall_returns_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/x/dm/recall"))
        .and(body_string_contains("dmid=123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "撤回成功，你还有2次撤回机会",
            "ttl": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let msg = client(&server).danmaku_recall(5, 123).await.unwrap();
    assert_eq!(msg, "撤回成功，你还有2次撤回机会");
}

#[tokio::test]
async fn test_create_plain_sends_mentions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dynamic_svr/v1/dynamic_svr/create"))
        .respond_with(ok(json!({"dynamic_id": 5555, "dynamic_id_str": "5555"})))
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server)
        .dyna_create_plain("hi @bob @carol ", &at(&[("bob", 3), ("carol", 9)]))
        .await
        .unwrap();
    assert_eq!(id, 5555);

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["content"], "hi @bob @carol ");
    assert_eq!(body["at_uids"], "3,9");
    assert_eq!(body["type"], "4");
    assert_eq!(body["csrf"], "jct");
    let ctrl: serde_json::Value = serde_json::from_str(&body["ctrl"]).unwrap();
    assert_eq!(
        ctrl,
        json!([
            {"location": 3, "type": 1, "length": 5, "data": "3"},
            {"location": 8, "type": 1, "length": 7, "data": "9"},
        ])
    );
}

#[tokio::test]
async fn test_create_plain_without_mentions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dynamic_svr/v1/dynamic_svr/create"))
        .respond_with(ok(json!({"dynamic_id": 1})))
        .mount(&server)
        .await;

    client(&server)
        .dyna_create_plain("no mentions here", &HashMap::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["at_uids"], "");
    assert_eq!(body["ctrl"], "[]");
}

#[tokio::test]
async fn test_upload_pics_then_create_draw() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/x/dynamic/feed/draw/upload_bfs"))
        .and(header("cookie", COOKIE))
        .respond_with(ok(json!({
            "image_url": "https://i0.hdslb.com/bfs/album/a.jpg",
            "image_width": 640,
            "image_height": 480,
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dynamic_svr/v1/dynamic_svr/create_draw"))
        .respond_with(ok(json!({"dynamic_id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let pics = client
        .dyna_upload_pics(vec![
            Bytes::from_static(b"first image"),
            Bytes::from_static(b"second image"),
        ])
        .await
        .unwrap();
    assert_eq!(pics.len(), 2);
    assert_eq!(pics[0].image_width, 640);

    let id = client
        .dyna_create_draw("look @bob ", &at(&[("bob", 3)]), &pics)
        .await
        .unwrap();
    assert_eq!(id, 42);

    let requests = server.received_requests().await.unwrap();
    let upload = String::from_utf8_lossy(&requests[0].body);
    assert!(upload.contains(r#"name="file_up"; filename="1.jpg""#));
    assert!(upload.contains("first image"));
    assert!(upload.contains(r#"name="csrf""#));
    assert!(upload.contains(r#"name="biz""#));

    let draw = form(&requests[2]);
    assert_eq!(draw["biz"], "3");
    assert_eq!(draw["at_uids"], "3");
    let pictures: serde_json::Value = serde_json::from_str(&draw["pictures"]).unwrap();
    assert_eq!(pictures[1]["img_src"], "https://i0.hdslb.com/bfs/album/a.jpg");
    assert_eq!(pictures[1]["img_height"], 480);
}

#[tokio::test]
async fn test_publish_draft_reports_create_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dynamic_draft/v1/dynamic_draft/publish_now"))
        .and(body_string_contains("draft_id=8"))
        .respond_with(ok(json!({"dynamic_id": 0, "create_ec": 500_404})))
        .mount(&server)
        .await;

    let err = client(&server).dyna_publish_draft(8).await.unwrap_err();
    assert!(matches!(err, ClientError::Publish { code: 500_404 }));
}

#[tokio::test]
async fn test_create_draft_sends_request_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dynamic_draft/v1/dynamic_draft/add_draft"))
        .respond_with(ok(json!({"draft_id": 31})))
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server)
        .dyna_create_draft("@bob later", &at(&[("bob", 3)]), &[], 1_700_000_000)
        .await
        .unwrap();
    assert_eq!(id, 31);

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["publish_time"], "1700000000");
    let request: serde_json::Value = serde_json::from_str(&body["request"]).unwrap();
    assert_eq!(request["content"], "@bob later");
    assert_eq!(request["type"], 0);
    assert_eq!(request["at_uids"], "3");
}

#[tokio::test]
async fn test_with_account_keeps_given_account() {
    let server = MockServer::start().await;
    let me = Account {
        mid: 1,
        uname: "given".to_string(),
        ..Account::default()
    };
    let client = BiliClient::with_account(auth(), &config(&server), Some(me)).unwrap();
    assert_eq!(client.me().unwrap().uname, "given");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fav_get_my_uses_cookie_mid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/v3/fav/folder/created/list-all"))
        .and(query_param("up_mid", "777"))
        .and(header("cookie", COOKIE))
        .respond_with(ok(json!({
            "count": 2,
            "list": [
                {"id": 1_052_622_077_i64, "fid": 10_526_220, "mid": 777, "title": "default", "media_count": 4},
                {"id": 1_052_622_177_i64, "fid": 10_526_221, "mid": 777, "title": "private", "attr": 1},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client(&server).fav_get_my().await.unwrap();
    assert_eq!(list.count, 2);
    assert_eq!(list.list[0].media_count, 4);
    assert_eq!(list.list[1].title, "private");
}

#[tokio::test]
async fn test_fav_move_res_sends_resource_strings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/x/v3/fav/resource/move"))
        .respond_with(ok(json!(0)))
        .expect(1)
        .mount(&server)
        .await;

    let resources = [
        FavRes { id: 21_822_819, kind: fav_res_type::VIDEO },
        FavRes { id: 15_664, kind: fav_res_type::AUDIO },
    ];
    client(&server).fav_move_res(10, 20, &resources).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["src_media_id"], "10");
    assert_eq!(body["tar_media_id"], "20");
    assert_eq!(body["mid"], "777");
    assert_eq!(body["resources"], "21822819:2,15664:12");
    assert_eq!(body["platform"], "web");
    assert_eq!(body["csrf"], "jct");
}

#[tokio::test]
async fn test_fav_add_returns_folder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/x/v3/fav/folder/add"))
        .and(body_string_contains("privacy=1"))
        .respond_with(ok(json!({"id": 1_052_622_277_i64, "title": "mine", "type": 11})))
        .expect(1)
        .mount(&server)
        .await;

    let folder = client(&server).fav_add("mine", "", true, "").await.unwrap();
    assert_eq!(folder.id, 1_052_622_277);
    assert_eq!(folder.kind, 11);
}

#[tokio::test]
async fn test_audio_state_queries_use_main_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/audio/music-service-c/web/coin/audio"))
        .and(query_param("sid", "15664"))
        .and(header("cookie", COOKIE))
        .respond_with(ok(json!(2)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/audio/music-service-c/web/collections/songs-coll"))
        .and(query_param("sid", "15664"))
        .respond_with(ok(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(client.audio_is_coined(15_664).await.unwrap(), 2);
    assert!(client.audio_is_favored(15_664).await.unwrap());
}

#[tokio::test]
async fn test_charge_bp_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/x/ugcpay/web/v2/trade/elec/pay/quick"))
        .respond_with(ok(json!({
            "mid": 777,
            "up_mid": 122541,
            "order_no": "ABCDEFG",
            "bp_num": "5",
            "exp": 5,
            "status": 4,
            "msg": "",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .charge_trade_create_bp(5, 122_541, ChargeSource::Archive, 170_001)
        .await
        .unwrap();
    assert!(result.is_success());
    assert_eq!(result.order_no, "ABCDEFG");

    let requests = server.received_requests().await.unwrap();
    let body = form(&requests[0]);
    assert_eq!(body["bp_num"], "5");
    assert_eq!(body["is_bp_remains_prior"], "true");
    assert_eq!(body["up_mid"], "122541");
    assert_eq!(body["otype"], "archive");
    assert_eq!(body["oid"], "170001");
    assert_eq!(body["csrf"], "jct");
}

#[tokio::test]
async fn test_charge_amount_checked_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .charge_trade_create_qr_code(1, false, 122_541, ChargeSource::Up, 122_541)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_charge_check_qr_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/ugcpay/trade/elec/pay/order/status"))
        .and(query_param("qr_token", "tok"))
        .respond_with(ok(json!({"qr_token": "tok", "mid": 777, "status": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let status = client(&server).charge_trade_check_qr_code("tok").await.unwrap();
    assert_eq!(status.status, 2);
    assert!(status.order_no.is_empty());
}

#[tokio::test]
async fn test_video_play_url_and_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x/player/playurl"))
        .and(query_param("avid", "170001"))
        .and(query_param("cid", "279786"))
        .and(query_param("qn", "112"))
        .and(query_param("fnval", "16"))
        .and(header("cookie", COOKIE))
        .respond_with(ok(json!({
            "quality": 112,
            "accept_quality": [112, 80, 64],
            "dash": {"duration": 209, "video": [{"id": 112, "base_url": "https://v/112.m4s"}]},
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/x/tag/archive/tags"))
        .and(query_param("aid", "170001"))
        .respond_with(ok(json!([{"tag_id": 1, "tag_name": "MV", "liked": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let play = client
        .video_get_play_url(170_001, 279_786, video_quality::Q1080P_PLUS, video_fnval::DASH)
        .await
        .unwrap();
    assert_eq!(play.quality, 112);
    assert_eq!(play.dash.unwrap().video[0].base_url, "https://v/112.m4s");

    let tags = client.video_get_tags(170_001).await.unwrap();
    assert_eq!(tags[0].liked, 1);
}
