//! Cookie credentials and QR-code login

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{params, parse, BaseClient, Method, Params};

pub const COOKIE_SESSDATA: &str = "SESSDATA";
pub const COOKIE_BILI_JCT: &str = "bili_jct";
pub const COOKIE_DEDE_USER_ID: &str = "DedeUserID";
pub const COOKIE_DEDE_USER_ID_CK_MD5: &str = "DedeUserID__ckMd5";

/// Login cookies of a web session
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieAuth {
    /// `DedeUserID`
    pub dede_user_id: String,
    /// `DedeUserID__ckMd5`
    pub dede_user_id_ck_md5: String,
    /// `SESSDATA`
    pub sessdata: String,
    /// `bili_jct`, doubles as the csrf token
    pub bili_jct: String,
}

impl CookieAuth {
    /// Value of the `Cookie` header sent with every authenticated request.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        format!(
            "{COOKIE_DEDE_USER_ID}={};{COOKIE_SESSDATA}={};{COOKIE_DEDE_USER_ID_CK_MD5}={}",
            self.dede_user_id, self.sessdata, self.dede_user_id_ck_md5
        )
    }

    /// Pick the session cookies out of a name/value map; unknown names are ignored.
    #[must_use]
    pub fn from_cookies(cookies: &HashMap<String, String>) -> Self {
        let get = |name: &str| cookies.get(name).cloned().unwrap_or_default();
        Self {
            dede_user_id: get(COOKIE_DEDE_USER_ID),
            dede_user_id_ck_md5: get(COOKIE_DEDE_USER_ID_CK_MD5),
            sessdata: get(COOKIE_SESSDATA),
            bili_jct: get(COOKIE_BILI_JCT),
        }
    }

    /// Fail unless the cookies needed for authenticated calls are present.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.sessdata.is_empty() {
            return Err(ClientError::Auth("SESSDATA is empty".to_string()));
        }
        if self.bili_jct.is_empty() {
            return Err(ClientError::Auth("bili_jct is empty".to_string()));
        }
        Ok(())
    }
}

// Keep session secrets out of logs.
impl std::fmt::Debug for CookieAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieAuth")
            .field("dede_user_id", &self.dede_user_id)
            .field("sessdata", &"<redacted>")
            .field("bili_jct", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Result of one QR-code poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrLoginStatus {
    /// Confirmed on the phone; session cookies were issued
    Success(CookieAuth),
    /// Scanned, waiting for confirmation
    Scanned,
    NotScanned,
    Expired,
    Unknown(i64),
}

impl QrLoginStatus {
    const SUCCESS: i64 = 0;
    const EXPIRED: i64 = 86038;
    const SCANNED: i64 = 86090;
    const NOT_SCANNED: i64 = 86101;

    /// Whether polling should stop.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Expired | Self::Unknown(_))
    }
}

#[derive(Debug, Deserialize)]
struct QrCodeData {
    url: String,
    qrcode_key: String,
}

#[derive(Debug, Deserialize)]
struct QrPollData {
    code: i64,
    #[serde(default)]
    #[allow(dead_code)]
    message: String,
}

/// QR-code login against the passport endpoints
#[derive(Debug, Clone)]
pub struct QrLogin {
    base: BaseClient,
}

impl QrLogin {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            base: BaseClient::new(config)?,
        })
    }

    /// Request a login QR code. Returns the URL to encode and the key to poll with.
    pub async fn generate(&self) -> Result<(String, String), ClientError> {
        let raw = self
            .base
            .raw(
                &self.base.endpoints().passport,
                "x/passport-login/web/qrcode/generate",
                Method::Get,
                &Params::new(),
                None,
            )
            .await?;
        let data: QrCodeData = parse(&raw)?.decode()?;
        debug!(key = %data.qrcode_key, "generated login qr code");
        Ok((data.url, data.qrcode_key))
    }

    /// Check the state of a QR code returned by [`QrLogin::generate`].
    pub async fn poll(&self, key: &str) -> Result<QrLoginStatus, ClientError> {
        let query = params([("qrcode_key", key)]);
        let req = self.base.build(
            &self.base.endpoints().passport,
            "x/passport-login/web/qrcode/poll",
            Method::Get,
            &query,
            None,
        )?;
        let resp = self.base.execute(req, &query).await?;

        let cookies: HashMap<String, String> = resp
            .cookies()
            .filter(|c| {
                matches!(
                    c.name(),
                    COOKIE_SESSDATA | COOKIE_BILI_JCT | COOKIE_DEDE_USER_ID | COOKIE_DEDE_USER_ID_CK_MD5
                )
            })
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();

        let raw = self.base.read_body(resp).await?;
        let data: QrPollData = parse(&raw)?.decode()?;

        let status = match data.code {
            QrLoginStatus::SUCCESS => {
                let auth = CookieAuth::from_cookies(&cookies);
                auth.validate()?;
                info!(uid = %auth.dede_user_id, "qr code login succeeded");
                QrLoginStatus::Success(auth)
            }
            QrLoginStatus::EXPIRED => QrLoginStatus::Expired,
            QrLoginStatus::SCANNED => QrLoginStatus::Scanned,
            QrLoginStatus::NOT_SCANNED => QrLoginStatus::NotScanned,
            code => QrLoginStatus::Unknown(code),
        };
        Ok(status)
    }
}
