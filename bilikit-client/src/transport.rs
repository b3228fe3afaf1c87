//! HTTP transport shared by both clients
//!
//! Every call goes through [`BaseClient`]: GET parameters become the query
//! string, POST parameters a form body, and the browser-like headers the
//! site expects are always attached. Callers add their own cookie and csrf
//! handling on top through the `cookie` argument and the parameter map.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use rand::seq::IndexedRandom;
use reqwest::header::{HeaderValue, CONTENT_TYPE, COOKIE, ORIGIN, REFERER, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::{ClientConfig, Endpoints};
use crate::error::{body_with_limit, check_response, ClientError};

const SITE: &str = "https://www.bilibili.com";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Desktop browser strings used when no User-Agent is configured
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.4577.63 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.4577.51 Safari/537.36 Edg/93.0.961.27",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.159 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.131 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36",
];

/// Request parameters. Ordered, so encoded bodies are stable.
pub type Params = BTreeMap<String, String>;

/// Build [`Params`] from key/value pairs.
pub fn params<K, V, I>(pairs: I) -> Params
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A file part of a multipart upload
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Form field name
    pub field: String,
    /// File name sent with the part
    pub name: String,
    pub bytes: Bytes,
}

impl FileUpload {
    pub fn new(field: impl Into<String>, name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            field: field.into(),
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// The `{code, message, ttl, data}` envelope every JSON endpoint returns
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub code: i64,
    #[serde(default, alias = "msg")]
    pub message: String,
    #[serde(default)]
    pub ttl: i64,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Response {
    /// Deserialize the `data` payload.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        Ok(serde_json::from_value(self.data)?)
    }
}

/// Decode a raw body into the envelope, failing on a non-zero `code`.
pub fn parse(raw: &[u8]) -> Result<Response, ClientError> {
    let resp: Response = serde_json::from_slice(raw)?;
    if resp.code != 0 {
        return Err(ClientError::Api {
            code: resp.code,
            message: resp.message,
        });
    }
    Ok(resp)
}

/// Issues requests against a base URL and endpoint path
#[async_trait]
pub trait Requester: Send + Sync {
    /// Send a request and return the raw body.
    async fn raw(
        &self,
        base: &str,
        endpoint: &str,
        method: Method,
        params: &Params,
    ) -> Result<Bytes, ClientError>;

    /// Send a request and decode the response envelope.
    async fn raw_parse(
        &self,
        base: &str,
        endpoint: &str,
        method: Method,
        params: &Params,
    ) -> Result<Response, ClientError> {
        let raw = self.raw(base, endpoint, method, params).await?;
        parse(&raw)
    }
}

/// Plain HTTP plumbing without any account state
#[derive(Debug, Clone)]
pub struct BaseClient {
    http: Client,
    user_agent: String,
    debug: bool,
    endpoints: Endpoints,
}

impl BaseClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .build()?;

        let user_agent = config
            .user_agent
            .clone()
            .filter(|ua| !ua.is_empty())
            .unwrap_or_else(random_user_agent);

        Ok(Self {
            http,
            user_agent,
            debug: config.debug,
            endpoints: config.endpoints.clone(),
        })
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    /// Swap the underlying HTTP client, e.g. to route through a proxy.
    pub fn set_http_client(&mut self, http: Client) {
        self.http = http;
    }

    /// Build a request with query or form parameters and the standard headers.
    pub fn build(
        &self,
        base: &str,
        endpoint: &str,
        method: Method,
        params: &Params,
        cookie: Option<&str>,
    ) -> Result<RequestBuilder, ClientError> {
        let url = join_url(base, endpoint)?;
        let req = self.http.request(method.as_reqwest(), url);
        let req = match method {
            Method::Get => req.query(params).header(CONTENT_TYPE, FORM_CONTENT_TYPE),
            Method::Post => req.form(params),
        };
        self.decorate(req, cookie)
    }

    fn decorate(
        &self,
        req: RequestBuilder,
        cookie: Option<&str>,
    ) -> Result<RequestBuilder, ClientError> {
        let ua = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| ClientError::Parse(format!("invalid user agent: {e}")))?;
        let mut req = req
            .header(ORIGIN, SITE)
            .header(REFERER, SITE)
            .header(USER_AGENT, ua);
        if let Some(cookie) = cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::Auth(format!("invalid cookie value: {e}")))?;
            req = req.header(COOKIE, value);
        }
        Ok(req)
    }

    /// Send a built request. The status is checked; the body is left unread.
    pub async fn execute(
        &self,
        req: RequestBuilder,
        params: &Params,
    ) -> Result<reqwest::Response, ClientError> {
        let req = req.build()?;
        if self.debug {
            debug!(method = %req.method(), url = %req.url(), ?params, "bilibili request");
        }
        let resp = self.http.execute(req).await?;
        check_response(resp)
    }

    /// Read a response body under the size cap.
    pub async fn read_body(&self, resp: reqwest::Response) -> Result<Bytes, ClientError> {
        let raw = body_with_limit(resp).await?;
        if self.debug {
            debug!(body = %String::from_utf8_lossy(&raw), "bilibili response");
        }
        Ok(raw)
    }

    /// Send a request and return the raw body.
    pub async fn raw(
        &self,
        base: &str,
        endpoint: &str,
        method: Method,
        params: &Params,
        cookie: Option<&str>,
    ) -> Result<Bytes, ClientError> {
        let req = self.build(base, endpoint, method, params, cookie)?;
        let resp = self.execute(req, params).await?;
        self.read_body(resp).await
    }

    /// Multipart POST: file parts first, then the text fields.
    pub async fn upload(
        &self,
        base: &str,
        endpoint: &str,
        params: &Params,
        files: Vec<FileUpload>,
        cookie: Option<&str>,
    ) -> Result<Bytes, ClientError> {
        let url = join_url(base, endpoint)?;

        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes.to_vec()).file_name(file.name);
            form = form.part(file.field, part);
        }
        for (k, v) in params {
            form = form.text(k.clone(), v.clone());
        }

        let req = self.decorate(self.http.post(url).multipart(form), cookie)?;
        // file contents are never logged
        let resp = self.execute(req, params).await?;
        self.read_body(resp).await
    }
}

fn join_url(base: &str, endpoint: &str) -> Result<Url, ClientError> {
    Ok(Url::parse(base)?.join(endpoint)?)
}

fn random_user_agent() -> String {
    USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
        .to_string()
}
