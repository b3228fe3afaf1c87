// bilikit client
//
// Async HTTP access to the Bilibili web API.
//
// - transport: request shaping, size-capped reads, the response envelope
// - auth: session cookies and QR-code login
// - bili: authenticated client (cookies + csrf on every write)
// - comm: anonymous client for public endpoints
// - types: response payloads

pub mod auth;
pub mod bili;
pub mod comm;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

pub use auth::{CookieAuth, QrLogin, QrLoginStatus};
pub use bili::{BiliClient, CHARGE_BP_RANGE};
pub use comm::CommClient;
pub use config::{ClientConfig, Endpoints};
pub use error::{ClientError, MAX_RESPONSE_SIZE};
pub use transport::{params, BaseClient, FileUpload, Method, Params, Requester, Response};
