//! Authenticated client

mod audio;
mod charge;
mod client;
mod dynamic;
mod fav;

pub use charge::CHARGE_BP_RANGE;
pub use client::BiliClient;
