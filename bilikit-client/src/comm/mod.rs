//! Anonymous client

mod audio;
mod client;
mod fav;

pub use client::CommClient;
