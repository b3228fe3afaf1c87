use std::collections::HashMap;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use bilikit_client::{BiliClient, ClientConfig, CommClient, CookieAuth, QrLogin, QrLoginStatus};
use bilikit_core::{av_to_bv, bv_to_av, mention_ctrl_json, VideoId, MENTION_KIND};
use tracing::{debug, info};

use crate::cli::Command;
use crate::config::AppConfig;

pub async fn run(command: Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Av2bv { aid } => println!("{}", av_to_bv(aid)?),
        Command::Bv2av { bvid } => println!("{}", bv_to_av(&bvid)?),
        Command::Mentions { text, at } => println!("{}", mentions(&text, at)?),
        Command::Video { id } => video(&id, &config.client).await?,
        Command::Me => me(config).await?,
        Command::Login { interval } => {
            login(&config.client, Duration::from_secs(interval.max(1))).await?;
        }
    }
    Ok(())
}

fn mentions(text: &str, at: Vec<(String, i64)>) -> Result<String> {
    let at: HashMap<String, i64> = at.into_iter().collect();
    Ok(mention_ctrl_json(MENTION_KIND, text, &at)?)
}

async fn video(id: &VideoId, config: &ClientConfig) -> Result<()> {
    let aid = id.to_aid()?;
    debug!(%id, aid, "fetching video info");
    let client = CommClient::new(config)?;
    let info = client
        .video_get_info(aid)
        .await
        .with_context(|| format!("failed to fetch {id}"))?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

async fn me(config: &AppConfig) -> Result<()> {
    let auth = config
        .auth
        .clone()
        .context("no [auth] cookies configured; run `bilikit login` first")?;
    let client = BiliClient::new(auth, &config.client).await?;
    let nav = client.get_nav_info().await?;
    println!("{}", serde_json::to_string_pretty(&nav)?);
    Ok(())
}

async fn login(config: &ClientConfig, interval: Duration) -> Result<()> {
    let login = QrLogin::new(config)?;
    let (url, key) = login.generate().await?;
    println!("Scan this link as a QR code with the Bilibili app:\n{url}");

    let mut last = None;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => bail!("login cancelled"),
            () = tokio::time::sleep(interval) => {}
        }

        let status = login.poll(&key).await?;
        match &status {
            QrLoginStatus::Success(auth) => {
                info!(uid = %auth.dede_user_id, "logged in");
                println!("{}", auth_toml(auth));
                return Ok(());
            }
            QrLoginStatus::Expired => bail!("QR code expired before it was confirmed"),
            QrLoginStatus::Unknown(code) => bail!("unexpected QR login status {code}"),
            QrLoginStatus::Scanned | QrLoginStatus::NotScanned => {
                if last.as_ref() != Some(&status) {
                    info!(?status, "waiting for confirmation");
                }
            }
        }
        last = Some(status);
    }
}

/// Config snippet holding a fresh session.
fn auth_toml(auth: &CookieAuth) -> String {
    format!(
        "[auth]\ndede_user_id = {:?}\ndede_user_id_ck_md5 = {:?}\nsessdata = {:?}\nbili_jct = {:?}",
        auth.dede_user_id, auth.dede_user_id_ck_md5, auth.sessdata, auth.bili_jct
    )
}
