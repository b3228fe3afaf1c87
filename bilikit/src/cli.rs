use std::path::PathBuf;

use bilikit_core::id::{extract_aid, extract_bvid};
use bilikit_core::VideoId;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bilibili id conversion, mention controls and API calls")]
pub struct Cli {
    /// Path to a config file (TOML, YAML or JSON)
    #[arg(short = 'c', long, env = "BILIKIT_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Log every request and response body
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an av id (`170001` or `av170001`) to its BV id
    Av2bv {
        #[arg(value_parser = parse_aid)]
        aid: i64,
    },

    /// Convert a BV id to its av id
    Bv2av { bvid: String },

    /// Print the mention control JSON for a dynamic's text
    Mentions {
        /// Post text; mentions are written `@name ` with a trailing space
        #[arg(short, long)]
        text: String,

        /// Mentioned user as `name=mid`, repeatable
        #[arg(short, long = "at", value_parser = parse_mention)]
        at: Vec<(String, i64)>,
    },

    /// Show a video's info (av id, BV id or video URL)
    Video {
        #[arg(value_parser = parse_video_id)]
        id: VideoId,
    },

    /// Show the logged-in account (needs `[auth]` in the config)
    Me,

    /// Log in by scanning a QR code with the mobile app
    Login {
        /// Seconds between status polls
        #[arg(long, default_value_t = 2)]
        interval: u64,
    },
}

fn parse_aid(s: &str) -> Result<i64, String> {
    match s.parse::<VideoId>() {
        Ok(VideoId::Aid(aid)) => Ok(aid),
        Ok(VideoId::Bvid(_)) => Err("expected an av id, got a BV id".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_mention(s: &str) -> Result<(String, i64), String> {
    let (name, mid) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=mid, got {s:?}"))?;
    let name = name.trim().trim_start_matches('@');
    if name.is_empty() {
        return Err(format!("empty name in {s:?}"));
    }
    let mid = mid
        .trim()
        .parse()
        .map_err(|e| format!("invalid mid in {s:?}: {e}"))?;
    Ok((name.to_string(), mid))
}

/// A bare id, or the first id found in a URL.
fn parse_video_id(s: &str) -> Result<VideoId, String> {
    if let Ok(id) = s.parse::<VideoId>() {
        return Ok(id);
    }
    extract_bvid(s)
        .map(VideoId::Bvid)
        .or_else(|| extract_aid(s).map(VideoId::Aid))
        .ok_or_else(|| format!("no video id in {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mentions_command() {
        let cli = Cli::try_parse_from([
            "bilikit",
            "mentions",
            "--text",
            "hi @bob ",
            "--at",
            "bob=3",
            "-a",
            "@carol=9",
        ])
        .unwrap();
        let Command::Mentions { text, at } = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(text, "hi @bob ");
        assert_eq!(at, vec![("bob".to_string(), 3), ("carol".to_string(), 9)]);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["bilikit", "-d", "-c", "bilikit.toml", "me"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("bilikit.toml")));
        assert!(matches!(cli.command, Command::Me));
    }

    #[test]
    fn test_parse_aid() {
        assert_eq!(parse_aid("170001"), Ok(170_001));
        assert_eq!(parse_aid("av170001"), Ok(170_001));
        assert!(parse_aid("BV17x411w7KC").is_err());
        assert!(parse_aid("abc").is_err());
    }

    #[test]
    fn test_parse_mention() {
        assert_eq!(parse_mention("bob=3"), Ok(("bob".to_string(), 3)));
        assert_eq!(parse_mention("@bob = 3"), Ok(("bob".to_string(), 3)));
        assert!(parse_mention("bob").is_err());
        assert!(parse_mention("=3").is_err());
        assert!(parse_mention("bob=x").is_err());
    }

    #[test]
    fn test_parse_video_id() {
        assert_eq!(parse_video_id("av170001"), Ok(VideoId::Aid(170_001)));
        assert_eq!(
            parse_video_id("https://www.bilibili.com/video/BV17x411w7KC?p=2"),
            Ok(VideoId::Bvid("BV17x411w7KC".to_string()))
        );
        assert_eq!(
            parse_video_id("https://www.bilibili.com/video/av170001/"),
            Ok(VideoId::Aid(170_001))
        );
        assert!(parse_video_id("https://www.bilibili.com/").is_err());
    }
}
