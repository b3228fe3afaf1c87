//! Video identifier helpers

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::codec::{av_to_bv, bv_to_av};
use crate::error::CodecError;

// Compile-time constant patterns; Regex::new cannot fail on them.
static RE_BVID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BV1[a-zA-Z0-9]{9}").expect("invalid BVID regex"));
static RE_AID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bav(\d+)").expect("invalid AID regex"));

/// Either representation of a video id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoId {
    Aid(i64),
    Bvid(String),
}

impl VideoId {
    /// Numeric av id, decoding a BV id if needed.
    pub fn to_aid(&self) -> Result<i64, CodecError> {
        match self {
            Self::Aid(aid) => Ok(*aid),
            Self::Bvid(bvid) => bv_to_av(bvid),
        }
    }

    /// BV id, encoding an av id if needed.
    pub fn to_bvid(&self) -> Result<String, CodecError> {
        match self {
            Self::Aid(aid) => av_to_bv(*aid),
            Self::Bvid(bvid) => Ok(bvid.clone()),
        }
    }
}

impl FromStr for VideoId {
    type Err = CodecError;

    /// Accepts `av170001`, `170001` or `BV17x411w7KC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("BV") {
            bv_to_av(s)?;
            return Ok(Self::Bvid(s.to_string()));
        }
        let digits = s
            .strip_prefix("av")
            .or_else(|| s.strip_prefix("AV"))
            .unwrap_or(s);
        digits
            .parse::<i64>()
            .map(Self::Aid)
            .map_err(|_| CodecError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aid(aid) => write!(f, "av{aid}"),
            Self::Bvid(bvid) => f.write_str(bvid),
        }
    }
}

/// Extract the first BV id from free text such as a video URL
#[must_use]
pub fn extract_bvid(text: &str) -> Option<String> {
    RE_BVID.find(text).map(|m| m.as_str().to_string())
}

/// Extract the first `av<digits>` id from free text
#[must_use]
pub fn extract_aid(text: &str) -> Option<i64> {
    RE_AID
        .captures(text)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("av170001".parse::<VideoId>().unwrap(), VideoId::Aid(170_001));
        assert_eq!("AV170001".parse::<VideoId>().unwrap(), VideoId::Aid(170_001));
        assert_eq!("170001".parse::<VideoId>().unwrap(), VideoId::Aid(170_001));
        assert_eq!(
            "BV17x411w7KC".parse::<VideoId>().unwrap(),
            VideoId::Bvid("BV17x411w7KC".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("avxyz".parse::<VideoId>(), Err(CodecError::InvalidId(_))));
        assert!(matches!("BV17x4".parse::<VideoId>(), Err(CodecError::TooShort { .. })));
    }

    #[test]
    fn test_conversions() {
        let id = VideoId::Aid(170_001);
        assert_eq!(id.to_bvid().unwrap(), "BV17x411w7KC");
        let id = VideoId::Bvid("BV17x411w7KC".to_string());
        assert_eq!(id.to_aid().unwrap(), 170_001);
    }

    #[test]
    fn test_display() {
        assert_eq!(VideoId::Aid(42).to_string(), "av42");
        assert_eq!(VideoId::Bvid("BV17x411w7KC".into()).to_string(), "BV17x411w7KC");
    }

    #[test]
    fn test_extract_bvid() {
        assert_eq!(
            extract_bvid("https://www.bilibili.com/video/BV17x411w7KC?p=2"),
            Some("BV17x411w7KC".to_string())
        );
        assert_eq!(extract_bvid("https://www.bilibili.com/"), None);
    }

    #[test]
    fn test_extract_aid() {
        assert_eq!(extract_aid("https://www.bilibili.com/video/av170001/"), Some(170_001));
        assert_eq!(extract_aid("nothing here"), None);
    }
}
