// bilikit core
//
// Pure, I/O-free pieces shared by the HTTP clients and the CLI.
//
// Architecture:
// - bilikit-core: identifier codec (av <-> BV), mention control parser
// - bilikit-client: transport, auth, endpoint wrappers (depends on this crate)
// - bilikit: command-line front end

pub mod codec;
pub mod error;
pub mod id;
pub mod mention;

pub use codec::{av_to_bv, bv_to_av};
pub use error::{CodecError, MentionError};
pub use id::VideoId;
pub use mention::{at_uids, mention_ctrl_json, parse_mentions, MentionControl, MENTION_KIND};
