//! # slirc-grammar
//!
//! A Rust library for parsing and serializing lines of the IRC wire
//! protocol, with casemap-aware string comparison and hostmask matching.
//!
//! ## Features
//!
//! - Lossless message parsing with IRCv3 tags, prefixes, commands, and parameters
//! - Absent vs. empty tags and prefixes kept apart through a round trip
//! - Trailing-parameter tracking that always re-serializes to the same items
//! - Casemapped strings for `ascii`, `rfc1459` and `strict-rfc1459`
//! - Hostmask glob matching for ban and exception lists
//! - Numeric reply and command argument tables

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing IRC Messages
//!
//! ```rust
//! use slirc_grammar::Message;
//!
//! let raw = "@time=2021-01-01T00:00:00.000Z :nick!user@host PRIVMSG #chan :hello world";
//! let message = Message::parse(raw);
//!
//! assert_eq!(message.tag_value("time"), Some("2021-01-01T00:00:00.000Z"));
//! assert_eq!(message.command, "PRIVMSG");
//! assert_eq!(message.params, ["#chan", "hello world"]);
//! assert_eq!(message.to_string(), raw);
//! ```
//!
//! ### Creating IRC Messages
//!
//! ```rust
//! use slirc_grammar::{Message, Prefix};
//!
//! let msg = Message::new("PRIVMSG")
//!     .with_tag("msgid", Some("abc123"))
//!     .with_prefix(Prefix::new("bot", "bot", "example.com"))
//!     .with_params(["#dev", "Tagged message"]);
//!
//! assert_eq!(msg.to_string(), "@msgid=abc123 :bot!bot@example.com PRIVMSG #dev :Tagged message");
//! ```
//!
//! ### Comparing Identifiers
//!
//! ```rust
//! use slirc_grammar::{CaseString, casemap::RFC1459, match_mask};
//!
//! let nick = CaseString::with_casemap("Dan[away]", &RFC1459);
//! assert_eq!(nick, "dan{AWAY}");
//!
//! assert!(match_mask("dan!~d@host.example.com", "*!*@*.example.com"));
//! ```

pub mod caps;
pub mod case_string;
pub mod casemap;
pub mod command;
pub mod error;
pub mod mask;
pub mod message;
pub mod numeric;
pub mod parse;
pub mod prefix;

pub use self::caps::{Cap, CapList};
pub use self::case_string::CaseString;
pub use self::casemap::{irc_eq, irc_to_lower, Casemap};
pub use self::command::{client_command, CommandArgument, CommandSpec};
pub use self::error::{CaseStringError, GrammarError};
pub use self::mask::{match_mask, Mask};
pub use self::message::{Message, MessageTag, Parameters, TagList};
pub use self::numeric::{Numeric, ParseNumericError};
pub use self::parse::Parseable;
pub use self::prefix::Prefix;

/// The crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
