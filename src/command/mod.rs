//! Command argument metadata.
//!
//! Describes how many parameters a command takes so callers can validate a
//! parsed [`Message`](crate::Message). The parser itself never consults
//! this table.

mod types;

pub use types::{client_command, client_commands, CommandArgument, CommandSpec};
