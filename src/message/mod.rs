//! IRC messages and their component atoms.

mod nom_parser;
mod params;
mod parse;
mod serialize;
pub mod tags;
mod types;

pub use self::params::Parameters;
pub use self::tags::{MessageTag, TagList};
pub use self::types::Message;
