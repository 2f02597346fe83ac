//! IRC numeric reply names.
//!
//! Numerics are three-digit commands sent by servers to report the result
//! of a command. This module maps between the codes and their symbolic
//! names as listed in RFC 1459 and RFC 2812.
//!
//! # Reference
//! - RFC 2812 Section 5: Replies

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

/// A numeric reply: its symbolic name and code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Numeric {
    name: &'static str,
    code: u16,
}

impl Numeric {
    const fn new(name: &'static str, code: u16) -> Self {
        Numeric { name, code }
    }

    /// The symbolic name, e.g. `RPL_WELCOME`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The numeric code, e.g. `1`.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Check if this is an error reply (`ERR_*`).
    pub fn is_error(&self) -> bool {
        self.name.starts_with("ERR_")
    }

    /// Look up a numeric by code.
    pub fn from_code(code: u16) -> Option<Numeric> {
        by_code().get(&code).copied()
    }

    /// Look up a numeric by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Numeric> {
        by_name().get(name.to_ascii_uppercase().as_str()).copied()
    }
}

/// Renders the zero-padded wire form, e.g. `001`.
impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code)
    }
}

/// Error from parsing a numeric code string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseNumericError {
    /// The string was not a number.
    #[error("invalid numeric format")]
    InvalidFormat,
    /// The code is not in the table.
    #[error("unknown numeric: {0:03}")]
    UnknownCode(u16),
}

impl FromStr for Numeric {
    type Err = ParseNumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u16 = s.parse().map_err(|_| ParseNumericError::InvalidFormat)?;
        Numeric::from_code(code).ok_or(ParseNumericError::UnknownCode(code))
    }
}

/// All known numerics in table order.
pub fn numerics() -> &'static [Numeric] {
    NUMERICS
}

fn by_code() -> &'static HashMap<u16, Numeric> {
    static MAP: OnceLock<HashMap<u16, Numeric>> = OnceLock::new();
    MAP.get_or_init(|| NUMERICS.iter().map(|n| (n.code, *n)).collect())
}

fn by_name() -> &'static HashMap<&'static str, Numeric> {
    static MAP: OnceLock<HashMap<&'static str, Numeric>> = OnceLock::new();
    MAP.get_or_init(|| NUMERICS.iter().map(|n| (n.name, *n)).collect())
}

const NUMERICS: &[Numeric] = &[
    Numeric::new("RPL_WELCOME", 1),
    Numeric::new("RPL_YOURHOST", 2),
    Numeric::new("RPL_CREATED", 3),
    Numeric::new("RPL_MYINFO", 4),
    Numeric::new("RPL_BOUNCE", 5),
    Numeric::new("RPL_TRACELINK", 200),
    Numeric::new("RPL_TRACECONNECTING", 201),
    Numeric::new("RPL_TRACEHANDSHAKE", 202),
    Numeric::new("RPL_TRACEUNKNOWN", 203),
    Numeric::new("RPL_TRACEOPERATOR", 204),
    Numeric::new("RPL_TRACEUSER", 205),
    Numeric::new("RPL_TRACESERVER", 206),
    Numeric::new("RPL_TRACESERVICE", 207),
    Numeric::new("RPL_TRACENEWTYPE", 208),
    Numeric::new("RPL_TRACECLASS", 209),
    Numeric::new("RPL_TRACERECONNECT", 210),
    Numeric::new("RPL_STATSLINKINFO", 211),
    Numeric::new("RPL_STATSCOMMANDS", 212),
    Numeric::new("RPL_STATSCLINE", 213),
    Numeric::new("RPL_STATSNLINE", 214),
    Numeric::new("RPL_STATSILINE", 215),
    Numeric::new("RPL_STATSKLINE", 216),
    Numeric::new("RPL_STATSQLINE", 217),
    Numeric::new("RPL_STATSYLINE", 218),
    Numeric::new("RPL_ENDOFSTATS", 219),
    Numeric::new("RPL_UMODEIS", 221),
    Numeric::new("RPL_SERVICEINFO", 231),
    Numeric::new("RPL_ENDOFSERVICES", 232),
    Numeric::new("RPL_SERVICE", 233),
    Numeric::new("RPL_SERVLIST", 234),
    Numeric::new("RPL_SERVLISTEND", 235),
    Numeric::new("RPL_STATSVLINE", 240),
    Numeric::new("RPL_STATSLLINE", 241),
    Numeric::new("RPL_STATSUPTIME", 242),
    Numeric::new("RPL_STATSOLINE", 243),
    Numeric::new("RPL_STATSHLINE", 244),
    Numeric::new("RPL_STATSPING", 246),
    Numeric::new("RPL_STATSBLINE", 247),
    Numeric::new("RPL_STATSDLINE", 250),
    Numeric::new("RPL_LUSERCLIENT", 251),
    Numeric::new("RPL_LUSEROP", 252),
    Numeric::new("RPL_LUSERUNKNOWN", 253),
    Numeric::new("RPL_LUSERCHANNELS", 254),
    Numeric::new("RPL_LUSERME", 255),
    Numeric::new("RPL_ADMINME", 256),
    Numeric::new("RPL_ADMINLOC1", 257),
    Numeric::new("RPL_ADMINLOC2", 258),
    Numeric::new("RPL_ADMINEMAIL", 259),
    Numeric::new("RPL_TRACELOG", 261),
    Numeric::new("RPL_TRACEEND", 262),
    Numeric::new("RPL_TRYAGAIN", 263),
    Numeric::new("RPL_NONE", 300),
    Numeric::new("RPL_AWAY", 301),
    Numeric::new("RPL_USERHOST", 302),
    Numeric::new("RPL_ISON", 303),
    Numeric::new("RPL_UNAWAY", 305),
    Numeric::new("RPL_NOWAWAY", 306),
    Numeric::new("RPL_WHOISUSER", 311),
    Numeric::new("RPL_WHOISSERVER", 312),
    Numeric::new("RPL_WHOISOPERATOR", 313),
    Numeric::new("RPL_WHOWASUSER", 314),
    Numeric::new("RPL_ENDOFWHO", 315),
    Numeric::new("RPL_WHOISCHANOP", 316),
    Numeric::new("RPL_WHOISIDLE", 317),
    Numeric::new("RPL_ENDOFWHOIS", 318),
    Numeric::new("RPL_WHOISCHANNELS", 319),
    Numeric::new("RPL_LISTSTART", 321),
    Numeric::new("RPL_LIST", 322),
    Numeric::new("RPL_LISTEND", 323),
    Numeric::new("RPL_CHANNELMODEIS", 324),
    Numeric::new("RPL_UNIQOPIS", 325),
    Numeric::new("RPL_NOTOPIC", 331),
    Numeric::new("RPL_TOPIC", 332),
    Numeric::new("RPL_INVITING", 341),
    Numeric::new("RPL_SUMMONING", 342),
    Numeric::new("RPL_INVITELIST", 346),
    Numeric::new("RPL_ENDOFINVITELIST", 347),
    Numeric::new("RPL_EXCEPTLIST", 348),
    Numeric::new("RPL_ENDOFEXCEPTLIST", 349),
    Numeric::new("RPL_VERSION", 351),
    Numeric::new("RPL_WHOREPLY", 352),
    Numeric::new("RPL_NAMREPLY", 353),
    Numeric::new("RPL_KILLDONE", 361),
    Numeric::new("RPL_CLOSING", 362),
    Numeric::new("RPL_CLOSEEND", 363),
    Numeric::new("RPL_LINKS", 364),
    Numeric::new("RPL_ENDOFLINKS", 365),
    Numeric::new("RPL_ENDOFNAMES", 366),
    Numeric::new("RPL_BANLIST", 367),
    Numeric::new("RPL_ENDOFBANLIST", 368),
    Numeric::new("RPL_ENDOFWHOWAS", 369),
    Numeric::new("RPL_INFO", 371),
    Numeric::new("RPL_MOTD", 372),
    Numeric::new("RPL_INFOSTART", 373),
    Numeric::new("RPL_ENDOFINFO", 374),
    Numeric::new("RPL_MOTDSTART", 375),
    Numeric::new("RPL_ENDOFMOTD", 376),
    Numeric::new("RPL_YOUREOPER", 381),
    Numeric::new("RPL_REHASHING", 382),
    Numeric::new("RPL_YOURESERVICE", 383),
    Numeric::new("RPL_MYPORTIS", 384),
    Numeric::new("RPL_TIME", 391),
    Numeric::new("RPL_USERSSTART", 392),
    Numeric::new("RPL_USERS", 393),
    Numeric::new("RPL_ENDOFUSERS", 394),
    Numeric::new("RPL_NOUSERS", 395),
    Numeric::new("ERR_NOSUCHNICK", 401),
    Numeric::new("ERR_NOSUCHSERVER", 402),
    Numeric::new("ERR_NOSUCHCHANNEL", 403),
    Numeric::new("ERR_CANNOTSENDTOCHAN", 404),
    Numeric::new("ERR_TOOMANYCHANNELS", 405),
    Numeric::new("ERR_WASNOSUCHNICK", 406),
    Numeric::new("ERR_TOOMANYTARGETS", 407),
    Numeric::new("ERR_NOSUCHSERVICE", 408),
    Numeric::new("ERR_NOORIGIN", 409),
    Numeric::new("ERR_NORECIPIENT", 411),
    Numeric::new("ERR_NOTEXTTOSEND", 412),
    Numeric::new("ERR_NOTOPLEVEL", 413),
    Numeric::new("ERR_WILDTOPLEVEL", 414),
    Numeric::new("ERR_BADMASK", 415),
    Numeric::new("ERR_UNKNOWNCOMMAND", 421),
    Numeric::new("ERR_NOMOTD", 422),
    Numeric::new("ERR_NOADMININFO", 423),
    Numeric::new("ERR_FILEERROR", 424),
    Numeric::new("ERR_NONICKNAMEGIVEN", 431),
    Numeric::new("ERR_ERRONEUSNICKNAME", 432),
    Numeric::new("ERR_NICKNAMEINUSE", 433),
    Numeric::new("ERR_NICKCOLLISION", 436),
    Numeric::new("ERR_UNAVAILRESOURCE", 437),
    Numeric::new("ERR_USERNOTINCHANNEL", 441),
    Numeric::new("ERR_NOTONCHANNEL", 442),
    Numeric::new("ERR_USERONCHANNEL", 443),
    Numeric::new("ERR_NOLOGIN", 444),
    Numeric::new("ERR_SUMMONDISABLED", 445),
    Numeric::new("ERR_USERSDISABLED", 446),
    Numeric::new("ERR_NOTREGISTERED", 451),
    Numeric::new("ERR_NEEDMOREPARAMS", 461),
    Numeric::new("ERR_ALREADYREGISTERED", 462),
    Numeric::new("ERR_NOPERMFORHOST", 463),
    Numeric::new("ERR_PASSWDMISMATCH", 464),
    Numeric::new("ERR_YOUREBANNEDCREEP", 465),
    Numeric::new("ERR_YOUWILLBEBANNED", 466),
    Numeric::new("ERR_KEYSET", 467),
    Numeric::new("ERR_CHANNELISFULL", 471),
    Numeric::new("ERR_UNKNOWNMODE", 472),
    Numeric::new("ERR_INVITEONLYCHAN", 473),
    Numeric::new("ERR_BANNEDFROMCHAN", 474),
    Numeric::new("ERR_BADCHANNELKEY", 475),
    Numeric::new("ERR_BADCHANMASK", 476),
    Numeric::new("ERR_NOCHANMODES", 477),
    Numeric::new("ERR_BANLISTFULL", 478),
    Numeric::new("ERR_NOPRIVILEGES", 481),
    Numeric::new("ERR_CHANOPRIVSNEEDED", 482),
    Numeric::new("ERR_CANTKILLSERVER", 483),
    Numeric::new("ERR_RESTRICTED", 484),
    Numeric::new("ERR_UNIQOPRIVSNEEDED", 485),
    Numeric::new("ERR_NOOPERHOST", 491),
    Numeric::new("ERR_NOSERVICEHOST", 492),
    Numeric::new("ERR_UMODEUNKNOWNFLAG", 501),
    Numeric::new("ERR_USERSDONTMATCH", 502),
];
