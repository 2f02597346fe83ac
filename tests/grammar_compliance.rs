//! RFC 1459/2812 and IRCv3 grammar compliance tests.
//!
//! This module tests specific edge cases and requirements from:
//! - RFC 1459: Internet Relay Chat Protocol
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - IRCv3 Message Tags: https://ircv3.net/specs/extensions/message-tags
//!
//! Run with: `cargo test --test grammar_compliance`

use slirc_grammar::{match_mask, Message, MessageTag, Numeric, Parameters, Prefix, TagList};

// =============================================================================
// IRCv3 TAG PARSING
// =============================================================================

mod tag_parsing {
    use super::*;

    #[test]
    fn test_tag_with_escaped_semicolon() {
        let msg = Message::parse("@key=value\\:with\\:semicolons :nick PRIVMSG #ch :hi");
        assert_eq!(msg.tag_value("key"), Some("value;with;semicolons"));
    }

    #[test]
    fn test_tag_with_escaped_spaces() {
        let msg = Message::parse("@key=hello\\sworld :nick PRIVMSG #ch :hi");
        assert_eq!(msg.tag_value("key"), Some("hello world"));
    }

    #[test]
    fn test_tag_without_value() {
        // IRCv3 allows tags without values (flag-style)
        let msg = Message::parse("@+typing :nick PRIVMSG #ch :hi");
        let tag = msg.tags.as_ref().and_then(|t| t.get("+typing")).unwrap();
        assert!(!tag.has_value());
        assert_eq!(tag.value(), "");
    }

    #[test]
    fn test_value_presence_is_not_identity() {
        let bare = MessageTag::parse("a");
        let empty = MessageTag::parse("a=");
        assert_eq!(bare, empty);
        assert_eq!(bare.to_string(), "a");
        assert_eq!(empty.to_string(), "a=");
    }

    #[test]
    fn test_multiple_tags_mixed() {
        let msg = Message::parse("@+typing;time=2023-01-01T00:00:00Z;msgid=abc :nick PRIVMSG #ch :hi");
        let tags = msg.tags.as_ref().unwrap();
        assert!(tags.contains("+typing"));
        assert_eq!(tags.value("time"), Some("2023-01-01T00:00:00Z"));
        assert_eq!(tags.value("msgid"), Some("abc"));
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_client_only_and_vendor_tags() {
        let msg = Message::parse("@+example.com/custom=value;example.com/foo=bar :nick PRIVMSG #ch :hi");
        assert_eq!(msg.tag_value("+example.com/custom"), Some("value"));
        assert_eq!(msg.tag_value("example.com/foo"), Some("bar"));
    }

    #[test]
    fn test_stray_separators() {
        let tags = TagList::parse(";;a=1;;");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.to_string(), "a=1");
    }

    #[test]
    fn test_server_time_tag() {
        let msg = Message::parse("@time=2021-01-01T00:00:00.000Z PING x");
        let time = msg.server_time().unwrap();
        assert_eq!(time.to_rfc3339(), "2021-01-01T00:00:00+00:00");
    }
}

// =============================================================================
// RFC 1459/2812 MESSAGE FORMAT
// =============================================================================

mod message_format {
    use super::*;

    #[test]
    fn test_long_line_parses() {
        // Length limits are a transport concern; the grammar accepts any length
        let long_text = "a".repeat(500);
        let msg = Message::parse(&format!("PRIVMSG #ch :{}", long_text));
        assert_eq!(msg.params.get(1).map(str::len), Some(500));
    }

    #[test]
    fn test_line_terminator_is_not_stripped() {
        // CR-LF framing belongs to the transport layer
        let msg = Message::parse("PING :server\r\n");
        assert_eq!(msg.command, "PING");
        assert_eq!(msg.params, ["server\r\n"]);
    }

    #[test]
    fn test_empty_trailing_parameter() {
        let msg = Message::parse("PRIVMSG #channel :");
        assert_eq!(msg.params, ["#channel", ""]);
        assert!(msg.params.has_trail());
    }

    #[test]
    fn test_trailing_with_spaces() {
        let msg = Message::parse(":nick PRIVMSG #ch :hello world with spaces");
        assert_eq!(msg.params.get(1), Some("hello world with spaces"));
    }

    #[test]
    fn test_trailing_preserves_leading_colon() {
        // Double colon at start of trailing: the second colon is literal
        let msg = Message::parse("PRIVMSG #ch ::starts with colon");
        assert_eq!(msg.params.get(1), Some(":starts with colon"));
    }

    #[test]
    fn test_numeric_command() {
        let msg = Message::parse(":server 001 nick :Welcome to the network");
        let numeric: Numeric = msg.command.as_str().parse().unwrap();
        assert_eq!(numeric.name(), "RPL_WELCOME");
        assert_eq!(numeric.to_string(), msg.command.as_str());
    }

    #[test]
    fn test_many_params() {
        let msg = Message::parse("CMD 1 2 3 4 5 6 7 8 9 10 11 12 13 14 :15th trailing");
        assert_eq!(msg.params.len(), 15);
        assert_eq!(msg.params.get(14), Some("15th trailing"));
    }

    #[test]
    fn test_parameters_force_trailing() {
        assert_eq!(Parameters::new(["a", "b "]).to_string(), "a :b ");
        assert_eq!(Parameters::parse("a :b ").items(), ["a", "b "]);
    }
}

// =============================================================================
// PREFIX PARSING (RFC 2812 Section 2.3.1)
// =============================================================================

mod prefix_parsing {
    use super::*;

    #[test]
    fn test_full_user_prefix() {
        let msg = Message::parse(":nick!user@host.example.com PRIVMSG #ch :hi");
        assert_eq!(msg.prefix, Some(Prefix::new("nick", "user", "host.example.com")));
        assert_eq!(msg.source_nickname(), Some("nick"));
    }

    #[test]
    fn test_nick_at_host_prefix() {
        // Some servers send nick@host (no user)
        let msg = Message::parse(":nick@host.example.com PRIVMSG #ch :hi");
        let prefix = msg.prefix.unwrap();
        assert_eq!(prefix.nick(), "nick");
        assert_eq!(prefix.user(), "");
        assert_eq!(prefix.host(), "host.example.com");
    }

    #[test]
    fn test_server_prefix() {
        let msg = Message::parse(":irc.example.com 001 nick :Welcome");
        assert_eq!(msg.prefix.map(|p| p.mask()), Some("irc.example.com".to_owned()));
    }

    #[test]
    fn test_ipv6_host() {
        let msg = Message::parse(":nick!user@2001:db8::1 PRIVMSG #ch :hi");
        assert_eq!(msg.prefix.unwrap().host(), "2001:db8::1");
    }

    #[test]
    fn test_cloaked_host() {
        let msg = Message::parse(":nick!user@user/nick/cloaked PRIVMSG #ch :hi");
        assert_eq!(msg.prefix.unwrap().host(), "user/nick/cloaked");
    }

    #[test]
    fn test_empty_prefix_marker() {
        let msg = Message::parse(": PING");
        assert_eq!(msg.prefix, Some(Prefix::default()));
        assert!(msg.source_nickname().is_none());
    }
}

// =============================================================================
// UTF-8 HANDLING (IRCv3 implies UTF-8)
// =============================================================================

mod utf8_handling {
    use super::*;

    #[test]
    fn test_utf8_in_message() {
        let msg = Message::parse(":nick PRIVMSG #ch :Hello 世界 🌍");
        assert_eq!(msg.params.get(1), Some("Hello 世界 🌍"));
    }

    #[test]
    fn test_utf8_in_nick() {
        let msg = Message::parse(":Ñoño!user@host PRIVMSG #ch :hi");
        assert_eq!(msg.source_nickname(), Some("Ñoño"));
    }

    #[test]
    fn test_utf8_in_tag_value() {
        let msg = Message::parse("@label=föö :nick PRIVMSG #ch :hi");
        assert_eq!(msg.tag_value("label"), Some("föö"));
    }

    #[test]
    fn test_invalid_utf8_bytes_are_replaced() {
        let msg = Message::parse_bytes(b":nick PRIVMSG #ch :\xff\xfeok");
        assert_eq!(msg.params.get(1), Some("\u{FFFD}\u{FFFD}ok"));
    }
}

// =============================================================================
// EDGE CASES: parsing is total
// =============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_line() {
        let msg = Message::parse("");
        assert!(msg.is_empty());
        assert!(msg.tags.is_none());
        assert!(msg.prefix.is_none());
    }

    #[test]
    fn test_whitespace_only() {
        let msg = Message::parse("   ");
        assert!(msg.is_empty());
    }

    #[test]
    fn test_multiple_consecutive_spaces() {
        // The command is whatever sits after exactly one separator
        let msg = Message::parse(":nick  PRIVMSG  #ch  :hello");
        assert_eq!(msg.command, "");
        assert_eq!(msg.params, ["PRIVMSG", "#ch", "hello"]);
    }

    #[test]
    fn test_very_long_nick() {
        let long_nick = "a".repeat(100);
        let msg = Message::parse(&format!(":{}!user@host PRIVMSG #ch :hi", long_nick));
        assert_eq!(msg.source_nickname(), Some(long_nick.as_str()));
    }

    #[test]
    fn test_trailing_only_colon() {
        let msg = Message::parse("PRIVMSG #ch ::");
        assert_eq!(msg.params.get(1), Some(":"));
    }

    #[test]
    fn test_absent_vs_present_empty() {
        let plain = Message::parse("COMMAND");
        assert!(plain.tags.is_none());
        assert!(plain.prefix.is_none());

        let marked = Message::parse("@ COMMAND");
        assert_eq!(marked.tags, Some(TagList::new()));
        assert_ne!(plain, marked);
    }
}

// =============================================================================
// HOSTMASK MATCHING: `*` and `?` globs over nick!user@host
// =============================================================================

mod mask_matching {
    use super::*;

    fn check(pattern: &str, matching: &[&str], failing: &[&str]) {
        for candidate in matching {
            assert!(match_mask(candidate, pattern), "{pattern} should match {candidate}");
        }
        for candidate in failing {
            assert!(!match_mask(candidate, pattern), "{pattern} should not match {candidate}");
        }
    }

    #[test]
    fn test_host_masks() {
        check(
            "*@127.0.0.1",
            &["coolguy!ab@127.0.0.1", "cooldud3!~bc@127.0.0.1"],
            &["coolguy!ab@127.0.0.5", "cooldud3!~d@124.0.0.1"],
        );
    }

    #[test]
    fn test_nick_prefix_masks() {
        check(
            "cool*@127.0.0.1",
            &["coolguy!ab@127.0.0.1", "cooldud3!~bc@127.0.0.1"],
            &["koolguy!ab@127.0.0.5", "cooodud3!~d@124.0.0.1"],
        );
        check(
            "cool!*@127.0.0.1",
            &["cool!guyab@127.0.0.1", "cool!~dudebc@127.0.0.1"],
            &["coolguy!ab@127.0.0.1", "cooldud3!~d@124.0.0.1"],
        );
    }

    #[test]
    fn test_question_mark() {
        check(
            "cool?*@*",
            &["cool!guyab@127.0.0.1", "cooldud3!~bc@127.0.0.1", "cool!~dudebc@127.0.0.1"],
            &["cool@127.0.0.1"],
        );
        check("n?ck!*@*", &["nick!u@h", "neck!u@h"], &["nck!u@h", "niick!u@h"]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        check(
            "[a](b)+c.d!*@*",
            &["[a](b)+c.d!u@h"],
            &["ab+c.d!u@h", "[a](b)+cxd!u@h"],
        );
        check("a\\b!*@*", &["a\\b!u@h"], &["ab!u@h"]);
    }

    #[test]
    fn test_masks_are_case_sensitive() {
        check("Nick!*@*", &["Nick!u@h"], &["nick!u@h"]);
    }
}
