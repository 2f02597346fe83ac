//! Property-based tests for IRC message parsing.
//!
//! Uses proptest to generate random IRC components and verify that:
//! 1. Parsing never panics, whatever the input
//! 2. Serialized messages parse back to an equal message (roundtrip)
//! 3. Casemapped strings and masks keep their invariants across random inputs

use proptest::prelude::*;
use slirc_grammar::casemap::RFC1459;
use slirc_grammar::{match_mask, CaseString, Message, MessageTag, Parameters, Prefix, TagList};

// =============================================================================
// STRATEGIES - Generators for valid IRC components
// =============================================================================

/// Valid IRC nickname: starts with letter or special char, followed by
/// letters, digits, or special chars.
fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

/// Valid IRC username (ident): alphanumeric, no spaces or @ or !
fn username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("~?[a-zA-Z][a-zA-Z0-9]{0,9}").expect("valid regex")
}

/// Valid hostname: simplified version
fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]+(\\.[a-z0-9]+)*").expect("valid regex")
}

/// Command word or three-digit numeric, in any case
fn command_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,12}|[0-9]{3}").expect("valid regex")
}

/// A parameter that can be written without the trailing form
fn middle_param_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^ :\r\n\0][^ \r\n\0]{0,20}").expect("valid regex")
}

/// Final parameter text: may be empty, contain spaces, or start with a colon
fn trailing_param_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0]{0,100}").expect("valid regex")
}

/// Tag key: alphanumeric with optional client prefix and vendor
fn tag_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\+?([a-z]{1,10}\\.[a-z]{2,3}/)?[a-zA-Z][a-zA-Z0-9\\-]{0,20}")
        .expect("valid regex")
}

/// Tag value: printable ASCII, including the characters that need escaping
fn tag_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,60}").expect("valid regex")
}

/// Generate a prefix, including the empty `:` marker
fn prefix_strategy() -> impl Strategy<Value = Prefix> {
    prop_oneof![
        // Server name (contains dot)
        prop::string::string_regex("[a-z]+\\.[a-z]+\\.[a-z]+")
            .expect("valid regex")
            .prop_map(|server| Prefix::new(server, "", "")),
        // User prefix: nick!user@host
        (
            nickname_strategy(),
            username_strategy(),
            hostname_strategy()
        )
            .prop_map(|(nick, user, host)| Prefix::new(nick, user, host)),
        // Nick and host only
        (nickname_strategy(), hostname_strategy())
            .prop_map(|(nick, host)| Prefix::new(nick, "", host)),
        Just(Prefix::default()),
    ]
}

/// Generate a tag list with distinct keys
fn tags_strategy() -> impl Strategy<Value = Option<TagList>> {
    prop::option::of(
        prop::collection::hash_map(
            tag_key_strategy(),
            prop::option::of(tag_value_strategy()),
            0..5,
        )
        .prop_map(|tags| {
            let mut list = TagList::new();
            for (key, value) in tags {
                list.insert(match value {
                    Some(v) => MessageTag::with_value(key, v),
                    None => MessageTag::new(key),
                });
            }
            list
        }),
    )
}

/// Generate parameters: some middles and an optional final item
fn params_strategy() -> impl Strategy<Value = Parameters> {
    (
        prop::collection::vec(middle_param_strategy(), 0..5),
        prop::option::of(trailing_param_strategy()),
        any::<bool>(),
    )
        .prop_map(|(mut items, last, force_trail)| {
            items.extend(last);
            if force_trail {
                Parameters::with_trail(items)
            } else {
                Parameters::new(items)
            }
        })
}

/// Generate a complete valid Message
fn message_strategy() -> impl Strategy<Value = Message> {
    (
        tags_strategy(),
        prop::option::of(prefix_strategy()),
        command_strategy(),
        params_strategy(),
    )
        .prop_map(|(tags, prefix, command, params)| Message {
            tags,
            prefix,
            command: command.into(),
            params,
        })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The fundamental roundtrip property: parse → serialize → parse = identity
    #[test]
    fn message_roundtrip(msg in message_strategy()) {
        let serialized = msg.to_string();
        let parsed = Message::parse(&serialized);

        prop_assert_eq!(&msg, &parsed,
            "Roundtrip failed for serialized: {}", serialized);
    }

    /// Prefix roundtrip: any valid prefix can be parsed and re-serialized
    #[test]
    fn prefix_roundtrip(prefix in prefix_strategy()) {
        let serialized = prefix.to_string();
        let parsed = Prefix::parse(&serialized);
        prop_assert_eq!(&prefix, &parsed,
            "Prefix roundtrip failed for: {}", serialized);
    }

    /// Tags should serialize in a way that can be parsed back
    #[test]
    fn tag_in_message_roundtrip(
        key in tag_key_strategy(),
        value in prop::option::of(tag_value_strategy())
    ) {
        let msg = Message::new("PING")
            .with_tag(key.clone(), value.clone())
            .with_params(["test"]);

        let serialized = msg.to_string();
        let parsed = Message::parse(&serialized);

        let parsed_value = parsed.tag_value(&key);
        prop_assert_eq!(Some(value.as_deref().unwrap_or("")), parsed_value,
            "Tag value mismatch for key '{}': expected {:?}, got {:?}",
            key, value, parsed_value);
    }

    /// Parameters keep their items through a roundtrip
    #[test]
    fn params_roundtrip(params in params_strategy()) {
        let serialized = params.to_string();
        let parsed = Parameters::parse(&serialized);
        prop_assert_eq!(params.items(), parsed.items(),
            "Parameter roundtrip failed for: {:?}", serialized);
    }

    /// Parsing should never panic, whatever the input
    #[test]
    fn parse_never_panics(line in "\\PC*") {
        let msg = Message::parse(&line);
        let _ = msg.to_string();
    }

    /// Byte input is decoded lossily and never panics
    #[test]
    fn parse_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        let msg = Message::parse_bytes(&bytes);
        let _ = msg.to_string();
    }

    /// Nickname is extracted from a full prefix
    #[test]
    fn source_nickname_extraction(
        nick in nickname_strategy(),
        user in username_strategy(),
        host in hostname_strategy()
    ) {
        let msg = Message::new("PING").with_prefix(Prefix::new(nick.clone(), user, host));
        prop_assert_eq!(msg.source_nickname(), Some(nick.as_str()));
    }
}

// =============================================================================
// CASEMAP AND MASK PROPERTIES
// =============================================================================

proptest! {
    /// Case conversion never changes what a string compares equal to
    #[test]
    fn casestring_equals_its_case_variants(s in "[ -~]{0,40}") {
        let cs = CaseString::with_casemap(s.clone(), &RFC1459);
        prop_assert_eq!(&cs, &cs.upper());
        prop_assert_eq!(&cs, &cs.lower());
        prop_assert_eq!(&cs, &cs.swapcase());
        prop_assert_eq!(cs.upper().len(), s.len());
    }

    /// Partition pieces always reassemble into the original text
    #[test]
    fn partition_reassembles(s in "[a-zA-Z\\[\\]{}|~^ ]{0,30}", sep in "[a-zA-Z\\[\\]{}]{1,3}") {
        let cs = CaseString::with_casemap(s.clone(), &RFC1459);
        for (head, mid, tail) in [cs.partition(&sep), cs.rpartition(&sep)] {
            prop_assert_eq!(format!("{head}{mid}{tail}"), s.clone());
            prop_assert!(mid.is_empty() || mid == sep.as_str());
        }
    }

    /// A pattern without wildcards matches only itself
    #[test]
    fn literal_mask_matches_itself(s in "[a-zA-Z0-9!@.~\\[\\]{}|^_-]{0,30}") {
        prop_assert!(match_mask(&s, &s));
        prop_assert!(match_mask(&s, "*"));
        let extended = format!("{s}x");
        prop_assert!(!match_mask(&extended, &s));
    }
}

// =============================================================================
// EDGE CASE TESTS
// =============================================================================

proptest! {
    /// Empty final parameter is kept as an item
    #[test]
    fn empty_message_text_roundtrip(target in middle_param_strategy()) {
        let msg = Message::new("PRIVMSG").with_params([target, String::new()]);

        let serialized = msg.to_string();
        prop_assert!(serialized.ends_with(" :"));
        let parsed = Message::parse(&serialized);
        prop_assert_eq!(msg, parsed);
    }

    /// Multiple tags keep their values and order
    #[test]
    fn multiple_tags_roundtrip(tags in tags_strategy().prop_filter("some tags", Option::is_some)) {
        let tags = tags.unwrap_or_default();
        let msg = Message::new("PING").with_tags(tags.clone());

        let parsed = Message::parse(&msg.to_string());
        let parsed_tags = parsed.tags.as_ref().expect("Tags should exist");
        prop_assert_eq!(tags.len(), parsed_tags.len());

        for (ours, theirs) in tags.iter().zip(parsed_tags.iter()) {
            prop_assert_eq!(ours.name(), theirs.name());
            prop_assert_eq!(ours.value(), theirs.value());
        }
    }
}
