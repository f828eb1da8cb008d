#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use lilx::error::{LimitError, ParseErrorKind};
use lilx::parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKEN_LENGTH};
use lilx::{create_tree, parse, Element, Parser, ParserConfig};

/// `depth` elements nested inside each other.
fn nested(depth: usize) -> String {
    let mut text = "<d>".repeat(depth);
    text.push_str(&"</d>".repeat(depth));
    text
}

fn assert_limit(result: lilx::Result<Element>, expected: &LimitError) {
    match result {
        Err(e) => assert_eq!(e.kind(), &ParseErrorKind::Limit(expected.clone())),
        Ok(_) => panic!("expected {expected}"),
    }
}

#[test]
fn test_max_token_length() {
    let fits = format!("<a>{}</a>", "x".repeat(DEFAULT_MAX_TOKEN_LENGTH));
    assert!(parse(&fits).is_ok());

    let too_long = format!("<a>{}</a>", "x".repeat(DEFAULT_MAX_TOKEN_LENGTH + 1));
    assert_limit(
        parse(&too_long),
        &LimitError::TokenTooLong {
            max: DEFAULT_MAX_TOKEN_LENGTH,
        },
    );
}

#[test]
fn test_long_names_and_values() {
    let parser = Parser::new(ParserConfig::default().with_max_token_length(8));
    let expected = LimitError::TokenTooLong { max: 8 };

    assert!(parser.parse("<abcdefgh/>").is_ok());
    assert_limit(parser.parse("<abcdefghi/>"), &expected);
    assert_limit(parser.parse(r#"<a abcdefghi="1"/>"#), &expected);
    assert_limit(parser.parse(r#"<a x="123456789"/>"#), &expected);
    // comments are bounded too
    assert_limit(parser.parse("<a><!-- a long comment --></a>"), &expected);
}

#[test]
fn test_max_depth() {
    // the root takes one slot
    assert!(parse(&nested(DEFAULT_MAX_DEPTH - 1)).is_ok());
    assert_limit(
        parse(&nested(DEFAULT_MAX_DEPTH)),
        &LimitError::StackOverflow {
            capacity: DEFAULT_MAX_DEPTH,
        },
    );
}

#[test]
fn test_pending_attribute_takes_a_slot() {
    let parser = Parser::new(ParserConfig::default().with_max_depth(3));
    assert!(parser.parse(r#"<a><b/></a>"#).is_ok());
    assert!(parser.parse(r#"<a x="1"><b/></a>"#).is_ok());
    assert_limit(
        parser.parse(r#"<a><b x="1"></b></a>"#),
        &LimitError::StackOverflow { capacity: 3 },
    );
}

#[test]
fn test_self_closing_elements_take_no_slot() {
    let parser = Parser::new(ParserConfig::default().with_max_depth(2));
    assert!(parser.parse("<a><b/><c/><d/></a>").is_ok());
}

#[test]
fn test_wide_documents_are_not_depth_limited() {
    let text = format!("<list>{}</list>", "<item>x</item>".repeat(500));
    let root = parse(&text).unwrap();
    assert_eq!(root.children()[0].children().len(), 500);
}

#[test]
fn test_unbounded_limits_parse_cleanly() {
    for config in [
        ParserConfig::default().with_max_token_length(usize::MAX),
        ParserConfig::default().with_max_depth(usize::MAX),
        ParserConfig::default().with_max_depth(usize::MAX / 2),
    ] {
        let root = Parser::new(config).parse("<a/>").unwrap();
        assert_eq!(root.children(), [Element::new("a")]);
    }
}

#[test]
fn test_invalid_config() {
    for config in [
        ParserConfig::default().with_max_depth(0),
        ParserConfig::default().with_max_token_length(0),
    ] {
        let result = Parser::new(config).parse("<a/>");
        assert!(matches!(
            result.map_err(|e| e.kind().clone()),
            Err(ParseErrorKind::Limit(LimitError::InvalidConfig(_)))
        ));
    }
}

#[test]
fn test_limit_failure_leaves_root_empty() {
    let mut root = parse("<keep/>").unwrap();
    assert!(create_tree(&nested(DEFAULT_MAX_DEPTH * 2), &mut root).is_err());
    assert!(root.is_empty());
}

#[test]
fn test_garbage_input_fails_cleanly() {
    for text in ["", "<", "<>", "<<<<", "<a", "<a x", "<a x=\"1\"", "<a></b>", "\u{0}<a/>"] {
        assert!(parse(text).is_err(), "{text:?} should fail");
    }
}
