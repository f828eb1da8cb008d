//! The state-machine driver
//!
//! The parser walks the input one byte at a time. At every position it asks
//! the transition table whether the remaining input starts a transition out of
//! the current state. If not, the byte is added to the current token. If so,
//! the token is handed to the action of the state being left, the input skips
//! past the matched text and the machine moves to the new state.

pub mod config;
pub mod pattern;
pub mod stack;
pub mod transitions;

mod actions;

use tracing::{instrument, trace, warn};

pub use config::{ParserConfig, QuoteStyle, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKEN_LENGTH};
pub use stack::{BoundedStack, Node, NodeStack};
pub use transitions::{State, Transition, TransitionTable};

use crate::error::{LimitError, ParseError, ParseErrorKind, Result, StructureError};
use crate::tree::Element;

/// Parser with fixed limits. Holds no per-parse state, so one instance can be
/// shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `text` into a fresh root element.
    pub fn parse(&self, text: &str) -> Result<Element> {
        let mut root = Element::root();
        self.create_tree(text, &mut root)?;
        Ok(root)
    }

    /// Parses `text` into `root`, replacing whatever it held.
    ///
    /// The root is named [`ROOT_NAME`](crate::tree::ROOT_NAME) and the
    /// document's top-level elements become its children. On failure the root
    /// is left empty and nothing built so far survives.
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn create_tree(&self, text: &str, root: &mut Element) -> Result<()> {
        root.clear();

        match self.run(text) {
            Ok(tree) => {
                *root = tree;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "parse failed");
                Err(err)
            }
        }
    }

    fn run(&self, text: &str) -> Result<Element> {
        self.config.validate()?;

        let Some(input) = text.as_bytes().strip_prefix(b"<") else {
            return Err(StructureError::MissingTagOpen.into());
        };

        let table = TransitionTable::for_quote_style(self.config.quote_style);
        let max_token_length = self.config.max_token_length;

        let mut stack = NodeStack::new(self.config.max_depth);
        stack.push(Node::Element(Element::root()))?;

        // limits are ceilings; both buffers grow on demand
        let mut token: Vec<u8> = Vec::new();
        let mut state = State::ElementNameStart;
        let mut pos = 0usize;

        while state != State::End {
            let rest = input.get(pos..).unwrap_or_default();
            let Some(&current) = rest.first() else {
                break;
            };

            let Some(transition) = table.next(state, rest) else {
                if token.len() >= max_token_length {
                    return Err(ParseError::limit(LimitError::TokenTooLong {
                        max: max_token_length,
                    })
                    .with_context(format!("in state {state}")));
                }
                token.push(current);
                pos += 1;
                continue;
            };

            let finished = std::str::from_utf8(&token)
                .map_err(|_| ParseError::new(ParseErrorKind::Encoding))?
                .to_owned();
            token.clear();

            trace!(
                from = %state,
                to = %transition.target,
                pattern = transition.pattern,
                token = %finished,
                "transition"
            );

            actions::run(state, &mut stack, finished, &transition)
                .map_err(|err| err.with_context(format!("leaving state {state}")))?;

            pos += transition.consumed;
            state = transition.target;
        }

        if state != State::End {
            return Err(StructureError::UnexpectedEnd.into());
        }
        if stack.len() != 1 {
            return Err(StructureError::Unbalanced { depth: stack.len() }.into());
        }

        match stack.pop() {
            Some(Node::Element(root)) => Ok(root),
            _ => Err(StructureError::UnexpectedNode { expected: "element" }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_parser_is_shareable() {
        assert_send_sync::<Parser>();
        assert_send_sync::<&'static TransitionTable>();
    }

    #[test]
    fn test_single_element() {
        let root = Parser::default().parse("<a>hello</a>").unwrap();
        assert_eq!(root.name(), "root");
        assert_eq!(root.children(), [Element::new("a").with_body("hello")]);
    }

    #[test]
    fn test_missing_tag_open() {
        let err = Parser::default().parse("hello").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Structure(StructureError::MissingTagOpen)
        );
        assert!(Parser::default().parse("").is_err());
        assert!(Parser::default().parse(" <a/>").is_err());
    }

    #[test]
    fn test_input_ends_early() {
        let err = Parser::default().parse("<a>hello").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Structure(StructureError::UnexpectedEnd)
        );
        assert!(Parser::default().parse("<").is_err());
    }

    #[test]
    fn test_unclosed_element_is_unbalanced() {
        let err = Parser::default().parse("<a><b/>").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Structure(StructureError::Unbalanced { depth: 2 })
        );
    }

    #[test]
    fn test_handler_error_carries_state() {
        let err = Parser::default().parse("<a><b></c></a>").unwrap_err();
        assert_eq!(err.context(), Some("leaving state element-name-end"));
    }

    #[test]
    fn test_failed_parse_clears_root() {
        let mut root = Element::root().with_child(Element::new("stale"));
        assert!(Parser::default().create_tree("<a><b></a>", &mut root).is_err());
        assert!(root.is_empty());
    }

    #[test]
    fn test_huge_limits_are_not_preallocated() {
        let config = ParserConfig::default()
            .with_max_token_length(usize::MAX)
            .with_max_depth(usize::MAX);
        let root = Parser::new(config).parse("<a><b>text</b></a>").unwrap();
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let parser = Parser::new(ParserConfig::default().with_max_depth(0));
        let err = parser.parse("<a/>").unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::Limit(LimitError::InvalidConfig(_))
        ));
    }
}
