//! Error handling types for the parser
//!
//! A parse either succeeds or fails as a whole. The error only says *why* it
//! failed; no positions are tracked, since the tree is discarded on failure
//! anyway.

use std::fmt;

use thiserror::Error;

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Structure(StructureError),
    Limit(LimitError),
    Encoding,
}

/// The document is not shaped the way the state machine expects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// The document does not start with `<`
    #[error("document does not start with '<'")]
    MissingTagOpen,
    /// A tag or attribute has no name
    #[error("{0} name is empty")]
    EmptyName(&'static str),
    /// A closing tag does not match the element currently open
    #[error("closing tag '{close}' does not match open element '{open}'")]
    TagMismatch { open: String, close: String },
    /// A closing tag was found with no open element above the root
    #[error("closing tag '{0}' has no open element")]
    UnopenedTag(String),
    /// The node on top of the stack was not of the kind the handler needs
    #[error("expected {expected} on top of the node stack")]
    UnexpectedNode { expected: &'static str },
    /// An attribute value was assigned twice
    #[error("attribute '{0}' already has a value")]
    AttributeAlreadySet(String),
    /// Input ended without reaching the end state
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// The end state was reached with elements still open
    #[error("unbalanced document: {depth} nodes left on the stack")]
    Unbalanced { depth: usize },
}

/// A fixed resource limit was exceeded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// A name, body or value is longer than the configured maximum
    #[error("token exceeds maximum length of {max}")]
    TokenTooLong { max: usize },
    /// Nesting (elements plus pending attribute) exceeds the stack capacity
    #[error("node stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },
    /// Something tried to pop an empty stack
    #[error("node stack underflow")]
    StackUnderflow,
    /// A configuration value is out of range
    #[error("invalid limit: {0}")]
    InvalidConfig(&'static str),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    pub fn structure(err: StructureError) -> Self {
        Self::new(ParseErrorKind::Structure(err))
    }

    pub fn limit(err: LimitError) -> Self {
        Self::new(ParseErrorKind::Limit(err))
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl From<StructureError> for ParseError {
    fn from(err: StructureError) -> Self {
        Self::structure(err)
    }
}

impl From<LimitError> for ParseError {
    fn from(err: LimitError) -> Self {
        Self::limit(err)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure(err) => write!(f, "{}", err),
            Self::Limit(err) => write!(f, "{}", err),
            Self::Encoding => write!(f, "token is not valid UTF-8"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.kind)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

pub type Result<T> = std::result::Result<T, ParseError>;
