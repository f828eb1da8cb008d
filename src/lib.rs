//! lilx: a small DOM-style parser for XML snippets
//!
//! Built for tight memory budgets: token length and nesting depth are fixed
//! before parsing starts and never grow. The input dialect is a subset of XML
//! with elements, attributes, body text and comments (which are dropped). There
//! are no processing instructions, namespaces, CDATA sections or entities.
//!
//! Parsing is driven by a character-level state machine whose transitions are
//! small wildcard patterns (see [`parser::pattern`]).
//!
//! # Examples
//! ```
//! use lilx::{count_elements_by_name, parse, Result};
//!
//! fn example() -> Result<()> {
//!     let root = parse(r#"<people><person id="1"><name>Lionel</name></person></people>"#)?;
//!     assert_eq!(count_elements_by_name(&root, "person"), 1);
//!     let person = &root.children()[0].children()[0];
//!     assert_eq!(person.attribute("id").map(|a| a.value()), Some("1"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod formatter;
pub mod parser;
pub mod query;
pub mod tree;

// Re-exports
pub use error::{LimitError, ParseError, ParseErrorKind, Result, StructureError};
pub use formatter::{print_tree, write_tree, FormatConfig};
pub use parser::{Parser, ParserConfig, QuoteStyle};
pub use query::{count_elements_by_name, elements_by_name, get_attribute_by_name, get_elements_by_name};
pub use tree::{Attribute, Element, ROOT_NAME};

/// Parses `text` into `root` with the default configuration.
///
/// On failure `root` is left empty, so there is nothing to free.
pub fn create_tree(text: &str, root: &mut Element) -> Result<()> {
    Parser::default().create_tree(text, root)
}

/// Parses `text` into a new root element with the default configuration.
pub fn parse(text: &str) -> Result<Element> {
    Parser::default().parse(text)
}

/// Releases everything below `root`. The record itself is kept, empty.
pub fn free_tree(root: &mut Element) {
    root.clear();
}
