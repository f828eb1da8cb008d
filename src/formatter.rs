//! Indented rendering of a tree, for diagnostics
//!
//! Each element is one line: indentation, the name, every attribute as
//! `(name=value)`, then the body if there is one. This is not a serialization
//! format and cannot be parsed back.

use std::fmt;

use crate::tree::Element;

/// Configuration options for tree output
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Spaces per nesting level. The root is indented by one level.
    pub indent_spaces: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_spaces: 1 }
    }
}

/// Writes `root` and its subtree to `out` with the default configuration.
pub fn write_tree<W: fmt::Write>(root: &Element, out: &mut W) -> fmt::Result {
    write_tree_with(root, out, &FormatConfig::default())
}

pub fn write_tree_with<W: fmt::Write>(
    root: &Element,
    out: &mut W,
    config: &FormatConfig,
) -> fmt::Result {
    write_element(root, out, config, 0)
}

fn write_element<W: fmt::Write>(
    element: &Element,
    out: &mut W,
    config: &FormatConfig,
    depth: usize,
) -> fmt::Result {
    let indent = " ".repeat((depth + 1) * config.indent_spaces);
    write!(out, "{}{} ", indent, element.name())?;

    for attribute in element.attributes() {
        write!(out, "({}={}) ", attribute.name(), attribute.value())?;
    }
    if let Some(body) = element.body() {
        out.write_str(body)?;
    }
    out.write_char('\n')?;

    for child in element.children() {
        write_element(child, out, config, depth + 1)?;
    }
    Ok(())
}

/// Prints `root` and its subtree to stdout.
pub fn print_tree(root: &Element) {
    print!("{root}");
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, f)
    }
}
