//! Tree-building actions run when the state machine leaves a state
//!
//! Each state has exactly one action. It receives the token collected while in
//! that state and the transition that ended it. Open elements and a pending
//! attribute live on the node stack; a node is appended to its parent when it
//! is complete, which keeps children and attributes in document order.

use tracing::{debug, trace};

use super::stack::{Node, NodeStack};
use super::transitions::{State, Transition};
use crate::error::{LimitError, ParseError, Result, StructureError};
use crate::tree::{Attribute, Element};

/// Runs the action for `state`, the state being left.
pub(crate) fn run(
    state: State,
    stack: &mut NodeStack,
    token: String,
    transition: &Transition<'_>,
) -> Result<()> {
    match state {
        State::ElementNameStart => element_name_start(stack, token, transition),
        State::ElementNameEnd => element_name_end(stack, token),
        State::AttributeName => attribute_name(stack, token),
        State::AttributeValue => attribute_value(stack, token, transition),
        State::ElementBody => element_body(stack, token),
        State::Comment => {
            trace!(comment = %token, "discarding comment");
            Ok(())
        }
        State::End => Ok(()),
    }
}

fn element_name_start(stack: &mut NodeStack, name: String, transition: &Transition<'_>) -> Result<()> {
    debug!(%name, pattern = transition.pattern, "element start");
    require_name(&name, "element")?;
    let element = Element::new(name);

    // a self-closing element is already complete
    if transition.is_self_closing() {
        return top_element(stack)
            .map(|parent| parent.append_child(element));
    }

    // make sure children can attach to something before taking a slot
    top_element(stack)?;
    stack.push(Node::Element(element))
}

fn element_name_end(stack: &mut NodeStack, name: String) -> Result<()> {
    debug!(%name, "element end");
    require_name(&name, "closing tag")?;

    let open = match stack.peek() {
        Some(Node::Element(open)) => open,
        Some(Node::Attribute(_)) => return Err(unexpected("element")),
        None => return Err(StructureError::UnopenedTag(name).into()),
    };

    // the closing name only has to be a prefix of the open one
    if !open.name().starts_with(name.as_str()) {
        return Err(StructureError::TagMismatch {
            open: open.name().to_string(),
            close: name,
        }
        .into());
    }

    // the bottom entry is the caller's root, which no tag can close
    if stack.len() == 1 {
        return Err(StructureError::UnopenedTag(name).into());
    }

    close_element(stack)
}

fn attribute_name(stack: &mut NodeStack, name: String) -> Result<()> {
    debug!(%name, "attribute");
    require_name(&name, "attribute")?;
    top_element(stack)?;
    stack.push(Node::Attribute(Attribute::new(name)))
}

fn attribute_value(stack: &mut NodeStack, value: String, transition: &Transition<'_>) -> Result<()> {
    debug!(%value, pattern = transition.pattern, "attribute value");

    match stack.peek_mut() {
        Some(Node::Attribute(attribute)) => {
            if !attribute.set_value(value) {
                return Err(StructureError::AttributeAlreadySet(attribute.name().to_string()).into());
            }
        }
        Some(Node::Element(_)) => return Err(unexpected("attribute")),
        None => return Err(ParseError::limit(LimitError::StackUnderflow)),
    }

    let Some(Node::Attribute(attribute)) = stack.pop() else {
        return Err(ParseError::limit(LimitError::StackUnderflow));
    };
    top_element(stack)?.append_attribute(attribute);

    // `<a x="1"/>` closes the owning element too
    if transition.is_self_closing() {
        if stack.len() == 1 {
            return Err(ParseError::limit(LimitError::StackUnderflow));
        }
        close_element(stack)?;
    }

    Ok(())
}

fn element_body(stack: &mut NodeStack, body: String) -> Result<()> {
    debug!(%body, "element body");
    top_element(stack)?.set_body(body);
    Ok(())
}

/// Pops the open element on top and appends it to the element beneath.
fn close_element(stack: &mut NodeStack) -> Result<()> {
    match stack.pop() {
        Some(Node::Element(element)) => {
            top_element(stack)?.append_child(element);
            Ok(())
        }
        Some(Node::Attribute(_)) => Err(unexpected("element")),
        None => Err(ParseError::limit(LimitError::StackUnderflow)),
    }
}

fn top_element(stack: &mut NodeStack) -> Result<&mut Element> {
    match stack.peek_mut() {
        Some(Node::Element(element)) => Ok(element),
        Some(Node::Attribute(_)) => Err(unexpected("element")),
        None => Err(ParseError::limit(LimitError::StackUnderflow)),
    }
}

fn require_name(name: &str, what: &'static str) -> Result<()> {
    if name.is_empty() {
        return Err(StructureError::EmptyName(what).into());
    }
    Ok(())
}

fn unexpected(expected: &'static str) -> ParseError {
    StructureError::UnexpectedNode { expected }.into()
}
