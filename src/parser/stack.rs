//! Fixed-capacity stack shared by open elements and pending attributes

use crate::error::{LimitError, ParseError, Result};
use crate::tree::{Attribute, Element};

/// LIFO stack that never grows past the capacity it was created with
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Pushes `item`, failing if the stack is already full.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(ParseError::limit(LimitError::StackOverflow {
                capacity: self.capacity,
            }));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the top item. `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

/// Entry of the parser's node stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Attribute(Attribute),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Element(_) => "element",
            Self::Attribute(_) => "attribute",
        }
    }
}

pub type NodeStack = BoundedStack<Node>;
