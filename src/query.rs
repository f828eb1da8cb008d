//! Depth-first lookups over a parsed tree

use crate::tree::{Attribute, Element};

/// Number of elements named `name` in the subtree, `root` included.
pub fn count_elements_by_name(root: &Element, name: &str) -> usize {
    let own = usize::from(root.name() == name);
    own + root
        .children()
        .iter()
        .map(|child| count_elements_by_name(child, name))
        .sum::<usize>()
}

/// Fills `out` with the elements named `name`, in pre-order, and returns how
/// many were stored. Matches beyond the length of `out` are dropped.
pub fn get_elements_by_name<'a>(
    root: &'a Element,
    name: &str,
    out: &mut [Option<&'a Element>],
) -> usize {
    if out.is_empty() {
        return 0;
    }

    let mut found = 0;
    if root.name() == name {
        if let Some(slot) = out.first_mut() {
            *slot = Some(root);
            found = 1;
        }
    }

    for child in root.children() {
        let Some(rest) = out.get_mut(found..) else {
            break;
        };
        found += get_elements_by_name(child, name, rest);
    }

    found
}

/// Every element named `name`, in pre-order.
pub fn elements_by_name<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_into(root, name, &mut found);
    found
}

fn collect_into<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    if element.name() == name {
        found.push(element);
    }
    for child in element.children() {
        collect_into(child, name, found);
    }
}

/// First attribute of `element` whose name is exactly `name`.
///
/// Use [`Element::attribute_by_prefix`] for prefix matching.
pub fn get_attribute_by_name<'a>(element: &'a Element, name: &str) -> Option<&'a Attribute> {
    element.attribute(name)
}
