//! Markup fragment parsing.
//!
//! The set-by-markup content path hands the widget a fragment such as
//! `<option value="apple">apple</option><option value="apricot">apricot</option>`.
//! This module parses such fragments into tree nodes. The `id` and `class`
//! attributes map onto the node's id and class list; every other attribute
//! lands in the attribute map; text is unescaped and attached to the
//! enclosing element. Comments and processing instructions are skipped.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use super::tree::{NodeId, ViewTree};

/// Parse a markup fragment into detached elements.
///
/// On success, returns the fragment's top-level elements in order, each
/// already holding its subtree. On failure, every node created so far is
/// removed from the tree again and the error is returned.
pub(crate) fn parse_fragment(tree: &mut ViewTree, fragment: &str) -> Result<Vec<NodeId>> {
    let mut reader = Reader::from_str(fragment);
    reader.config_mut().trim_text(true);

    let mut roots: Vec<NodeId> = Vec::new();
    let mut stack: Vec<NodeId> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let node = element_from(tree, &start);
                attach(tree, &stack, &mut roots, node);
                stack.push(node);
            }
            Ok(Event::Empty(start)) => {
                let node = element_from(tree, &start);
                attach(tree, &stack, &mut roots, node);
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Text(text)) => {
                let content = match text.unescape() {
                    Ok(content) => content,
                    Err(e) => return Err(rollback(tree, roots, e.to_string())),
                };
                match stack.last() {
                    Some(&current) => append_text(tree, current, &content),
                    None => {
                        // Bare text between top-level elements has no element to
                        // live on in this tree model.
                        tracing::trace!(target: "trellis_datalist::view", "skipping top-level text in fragment");
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Comments, CDATA, declarations, PIs: nothing to build.
            Ok(_) => {}
            Err(e) => return Err(rollback(tree, roots, e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(rollback(tree, roots, "unclosed element at end of fragment".to_string()));
    }

    Ok(roots)
}

/// Build an element node from a start tag.
fn element_from(tree: &mut ViewTree, start: &BytesStart<'_>) -> NodeId {
    let tag = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let node = tree.create_element(&tag);

    for attr in start.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match key.as_str() {
            "id" => tree.set_id(node, value),
            "class" => {
                for class in value.split_whitespace() {
                    tree.add_class(node, class);
                }
            }
            _ => tree.set_attribute(node, &key, value),
        }
    }

    node
}

/// Hang a freshly created element under the open element, or record it as a
/// fragment root.
fn attach(tree: &mut ViewTree, stack: &[NodeId], roots: &mut Vec<NodeId>, node: NodeId) {
    match stack.last() {
        Some(&parent) => tree.append_child(parent, node),
        None => roots.push(node),
    }
}

/// Attach text to an element, concatenating with any text already there.
fn append_text(tree: &mut ViewTree, node: NodeId, content: &str) {
    match tree.text(node) {
        Some(existing) => {
            let combined = format!("{existing}{content}");
            tree.set_text(node, combined);
        }
        None => tree.set_text(node, content),
    }
}

/// Remove everything the failed parse created, then wrap the message.
fn rollback(tree: &mut ViewTree, roots: Vec<NodeId>, message: String) -> Error {
    for root in roots {
        tree.remove(root);
    }
    Error::markup(message)
}
