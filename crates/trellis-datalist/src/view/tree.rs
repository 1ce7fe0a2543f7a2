//! The in-memory element tree.

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::error::Result;
use super::markup;
use super::style::{Display, InlineStyle, Positioning};

new_key_type! {
    /// A stable handle to an element in a [`ViewTree`].
    ///
    /// Handles are never reused: once an element is removed, its `NodeId`
    /// goes stale and every tree operation taking it becomes a no-op (reads
    /// return `None`).
    pub struct NodeId;
}

/// A single element.
#[derive(Debug)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    style: InlineStyle,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: HashMap::new(),
            style: InlineStyle::default(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An in-memory element tree.
///
/// Elements are created detached (as roots) and moved into place with
/// [`append_child`](Self::append_child). Lookup, style, class, attribute, and
/// text operations are defensive: a stale [`NodeId`] never panics - reads
/// return `None` and writes do nothing.
///
/// # Example
///
/// ```
/// use trellis_datalist::view::ViewTree;
///
/// let mut tree = ViewTree::new();
/// let list = tree.create_element("div");
/// tree.set_id(list, "suggestions");
/// let entry = tree.create_element("option");
/// tree.set_attribute(entry, "value", "apple");
/// tree.append_child(list, entry);
///
/// assert_eq!(tree.element_by_id("suggestions"), Some(list));
/// assert_eq!(tree.children(list), &[entry]);
/// ```
#[derive(Debug, Default)]
pub struct ViewTree {
    nodes: SlotMap<NodeId, Node>,
    /// Elements with no parent, in creation/attachment order.
    roots: Vec<NodeId>,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // =========================================================================
    // Creation and structure
    // =========================================================================

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self.nodes.insert(Node::new(tag));
        self.roots.push(id);
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Detaches the child from its previous parent (or the root list) first.
    /// Appending an element to itself or into its own subtree is refused.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            tracing::warn!(target: "trellis_datalist::view", "append_child on stale node id");
            return;
        }
        if parent == child || self.is_descendant_of(parent, child) {
            tracing::warn!(target: "trellis_datalist::view", "refusing to append an element into its own subtree");
            return;
        }
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Remove an element and its whole subtree from the tree.
    pub fn remove(&mut self, node: NodeId) {
        if !self.nodes.contains_key(node) {
            return;
        }
        self.detach(node);
        self.drop_subtree(node);
    }

    /// Remove all children of `node` (and their subtrees).
    pub fn remove_children(&mut self, node: NodeId) {
        let Some(n) = self.nodes.get_mut(node) else {
            return;
        };
        let children = std::mem::take(&mut n.children);
        for child in children {
            self.drop_subtree(child);
        }
    }

    /// Unlink `node` from its parent or the root list, keeping it alive.
    fn detach(&mut self, node: NodeId) {
        match self.nodes[node].parent.take() {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|&c| c != node);
                }
            }
            None => self.roots.retain(|&r| r != node),
        }
    }

    /// Drop a detached node and everything below it.
    fn drop_subtree(&mut self, node: NodeId) {
        let Some(n) = self.nodes.remove(node) else {
            return;
        };
        for child in n.children {
            self.drop_subtree(child);
        }
    }

    // =========================================================================
    // Lookup and traversal
    // =========================================================================

    /// Find the first element with the given id, in document order.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        // Depth-first over the root list so duplicated ids resolve the way a
        // document would.
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            let n = &self.nodes[node];
            if n.id.as_deref() == Some(id) {
                return Some(node);
            }
            stack.extend(n.children.iter().rev().copied());
        }
        None
    }

    /// The parent of `node`, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// The children of `node`, in order. Empty for stale ids.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// The sibling element immediately preceding `node` under its parent.
    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = &self.nodes[parent].children;
        let index = siblings.iter().position(|&c| c == node)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    /// Iterate over the ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(node), move |&n| self.parent(n))
    }

    /// Whether `node` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    // =========================================================================
    // Element data
    // =========================================================================

    /// The element's tag name.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.tag.as_str())
    }

    /// Set the element's document id.
    pub fn set_id(&mut self, node: NodeId, id: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.id = Some(id.into());
        }
    }

    /// The element's document id, if set.
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).and_then(|n| n.id.as_deref())
    }

    /// Add a style class to the element. Duplicates are ignored.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(node) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    /// Whether the element carries the given style class.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    /// The element's style classes, in insertion order.
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.nodes.get(node).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.attributes.insert(name.to_string(), value.into());
        }
    }

    /// Read an attribute.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(node)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    /// Set the element's direct text content.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.text = Some(text.into());
        }
    }

    /// The element's direct text content, if any.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).and_then(|n| n.text.as_deref())
    }

    /// Whether the element is an `<input type="text">`.
    pub fn is_text_input(&self, node: NodeId) -> bool {
        self.tag(node) == Some("input") && self.attribute(node, "type") == Some("text")
    }

    // =========================================================================
    // Inline style
    // =========================================================================

    /// Read the element's inline style.
    pub fn style(&self, node: NodeId) -> Option<&InlineStyle> {
        self.nodes.get(node).map(|n| &n.style)
    }

    /// Set the `display` style.
    pub fn set_display(&mut self, node: NodeId, display: Display) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.style.display = Some(display);
        }
    }

    /// Set the `margin-top` style.
    pub fn set_margin_top(&mut self, node: NodeId, margin: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.style.margin_top = Some(margin.into());
        }
    }

    /// Set the `position` style.
    pub fn set_position(&mut self, node: NodeId, position: Positioning) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.style.position = Some(position);
        }
    }

    // =========================================================================
    // Markup
    // =========================================================================

    /// Replace the element's children with the parsed markup fragment.
    ///
    /// The fragment is parsed before anything is removed, so on error the
    /// existing content is left untouched.
    pub fn set_markup(&mut self, node: NodeId, fragment: &str) -> Result<()> {
        let parsed = markup::parse_fragment(self, fragment)?;
        self.remove_children(node);
        for root in parsed {
            self.append_child(node, root);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_append() {
        let mut tree = ViewTree::new();
        let parent = tree.create_element("div");
        let child = tree.create_element("span");
        tree.append_child(parent, child);

        assert_eq!(tree.children(parent), &[child]);
        assert_eq!(tree.parent(child), Some(parent));
        assert_eq!(tree.tag(child), Some("span"));
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_element_by_id_document_order() {
        let mut tree = ViewTree::new();
        let first = tree.create_element("div");
        let nested = tree.create_element("div");
        tree.append_child(first, nested);
        tree.set_id(nested, "dup");
        let second = tree.create_element("div");
        tree.set_id(second, "dup");

        // The nested element comes earlier in document order.
        assert_eq!(tree.element_by_id("dup"), Some(nested));
        assert_eq!(tree.element_by_id("missing"), None);
    }

    #[test]
    fn test_previous_sibling() {
        let mut tree = ViewTree::new();
        let parent = tree.create_element("div");
        let a = tree.create_element("input");
        let b = tree.create_element("div");
        tree.append_child(parent, a);
        tree.append_child(parent, b);

        assert_eq!(tree.previous_sibling(b), Some(a));
        assert_eq!(tree.previous_sibling(a), None);
    }

    #[test]
    fn test_reparenting_detaches() {
        let mut tree = ViewTree::new();
        let old_parent = tree.create_element("div");
        let new_parent = tree.create_element("div");
        let child = tree.create_element("span");
        tree.append_child(old_parent, child);
        tree.append_child(new_parent, child);

        assert!(tree.children(old_parent).is_empty());
        assert_eq!(tree.children(new_parent), &[child]);
        assert_eq!(tree.parent(child), Some(new_parent));
    }

    #[test]
    fn test_append_into_own_subtree_is_refused() {
        let mut tree = ViewTree::new();
        let parent = tree.create_element("div");
        let child = tree.create_element("div");
        tree.append_child(parent, child);

        tree.append_child(child, parent);
        assert_eq!(tree.parent(parent), None);
        assert_eq!(tree.parent(child), Some(parent));

        tree.append_child(parent, parent);
        assert_eq!(tree.children(parent), &[child]);
    }

    #[test]
    fn test_remove_children_drops_subtrees() {
        let mut tree = ViewTree::new();
        let parent = tree.create_element("div");
        let child = tree.create_element("div");
        let grandchild = tree.create_element("span");
        tree.append_child(parent, child);
        tree.append_child(child, grandchild);

        tree.remove_children(parent);
        assert!(tree.children(parent).is_empty());
        assert_eq!(tree.node_count(), 1);
        // Stale handles read as absent.
        assert_eq!(tree.tag(child), None);
        assert_eq!(tree.tag(grandchild), None);
    }

    #[test]
    fn test_stale_id_operations_are_noops() {
        let mut tree = ViewTree::new();
        let node = tree.create_element("div");
        tree.remove(node);

        tree.set_attribute(node, "value", "x");
        tree.add_class(node, "c");
        tree.set_display(node, Display::None);
        assert_eq!(tree.attribute(node, "value"), None);
        assert!(!tree.has_class(node, "c"));
        assert_eq!(tree.style(node), None);
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_classes_and_attributes() {
        let mut tree = ViewTree::new();
        let node = tree.create_element("span");
        tree.add_class(node, "close-datalist");
        tree.add_class(node, "close-datalist"); // duplicate ignored
        tree.set_attribute(node, "data-role", "close");

        assert!(tree.has_class(node, "close-datalist"));
        assert_eq!(tree.classes(node).len(), 1);
        assert_eq!(tree.attribute(node, "data-role"), Some("close"));
    }

    #[test]
    fn test_is_text_input() {
        let mut tree = ViewTree::new();
        let input = tree.create_element("input");
        tree.set_attribute(input, "type", "text");
        let checkbox = tree.create_element("input");
        tree.set_attribute(checkbox, "type", "checkbox");
        let untyped = tree.create_element("input");
        let div = tree.create_element("div");

        assert!(tree.is_text_input(input));
        assert!(!tree.is_text_input(checkbox));
        assert!(!tree.is_text_input(untyped));
        assert!(!tree.is_text_input(div));
    }

    #[test]
    fn test_inline_style_writes() {
        let mut tree = ViewTree::new();
        let node = tree.create_element("div");
        tree.set_display(node, Display::None);
        tree.set_margin_top(node, "2px");
        tree.set_position(node, Positioning::Fixed);

        let style = tree.style(node).unwrap();
        assert_eq!(style.display, Some(Display::None));
        assert_eq!(style.margin_top.as_deref(), Some("2px"));
        assert_eq!(style.position, Some(Positioning::Fixed));
    }

    #[test]
    fn test_ancestors_and_descendants() {
        let mut tree = ViewTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let c = tree.create_element("span");
        tree.append_child(a, b);
        tree.append_child(b, c);

        let chain: Vec<_> = tree.ancestors(c).collect();
        assert_eq!(chain, vec![b, a]);
        assert!(tree.is_descendant_of(c, a));
        assert!(!tree.is_descendant_of(a, c));
        assert!(!tree.is_descendant_of(a, a));
    }
}
