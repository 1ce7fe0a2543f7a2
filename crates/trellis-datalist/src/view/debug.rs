//! Debug visualization for view trees.
//!
//! [`ViewTreeDebug`] renders a subtree in a human-readable form for logs and
//! test failure output:
//!
//! ```text
//! div #datalist-autocomplete .datalist-outer
//! ├── div .datalist-header
//! │   └── span .close-datalist .html-entity
//! └── div .datalist
//! ```

use std::fmt::{self, Write as FmtWrite};

use super::tree::{NodeId, ViewTree};

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Debug utility for rendering a view subtree.
#[derive(Debug, Clone, Copy)]
pub struct ViewTreeDebug<'a> {
    tree: &'a ViewTree,
    root: NodeId,
    style: TreeStyle,
}

impl<'a> ViewTreeDebug<'a> {
    /// Create a visualizer for the subtree rooted at `root`.
    pub fn new(tree: &'a ViewTree, root: NodeId) -> Self {
        Self {
            tree,
            root,
            style: TreeStyle::default(),
        }
    }

    /// Select the branch character style.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the subtree into a string.
    pub fn format_subtree(&self) -> String {
        let mut output = String::new();
        self.format_node(self.root, "", "", &mut output);
        output
    }

    fn format_node(&self, node: NodeId, connector: &str, child_prefix: &str, output: &mut String) {
        let Some(tag) = self.tree.tag(node) else {
            writeln!(output, "{connector}(stale node)").expect("write to String");
            return;
        };

        output.push_str(connector);
        output.push_str(tag);
        if let Some(id) = self.tree.id(node) {
            write!(output, " #{id}").expect("write to String");
        }
        for class in self.tree.classes(node) {
            write!(output, " .{class}").expect("write to String");
        }
        if let Some(text) = self.tree.text(node) {
            write!(output, " {text:?}").expect("write to String");
        }
        output.push('\n');

        let (tee, elbow, pipe, space) = match self.style {
            TreeStyle::Ascii => ("+-- ", "`-- ", "|   ", "    "),
            TreeStyle::Unicode => ("\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} ", "\u{2502}   ", "    "),
        };

        let children = self.tree.children(node);
        let count = children.len();
        for (i, &child) in children.iter().enumerate() {
            let is_last = i == count - 1;
            let connector = format!("{child_prefix}{}", if is_last { elbow } else { tee });
            let next_prefix = format!("{child_prefix}{}", if is_last { space } else { pipe });
            self.format_node(child, &connector, &next_prefix, output);
        }
    }
}

impl fmt::Display for ViewTreeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_subtree())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (ViewTree, NodeId) {
        let mut tree = ViewTree::new();
        let root = tree.create_element("div");
        tree.set_id(root, "outer");
        let header = tree.create_element("div");
        tree.add_class(header, "header");
        let close = tree.create_element("span");
        tree.set_text(close, "x");
        let body = tree.create_element("div");
        tree.append_child(root, header);
        tree.append_child(header, close);
        tree.append_child(root, body);
        (tree, root)
    }

    #[test]
    fn test_format_unicode() {
        let (tree, root) = sample_tree();
        let output = ViewTreeDebug::new(&tree, root).format_subtree();

        assert!(output.starts_with("div #outer\n"));
        assert!(output.contains("\u{251c}\u{2500}\u{2500} div .header"));
        assert!(output.contains("\u{2514}\u{2500}\u{2500} span \"x\""));
    }

    #[test]
    fn test_format_ascii() {
        let (tree, root) = sample_tree();
        let output = ViewTreeDebug::new(&tree, root)
            .with_style(TreeStyle::Ascii)
            .format_subtree();

        assert!(output.contains("+-- div .header"));
        assert!(output.contains("`-- div\n"));
    }

    #[test]
    fn test_display_matches_format() {
        let (tree, root) = sample_tree();
        let debug = ViewTreeDebug::new(&tree, root);
        assert_eq!(debug.to_string(), debug.format_subtree());
    }
}
