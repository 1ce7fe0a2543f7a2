//! Typed click events.

use super::tree::NodeId;

/// A click delivered to a widget.
///
/// Carries the element the click landed on and an accept flag. A handler that
/// consumes the click calls [`accept`](Self::accept); an accepted event stops
/// propagating to listeners further up the tree.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    target: NodeId,
    accepted: bool,
}

impl ClickEvent {
    /// Create a click on the given element.
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            accepted: false,
        }
    }

    /// The element the click landed on.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Whether a handler has accepted the event.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewTree;

    #[test]
    fn test_accept_flag() {
        let mut tree = ViewTree::new();
        let node = tree.create_element("span");

        let mut event = ClickEvent::new(node);
        assert_eq!(event.target(), node);
        assert!(!event.is_accepted());

        event.accept();
        assert!(event.is_accepted());
    }
}
