//! Depth-first AST traversal with enter/leave hooks.
//!
//! [`walk`] visits every node in document order. A node is entered before
//! any of its children and left after all of them, and each hook receives
//! the node's parent (`None` for the root).
//!
//! ```rust
//! use jawn_html_core::{walk, Node, Visitor};
//!
//! struct Depth {
//!     current: usize,
//!     max: usize,
//! }
//!
//! impl<'a> Visitor<'a> for Depth {
//!     fn enter(&mut self, _node: &'a Node, _parent: Option<&'a Node>) {
//!         self.current += 1;
//!         self.max = self.max.max(self.current);
//!     }
//!
//!     fn leave(&mut self, _node: &'a Node, _parent: Option<&'a Node>) {
//!         self.current -= 1;
//!     }
//! }
//!
//! let doc = Node::document(vec![Node::paragraph(vec![Node::str("hi")])]);
//! let mut depth = Depth { current: 0, max: 0 };
//! walk(&doc, &mut depth);
//! assert_eq!(depth.max, 3);
//! ```

use crate::ast::Node;

/// Hooks called by [`walk`]
pub trait Visitor<'a> {
    fn enter(&mut self, node: &'a Node, parent: Option<&'a Node>);

    fn leave(&mut self, node: &'a Node, parent: Option<&'a Node>);
}

enum Step<'a> {
    Enter(&'a Node, Option<&'a Node>),
    Leave(&'a Node, Option<&'a Node>),
}

/// Walk `root` depth-first, calling the visitor's hooks.
///
/// Uses an explicit stack, so nesting depth is bounded by memory only.
pub fn walk<'a, V: Visitor<'a>>(root: &'a Node, visitor: &mut V) {
    let mut stack = vec![Step::Enter(root, None)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node, parent) => {
                visitor.enter(node, parent);
                stack.push(Step::Leave(node, parent));
                // Reversed so the first child is popped first
                for child in node.children().rev() {
                    stack.push(Step::Enter(child, Some(node)));
                }
            }
            Step::Leave(node, parent) => visitor.leave(node, parent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn enter(&mut self, node: &'a Node, parent: Option<&'a Node>) {
            let parent = parent.map(|p| p.kind.as_str()).unwrap_or("-");
            self.events.push(format!("enter {} in {}", node.kind, parent));
        }

        fn leave(&mut self, node: &'a Node, _parent: Option<&'a Node>) {
            self.events.push(format!("leave {}", node.kind));
        }
    }

    #[test]
    fn test_document_order() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::str("a"), Node::emphasis(vec![Node::str("b")])]),
            Node::line_break(),
        ]);

        let mut recorder = Recorder::default();
        walk(&doc, &mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "enter Document in -",
                "enter Paragraph in Document",
                "enter Str in Paragraph",
                "leave Str",
                "enter Emphasis in Paragraph",
                "enter Str in Emphasis",
                "leave Str",
                "leave Emphasis",
                "leave Paragraph",
                "enter Break in Document",
                "leave Break",
                "leave Document",
            ]
        );
    }

    #[test]
    fn test_deep_nesting() {
        let mut node = Node::str("x");
        for _ in 0..100_000 {
            node = Node::parent(NodeKind::Emphasis, vec![node]);
        }

        struct Count(usize);
        impl<'a> Visitor<'a> for Count {
            fn enter(&mut self, _node: &'a Node, _parent: Option<&'a Node>) {
                self.0 += 1;
            }
            fn leave(&mut self, _node: &'a Node, _parent: Option<&'a Node>) {}
        }

        let mut count = Count(0);
        walk(&node, &mut count);
        assert_eq!(count.0, 100_001);

        // Node's derived Drop recurses; unwind the chain iteratively instead.
        let mut current = Some(node);
        while let Some(mut n) = current {
            current = n.children.take().and_then(|mut c| c.pop());
        }
    }
}
