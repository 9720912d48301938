//! jawn Abstract Syntax Tree
//!
//! This module defines the AST nodes produced by the jawn parser. The shape
//! follows the textlint `TxtNode` layout: every node has a type, container
//! nodes carry children, `Str` nodes carry a value and every node keeps the
//! raw source text it was parsed from.

/// Node kinds of the jawn markup vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root document container
    Document,

    /// Paragraph containing inline content
    Paragraph,

    /// Line break (an empty source line when it appears at document level)
    Break,

    /// Plain text
    Str,

    /// Emphasis (傍点)
    Emphasis,

    /// Ruby group: base text followed by guide text and optional parentheses
    Ruby,

    /// Ruby guide text (pronunciation)
    RubyText,

    /// Fallback parenthesis around the guide text
    RubyParenthesis,

    /// Source comment, never rendered
    Comment,

    /// Any type outside the vocabulary. Walked, but renders nothing itself.
    Unknown,
}

impl NodeKind {
    /// Map a textlint-style type name to a kind
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "Document" => NodeKind::Document,
            "Paragraph" => NodeKind::Paragraph,
            "Break" => NodeKind::Break,
            "Str" => NodeKind::Str,
            "Emphasis" => NodeKind::Emphasis,
            "Ruby" => NodeKind::Ruby,
            "RubyText" => NodeKind::RubyText,
            "RubyParenthesis" => NodeKind::RubyParenthesis,
            "Comment" => NodeKind::Comment,
            _ => NodeKind::Unknown,
        }
    }

    /// The textlint-style type name
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Break => "Break",
            NodeKind::Str => "Str",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Ruby => "Ruby",
            NodeKind::RubyText => "RubyText",
            NodeKind::RubyParenthesis => "RubyParenthesis",
            NodeKind::Comment => "Comment",
            NodeKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A jawn AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node kind
    pub kind: NodeKind,

    /// Child nodes. `None` for leaves (and for malformed roots).
    pub children: Option<Vec<Node>>,

    /// Text value for `Str` and `Comment` nodes
    pub value: Option<String>,

    /// Original source text. For `Break` this is the line-break sequence.
    pub raw: String,
}

impl Node {
    /// Create a container node
    pub fn parent(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children: Some(children),
            value: None,
            raw: String::new(),
        }
    }

    /// Create the root document node
    pub fn document(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Document, children)
    }

    /// Create a paragraph node
    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Paragraph, children)
    }

    /// Create a text node
    pub fn str(value: &str) -> Self {
        Self {
            kind: NodeKind::Str,
            children: None,
            value: Some(value.to_string()),
            raw: value.to_string(),
        }
    }

    /// Create a break node with a `"\n"` raw sequence
    pub fn line_break() -> Self {
        Self::break_with_raw("\n")
    }

    /// Create a break node with the given raw line-break sequence
    pub fn break_with_raw(raw: &str) -> Self {
        Self {
            kind: NodeKind::Break,
            children: None,
            value: None,
            raw: raw.to_string(),
        }
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Emphasis, children)
    }

    pub fn ruby(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Ruby, children)
    }

    pub fn ruby_text(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::RubyText, children)
    }

    /// Create a ruby parenthesis node wrapping its literal glyph
    pub fn ruby_parenthesis(glyph: &str) -> Self {
        Self::parent(NodeKind::RubyParenthesis, vec![Node::str(glyph)])
    }

    /// Create a comment node
    pub fn comment(value: &str) -> Self {
        Self {
            kind: NodeKind::Comment,
            children: None,
            value: Some(value.to_string()),
            raw: value.to_string(),
        }
    }

    /// Check if this node has the given kind
    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// Get all child nodes
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        if let Some(ref mut children) = self.children {
            children.push(child);
        } else {
            self.children = Some(vec![child]);
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.kind {
            NodeKind::Str => self.value.clone().unwrap_or_default(),
            _ => self.children().map(|child| child.text_content()).collect(),
        }
    }
}
