//! jawn AST rendering
//!
//! Converts a document node into HTML fragments while counting visible
//! characters. All state lives in a [`RenderContext`] created per call.

use crate::ast::{Node, NodeKind};
use crate::escape::{escape_html, visible_len};
use crate::options::GeneratorOptions;
use crate::walk::{walk, Visitor};

/// Rendered HTML and its visible character count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    pub count: usize,
    /// Number of `<p>` wrappers emitted
    pub paragraphs: usize,
}

/// Render a document to HTML.
///
/// The root is expected to be a `Document`; callers validate it first.
pub fn render(document: &Node, options: &GeneratorOptions) -> Rendered {
    let mut ctx = RenderContext::new(options);
    walk(document, &mut ctx);
    ctx.finish()
}

/// Call-scoped render state, threaded through the traversal as the visitor
pub struct RenderContext<'a> {
    options: &'a GeneratorOptions,
    parenthesis_start: String,
    parenthesis_end: String,
    contents: Vec<String>,
    line_number: usize,
    visible_count: usize,
    previous_document_sibling: Option<&'a Node>,
    parenthesis_open: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            parenthesis_start: escape_html(&options.ruby_parenthesis.open).into_owned(),
            parenthesis_end: escape_html(&options.ruby_parenthesis.close).into_owned(),
            contents: Vec::new(),
            line_number: 0,
            visible_count: 0,
            previous_document_sibling: None,
            parenthesis_open: false,
        }
    }

    /// Join the emitted fragments
    pub fn finish(self) -> Rendered {
        Rendered {
            content: self.contents.concat(),
            count: self.visible_count,
            paragraphs: self.line_number,
        }
    }

    fn push(&mut self, fragment: &str) {
        self.contents.push(fragment.to_string());
    }

    fn open_paragraph(&mut self, kind: NodeKind) {
        self.line_number += 1;
        let open_tag = match self.options.line_id_prefix() {
            Some(prefix) => format!("<p id=\"{}{}\">", prefix, self.line_number),
            None => "<p>".to_string(),
        };
        self.contents.push(open_tag);
        if kind == NodeKind::Break {
            self.push("<br>");
        }
    }

    fn toggle_parenthesis(&mut self) {
        let glyph = if self.parenthesis_open {
            self.parenthesis_end.clone()
        } else {
            self.parenthesis_start.clone()
        };
        self.parenthesis_open = !self.parenthesis_open;
        self.contents.push(glyph);
    }

    fn text(&mut self, value: &str, parent_kind: Option<NodeKind>) {
        if value.is_empty() {
            return;
        }
        self.contents.push(escape_html(value).into_owned());

        // Guide text is a reading aid, not prose
        if parent_kind != Some(NodeKind::RubyText) {
            self.visible_count += visible_len(value);
        }
    }
}

impl<'a> Visitor<'a> for RenderContext<'a> {
    fn enter(&mut self, node: &'a Node, parent: Option<&'a Node>) {
        let parent_kind = parent.map(|p| p.kind);

        if needs_paragraph(node.kind, self.previous_document_sibling) {
            self.open_paragraph(node.kind);
        }

        match node.kind {
            NodeKind::Emphasis => self.push("<em>"),
            NodeKind::Ruby => self.push("<ruby>"),
            NodeKind::RubyParenthesis => {
                self.push("<rp>");
                self.toggle_parenthesis();
            }
            NodeKind::RubyText => self.push("<rt>"),
            // The glyph inside <rp> comes from the toggle above
            NodeKind::Str if parent_kind != Some(NodeKind::RubyParenthesis) => {
                if let Some(value) = node.value.as_deref() {
                    self.text(value, parent_kind);
                }
            }
            NodeKind::Str
            | NodeKind::Document
            | NodeKind::Paragraph
            | NodeKind::Break
            | NodeKind::Comment
            | NodeKind::Unknown => {}
        }
    }

    fn leave(&mut self, node: &'a Node, parent: Option<&'a Node>) {
        match node.kind {
            NodeKind::Emphasis => self.push("</em>"),
            NodeKind::Ruby => self.push("</ruby>"),
            NodeKind::RubyParenthesis => self.push("</rp>"),
            NodeKind::RubyText => self.push("</rt>"),
            NodeKind::Document
            | NodeKind::Paragraph
            | NodeKind::Break
            | NodeKind::Str
            | NodeKind::Comment
            | NodeKind::Unknown => {}
        }

        // The sibling has not moved since enter, so this closes what enter opened
        if needs_paragraph(node.kind, self.previous_document_sibling) {
            self.push("</p>");
        }

        if let Some(raw) = pretty_break(self.options.pretty, node, self.previous_document_sibling) {
            self.push(raw);
        }

        if parent.is_some_and(|p| p.kind == NodeKind::Document) {
            self.previous_document_sibling = Some(node);
        }
    }
}

/// Whether a node is wrapped in its own `<p>`.
///
/// Paragraphs always are. A break is when it starts the document or follows
/// another document-level break, i.e. it stands for an empty line.
pub fn needs_paragraph(kind: NodeKind, previous: Option<&Node>) -> bool {
    match kind {
        NodeKind::Paragraph => true,
        NodeKind::Break => previous.map_or(true, |p| p.kind == NodeKind::Break),
        _ => false,
    }
}

/// Raw line-break text to echo after a break in pretty mode
fn pretty_break<'n>(pretty: bool, node: &'n Node, previous: Option<&Node>) -> Option<&'n str> {
    let after_comment = previous.is_some_and(|p| p.kind == NodeKind::Comment);
    if pretty && node.kind == NodeKind::Break && !after_comment && !node.raw.is_empty() {
        Some(&node.raw)
    } else {
        None
    }
}
