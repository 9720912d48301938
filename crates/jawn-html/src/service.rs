//! HtmlGenerator - the main entry point for jawn AST to HTML generation.

use jawn_html_core::{escape_html, render, GeneratorOptions, Node, NodeKind};
use tracing::debug;

use crate::{JawnHtmlError, Result};

/// Column span of a warning, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

/// A warning about the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValidationWarning {
    pub message: String,
    pub kind: String,
    pub line: usize,
    pub column: ColumnRange,
}

/// Output of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Generated HTML
    pub content: String,

    /// Visible characters: no whitespace, no ruby guide text
    pub count: usize,

    /// Reserved. The HTML generator does not produce warnings.
    pub warnings: Vec<TextValidationWarning>,
}

/// Check that `root` is a document with a children list
pub fn validate_root(root: &Node) -> Result<()> {
    if root.kind != NodeKind::Document {
        return Err(JawnHtmlError::InvalidAst(format!(
            "root must be a Document, found {}",
            root.kind
        )));
    }
    if root.children.is_none() {
        return Err(JawnHtmlError::InvalidAst(
            "root Document has no children".to_string(),
        ));
    }
    Ok(())
}

/// Generate HTML for a jawn document
pub fn html(root: &Node, options: &GeneratorOptions) -> Result<GenerateResult> {
    if let Err(err) = validate_root(root) {
        debug!(error = %err, "rejecting AST");
        return Err(err);
    }

    let rendered = render(root, options);
    debug!(
        paragraphs = rendered.paragraphs,
        count = rendered.count,
        bytes = rendered.content.len(),
        "rendered document"
    );

    Ok(GenerateResult {
        content: rendered.content,
        count: rendered.count,
        warnings: Vec::new(),
    })
}

/// The main service for converting jawn ASTs to HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlGenerator {
    options: GeneratorOptions,
}

impl HtmlGenerator {
    /// Create an HtmlGenerator with default options
    pub fn new() -> Self {
        Self {
            options: GeneratorOptions::default(),
        }
    }

    /// Create an HtmlGenerator with custom options
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Convert a jawn AST to HTML
    pub fn generate(&self, root: &Node) -> Result<GenerateResult> {
        html(root, &self.options)
    }

    /// Parse a textlint-style JSON AST and convert it to HTML
    #[cfg(feature = "json")]
    pub fn generate_json(&self, json: &str) -> Result<GenerateResult> {
        let root = crate::json::parse_ast(json)?;
        self.generate(&root)
    }

    /// Get the current options
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut GeneratorOptions {
        &mut self.options
    }

    /// Escape HTML special characters in a string
    pub fn escape(&self, text: &str) -> String {
        escape_html(text).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jawn_html_core::RubyParenthesis;

    fn make_p(text: &str) -> Node {
        Node::paragraph(vec![Node::str(text)])
    }

    #[test]
    fn test_simple_paragraph() {
        let generator = HtmlGenerator::new();
        let result = generator.generate(&Node::document(vec![make_p("hi")])).unwrap();
        assert_eq!(result.content, "<p>hi</p>");
        assert_eq!(result.count, 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_rejects_non_document_root() {
        let generator = HtmlGenerator::new();
        let err = generator.generate(&make_p("hi")).unwrap_err();
        assert!(matches!(err, JawnHtmlError::InvalidAst(_)));
        assert!(err.to_string().contains("Paragraph"));
    }

    #[test]
    fn test_rejects_document_without_children() {
        let mut root = Node::document(vec![]);
        root.children = None;
        let err = html(&root, &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, JawnHtmlError::InvalidAst(_)));
    }

    #[test]
    fn test_rejects_unknown_root() {
        let root = Node::parent(NodeKind::Unknown, vec![]);
        assert!(validate_root(&root).is_err());
    }

    #[test]
    fn test_empty_document() {
        let result = html(&Node::document(vec![]), &GeneratorOptions::default()).unwrap();
        assert_eq!(result.content, "");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_line_id_prefix() {
        let options = GeneratorOptions {
            line_id_prefix: "L".to_string(),
            ..Default::default()
        };
        let generator = HtmlGenerator::with_options(options);
        let result = generator.generate(&Node::document(vec![make_p("hi")])).unwrap();
        assert_eq!(result.content, "<p id=\"L1\">hi</p>");
    }

    #[test]
    fn test_escape() {
        let generator = HtmlGenerator::new();
        let result = generator.generate(&Node::document(vec![make_p("<'&\">")])).unwrap();
        assert_eq!(result.content, "<p>&lt;&#39;&amp;&quot;&gt;</p>");
        assert_eq!(generator.escape("a&b"), "a&amp;b");
    }

    #[test]
    fn test_three_breaks() {
        let doc = Node::document(vec![
            Node::line_break(),
            Node::line_break(),
            Node::line_break(),
        ]);
        let result = HtmlGenerator::new().generate(&doc).unwrap();
        assert_eq!(result.content, "<p><br></p><p><br></p><p><br></p>");
    }

    #[test]
    fn test_ruby_count() {
        let doc = Node::document(vec![Node::paragraph(vec![Node::ruby(vec![
            Node::str("漢"),
            Node::ruby_text(vec![Node::str("かん")]),
        ])])]);
        let result = HtmlGenerator::new().generate(&doc).unwrap();
        assert_eq!(result.content, "<p><ruby>漢<rt>かん</rt></ruby></p>");
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_options_mut() {
        let mut generator = HtmlGenerator::new();
        generator.options_mut().ruby_parenthesis = RubyParenthesis::new("(", ")");
        generator.options_mut().pretty = true;
        assert_eq!(generator.options().ruby_parenthesis.open, "(");
        assert!(generator.options().pretty);
    }

    #[test]
    fn test_balanced_paragraphs() {
        let doc = Node::document(vec![
            Node::line_break(),
            make_p("a"),
            Node::line_break(),
            Node::line_break(),
            Node::line_break(),
            make_p("b"),
            Node::comment("c"),
            Node::line_break(),
        ]);
        let result = HtmlGenerator::new().generate(&doc).unwrap();
        assert_eq!(
            result.content.matches("<p>").count(),
            result.content.matches("</p>").count()
        );
        assert_eq!(result.content.matches("<p>").count(), 5);
    }

    #[test]
    fn test_independent_calls_on_threads() {
        let generator = HtmlGenerator::new();
        let first = Node::document(vec![make_p("one"), Node::line_break()]);
        let second = Node::document(vec![Node::line_break(), Node::line_break()]);

        let (a, b) = std::thread::scope(|s| {
            let a = s.spawn(|| generator.generate(&first).unwrap());
            let b = s.spawn(|| generator.generate(&second).unwrap());
            (a.join().unwrap(), b.join().unwrap())
        });

        assert_eq!(a.content, "<p>one</p>");
        assert_eq!(a.count, 3);
        assert_eq!(b.content, "<p><br></p><p><br></p>");
        assert_eq!(b.count, 0);
    }
}
