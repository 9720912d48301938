//! # jawn-html
//!
//! Generate HTML from jawn ASTs.
//!
//! jawn is a lightweight plain-text format for prose with ruby
//! (pronunciation guide) annotations. This crate turns a parsed jawn AST into
//! HTML and reports a visible character count: the number of code points
//! that are neither whitespace nor ruby guide text.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use jawn_html::{HtmlGenerator, Node};
//!
//! let generator = HtmlGenerator::new();
//!
//! let ast = Node::document(vec![
//!     Node::line_break(),
//!     Node::paragraph(vec![Node::str("hello world")]),
//! ]);
//!
//! let result = generator.generate(&ast).unwrap();
//! assert_eq!(result.content, "<p><br></p><p>hello world</p>");
//! assert_eq!(result.count, 10);
//! ```
//!
//! ## Example (JSON AST)
//!
//! ```rust
//! use jawn_html::HtmlGenerator;
//!
//! let json = r#"{"type":"Document","raw":"hi","children":[
//!     {"type":"Paragraph","raw":"hi","children":[{"type":"Str","value":"hi","raw":"hi"}]}
//! ]}"#;
//!
//! let result = HtmlGenerator::new().generate_json(json).unwrap();
//! assert_eq!(result.content, "<p>hi</p>");
//! ```

#[cfg(feature = "json")]
pub mod json;
mod service;

#[cfg(feature = "json")]
pub use json::{node_from_value, options_from_value, parse_ast};
pub use jawn_html_core::{
    escape_html, visible_len, GeneratorOptions, Node, NodeKind, RubyParenthesis,
};
pub use service::{
    html, validate_root, ColumnRange, GenerateResult, HtmlGenerator, TextValidationWarning,
};

/// Error type for HTML generation
#[derive(Debug, thiserror::Error)]
pub enum JawnHtmlError {
    #[error("Invalid AST: {0}")]
    InvalidAst(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JawnHtmlError>;
