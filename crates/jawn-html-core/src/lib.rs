//! jawn-html-core - jawn AST and HTML rendering
//!
//! This crate provides the AST types for jawn documents, a depth-first
//! walker and the renderer that turns a document into HTML along with a
//! visible character count. It is used by `jawn-html`, which adds root
//! validation, JSON input and the public `HtmlGenerator` service.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────┐  enter/leave  ┌───────────────┐
//! jawn AST ──────▶│  walker  │ ─────────────▶│ RenderContext │──▶ HTML + count
//!                 └──────────┘               └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use jawn_html_core::{render, GeneratorOptions, Node};
//!
//! let ast = Node::document(vec![
//!     Node::paragraph(vec![
//!         Node::str("吾輩は"),
//!         Node::ruby(vec![
//!             Node::str("猫"),
//!             Node::ruby_parenthesis("（"),
//!             Node::ruby_text(vec![Node::str("ねこ")]),
//!             Node::ruby_parenthesis("）"),
//!         ]),
//!         Node::str("である"),
//!     ]),
//! ]);
//!
//! let rendered = render(&ast, &GeneratorOptions::default());
//! assert_eq!(
//!     rendered.content,
//!     "<p>吾輩は<ruby>猫<rp>（</rp><rt>ねこ</rt><rp>）</rp></ruby>である</p>"
//! );
//! assert_eq!(rendered.count, 7);
//! ```

mod ast;
mod escape;
mod options;
mod render;
mod walk;

pub use ast::{Node, NodeKind};
pub use escape::{escape_html, visible_len};
pub use options::{GeneratorOptions, RubyParenthesis};
pub use render::{needs_paragraph, render, RenderContext, Rendered};
pub use walk::{walk, Visitor};
