//! Configuration options for HTML generation

/// Parenthesis glyphs wrapped by `<rp>` for renderers without ruby support
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubyParenthesis {
    pub open: String,
    pub close: String,
}

impl RubyParenthesis {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    /// Build from a sequence of glyphs. Only an exact pair is accepted.
    pub fn from_slice<S: AsRef<str>>(glyphs: &[S]) -> Option<Self> {
        match glyphs {
            [open, close] => Some(Self::new(open.as_ref(), close.as_ref())),
            _ => None,
        }
    }
}

impl Default for RubyParenthesis {
    fn default() -> Self {
        Self::new("（", "）")
    }
}

/// Options for HTML generation
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Echo the original line-break text after each break paragraph
    pub pretty: bool,

    /// When non-empty, paragraphs get `id="{prefix}{n}"` with n starting at 1
    pub line_id_prefix: String,

    /// Glyphs emitted inside `<rp>`
    pub ruby_parenthesis: RubyParenthesis,
}

impl GeneratorOptions {
    /// Set the parenthesis glyphs from a sequence, keeping the default
    /// pair unless exactly two glyphs are given.
    pub fn with_ruby_parenthesis_slice<S: AsRef<str>>(mut self, glyphs: &[S]) -> Self {
        self.ruby_parenthesis = RubyParenthesis::from_slice(glyphs).unwrap_or_default();
        self
    }

    /// The paragraph id prefix, if one applies
    pub fn line_id_prefix(&self) -> Option<&str> {
        if self.line_id_prefix.is_empty() {
            None
        } else {
            Some(&self.line_id_prefix)
        }
    }
}
