//! Intermediate Document Format (IDF)
//! The closed, output-independent representation of a parsed markdown
//! document. It is built once per conversion and only read afterwards.

pub use quire_types::AdmonitionKind;

pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A run of text sharing one set of inline attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSpan {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub link: Option<String>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.code = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Code spans never render bold, whatever encloses them.
    pub fn renders_bold(&self) -> bool {
        self.bold && !self.code
    }

    pub fn renders_italic(&self) -> bool {
        self.italic && !self.code
    }

    /// True when the span carries the same attributes as `other`.
    pub fn same_format(&self, other: &TextSpan) -> bool {
        self.bold == other.bold
            && self.italic == other.italic
            && self.code == other.code
            && self.strikethrough == other.strikethrough
            && self.link == other.link
    }
}

/// Concatenated text of a span sequence.
pub fn spans_text(spans: &[TextSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Represents a block-level element in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading {
        level: u8,
        spans: Vec<TextSpan>,
        anchor: String,
    },
    Paragraph {
        spans: Vec<TextSpan>,
    },
    CodeBlock {
        code: String,
        language: Option<String>,
    },
    Blockquote {
        children: Vec<Node>,
    },
    List(ListNode),
    Table(TableNode),
    Admonition {
        kind: AdmonitionKind,
        children: Vec<Node>,
    },
    HorizontalRule,
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
}

impl Node {
    /// Builds a heading, clamping `level` into 1..=6.
    pub fn heading(level: u8, spans: Vec<TextSpan>, anchor: impl Into<String>) -> Self {
        Node::Heading {
            level: level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL),
            spans,
            anchor: anchor.into(),
        }
    }

    pub fn paragraph(spans: Vec<TextSpan>) -> Self {
        Node::Paragraph { spans }
    }

    /// Returns a string identifier for the node type, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Heading { .. } => "heading",
            Node::Paragraph { .. } => "paragraph",
            Node::CodeBlock { .. } => "code-block",
            Node::Blockquote { .. } => "blockquote",
            Node::List(_) => "list",
            Node::Table(_) => "table",
            Node::Admonition { .. } => "admonition",
            Node::HorizontalRule => "horizontal-rule",
            Node::Image { .. } => "image",
        }
    }
}

// --- List-specific Structures ---

#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub ordered: bool,
    /// First number of an ordered list; ignored for bullets.
    pub start: u64,
    pub items: Vec<ListItem>,
}

impl ListNode {
    pub fn bullets(items: Vec<ListItem>) -> Self {
        Self { ordered: false, start: 1, items }
    }

    pub fn numbered(start: u64, items: Vec<ListItem>) -> Self {
        Self { ordered: true, start, items }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub spans: Vec<TextSpan>,
    /// Blocks following the item's first line, nested lists included.
    pub children: Vec<Node>,
}

impl ListItem {
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans, children: Vec::new() }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

// --- Table-specific Structures ---

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableNode {
    pub rows: Vec<TableRow>,
    /// The first row is a header row.
    pub has_header: bool,
}

impl TableNode {
    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub spans: Vec<TextSpan>,
    pub header: bool,
    pub merge_up: bool,
    pub merge_left: bool,
}

impl TableCell {
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans, ..Default::default() }
    }

    pub fn is_merge_marker(&self) -> bool {
        self.merge_up || self.merge_left
    }
}
