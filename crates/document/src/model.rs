//! The office document object model populated by the builder.

use crate::table::Table;
use quire_style::{StyleCatalog, TextAlign};
use quire_traits::{ImageFormat, ImageInfo, SharedResourceData};
use quire_types::{Color, Length};

/// A document under construction, owned by exactly one conversion.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub styles: StyleCatalog,
    pub headers: Vec<HeaderFooter>,
    pub footers: Vec<HeaderFooter>,
    pub body: Vec<Block>,
    pub media: Vec<MediaItem>,
    /// The template body's final `<w:sectPr>` element, verbatim. It carries
    /// page size, margins, and the header and footer references.
    pub section: Option<String>,
}

impl Document {
    /// A blank document exposing only the universal style.
    pub fn minimal() -> Self {
        Self {
            styles: StyleCatalog::minimal(),
            ..Default::default()
        }
    }

    /// Stores decoded image bytes as `image<N>.<ext>` and returns the index
    /// inlines refer to.
    pub fn add_media(&mut self, info: ImageInfo, data: SharedResourceData) -> usize {
        self.media.push(MediaItem {
            name: format!("image{}.{}", self.media.len() + 1, info.format.extension()),
            format: info.format,
            width_px: info.width_px,
            height_px: info.height_px,
            data,
        });
        self.media.len() - 1
    }

    /// Body paragraph texts, one line per paragraph. Table content is not
    /// included.
    pub fn body_text(&self) -> String {
        self.body
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.text()),
                Block::Table(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One header or footer part, keyed by its part name inside the template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderFooter {
    pub part: String,
    pub blocks: Vec<Block>,
    /// The part as loaded, for writers reproducing markup the block model
    /// does not cover. Empty for parts built in code.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub name: String,
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
    pub data: SharedResourceData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl Block {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderLine {
    pub color: Color,
    pub width: Length,
}

impl BorderLine {
    pub fn new(color: Color, width: Length) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub style: Option<String>,
    pub align: Option<TextAlign>,
    pub indent_left: Length,
    pub space_after: Option<Length>,
    pub border_left: Option<BorderLine>,
    pub border_bottom: Option<BorderLine>,
    /// Bookmark name internal hyperlinks can target.
    pub bookmark: Option<String>,
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled(style: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            ..Default::default()
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_indent(mut self, indent: Length) -> Self {
        self.indent_left = indent;
        self
    }

    pub fn with_space_after(mut self, space: Length) -> Self {
        self.space_after = Some(space);
        self
    }

    pub fn push_run(&mut self, run: Run) {
        self.inlines.push(Inline::Run(run));
    }

    pub fn with_run(mut self, run: Run) -> Self {
        self.push_run(run);
        self
    }

    /// Plain text of the paragraph; breaks read as `\n`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for inline in &self.inlines {
            inline.push_text(&mut text);
        }
        text
    }

    /// Every run in document order, hyperlink runs included.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.inlines.iter().flat_map(Inline::runs)
    }

    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.inlines.iter_mut().flat_map(Inline::runs_mut)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Run(Run),
    Hyperlink(Hyperlink),
    Image(InlineImage),
    Field(Field),
    Break,
}

impl Inline {
    /// Editable runs. A field's cached result is not one of them.
    pub fn runs(&self) -> &[Run] {
        match self {
            Inline::Run(run) => std::slice::from_ref(run),
            Inline::Hyperlink(link) => &link.runs,
            Inline::Image(_) | Inline::Field(_) | Inline::Break => &[],
        }
    }

    pub fn runs_mut(&mut self) -> &mut [Run] {
        match self {
            Inline::Run(run) => std::slice::from_mut(run),
            Inline::Hyperlink(link) => &mut link.runs,
            Inline::Image(_) | Inline::Field(_) | Inline::Break => &mut [],
        }
    }

    /// Appends the visible text; a break reads as `\n`.
    pub fn push_text(&self, text: &mut String) {
        match self {
            Inline::Run(run) => text.push_str(&run.text),
            Inline::Hyperlink(link) => link.runs.iter().for_each(|r| text.push_str(&r.text)),
            Inline::Field(field) => text.push_str(&field.cached.text),
            Inline::Break => text.push('\n'),
            Inline::Image(_) => {}
        }
    }

    /// Images and fields hold their place when surrounding text is rewritten.
    pub fn is_anchored(&self) -> bool {
        matches!(self, Inline::Image(_) | Inline::Field(_))
    }
}

/// A field the consuming application recomputes, such as `PAGE`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    /// The field code with surrounding whitespace removed, e.g. `PAGE \* MERGEFORMAT`.
    pub instruction: String,
    /// The result shown until the field is next updated.
    pub cached: Run,
}

impl Field {
    /// The field type, the first word of the instruction.
    pub fn kind(&self) -> &str {
        self.instruction.split_whitespace().next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunProps {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub underline: bool,
    pub font: Option<String>,
    /// Size in points.
    pub size: Option<f32>,
    pub color: Option<Color>,
    /// Character style name.
    pub style: Option<String>,
}

impl RunProps {
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font = Some(family.into());
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub text: String,
    pub props: RunProps,
}

impl Run {
    pub fn new(text: impl Into<String>, props: RunProps) -> Self {
        Self {
            text: text.into(),
            props,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunProps::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    External(String),
    /// A bookmark in the same document.
    Anchor(String),
}

impl LinkTarget {
    /// `#name` targets a bookmark; anything else is external.
    pub fn from_url(url: &str) -> Self {
        match url.strip_prefix('#') {
            Some(anchor) => LinkTarget::Anchor(anchor.to_string()),
            None => LinkTarget::External(url.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    pub target: LinkTarget,
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    /// Index into [`Document::media`].
    pub media: usize,
    pub alt: String,
    pub width: Length,
    /// Follows the image's aspect ratio at `width`.
    pub height: Length,
}
