//! Event stream → IDF tree.
//!
//! One frame is pushed per open container and popped on the matching end
//! event, so the builder only needs the start tags' payloads. Text events go
//! to the nearest frame that collects spans, skipping inline-format frames.

use crate::anchors::AnchorRegistry;
use crate::callout::detect_callout;
use crate::cells::decode_markers;
use crate::inline::{InlineMark, InlineState, drop_prefix, push_span, trim_spans};
use log::debug;
use pulldown_cmark::{CodeBlockKind, Event, Tag};
use quire_idf::{
    AdmonitionKind, ListItem, ListNode, Node, TableCell, TableNode, TableRow, TextSpan, spans_text,
};

#[derive(Debug)]
struct ImageRef {
    src: String,
    alt: String,
    title: Option<String>,
}

#[derive(Debug)]
enum Frame {
    Paragraph {
        spans: Vec<TextSpan>,
        /// Byte offset of the first line break in the paragraph text.
        first_break: Option<usize>,
        images: Vec<ImageRef>,
        /// Non-blank text other than image alt text was seen.
        has_text: bool,
    },
    Heading {
        level: u8,
        spans: Vec<TextSpan>,
    },
    BlockQuote {
        children: Vec<Node>,
        callout: Option<AdmonitionKind>,
    },
    List {
        ordered: bool,
        start: u64,
        items: Vec<ListItem>,
    },
    Item {
        spans: Vec<TextSpan>,
        children: Vec<Node>,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Table {
        rows: Vec<TableRow>,
        has_header: bool,
    },
    Row {
        cells: Vec<TableCell>,
        header: bool,
    },
    Cell {
        spans: Vec<TextSpan>,
    },
    Image {
        src: String,
        title: Option<String>,
        alt: String,
    },
    Inline(InlineMark),
    Ignored,
}

#[derive(Debug, Default)]
pub struct AstBuilder {
    root: Vec<Node>,
    stack: Vec<Frame>,
    inline: InlineState,
    anchors: AnchorRegistry,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the whole event stream. Unclosed containers at the end of
    /// the stream are closed as if their end events had arrived.
    pub fn build<'a, I>(mut self, events: I) -> Vec<Node>
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        while !self.stack.is_empty() {
            self.close_frame();
        }
        debug!("Built {} top-level nodes", self.root.len());
        self.root
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => self.close_frame(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let span = self.inline.code_span(&code);
                self.push_inline(span, true);
            }
            Event::InlineHtml(html) => self.text(&html),
            Event::SoftBreak => self.line_break(" "),
            Event::HardBreak => self.line_break("\n"),
            Event::Rule => self.emit(Node::HorizontalRule),
            Event::Html(_) => debug!("Skipping raw HTML block content"),
            other => debug!("Ignoring unsupported markdown event {:?}", other),
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph {
                spans: Vec::new(),
                first_break: None,
                images: Vec::new(),
                has_text: false,
            },
            Tag::Heading { level, .. } => Frame::Heading {
                level: level as u8,
                spans: Vec::new(),
            },
            Tag::BlockQuote(_) => Frame::BlockQuote {
                children: Vec::new(),
                callout: None,
            },
            Tag::CodeBlock(kind) => Frame::CodeBlock {
                language: match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::List(start) => Frame::List {
                ordered: start.is_some(),
                start: start.unwrap_or(1),
                items: Vec::new(),
            },
            Tag::Item => Frame::Item {
                spans: Vec::new(),
                children: Vec::new(),
            },
            Tag::Table(_) => Frame::Table {
                rows: Vec::new(),
                has_header: false,
            },
            Tag::TableHead => Frame::Row {
                cells: Vec::new(),
                header: true,
            },
            Tag::TableRow => Frame::Row {
                cells: Vec::new(),
                header: false,
            },
            Tag::TableCell => Frame::Cell { spans: Vec::new() },
            Tag::Emphasis => self.open_inline(InlineMark::Emphasis, None),
            Tag::Strong => self.open_inline(InlineMark::Strong, None),
            Tag::Strikethrough => self.open_inline(InlineMark::Strikethrough, None),
            Tag::Link { dest_url, .. } => {
                self.open_inline(InlineMark::Link, Some(dest_url.to_string()))
            }
            Tag::Image { dest_url, title, .. } => Frame::Image {
                src: dest_url.to_string(),
                title: (!title.is_empty()).then(|| title.to_string()),
                alt: String::new(),
            },
            other => {
                debug!("Ignoring unsupported markdown container {:?}", other);
                Frame::Ignored
            }
        };
        self.stack.push(frame);
    }

    fn open_inline(&mut self, mark: InlineMark, link: Option<String>) -> Frame {
        self.inline.open(mark, link);
        Frame::Inline(mark)
    }

    fn close_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Inline(mark) => self.inline.close(mark),
            Frame::Ignored => {}
            Frame::Paragraph {
                spans,
                first_break,
                images,
                has_text,
            } => self.finish_paragraph(spans, first_break, images, has_text),
            Frame::Heading { level, spans } => {
                let spans = trim_spans(spans);
                let anchor = self.anchors.assign(&spans_text(&spans));
                self.emit(Node::heading(level, spans, anchor));
            }
            Frame::BlockQuote { children, callout } => match callout {
                Some(kind) => self.emit(Node::Admonition { kind, children }),
                None => self.emit(Node::Blockquote { children }),
            },
            Frame::CodeBlock { language, mut code } => {
                if code.ends_with('\n') {
                    code.pop();
                }
                self.emit(Node::CodeBlock { code, language });
            }
            Frame::List {
                ordered,
                start,
                items,
            } => self.emit(Node::List(ListNode {
                ordered,
                start,
                items,
            })),
            Frame::Item { spans, children } => {
                let item = ListItem {
                    spans: trim_spans(spans),
                    children,
                };
                if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
                    items.push(item);
                }
            }
            Frame::Table { rows, has_header } => {
                self.emit(Node::Table(TableNode { rows, has_header }))
            }
            Frame::Row { cells, header } => {
                if let Some(Frame::Table { rows, has_header }) = self.stack.last_mut() {
                    *has_header |= header;
                    rows.push(TableRow { cells });
                }
            }
            Frame::Cell { spans } => self.finish_cell(spans),
            Frame::Image { src, title, alt } => {
                let alt_span = self.inline.span(&alt);
                if let Some(Frame::Paragraph { images, .. }) = self.sink_mut() {
                    images.push(ImageRef { src, alt, title });
                }
                self.push_inline(alt_span, false);
            }
        }
    }

    fn finish_paragraph(
        &mut self,
        mut spans: Vec<TextSpan>,
        first_break: Option<usize>,
        images: Vec<ImageRef>,
        has_text: bool,
    ) {
        if images.len() == 1 && !has_text {
            if let Some(ImageRef { src, alt, title }) = images.into_iter().next() {
                self.emit(Node::Image { src, alt, title });
            }
            return;
        }

        if let Some(Frame::BlockQuote { children, callout }) = self.stack.last_mut()
            && children.is_empty()
            && callout.is_none()
        {
            let text = spans_text(&spans);
            let first_line = first_break.and_then(|end| text.get(..end)).unwrap_or(text.as_str());
            if let Some(found) = detect_callout(first_line) {
                debug!("Blockquote promoted to {} admonition", found.kind);
                *callout = Some(found.kind);
                drop_prefix(&mut spans, found.marker_len);
            }
        }

        let spans = trim_spans(spans);
        if spans.is_empty() {
            return;
        }
        match self.stack.last_mut() {
            Some(Frame::Item {
                spans: item_spans,
                children,
            }) if item_spans.is_empty() && children.is_empty() => *item_spans = spans,
            _ => self.emit(Node::paragraph(spans)),
        }
    }

    fn finish_cell(&mut self, spans: Vec<TextSpan>) {
        let spans = trim_spans(spans);
        let markers = decode_markers(&spans_text(&spans));
        let Some(Frame::Row { cells, header }) = self.stack.last_mut() else {
            return;
        };
        let cell = if markers.any() {
            TableCell {
                spans: Vec::new(),
                header: *header,
                merge_up: markers.up,
                merge_left: markers.left,
            }
        } else {
            TableCell {
                spans,
                header: *header,
                ..Default::default()
            }
        };
        cells.push(cell);
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::CodeBlock { code, .. }) => code.push_str(text),
            Some(Frame::Ignored) => {}
            _ => {
                let span = self.inline.span(text);
                self.push_inline(span, true);
            }
        }
    }

    fn line_break(&mut self, text: &str) {
        if let Some(Frame::CodeBlock { code, .. }) = self.stack.last_mut() {
            code.push('\n');
            return;
        }
        if let Some(Frame::Paragraph {
            spans, first_break, ..
        }) = self.sink_mut()
            && first_break.is_none()
        {
            *first_break = Some(spans.iter().map(|s| s.text.len()).sum());
        }
        let span = self.inline.span(text);
        self.push_inline(span, false);
    }

    fn sink_mut(&mut self) -> Option<&mut Frame> {
        self.stack
            .iter_mut()
            .rev()
            .find(|frame| !matches!(frame, Frame::Inline(_)))
    }

    fn push_inline(&mut self, span: TextSpan, counts_as_text: bool) {
        let blank = span.text.trim().is_empty();
        match self.sink_mut() {
            Some(Frame::Paragraph {
                spans, has_text, ..
            }) => {
                if counts_as_text && !blank {
                    *has_text = true;
                }
                push_span(spans, span);
            }
            Some(Frame::Heading { spans, .. })
            | Some(Frame::Item { spans, .. })
            | Some(Frame::Cell { spans }) => push_span(spans, span),
            Some(Frame::Image { alt, .. }) => alt.push_str(&span.text),
            _ => debug!("Dropping inline text outside a text container"),
        }
    }

    fn emit(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Frame::BlockQuote { children, .. }) | Some(Frame::Item { children, .. }) => {
                children.push(node)
            }
            _ => self.root.push(node),
        }
    }
}
