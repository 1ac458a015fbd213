//! Node dispatch and the simple block renderers.

use crate::context::RenderContext;
use crate::error::BuildError;
use crate::events::FallbackEvent;
use crate::inline::{CODE_FONT, CODE_SIZE};
use log::debug;
use quire_document::{Block, BorderLine, Inline, InlineImage, Paragraph, Run, RunProps, TextAlign};
use quire_idf::Node;
use quire_style::StyleCategory;
use quire_traits::ImageInfo;
use quire_types::{Color, Length};

const QUOTE_INDENT_INCHES: f32 = 0.5;
const QUOTE_BORDER: Color = Color::gray(0xBF);
const RULE_BORDER: Color = Color::gray(0xA0);
const IMAGE_WIDTH_INCHES: f32 = 5.0;
const CAPTION_SIZE: f32 = 10.0;

impl RenderContext<'_> {
    /// Renders one node into `out`, with paragraphs indented by `indent`.
    pub(crate) fn render_node(
        &mut self,
        node: &Node,
        out: &mut Vec<Block>,
        indent: Length,
    ) -> Result<(), BuildError> {
        debug!("Rendering {} node.", node.kind());
        match node {
            Node::Heading { level, spans, anchor } => {
                let style = self.style(StyleCategory::heading(*level));
                let mut p = Paragraph::styled(style).with_indent(indent);
                p.bookmark = Some(anchor.clone());
                p.inlines = self.inlines(spans);
                out.push(Block::Paragraph(p));
            }
            Node::Paragraph { spans } => {
                let mut p =
                    Paragraph::styled(self.style(StyleCategory::Paragraph)).with_indent(indent);
                p.inlines = self.inlines(spans);
                out.push(Block::Paragraph(p));
            }
            Node::CodeBlock { code, .. } => self.render_code(code, out, indent),
            Node::Blockquote { children } => self.render_quote(children, 1, out, indent)?,
            Node::List(list) => self.render_list(list, 0, out, indent)?,
            Node::Table(table) => {
                let table = self.render_table(table)?;
                out.push(Block::Table(table));
            }
            Node::Admonition { kind, children } => {
                let table = self.render_admonition(*kind, children)?;
                out.push(Block::Table(table));
            }
            Node::HorizontalRule => {
                let mut p = Paragraph::new().with_indent(indent);
                p.border_bottom = Some(BorderLine::new(RULE_BORDER, Length::pt(1.0)));
                out.push(Block::Paragraph(p));
            }
            Node::Image { src, alt, .. } => self.render_image(src, alt, out, indent),
        }
        Ok(())
    }

    fn render_code(&mut self, code: &str, out: &mut Vec<Block>, indent: Length) {
        let style = self.style(StyleCategory::CodeBlock);
        let props = RunProps::default().font(CODE_FONT, CODE_SIZE);
        for line in code.split('\n') {
            let mut p = Paragraph::styled(style.clone())
                .with_align(TextAlign::Left)
                .with_indent(indent)
                .with_space_after(Length::ZERO);
            if !line.is_empty() {
                p.push_run(Run::new(line, props.clone()));
            }
            out.push(Block::Paragraph(p));
        }
    }

    /// Paragraphs take the quote style and step in per level; other children
    /// render normally at the quote's indent.
    fn render_quote(
        &mut self,
        children: &[Node],
        depth: usize,
        out: &mut Vec<Block>,
        indent: Length,
    ) -> Result<(), BuildError> {
        self.enter("blockquote")?;
        let quote_indent = indent + Length::inches(QUOTE_INDENT_INCHES) * depth as f32;
        for child in children {
            match child {
                Node::Paragraph { spans } => {
                    let style = self.style(StyleCategory::Quote);
                    let mut p = Paragraph::styled(style).with_indent(quote_indent);
                    p.border_left = Some(BorderLine::new(QUOTE_BORDER, Length::pt(3.0)));
                    p.inlines = self.inlines(spans);
                    out.push(Block::Paragraph(p));
                }
                Node::Blockquote { children } => {
                    self.render_quote(children, depth + 1, out, indent)?
                }
                other => self.render_node(other, out, quote_indent)?,
            }
        }
        self.leave();
        Ok(())
    }

    fn render_image(&mut self, src: &str, alt: &str, out: &mut Vec<Block>, indent: Length) {
        let mut p = Paragraph::new().with_indent(indent);
        match self.load_image(src) {
            Ok((media, aspect)) => {
                let width = Length::inches(IMAGE_WIDTH_INCHES);
                p.inlines.push(Inline::Image(InlineImage {
                    media,
                    alt: alt.to_string(),
                    width,
                    height: width * aspect,
                }))
            }
            Err(reason) => {
                self.record(FallbackEvent::ImagePlaceholder {
                    src: src.to_string(),
                    reason,
                });
                let label = if alt.is_empty() { src } else { alt };
                p.push_run(Run::new(format!("[Image: {}]", label), RunProps::default().italic()));
            }
        }
        out.push(Block::Paragraph(p));

        if !alt.is_empty() {
            let mut props = RunProps::default().italic();
            props.size = Some(CAPTION_SIZE);
            let caption = Paragraph::styled(self.style(StyleCategory::Caption))
                .with_indent(indent)
                .with_run(Run::new(alt, props));
            out.push(Block::Paragraph(caption));
        }
    }

    /// Returns the media index and the image's height-over-width ratio.
    fn load_image(&mut self, src: &str) -> Result<(usize, f32), String> {
        let provider = self.resources.ok_or_else(|| "no resource provider configured".to_string())?;
        let data = provider.load(src).map_err(|e| e.to_string())?;
        let info = ImageInfo::read(src, &data).map_err(|e| e.to_string())?;
        Ok((self.document.add_media(info, data), info.aspect_ratio()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use quire_idf::TextSpan;
    use quire_style::{StyleCatalog, StyleResolver};
    use quire_document::{Document, MediaItem};
    use quire_traits::{ImageFormat, InMemoryResourceProvider, ResourceProvider};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image::RgbImage::new(width, height).write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn render(
        nodes: &[Node],
        resources: Option<&dyn ResourceProvider>,
    ) -> (Vec<Block>, Vec<MediaItem>, Vec<FallbackEvent>) {
        let config = BuildConfig::default();
        let catalog: StyleCatalog = ["Normal", "Heading 1", "Quote", "Code Block", "Caption"]
            .into_iter()
            .collect();
        let mut resolver = StyleResolver::new(config.styles.clone(), catalog);
        let mut doc = Document::minimal();
        let mut events = Vec::new();
        let mut out = Vec::new();
        {
            let mut ctx =
                RenderContext::new(&mut resolver, &config, resources, &mut doc, &mut events);
            for node in nodes {
                ctx.render_node(node, &mut out, Length::ZERO).unwrap();
            }
        }
        (out, doc.media, events)
    }

    fn para(block: &Block) -> &Paragraph {
        block.as_paragraph().expect("paragraph")
    }

    #[test]
    fn test_heading_carries_bookmark_and_style() {
        let heading = Node::heading(1, vec![TextSpan::plain("Intro")], "intro");
        let (out, _, events) = render(&[heading], None);
        let p = para(&out[0]);
        assert_eq!(p.style.as_deref(), Some("Heading 1"));
        assert_eq!(p.bookmark.as_deref(), Some("intro"));
        assert!(events.is_empty());
    }

    #[test]
    fn test_code_block_one_paragraph_per_line() {
        let node = Node::CodeBlock {
            code: "fn main() {\n\n}".into(),
            language: Some("rust".into()),
        };
        let (out, _, _) = render(&[node], None);
        assert_eq!(out.len(), 3);
        let first = para(&out[0]);
        assert_eq!(first.style.as_deref(), Some("Code Block"));
        assert_eq!(first.align, Some(TextAlign::Left));
        assert_eq!(first.space_after, Some(Length::ZERO));
        assert_eq!(first.runs().next().unwrap().props.font.as_deref(), Some(CODE_FONT));
        assert_eq!(para(&out[1]).text(), "");
    }

    #[test]
    fn test_nested_quotes_step_in() {
        let node = Node::Blockquote {
            children: vec![
                Node::paragraph(vec![TextSpan::plain("outer")]),
                Node::Blockquote {
                    children: vec![Node::paragraph(vec![TextSpan::plain("inner")])],
                },
            ],
        };
        let (out, _, _) = render(&[node], None);
        assert_eq!(para(&out[0]).indent_left, Length::inches(0.5));
        assert_eq!(para(&out[1]).indent_left, Length::inches(1.0));
        let quoted = |b: &Block| para(b).style.as_deref() == Some("Quote");
        assert!(out.iter().all(|b| quoted(b) && para(b).border_left.is_some()));
    }

    #[test]
    fn test_missing_image_becomes_placeholder_with_caption() {
        let node = Node::Image {
            src: "missing.png".into(),
            alt: "Diagram".into(),
            title: None,
        };
        let provider = InMemoryResourceProvider::new();
        let (out, media, events) = render(&[node], Some(&provider));
        assert!(media.is_empty());
        assert_eq!(para(&out[0]).text(), "[Image: Diagram]");
        assert!(para(&out[0]).runs().all(|r| r.props.italic));
        assert_eq!(para(&out[1]).style.as_deref(), Some("Caption"));
        assert!(matches!(
            &events[0],
            FallbackEvent::ImagePlaceholder { src, .. } if src == "missing.png"
        ));
    }

    #[test]
    fn test_resolvable_image_is_embedded() {
        let provider = InMemoryResourceProvider::new();
        provider.add("chart.png", png(8, 4)).unwrap();
        let node = Node::Image {
            src: "chart.png".into(),
            alt: String::new(),
            title: None,
        };
        let (out, media, events) = render(&[node], Some(&provider));
        assert_eq!(out.len(), 1);
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].name, "image1.png");
        assert_eq!(media[0].format, ImageFormat::Png);
        assert_eq!((media[0].width_px, media[0].height_px), (8, 4));
        let Inline::Image(image) = &para(&out[0]).inlines[0] else {
            panic!("expected an inline image");
        };
        assert_eq!(image.media, 0);
        assert_eq!(image.width, Length::inches(5.0));
        assert_eq!(image.height, Length::inches(2.5));
        assert!(events.is_empty());
    }

    #[test]
    fn test_corrupt_image_becomes_placeholder() {
        let provider = InMemoryResourceProvider::new();
        provider.add("broken.png", b"\x89PNG\r\n\x1a\nthis is not an image".to_vec()).unwrap();
        let node = Node::Image {
            src: "broken.png".into(),
            alt: String::new(),
            title: None,
        };
        let (out, media, events) = render(&[node], Some(&provider));
        assert!(media.is_empty());
        assert_eq!(para(&out[0]).text(), "[Image: broken.png]");
        assert!(matches!(
            &events[0],
            FallbackEvent::ImagePlaceholder { src, reason }
                if src == "broken.png" && reason.contains("decode")
        ));
    }

    #[test]
    fn test_image_without_alt_uses_src_in_placeholder() {
        let node = Node::Image {
            src: "https://example.com/a.png".into(),
            alt: String::new(),
            title: None,
        };
        let (out, _, _) = render(&[node], None);
        assert_eq!(out.len(), 1);
        assert_eq!(para(&out[0]).text(), "[Image: https://example.com/a.png]");
    }

    #[test]
    fn test_horizontal_rule_is_bordered_empty_paragraph() {
        let (out, _, _) = render(&[Node::HorizontalRule], None);
        assert!(para(&out[0]).inlines.is_empty());
        assert!(para(&out[0]).border_bottom.is_some());
    }
}
