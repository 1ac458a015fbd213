//! Text spans to runs and hyperlinks.

use crate::context::RenderContext;
use quire_document::{Hyperlink, Inline, LinkTarget, Run, RunProps};
use quire_idf::TextSpan;
use quire_style::{StyleCategory, UNIVERSAL_STYLE};
use quire_types::Color;

pub(crate) const CODE_FONT: &str = "Consolas";
pub(crate) const CODE_SIZE: f32 = 10.0;
pub(crate) const LINK_COLOR: Color = Color::from_u32(0x0563C1);

/// Appends `text` as runs, turning embedded newlines into breaks.
pub(crate) fn push_text(inlines: &mut Vec<Inline>, text: &str, props: &RunProps) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            inlines.push(Inline::Break);
        }
        if !line.is_empty() {
            inlines.push(Inline::Run(Run::new(line, props.clone())));
        }
    }
}

impl RenderContext<'_> {
    fn span_props(&mut self, span: &TextSpan) -> RunProps {
        let mut props = RunProps {
            bold: span.renders_bold(),
            italic: span.renders_italic(),
            strike: span.strikethrough,
            ..Default::default()
        };
        if span.code {
            props = props.font(CODE_FONT, CODE_SIZE);
            let style = self.style(StyleCategory::CodeInline);
            if style != UNIVERSAL_STYLE {
                props.style = Some(style);
            }
        }
        if span.link.is_some() {
            props.underline = true;
            props.color = Some(LINK_COLOR);
        }
        props
    }

    /// Consecutive spans sharing a link target become one hyperlink.
    pub(crate) fn inlines(&mut self, spans: &[TextSpan]) -> Vec<Inline> {
        let mut inlines = Vec::new();
        for span in spans {
            let props = self.span_props(span);
            match &span.link {
                None => push_text(&mut inlines, &span.text, &props),
                Some(url) => {
                    let target = LinkTarget::from_url(url);
                    let run = Run::new(span.text.replace('\n', " "), props);
                    match inlines.last_mut() {
                        Some(Inline::Hyperlink(link)) if link.target == target => {
                            link.runs.push(run)
                        }
                        _ => inlines.push(Inline::Hyperlink(Hyperlink {
                            target,
                            runs: vec![run],
                        })),
                    }
                }
            }
        }
        inlines
    }
}
