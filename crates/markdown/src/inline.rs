//! Inline formatting state and span-list helpers.

use quire_idf::TextSpan;

/// Active inline containers. Nesting counts, so `***x***` stays bold and
/// italic until both closers are seen.
#[derive(Debug, Default)]
pub(crate) struct InlineState {
    bold: usize,
    italic: usize,
    strike: usize,
    links: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InlineMark {
    Emphasis,
    Strong,
    Strikethrough,
    Link,
}

impl InlineState {
    pub(crate) fn open(&mut self, mark: InlineMark, link: Option<String>) {
        match mark {
            InlineMark::Emphasis => self.italic += 1,
            InlineMark::Strong => self.bold += 1,
            InlineMark::Strikethrough => self.strike += 1,
            InlineMark::Link => self.links.push(link.unwrap_or_default()),
        }
    }

    pub(crate) fn close(&mut self, mark: InlineMark) {
        match mark {
            InlineMark::Emphasis => self.italic = self.italic.saturating_sub(1),
            InlineMark::Strong => self.bold = self.bold.saturating_sub(1),
            InlineMark::Strikethrough => self.strike = self.strike.saturating_sub(1),
            InlineMark::Link => {
                self.links.pop();
            }
        }
    }

    pub(crate) fn span(&self, text: &str) -> TextSpan {
        TextSpan {
            text: text.to_string(),
            bold: self.bold > 0,
            italic: self.italic > 0,
            code: false,
            strikethrough: self.strike > 0,
            link: self.links.last().cloned(),
        }
    }

    /// Code spans keep strike and link but never bold or italic.
    pub(crate) fn code_span(&self, text: &str) -> TextSpan {
        TextSpan {
            bold: false,
            italic: false,
            code: true,
            ..self.span(text)
        }
    }
}

/// Appends `span`, merging it into the previous span when formats match.
pub(crate) fn push_span(spans: &mut Vec<TextSpan>, span: TextSpan) {
    if span.text.is_empty() {
        return;
    }
    if let Some(last) = spans.last_mut()
        && last.same_format(&span)
    {
        last.text.push_str(&span.text);
        return;
    }
    spans.push(span);
}

/// Strips outer whitespace from the sequence and drops spans left empty.
pub(crate) fn trim_spans(mut spans: Vec<TextSpan>) -> Vec<TextSpan> {
    while let Some(first) = spans.first_mut() {
        let trimmed = first.text.trim_start();
        if trimmed.is_empty() {
            spans.remove(0);
        } else {
            first.text = trimmed.to_string();
            break;
        }
    }
    while let Some(last) = spans.last_mut() {
        let trimmed = last.text.trim_end();
        if trimmed.is_empty() {
            spans.pop();
        } else {
            last.text.truncate(trimmed.len());
            break;
        }
    }
    spans
}

/// Removes the first `count` bytes of text from the front of `spans`.
pub(crate) fn drop_prefix(spans: &mut Vec<TextSpan>, mut count: usize) {
    while count > 0 && !spans.is_empty() {
        let len = spans[0].text.len();
        if len <= count {
            spans.remove(0);
            count -= len;
        } else {
            spans[0].text.drain(..count);
            count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_marks_combine() {
        let mut state = InlineState::default();
        state.open(InlineMark::Strong, None);
        state.open(InlineMark::Emphasis, None);
        let span = state.span("x");
        assert!(span.bold && span.italic);
        state.close(InlineMark::Emphasis);
        let span = state.span("y");
        assert!(span.bold && !span.italic);
    }

    #[test]
    fn test_code_span_drops_bold_keeps_link() {
        let mut state = InlineState::default();
        state.open(InlineMark::Strong, None);
        state.open(InlineMark::Link, Some("https://x.dev".into()));
        let span = state.code_span("f()");
        assert!(span.code && !span.bold);
        assert_eq!(span.link.as_deref(), Some("https://x.dev"));
    }

    #[test]
    fn test_push_span_merges_same_format() {
        let mut spans = Vec::new();
        push_span(&mut spans, TextSpan::plain("["));
        push_span(&mut spans, TextSpan::plain("!NOTE"));
        push_span(&mut spans, TextSpan::plain("]"));
        push_span(&mut spans, TextSpan::plain(" x").bold());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "[!NOTE]");
    }

    #[test]
    fn test_trim_and_drop_prefix() {
        let mut spans = trim_spans(vec![
            TextSpan::plain("  "),
            TextSpan::plain(" ab").bold(),
            TextSpan::plain("cd  "),
        ]);
        assert_eq!(spans[0].text, "ab");
        assert_eq!(spans[1].text, "cd");
        drop_prefix(&mut spans, 3);
        assert_eq!(spans, vec![TextSpan::plain("d")]);
    }
}
