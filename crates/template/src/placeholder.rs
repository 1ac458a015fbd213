//! `{{identifier}}` replacement over a built document.

use crate::Variables;
use log::debug;
use once_cell::sync::Lazy;
use quire_document::{Document, Inline, Paragraph, Run};
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeSet;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("placeholder pattern is valid")
});

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Rewrites one stretch of text inlines if any placeholder in it resolved.
/// The runs collapse into one run per line with the first run's formatting.
fn substitute_segment(segment: Vec<Inline>, vars: &Variables, out: &mut Vec<Inline>) -> bool {
    let mut text = String::new();
    segment.iter().for_each(|inline| inline.push_text(&mut text));
    if !text.contains("{{") {
        out.extend(segment);
        return false;
    }
    let replaced = PLACEHOLDER.replace_all(&text, |caps: &Captures<'_>| match vars.get(&caps[1]) {
        Some(value) => value_text(value),
        None => caps[0].to_string(),
    });
    if replaced == text {
        out.extend(segment);
        return false;
    }

    let props = segment
        .iter()
        .flat_map(Inline::runs)
        .next()
        .map(|run| run.props.clone())
        .unwrap_or_default();
    for (i, line) in replaced.split('\n').enumerate() {
        if i > 0 {
            out.push(Inline::Break);
        }
        if !line.is_empty() {
            out.push(Inline::Run(Run::new(line, props.clone())));
        }
    }
    true
}

/// Substitutes within each stretch of text between images and fields, which
/// stay where they are.
fn substitute_paragraph(paragraph: &mut Paragraph, vars: &Variables) -> bool {
    if !paragraph.text().contains("{{") {
        return false;
    }
    let mut changed = false;
    let mut rebuilt = Vec::with_capacity(paragraph.inlines.len());
    let mut segment = Vec::new();
    for inline in paragraph.inlines.drain(..) {
        if inline.is_anchored() {
            changed |= substitute_segment(std::mem::take(&mut segment), vars, &mut rebuilt);
            rebuilt.push(inline);
        } else {
            segment.push(inline);
        }
    }
    changed |= substitute_segment(segment, vars, &mut rebuilt);
    paragraph.inlines = rebuilt;
    changed
}

/// Replaces known placeholders in every paragraph of the body, its tables,
/// and the headers and footers. Unknown placeholders stay verbatim.
/// Returns the number of paragraphs rewritten.
pub fn substitute_placeholders(document: &mut Document, vars: &Variables) -> usize {
    if vars.is_empty() {
        return 0;
    }
    let mut changed = 0;
    document.for_each_paragraph_mut(|p| {
        if substitute_paragraph(p, vars) {
            changed += 1;
        }
    });
    debug!("Placeholder substitution rewrote {} paragraph(s).", changed);
    changed
}

/// Identifiers of every placeholder still present in the document.
pub fn extract_placeholders(document: &Document) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    document.for_each_paragraph(|p| {
        let text = p.text();
        names.extend(PLACEHOLDER.captures_iter(&text).map(|caps| caps[1].to_string()));
    });
    names
}
