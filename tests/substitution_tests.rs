mod common;

use common::doc_assertions::*;
use common::fixtures::*;
use common::{TestResult, init_logger};
use quire::document::{Block, Document, Paragraph, Run, RunProps};
use quire::template::{extract_placeholders, substitute_placeholders};
use quire::{Converter, Variables};
use serde_json::json;

fn vars(pairs: &[(&str, serde_json::Value)]) -> Variables {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn one_paragraph(runs: Vec<Run>) -> Document {
    let mut paragraph = Paragraph::new();
    for run in runs {
        paragraph.push_run(run);
    }
    let mut doc = Document::minimal();
    doc.body.push(Block::Paragraph(paragraph));
    doc
}

#[test]
fn test_placeholder_split_across_runs_keeps_first_run_format() {
    init_logger();
    let bold_italic = RunProps::default().bold().italic();
    let mut doc = one_paragraph(vec![
        Run::new("Hello {{na", bold_italic.clone()),
        Run::new("me}}", RunProps::default()),
    ]);

    assert_eq!(substitute_placeholders(&mut doc, &vars(&[("name", json!("Ada"))])), 1);
    let paragraph = body_paragraphs(&doc)[0];
    assert_eq!(paragraph.text(), "Hello Ada");
    let runs: Vec<_> = paragraph.runs().collect();
    assert_eq!(runs.len(), 1);
    assert!(runs[0].props.bold && runs[0].props.italic);
}

#[test]
fn test_unknown_placeholder_leaves_paragraph_untouched() {
    let original = one_paragraph(vec![
        Run::new("Hello ", RunProps::default().bold()),
        Run::plain("{{name}}"),
    ]);
    let mut doc = original.clone();
    assert_eq!(substitute_placeholders(&mut doc, &vars(&[("other", json!("x"))])), 0);
    assert_eq!(doc.body, original.body);
    assert_eq!(extract_placeholders(&doc).into_iter().collect::<Vec<_>>(), vec!["name"]);
}

#[test]
fn test_non_string_values_use_json_text() {
    let mut doc = one_paragraph(vec![Run::plain("{{count}} items, paid: {{paid}}")]);
    substitute_placeholders(&mut doc, &vars(&[("count", json!(3)), ("paid", json!(false))]));
    assert_eq!(doc.body_text(), "3 items, paid: false");
}

#[test]
fn test_template_headers_and_footers_are_filled() -> TestResult {
    init_logger();
    let template = template_zip(&[
        (DOCUMENT_PART, body_xml("x")),
        (STYLES_PART, styles_xml(&["Normal"])),
        ("word/header1.xml", header_xml(&["{{client}} report", "{{unknown}}"])),
        ("word/footer1.xml", footer_xml("Prepared by {{author}}")),
    ]);
    let converter = Converter::builder()
        .with_template_bytes(template)
        .with_variable("client", "Acme")
        .with_variable("author", "Ada")
        .build();
    let conversion = converter.convert("Body")?;
    let doc = &conversion.document;

    let header: Vec<_> = doc.headers[0].blocks.iter().filter_map(Block::as_paragraph).collect();
    assert_eq!(header[0].text(), "Acme report");
    assert!(header[0].runs().next().unwrap().props.bold);
    assert_eq!(header[1].text(), "{{unknown}}");
    assert_eq!(doc.footers[0].blocks[0].as_paragraph().unwrap().text(), "Prepared by Ada");
    Ok(())
}

#[test]
fn test_source_blocks_and_loops_render_before_parsing() -> TestResult {
    init_logger();
    let converter = Converter::builder()
        .with_variable("draft", true)
        .with_variable("items", json!(["alpha", "beta"]))
        .build();
    let source = "{{#if draft}}**DRAFT**{{/if}}\n\n{{#each items}}\n- {{this}}\n{{/each}}\n";
    let conversion = converter.convert(source)?;
    let texts = paragraph_texts(&conversion.document);
    assert_eq!(texts, vec!["DRAFT", "• alpha", "• beta"]);
    assert!(body_paragraphs(&conversion.document)[0].runs().next().unwrap().props.bold);
    Ok(())
}

#[test]
fn test_markdown_in_variables_is_parsed() -> TestResult {
    let converter = Converter::builder().with_variable("who", "**Ada**").build();
    let conversion = converter.convert("Hi {{who}}")?;
    let paragraph = body_paragraphs(&conversion.document)[0];
    assert_eq!(paragraph.text(), "Hi Ada");
    assert!(paragraph.runs().any(|r| r.text == "Ada" && r.props.bold));
    Ok(())
}

#[test]
fn test_without_variables_placeholders_survive() -> TestResult {
    let conversion = Converter::default().convert("Hello {{name}}")?;
    assert_eq!(conversion.document.body_text(), "Hello {{name}}");
    Ok(())
}

#[test]
fn test_unclosed_block_is_a_substitution_failure() {
    init_logger();
    let converter = Converter::builder().with_variable("x", 1).build();
    let err = converter.convert("{{#if x}}\nnever closed\n").unwrap_err();
    assert_eq!(err.kind(), "substitution");
    assert!(err.message().starts_with("Variable substitution failed"));
}
