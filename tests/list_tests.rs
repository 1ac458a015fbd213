mod common;

use common::doc_assertions::*;
use common::fixtures::*;
use common::{TestResult, convert, convert_with_template, init_logger};

#[test]
fn test_numbering_resumes_after_nested_bullets() -> TestResult {
    init_logger();
    let conversion = convert("1. a\n   - x\n   - y\n2. b\n")?;
    assert_eq!(paragraph_texts(&conversion.document), vec!["1. a", "◦ x", "◦ y", "2. b"]);
    Ok(())
}

#[test]
fn test_bullets_cycle_by_depth() -> TestResult {
    let source = "- one\n  - two\n    - three\n      - four\n";
    let conversion = convert(source)?;
    assert_eq!(
        paragraph_texts(&conversion.document),
        vec!["• one", "◦ two", "▪ three", "• four"]
    );
    Ok(())
}

#[test]
fn test_ordered_list_honours_start_number() -> TestResult {
    let conversion = convert("7. seven\n8. eight\n")?;
    assert_eq!(paragraph_texts(&conversion.document), vec!["7. seven", "8. eight"]);
    Ok(())
}

#[test]
fn test_nesting_increases_indent() -> TestResult {
    let conversion = convert("- outer\n  - inner\n")?;
    let paragraphs = body_paragraphs(&conversion.document);
    assert!(paragraphs[1].indent_left > paragraphs[0].indent_left);
    assert!(paragraphs[0].indent_left.points() > 0.0);
    Ok(())
}

#[test]
fn test_list_paragraphs_use_list_style() -> TestResult {
    init_logger();
    let conversion = convert_with_template("- item\n\n1. first\n", full_template())?;
    assert_paragraph_style!(conversion.document, "• item", "List Paragraph");
    assert_paragraph_style!(conversion.document, "1. first", "List Paragraph");
    Ok(())
}

#[test]
fn test_item_formatting_follows_marker() -> TestResult {
    let conversion = convert("- **bold** item\n")?;
    let paragraph = body_paragraphs(&conversion.document)[0];
    let runs: Vec<_> = paragraph.runs().collect();
    assert_eq!(runs[0].text, "• ");
    assert!(!runs[0].props.bold);
    assert_eq!(runs[1].text, "bold");
    assert!(runs[1].props.bold);
    Ok(())
}
