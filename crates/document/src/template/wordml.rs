//! The subset of WordprocessingML a template contributes: style names, the
//! body's section properties, and the paragraphs, runs, fields, and tables of
//! header and footer parts.

use super::TemplateError;
use crate::model::{Block, Field, Inline, Paragraph, Run};
use crate::table::{Cell, GridSlot, Table, TableRow};
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quire_style::TextAlign;

fn xml_error(part: &str, message: impl ToString) -> TemplateError {
    TemplateError::Xml {
        part: part.to_string(),
        message: message.to_string(),
    }
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == name)
        .and_then(|a| {
            let raw = std::str::from_utf8(a.value.as_ref()).ok()?;
            Some(unescape(raw).map(|v| v.into_owned()).unwrap_or_else(|_| raw.to_string()))
        })
}

fn attr_val(e: &BytesStart<'_>) -> Option<String> {
    attr(e, b"val")
}

/// `<w:b/>` is on; `w:val="0"`, `"false"` or `"off"` turns it off.
fn toggle(e: &BytesStart<'_>) -> bool {
    !matches!(attr_val(e).as_deref(), Some("0" | "false" | "off" | "none"))
}

fn resolve_entity(name: &str) -> Option<String> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    resolve_predefined_entity(name).map(str::to_string)
}

/// Word stores a few built-in names in lower case ("heading 1"); expose them
/// the way they appear in the UI.
fn ui_style_name(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let builtin = matches!(lower.as_str(), "caption" | "header" | "footer")
        || lower
            .strip_prefix("heading ")
            .is_some_and(|n| n.len() == 1 && n.as_bytes()[0].is_ascii_digit());
    if name == lower && builtin {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    } else {
        name.to_string()
    }
}

/// Names of every `w:style` in a styles part.
pub(crate) fn parse_style_names(xml: &str, part: &str) -> Result<Vec<String>, TemplateError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut names = Vec::new();
    let mut depth_in_style = 0usize;

    loop {
        match reader.read_event_into(&mut buf).map_err(|e| xml_error(part, e))? {
            Event::Start(e) => {
                if e.local_name().as_ref() == b"style" {
                    depth_in_style = 1;
                } else if depth_in_style > 0 {
                    depth_in_style += 1;
                    if depth_in_style == 2 && e.local_name().as_ref() == b"name" {
                        names.extend(attr_val(&e).map(|n| ui_style_name(&n)));
                    }
                }
            }
            Event::Empty(e) => {
                if depth_in_style == 1 && e.local_name().as_ref() == b"name" {
                    names.extend(attr_val(&e).map(|n| ui_style_name(&n)));
                }
            }
            Event::End(_) => {
                depth_in_style = depth_in_style.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(names)
}

/// The body's own `<w:sectPr>`, verbatim. Section breaks inside paragraph
/// properties are skipped. Reads the whole part, failing on malformed XML.
pub(crate) fn parse_body_section(xml: &str, part: &str) -> Result<Option<String>, TemplateError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut section = None;

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event().map_err(|e| xml_error(part, e))? {
            Event::Start(e) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"body" if body_depth.is_none() => body_depth = Some(depth),
                    b"sectPr" if body_depth.is_some_and(|body| depth == body + 1) => {
                        let end = e.to_end().into_owned();
                        reader.read_to_end(end.name()).map_err(|e| xml_error(part, e))?;
                        depth -= 1;
                        let after = reader.buffer_position() as usize;
                        section = Some(xml[before..after].to_string());
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"sectPr" && body_depth == Some(depth) {
                    let after = reader.buffer_position() as usize;
                    section = Some(xml[before..after].to_string());
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => return Ok(section),
            _ => {}
        }
    }
}

enum Container {
    Root(Vec<Block>),
    Table(Vec<Vec<Cell>>),
    Row(Vec<Cell>),
    Cell(Vec<Block>),
}

/// A field being read. Complex fields run from a `begin` to an `end` field
/// character; fields nested inside them fold into the outer result.
struct FieldState {
    field: Field,
    in_result: bool,
    nested: usize,
    simple: bool,
}

impl FieldState {
    fn new(instruction: String, in_result: bool, simple: bool) -> Self {
        Self {
            field: Field {
                instruction,
                cached: Run::default(),
            },
            in_result,
            nested: 0,
            simple,
        }
    }
}

#[derive(Default)]
struct PartState {
    containers: Vec<Container>,
    paragraph: Option<Paragraph>,
    run: Option<Run>,
    field: Option<FieldState>,
    in_text: bool,
    in_instruction: bool,
    in_paragraph_props: bool,
}

impl PartState {
    fn push_block(&mut self, block: Block) {
        match self.containers.last_mut() {
            Some(Container::Root(blocks)) | Some(Container::Cell(blocks)) => blocks.push(block),
            _ => {}
        }
    }

    fn flush_run(&mut self) {
        if let (Some(run), Some(paragraph)) = (self.run.as_mut(), self.paragraph.as_mut())
            && !run.text.is_empty()
        {
            paragraph.push_run(Run::new(std::mem::take(&mut run.text), run.props.clone()));
        }
    }

    fn finish_field(&mut self) {
        if let Some(state) = self.field.take()
            && let Some(paragraph) = self.paragraph.as_mut()
        {
            let mut field = state.field;
            field.instruction = field.instruction.trim().to_string();
            paragraph.inlines.push(Inline::Field(field));
        }
    }

    fn field_char(&mut self, kind: Option<&str>) {
        let Some(kind) = kind else { return };
        let Some(state) = self.field.as_mut() else {
            if kind == "begin" {
                self.flush_run();
                let mut state = FieldState::new(String::new(), false, false);
                if let Some(run) = self.run.as_ref() {
                    state.field.cached.props = run.props.clone();
                }
                self.field = Some(state);
            }
            return;
        };
        match kind {
            "begin" => state.nested += 1,
            "separate" if state.nested == 0 => state.in_result = true,
            "end" if state.nested > 0 => state.nested -= 1,
            "end" if !state.simple => self.finish_field(),
            _ => {}
        }
    }

    fn start(&mut self, e: &BytesStart<'_>, empty: bool) {
        match e.local_name().as_ref() {
            b"tbl" if !empty => self.containers.push(Container::Table(Vec::new())),
            b"tr" if !empty => self.containers.push(Container::Row(Vec::new())),
            b"tc" if !empty => self.containers.push(Container::Cell(Vec::new())),
            b"p" => {
                if empty {
                    self.push_block(Block::Paragraph(Paragraph::new()));
                } else {
                    self.paragraph = Some(Paragraph::new());
                }
            }
            b"pPr" if !empty => self.in_paragraph_props = true,
            b"pStyle" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.style = attr_val(e);
                }
            }
            b"jc" if self.in_paragraph_props => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.align = match attr_val(e).as_deref() {
                        Some("center") => Some(TextAlign::Center),
                        Some("right" | "end") => Some(TextAlign::Right),
                        Some("both" | "distribute") => Some(TextAlign::Justify),
                        Some(_) => Some(TextAlign::Left),
                        None => None,
                    };
                }
            }
            b"fldSimple" if self.paragraph.is_some() && self.field.is_none() => {
                let instruction = attr(e, b"instr").unwrap_or_default();
                self.field = Some(FieldState::new(instruction, true, true));
                if empty {
                    self.finish_field();
                }
            }
            b"fldChar" => self.field_char(attr(e, b"fldCharType").as_deref()),
            b"instrText" if !empty => self.in_instruction = true,
            b"r" if !empty && self.paragraph.is_some() => self.run = Some(Run::default()),
            b"t" if !empty => self.in_text = true,
            name => {
                if let Some(run) = self.run.as_mut() {
                    match name {
                        b"b" => run.props.bold = toggle(e),
                        b"i" => run.props.italic = toggle(e),
                        b"strike" => run.props.strike = toggle(e),
                        b"u" => run.props.underline = toggle(e),
                        b"rStyle" => run.props.style = attr_val(e),
                        b"tab" if self.field.is_none() => run.text.push('\t'),
                        b"br" | b"cr" => {
                            self.flush_run();
                            if let Some(p) = self.paragraph.as_mut() {
                                p.inlines.push(Inline::Break);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn end(&mut self, local_name: &[u8]) {
        match local_name {
            b"t" => self.in_text = false,
            b"instrText" => self.in_instruction = false,
            b"pPr" => self.in_paragraph_props = false,
            b"fldSimple" if self.field.as_ref().is_some_and(|state| state.simple) => {
                self.finish_field()
            }
            b"r" => {
                self.flush_run();
                self.run = None;
            }
            b"p" => {
                self.finish_field();
                if let Some(p) = self.paragraph.take() {
                    self.push_block(Block::Paragraph(p));
                }
            }
            b"tc" => {
                if let Some(Container::Cell(blocks)) = self.containers.pop()
                    && let Some(Container::Row(cells)) = self.containers.last_mut()
                {
                    cells.push(Cell {
                        blocks,
                        ..Cell::empty()
                    });
                }
            }
            b"tr" => {
                if let Some(Container::Row(cells)) = self.containers.pop()
                    && let Some(Container::Table(rows)) = self.containers.last_mut()
                {
                    rows.push(cells);
                }
            }
            b"tbl" => {
                if let Some(Container::Table(rows)) = self.containers.pop() {
                    self.push_block(Block::Table(grid_from_rows(rows)));
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_instruction {
            if let Some(state) = self.field.as_mut()
                && state.nested == 0
                && !state.in_result
            {
                state.field.instruction.push_str(text);
            }
            return;
        }
        if !self.in_text {
            return;
        }
        match self.field.as_mut() {
            Some(state) if state.in_result && state.nested == 0 => {
                let cached = &mut state.field.cached;
                if cached.text.is_empty()
                    && let Some(run) = self.run.as_ref()
                {
                    cached.props = run.props.clone();
                }
                cached.text.push_str(text);
            }
            Some(_) => {}
            None => {
                if let Some(run) = self.run.as_mut() {
                    run.text.push_str(text);
                }
            }
        }
    }
}

fn grid_from_rows(rows: Vec<Vec<Cell>>) -> Table {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let rows = rows
        .into_iter()
        .map(|cells| {
            let mut slots: Vec<GridSlot> = cells.into_iter().map(GridSlot::Cell).collect();
            slots.resize_with(columns, || GridSlot::Cell(Cell::empty()));
            TableRow {
                slots,
                ..Default::default()
            }
        })
        .collect();
    Table {
        rows,
        ..Default::default()
    }
}

/// Block content of a header or footer part.
pub(crate) fn parse_blocks(xml: &str, part: &str) -> Result<Vec<Block>, TemplateError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    let mut state = PartState {
        containers: vec![Container::Root(Vec::new())],
        ..Default::default()
    };

    loop {
        match reader.read_event_into(&mut buf).map_err(|e| xml_error(part, e))? {
            Event::Start(e) => state.start(&e, false),
            Event::Empty(e) => state.start(&e, true),
            Event::End(e) => state.end(e.local_name().as_ref()),
            Event::Text(e) => {
                let raw = std::str::from_utf8(e.as_ref()).map_err(|e| xml_error(part, e))?;
                let text = unescape(raw).map_err(|e| xml_error(part, e))?;
                state.text(&text);
            }
            Event::GeneralRef(e) => {
                let name = std::str::from_utf8(e.as_ref()).map_err(|e| xml_error(part, e))?;
                let resolved = resolve_entity(name)
                    .ok_or_else(|| xml_error(part, format!("unknown entity '&{};'", name)))?;
                state.text(&resolved);
            }
            Event::CData(e) => {
                let raw = std::str::from_utf8(e.as_ref()).map_err(|e| xml_error(part, e))?;
                state.text(raw);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    match state.containers.into_iter().next() {
        Some(Container::Root(blocks)) => Ok(blocks),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:latentStyles><w:lsdException w:name="Quote"/></w:latentStyles>
  <w:style w:type="paragraph" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/><w:basedOn w:val="Normal"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Corp"><w:name w:val="Corporate &amp; Co"/></w:style>
</w:styles>"#;

    #[test]
    fn test_style_names_use_ui_spelling() {
        let names = parse_style_names(STYLES, "word/styles.xml").unwrap();
        assert_eq!(names, vec!["Normal", "Heading 1", "Corporate & Co"]);
    }

    #[test]
    fn test_header_paragraphs_and_run_formatting() {
        let xml = r#"<w:hdr xmlns:w="w">
  <w:p><w:pPr><w:pStyle w:val="Header"/><w:jc w:val="center"/></w:pPr>
    <w:r><w:rPr><w:b/><w:i w:val="0"/></w:rPr><w:t xml:space="preserve">Report for </w:t></w:r>
    <w:r><w:t>{{client}}</w:t><w:tab/><w:t>A&amp;B</w:t></w:r>
  </w:p>
  <w:p/>
</w:hdr>"#;
        let blocks = parse_blocks(xml, "word/header1.xml").unwrap();
        assert_eq!(blocks.len(), 2);
        let p = blocks[0].as_paragraph().unwrap();
        assert_eq!(p.style.as_deref(), Some("Header"));
        assert_eq!(p.align, Some(TextAlign::Center));
        assert_eq!(p.text(), "Report for {{client}}\tA&B");
        let first = p.runs().next().unwrap();
        assert!(first.props.bold && !first.props.italic);
    }

    #[test]
    fn test_footer_table_cells() {
        let xml = r#"<w:ftr xmlns:w="w"><w:tbl>
  <w:tr>
    <w:tc><w:p><w:r><w:t>left</w:t></w:r></w:p></w:tc>
    <w:tc><w:p><w:r><w:t>right</w:t></w:r></w:p></w:tc>
  </w:tr>
  <w:tr><w:tc><w:p><w:r><w:t>only</w:t></w:r></w:p></w:tc></w:tr>
</w:tbl></w:ftr>"#;
        let blocks = parse_blocks(xml, "word/footer1.xml").unwrap();
        let table = blocks[0].as_table().unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell(0, 1).unwrap().text(), "right");
        assert_eq!(table.cell(1, 1).unwrap().text(), "");
    }

    #[test]
    fn test_complex_page_field_is_kept_as_field() {
        let xml = r#"<w:ftr xmlns:w="w"><w:p>
  <w:r><w:t xml:space="preserve">Page </w:t></w:r>
  <w:r><w:rPr><w:b/></w:rPr><w:fldChar w:fldCharType="begin"/></w:r>
  <w:r><w:instrText xml:space="preserve"> PAGE \* MERGEFORMAT </w:instrText></w:r>
  <w:r><w:fldChar w:fldCharType="separate"/></w:r>
  <w:r><w:rPr><w:b/></w:rPr><w:t>1</w:t></w:r>
  <w:r><w:fldChar w:fldCharType="end"/></w:r>
  <w:r><w:t xml:space="preserve"> of </w:t></w:r>
  <w:fldSimple w:instr=" NUMPAGES "><w:r><w:t>3</w:t></w:r></w:fldSimple>
</w:p></w:ftr>"#;
        let blocks = parse_blocks(xml, "word/footer1.xml").unwrap();
        let p = blocks[0].as_paragraph().unwrap();
        assert_eq!(p.text(), "Page 1 of 3");
        assert_eq!(p.inlines.len(), 4);
        let Inline::Field(page) = &p.inlines[1] else {
            panic!("expected a field, got {:?}", p.inlines[1]);
        };
        assert_eq!(page.kind(), "PAGE");
        assert_eq!(page.instruction, "PAGE \\* MERGEFORMAT");
        assert_eq!(page.cached.text, "1");
        assert!(page.cached.props.bold);
        assert!(matches!(&p.inlines[3], Inline::Field(total) if total.instruction == "NUMPAGES"));
        assert_eq!(p.runs().map(|r| r.text.as_str()).collect::<Vec<_>>(), vec!["Page ", " of "]);
    }

    #[test]
    fn test_nested_field_folds_into_outer_result() {
        let xml = r#"<w:hdr xmlns:w="w"><w:p>
  <w:r><w:fldChar w:fldCharType="begin"/></w:r>
  <w:r><w:instrText>IF </w:instrText></w:r>
  <w:r><w:fldChar w:fldCharType="begin"/></w:r>
  <w:r><w:instrText>PAGE</w:instrText></w:r>
  <w:r><w:fldChar w:fldCharType="end"/></w:r>
  <w:r><w:instrText> = 1 "First" ""</w:instrText></w:r>
  <w:r><w:fldChar w:fldCharType="separate"/></w:r>
  <w:r><w:t>First</w:t></w:r>
  <w:r><w:fldChar w:fldCharType="end"/></w:r>
</w:p></w:hdr>"#;
        let blocks = parse_blocks(xml, "word/header1.xml").unwrap();
        let p = blocks[0].as_paragraph().unwrap();
        assert_eq!(p.inlines.len(), 1);
        assert!(matches!(
            &p.inlines[0],
            Inline::Field(f) if f.kind() == "IF" && f.cached.text == "First"
        ));
    }

    #[test]
    fn test_body_section_is_kept_verbatim() {
        let section = concat!(
            r#"<w:sectPr><w:footerReference w:type="default" r:id="rId8"/>"#,
            r#"<w:pgSz w:w="12240" w:h="15840"/></w:sectPr>"#,
        );
        let xml = format!(
            r#"<w:document xmlns:w="w" xmlns:r="r"><w:body>
  <w:p><w:pPr><w:sectPr><w:pgSz w:w="1"/></w:sectPr></w:pPr></w:p>
  {}
</w:body></w:document>"#,
            section
        );
        let found = parse_body_section(&xml, "word/document.xml").unwrap();
        assert_eq!(found.as_deref(), Some(section));
    }

    #[test]
    fn test_body_without_section_and_empty_section() {
        let bare = r#"<w:document xmlns:w="w"><w:body><w:p/></w:body></w:document>"#;
        assert_eq!(parse_body_section(bare, "word/document.xml").unwrap(), None);
        let empty = r#"<w:document xmlns:w="w"><w:body><w:p/><w:sectPr/></w:body></w:document>"#;
        assert_eq!(
            parse_body_section(empty, "word/document.xml").unwrap().as_deref(),
            Some("<w:sectPr/>")
        );
        let malformed = "<w:document><w:body></w:document>";
        assert!(parse_body_section(malformed, "word/document.xml").is_err());
    }

    #[test]
    fn test_malformed_xml_is_reported_with_part() {
        let err = parse_blocks("<w:hdr><w:p></w:hdr>", "word/header2.xml").unwrap_err();
        assert!(matches!(err, TemplateError::Xml { ref part, .. } if part == "word/header2.xml"));
    }

    #[test]
    fn test_character_references() {
        assert_eq!(resolve_entity("#65").as_deref(), Some("A"));
        assert_eq!(resolve_entity("#x263A").as_deref(), Some("\u{263A}"));
        assert_eq!(resolve_entity("lt").as_deref(), Some("<"));
        assert!(resolve_entity("nbsp").is_none());
    }
}
