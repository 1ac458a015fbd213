use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const STYLES_PART: &str = "word/styles.xml";

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A PNG signature in front of bytes that do not decode.
pub const CORRUPT_PNG: &[u8] = b"\x89PNG\r\n\x1a\nthis is not an image";

/// A blank RGB PNG of the given pixel size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image::RgbImage::new(width, height)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

pub fn body_xml(text: &str) -> String {
    format!(
        concat!(
            r#"<w:document xmlns:w="{}"><w:body>"#,
            r#"<w:p><w:r><w:t>{}</w:t></w:r></w:p>"#,
            r#"</w:body></w:document>"#,
        ),
        WORDML_NS, text
    )
}

/// A styles part declaring `names`, written the way word processors store
/// built-in names (lowercase `heading 1`).
pub fn styles_xml(names: &[&str]) -> String {
    let mut xml = format!(r#"<w:styles xmlns:w="{}">"#, WORDML_NS);
    for name in names {
        let id: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="{}"/></w:style>"#,
            id, name
        ));
    }
    xml.push_str("</w:styles>");
    xml
}

pub fn header_xml(paragraphs: &[&str]) -> String {
    let mut xml = format!(r#"<w:hdr xmlns:w="{}">"#, WORDML_NS);
    for text in paragraphs {
        xml.push_str(&format!(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            text
        ));
    }
    xml.push_str("</w:hdr>");
    xml
}

pub fn footer_xml(text: &str) -> String {
    format!(
        r#"<w:ftr xmlns:w="{}"><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:ftr>"#,
        WORDML_NS, text
    )
}

/// A footer reading `<label>` followed by a live `PAGE` field.
pub fn page_footer_xml(label: &str) -> String {
    format!(
        concat!(
            r#"<w:ftr xmlns:w="{}"><w:p>"#,
            r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
            r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#,
            r#"<w:r><w:instrText xml:space="preserve"> PAGE </w:instrText></w:r>"#,
            r#"<w:r><w:fldChar w:fldCharType="separate"/></w:r>"#,
            r#"<w:r><w:t>1</w:t></w:r>"#,
            r#"<w:r><w:fldChar w:fldCharType="end"/></w:r>"#,
            r#"</w:p></w:ftr>"#,
        ),
        WORDML_NS, label
    )
}

/// Section properties referencing one default footer.
pub const SECTION_XML: &str = concat!(
    r#"<w:sectPr><w:footerReference w:type="default" r:id="rId7"/>"#,
    r#"<w:pgSz w:w="11906" w:h="16838"/></w:sectPr>"#,
);

/// A body holding `text` and ending in [`SECTION_XML`].
pub fn body_with_section_xml(text: &str) -> String {
    format!(
        concat!(
            r#"<w:document xmlns:w="{}" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p>{}</w:body></w:document>"#,
        ),
        WORDML_NS, text, SECTION_XML
    )
}

/// Zips `parts` into template bytes.
pub fn template_zip(parts: &[(&str, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// A template declaring `styles` with a throwaway body.
pub fn template_with_styles(styles: &[&str]) -> Vec<u8> {
    template_zip(&[
        (DOCUMENT_PART, body_xml("template body")),
        (STYLES_PART, styles_xml(styles)),
    ])
}

/// Every style the default mapping asks for.
pub fn full_template() -> Vec<u8> {
    template_with_styles(&[
        "Normal",
        "heading 1",
        "heading 2",
        "heading 3",
        "heading 4",
        "heading 5",
        "heading 6",
        "Quote",
        "Code Block",
        "Code Char",
        "List Paragraph",
        "Table Grid",
        "caption",
    ])
}
