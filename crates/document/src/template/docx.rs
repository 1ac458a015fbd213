use super::wordml::{parse_blocks, parse_body_section, parse_style_names};
use super::{TemplateError, TemplateLoader};
use crate::model::{Document, HeaderFooter};
use log::{debug, warn};
use quire_style::StyleCatalog;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;
use zip::result::ZipError;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

#[derive(Clone, Copy)]
enum PartKind {
    Header,
    Footer,
}

fn classify_part(name: &str) -> Option<PartKind> {
    let file = name.strip_prefix("word/")?;
    if file.contains('/') || !file.ends_with(".xml") {
        return None;
    }
    if file.starts_with("header") {
        Some(PartKind::Header)
    } else if file.starts_with("footer") {
        Some(PartKind::Footer)
    } else {
        None
    }
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &str,
) -> Result<Option<String>, TemplateError> {
    match archive.by_name(path) {
        Ok(mut file) => {
            let mut xml = String::new();
            file.read_to_string(&mut xml)?;
            Ok(Some(xml.trim_start_matches('\u{feff}').to_string()))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Loads `.docx` templates.
///
/// The body part must be present and well formed. Only its final section
/// properties are kept. A template without a styles part yields the minimal
/// catalog. Header and footer parts keep their source next to the parsed
/// blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxTemplateLoader;

impl DocxTemplateLoader {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateLoader for DocxTemplateLoader {
    fn load(&self, bytes: &[u8]) -> Result<Document, TemplateError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let body = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| TemplateError::MissingPart(DOCUMENT_PART.to_string()))?;
        let section = parse_body_section(&body, DOCUMENT_PART)?;

        let styles = match read_part(&mut archive, STYLES_PART)? {
            Some(xml) => {
                let mut catalog = StyleCatalog::minimal();
                catalog.extend(parse_style_names(&xml, STYLES_PART)?);
                catalog
            }
            None => {
                warn!(
                    "Template has no '{}'; only '{}' is available.",
                    STYLES_PART,
                    quire_style::UNIVERSAL_STYLE
                );
                StyleCatalog::minimal()
            }
        };

        let mut part_names: Vec<String> = archive
            .file_names()
            .filter(|name| classify_part(name).is_some())
            .map(String::from)
            .collect();
        part_names.sort();

        let mut document = Document {
            styles,
            section,
            ..Default::default()
        };
        for name in part_names {
            let Some(kind) = classify_part(&name) else { continue };
            let xml = read_part(&mut archive, &name)?.unwrap_or_default();
            let part = HeaderFooter {
                blocks: parse_blocks(&xml, &name)?,
                part: name,
                source: xml,
            };
            match kind {
                PartKind::Header => document.headers.push(part),
                PartKind::Footer => document.footers.push(part),
            }
        }

        debug!(
            "Loaded template: {} styles, {} header part(s), {} footer part(s), section \
             properties {}.",
            document.styles.len(),
            document.headers.len(),
            document.footers.len(),
            if document.section.is_some() { "kept" } else { "absent" }
        );
        Ok(document)
    }

    fn name(&self) -> &'static str {
        "docx"
    }
}
