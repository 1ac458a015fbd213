pub mod doc_assertions;
pub mod fixtures;

use quire::{Conversion, ConversionError, Converter};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Converts with the default configuration and no template.
pub fn convert(markdown: &str) -> Result<Conversion, ConversionError> {
    Converter::default().convert(markdown)
}

/// Converts against the given template bytes.
pub fn convert_with_template(
    markdown: &str,
    template: Vec<u8>,
) -> Result<Conversion, ConversionError> {
    Converter::builder().with_template_bytes(template).build().convert(markdown)
}
