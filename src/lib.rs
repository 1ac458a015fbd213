//! # quire
//!
//! Converts Markdown into styled office documents, resolving abstract style
//! roles against the styles a template actually defines.
//!
//! ```no_run
//! use quire::Converter;
//!
//! let converter = Converter::builder()
//!     .with_template_file("report.docx")?
//!     .with_variable("client", "Acme")
//!     .build();
//! let conversion = converter.convert("# Report for {{client}}")?;
//! for event in &conversion.events {
//!     eprintln!("fallback: {event}");
//! }
//! # Ok::<(), quire::ConversionError>(())
//! ```

pub use quire_core::*;
