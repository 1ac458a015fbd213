//! # quire-document
//!
//! The output side of a conversion:
//! - **model**: paragraphs, runs, hyperlinks, images
//! - **table**: merge-aware table grids
//! - **visit**: paragraph traversal across body, tables, headers, and footers
//! - **template**: loading style catalogs and header/footer content from
//!   template bytes
//! - **writer**: the seam through which external serializers receive a
//!   finished document

pub mod model;
pub mod table;
pub mod template;
pub mod visit;
pub mod writer;

pub use model::{
    Block, BorderLine, Document, Field, HeaderFooter, Hyperlink, Inline, InlineImage, LinkTarget,
    MediaItem, Paragraph, Run, RunProps,
};
pub use table::{Cell, GridSlot, Table, TableBorders, TableRow, TableWidth, VerticalAlign};
pub use template::{DocxTemplateLoader, TemplateError, TemplateLoader};
pub use writer::{DocumentWriter, PlainTextWriter, WriteError};

pub use quire_style::{StyleCatalog, TextAlign};
