//! The conversion pipeline: render variables into the source, parse, build,
//! then fill placeholders left in the finished document.

use crate::config::ConverterConfig;
use crate::error::ConversionError;
use log::{debug, info};
use quire_builder::{BuildConfig, BuildOutput, DocumentBuilder, FallbackEvent};
use quire_document::{Document, DocumentWriter, DocxTemplateLoader, TemplateError, TemplateLoader};
use quire_markdown::{decode_source, parse_markdown, read_source};
use quire_resource::FilesystemResourceProvider;
use quire_style::{AdmonitionPalette, StyleMapping, TableTheme};
use quire_template::{SourceRenderer, Variables, substitute_placeholders};
use quire_traits::ResourceProvider;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// The result of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: Document,
    /// Non-fatal fallbacks, in the order they were taken.
    pub events: Vec<FallbackEvent>,
}

/// A builder for creating a [`Converter`].
pub struct ConverterBuilder {
    config: ConverterConfig,
    template: Option<Arc<[u8]>>,
    loader: Arc<dyn TemplateLoader>,
    resources: Option<Arc<dyn ResourceProvider>>,
    variables: Variables,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self {
            config: ConverterConfig::default(),
            template: None,
            loader: Arc::new(DocxTemplateLoader),
            resources: None,
            variables: Variables::new(),
        }
    }
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_styles(mut self, styles: StyleMapping) -> Self {
        self.config.styles = styles;
        self
    }

    pub fn with_table_theme(mut self, theme: TableTheme) -> Self {
        self.config.table_theme = theme;
        self
    }

    pub fn with_admonitions(mut self, palette: AdmonitionPalette) -> Self {
        self.config.admonitions = palette;
        self
    }

    /// Template bytes, shared read-only by every conversion.
    pub fn with_template_bytes(mut self, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.template = Some(bytes.into());
        self
    }

    /// Reads template bytes from a file. The template is parsed on each
    /// conversion, not here.
    pub fn with_template_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            TemplateError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read template from '{}': {}", path.display(), e),
            ))
        })?;
        Ok(self.with_template_bytes(bytes))
    }

    pub fn with_template_loader(mut self, loader: Arc<dyn TemplateLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            config: Arc::new(self.config.into_build_config()),
            template: self.template,
            loader: self.loader,
            resources: self.resources,
            variables: self.variables,
            renderer: SourceRenderer::new(),
        }
    }
}

/// Converts markdown into documents. Holds no per-conversion state, so one
/// converter can serve many threads.
#[derive(Debug)]
pub struct Converter {
    config: Arc<BuildConfig>,
    template: Option<Arc<[u8]>>,
    loader: Arc<dyn TemplateLoader>,
    resources: Option<Arc<dyn ResourceProvider>>,
    variables: Variables,
    renderer: SourceRenderer,
}

impl Default for Converter {
    fn default() -> Self {
        ConverterBuilder::new().build()
    }
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn convert(&self, source: &str) -> Result<Conversion, ConversionError> {
        self.run(source, &self.variables, self.resources.clone())
    }

    /// Like [`convert`](Self::convert), with these variables in place of the
    /// configured ones.
    pub fn convert_with_variables(
        &self,
        source: &str,
        variables: &Variables,
    ) -> Result<Conversion, ConversionError> {
        self.run(source, variables, self.resources.clone())
    }

    pub fn convert_bytes(&self, bytes: Vec<u8>) -> Result<Conversion, ConversionError> {
        let source = decode_source(bytes)?;
        self.convert(&source)
    }

    /// Images resolve relative to the file unless a resource provider was
    /// configured.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<Conversion, ConversionError> {
        let path = path.as_ref();
        let source = read_source(path)?;
        let resources = self.resources.clone().or_else(|| {
            let provider: Arc<dyn ResourceProvider> =
                Arc::new(FilesystemResourceProvider::beside(path));
            Some(provider)
        });
        self.run(&source, &self.variables, resources)
    }

    /// Converts and streams the result through `writer`, returning the
    /// fallback events.
    pub fn convert_to_writer(
        &self,
        source: &str,
        writer: &dyn DocumentWriter,
        out: &mut dyn Write,
    ) -> Result<Vec<FallbackEvent>, ConversionError> {
        let conversion = self.convert(source)?;
        debug!("Writing document with '{}' writer.", writer.name());
        writer.write(&conversion.document, out)?;
        Ok(conversion.events)
    }

    fn run(
        &self,
        source: &str,
        variables: &Variables,
        resources: Option<Arc<dyn ResourceProvider>>,
    ) -> Result<Conversion, ConversionError> {
        let start = Instant::now();
        let source = self.renderer.render(source, variables)?;
        let nodes = parse_markdown(&source);
        debug!("Parsed {} top-level node(s).", nodes.len());

        let mut builder = DocumentBuilder::new(Arc::clone(&self.config))
            .with_template_loader(Arc::clone(&self.loader));
        if let Some(resources) = resources {
            builder = builder.with_resources(resources);
        }
        builder.initialize(self.template.as_deref())?;
        builder.populate(&nodes)?;
        let BuildOutput { mut document, events } = builder.finalize()?;

        let replaced = substitute_placeholders(&mut document, variables);
        info!(
            "Converted {} node(s) in {:?}: {} fallback event(s), {} placeholder paragraph(s) \
             filled.",
            nodes.len(),
            start.elapsed(),
            events.len(),
            replaced
        );
        Ok(Conversion { document, events })
    }
}
