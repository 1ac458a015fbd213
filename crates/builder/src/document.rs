//! The orchestrating state machine.

use crate::config::BuildConfig;
use crate::context::RenderContext;
use crate::error::BuildError;
use crate::events::FallbackEvent;
use log::{debug, info};
use quire_document::{Document, DocxTemplateLoader, TemplateLoader};
use quire_idf::Node;
use quire_style::StyleResolver;
use quire_traits::ResourceProvider;
use quire_types::Length;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Uninitialized,
    Initialized,
    Populated,
    Finalized,
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildState::Uninitialized => "uninitialized",
            BuildState::Initialized => "initialized",
            BuildState::Populated => "populated",
            BuildState::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// A finished document and the fallbacks taken while building it.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub document: Document,
    pub events: Vec<FallbackEvent>,
}

/// Builds exactly one document.
#[derive(Debug)]
pub struct DocumentBuilder {
    config: Arc<BuildConfig>,
    loader: Arc<dyn TemplateLoader>,
    resources: Option<Arc<dyn ResourceProvider>>,
    state: BuildState,
    document: Document,
    resolver: Option<StyleResolver>,
    events: Vec<FallbackEvent>,
}

impl DocumentBuilder {
    pub fn new(config: Arc<BuildConfig>) -> Self {
        Self {
            config,
            loader: Arc::new(DocxTemplateLoader),
            resources: None,
            state: BuildState::Uninitialized,
            document: Document::default(),
            resolver: None,
            events: Vec::new(),
        }
    }

    pub fn with_template_loader(mut self, loader: Arc<dyn TemplateLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    fn expect_state(
        &self,
        expected: BuildState,
        operation: &'static str,
    ) -> Result<(), BuildError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BuildError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    /// Starts from the template's styles, headers, and footers, or from a
    /// blank document when there is no template.
    pub fn initialize(&mut self, template: Option<&[u8]>) -> Result<(), BuildError> {
        self.expect_state(BuildState::Uninitialized, "initialize")?;
        self.document = match template {
            Some(bytes) => {
                debug!(
                    "Loading template ({} bytes) with '{}' loader.",
                    bytes.len(),
                    self.loader.name()
                );
                let mut document = self.loader.load(bytes)?;
                document.body.clear();
                document
            }
            None => Document::minimal(),
        };
        self.resolver = Some(StyleResolver::new(
            Arc::clone(&self.config.styles),
            self.document.styles.clone(),
        ));
        self.state = BuildState::Initialized;
        Ok(())
    }

    /// Renders the nodes, in order, into the document body.
    pub fn populate(&mut self, nodes: &[Node]) -> Result<(), BuildError> {
        self.expect_state(BuildState::Initialized, "populate")?;
        let Some(resolver) = self.resolver.as_mut() else {
            return Err(BuildError::InvalidState {
                operation: "populate",
                state: self.state,
            });
        };

        let mut body = Vec::new();
        let mut ctx = RenderContext::new(
            resolver,
            &self.config,
            self.resources.as_deref(),
            &mut self.document,
            &mut self.events,
        );
        for node in nodes {
            ctx.render_node(node, &mut body, Length::ZERO)?;
        }
        self.document.body.extend(body);
        self.state = BuildState::Populated;
        Ok(())
    }

    /// Hands over the document. Serialization is a [`DocumentWriter`]'s job.
    ///
    /// [`DocumentWriter`]: quire_document::DocumentWriter
    pub fn finalize(&mut self) -> Result<BuildOutput, BuildError> {
        self.expect_state(BuildState::Populated, "finalize")?;
        self.state = BuildState::Finalized;
        self.resolver = None;
        let output = BuildOutput {
            document: std::mem::take(&mut self.document),
            events: std::mem::take(&mut self.events),
        };
        info!(
            "Document finalized: {} blocks, {} media item(s), {} fallback event(s).",
            output.document.body.len(),
            output.document.media.len(),
            output.events.len()
        );
        Ok(output)
    }
}
