//! Per-build state shared by every assembler.

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::events::FallbackEvent;
use log::warn;
use quire_document::Document;
use quire_style::{StyleCategory, StyleResolver};
use quire_traits::ResourceProvider;

/// Containers (lists, quotes, admonitions) may nest this deep.
pub(crate) const MAX_NESTING: usize = 64;

pub(crate) struct RenderContext<'a> {
    pub resolver: &'a mut StyleResolver,
    pub config: &'a BuildConfig,
    pub resources: Option<&'a dyn ResourceProvider>,
    /// Receives embedded media; the body is assembled by the caller.
    pub document: &'a mut Document,
    pub events: &'a mut Vec<FallbackEvent>,
    nesting: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        resolver: &'a mut StyleResolver,
        config: &'a BuildConfig,
        resources: Option<&'a dyn ResourceProvider>,
        document: &'a mut Document,
        events: &'a mut Vec<FallbackEvent>,
    ) -> Self {
        Self {
            resolver,
            config,
            resources,
            document,
            events,
            nesting: 0,
        }
    }

    /// Resolves a category, recording any fallback as it happens so events
    /// stay in document order.
    pub fn style(&mut self, category: StyleCategory) -> String {
        let name = self.resolver.resolve(category).to_string();
        self.events
            .extend(self.resolver.take_fallbacks().into_iter().map(FallbackEvent::Style));
        name
    }

    /// Style fallbacks are logged by the resolver; everything else is logged here.
    pub fn record(&mut self, event: FallbackEvent) {
        warn!("{}", event);
        self.events.push(event);
    }

    pub fn enter(&mut self, kind: &'static str) -> Result<(), BuildError> {
        if self.nesting >= MAX_NESTING {
            return Err(BuildError::Unrenderable {
                kind,
                reason: format!("nested more than {} levels deep", MAX_NESTING),
            });
        }
        self.nesting += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }
}
