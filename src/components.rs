//! Replaceable renderers for the selection overlay.
//!
//! The overlay never calls a renderer directly. It asks an
//! [`OverlayComponents`] registry, which starts out holding the default
//! renderers and lets a host install its own for either slot. Slots are
//! `Arc`-shared so a registry can be cloned into every thread that draws.

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::OverlayConfig;
use crate::handle::{CornerHandleProps, CornerHandleRenderer, DefaultCornerHandle};
use crate::node::RectNode;
use crate::outline::{DefaultSelectionOutline, SelectionOutlineProps, SelectionOutlineRenderer};

/// Renderer slots used by the selection overlay.
#[derive(Clone)]
pub struct OverlayComponents {
    corner_handle: Arc<dyn CornerHandleRenderer>,
    selection_outline: Arc<dyn SelectionOutlineRenderer>,
}

impl Default for OverlayComponents {
    fn default() -> Self {
        Self::from_config(&OverlayConfig::default())
    }
}

impl fmt::Debug for OverlayComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayComponents").finish_non_exhaustive()
    }
}

impl OverlayComponents {
    /// Default renderers at the configured precision.
    #[must_use]
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            corner_handle: Arc::new(DefaultCornerHandle::new(config.precision)),
            selection_outline: Arc::new(DefaultSelectionOutline::new(config.precision)),
        }
    }

    /// Replace the corner handle renderer.
    #[must_use]
    pub fn with_corner_handle<R>(mut self, renderer: R) -> Self
    where
        R: CornerHandleRenderer + 'static,
    {
        debug!(renderer = std::any::type_name::<R>(), "corner handle renderer replaced");
        self.corner_handle = Arc::new(renderer);
        self
    }

    /// Replace the selection outline renderer.
    #[must_use]
    pub fn with_selection_outline<R>(mut self, renderer: R) -> Self
    where
        R: SelectionOutlineRenderer + 'static,
    {
        debug!(renderer = std::any::type_name::<R>(), "selection outline renderer replaced");
        self.selection_outline = Arc::new(renderer);
        self
    }

    #[must_use]
    pub fn corner_handle(&self) -> &dyn CornerHandleRenderer {
        self.corner_handle.as_ref()
    }

    #[must_use]
    pub fn selection_outline(&self) -> &dyn SelectionOutlineRenderer {
        self.selection_outline.as_ref()
    }

    /// Draw one corner handle with the installed renderer.
    #[must_use]
    pub fn render_corner_handle(&self, props: &CornerHandleProps) -> RectNode {
        self.corner_handle.render(props)
    }

    /// Draw the selection outline with the installed renderer.
    #[must_use]
    pub fn render_selection_outline(&self, props: &SelectionOutlineProps) -> RectNode {
        self.selection_outline.render(props)
    }
}
