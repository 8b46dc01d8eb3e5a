//! Corner resize handles.
//!
//! The renderer does not know which corner it is drawing. The overlay that
//! places handles picks the geometry (including negative sizes to mirror a
//! handle about its anchor) and this module turns that geometry into a node.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use serde::{Deserialize, Serialize};

use crate::node::RectNode;
use crate::precision::Precision;

/// Geometry and style for one corner handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerHandleProps {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class_name: String,
}

/// Something that can draw a corner handle.
///
/// Implemented by [`DefaultCornerHandle`] and by any matching closure, so a
/// host can swap in its own look through
/// [`OverlayComponents`](crate::components::OverlayComponents).
pub trait CornerHandleRenderer: Send + Sync {
    fn render(&self, props: &CornerHandleProps) -> RectNode;
}

impl<F> CornerHandleRenderer for F
where
    F: Fn(&CornerHandleProps) -> RectNode + Send + Sync,
{
    fn render(&self, props: &CornerHandleProps) -> RectNode {
        self(props)
    }
}

/// Draws a handle as a plain rectangle at the given position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DefaultCornerHandle {
    pub precision: Precision,
}

impl DefaultCornerHandle {
    #[must_use]
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

impl CornerHandleRenderer for DefaultCornerHandle {
    fn render(&self, props: &CornerHandleProps) -> RectNode {
        let p = self.precision;
        RectNode {
            class_name: props.class_name.clone(),
            x: Some(p.normalize(props.x)),
            y: Some(p.normalize(props.y)),
            width: p.normalize(props.width),
            height: p.normalize(props.height),
        }
    }
}
