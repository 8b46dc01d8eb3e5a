//! Selection bounding outline.
//!
//! The outline is drawn inside a frame the overlay has already translated to
//! the selection's origin, so it carries a size and no position.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use serde::{Deserialize, Serialize};

use crate::node::RectNode;
use crate::precision::Precision;

/// Size and style for the selection outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOutlineProps {
    pub width: f64,
    pub height: f64,
    pub class_name: String,
}

/// Something that can draw the selection outline.
pub trait SelectionOutlineRenderer: Send + Sync {
    fn render(&self, props: &SelectionOutlineProps) -> RectNode;
}

impl<F> SelectionOutlineRenderer for F
where
    F: Fn(&SelectionOutlineProps) -> RectNode + Send + Sync,
{
    fn render(&self, props: &SelectionOutlineProps) -> RectNode {
        self(props)
    }
}

/// Draws the outline as an origin-anchored rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DefaultSelectionOutline {
    pub precision: Precision,
}

impl DefaultSelectionOutline {
    #[must_use]
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }
}

impl SelectionOutlineRenderer for DefaultSelectionOutline {
    fn render(&self, props: &SelectionOutlineProps) -> RectNode {
        RectNode {
            class_name: props.class_name.clone(),
            x: None,
            y: None,
            width: self.precision.normalize(props.width),
            height: self.precision.normalize(props.height),
        }
    }
}
