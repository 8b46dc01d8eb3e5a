//! Renderable output: a rectangle element ready for the host compositor.
//!
//! A [`RectNode`] is the only thing the renderers in this crate produce. It is
//! plain data (tag plus attributes) and can leave the crate in three forms:
//! typed, via [`RectNode::attributes`] for hosts that build their own tree;
//! as SVG markup, via [`std::fmt::Display`]; or as JSON, via serde.
//!
//! Numeric attributes are expected to be normalized already. This module only
//! formats them.

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::precision::format_coord;

/// A `<rect>` element in the overlay's visual tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectNode {
    /// Opaque style class, forwarded verbatim.
    pub class_name: String,
    /// Left edge. `None` means the attribute is omitted, not zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Top edge. `None` means the attribute is omitted, not zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
}

impl RectNode {
    /// Element tag name.
    pub const TAG: &'static str = "rect";

    /// Attributes in emission order: `class`, `x`, `y`, `width`, `height`.
    ///
    /// Position attributes are skipped when absent.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(5);
        attrs.push(("class", self.class_name.clone()));
        if let Some(x) = self.x {
            attrs.push(("x", format_coord(x)));
        }
        if let Some(y) = self.y {
            attrs.push(("y", format_coord(y)));
        }
        attrs.push(("width", format_coord(self.width)));
        attrs.push(("height", format_coord(self.height)));
        attrs
    }

    /// JSON form as sent to a script-side compositor.
    ///
    /// Matches the serde form. Non-finite numbers become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::json!({
            "className": self.class_name,
            "width": self.width,
            "height": self.height,
        });
        if let Some(obj) = value.as_object_mut() {
            if let Some(x) = self.x {
                obj.insert("x".to_owned(), x.into());
            }
            if let Some(y) = self.y {
                obj.insert("y".to_owned(), y.into());
            }
        }
        value
    }
}

impl fmt::Display for RectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", Self::TAG)?;
        for (name, value) in self.attributes() {
            write!(f, " {name}=\"")?;
            write_escaped(f, &value)?;
            f.write_str("\"")?;
        }
        f.write_str("/>")
    }
}

/// Write `raw` escaped for use inside a double-quoted XML attribute.
fn write_escaped(f: &mut fmt::Formatter<'_>, raw: &str) -> fmt::Result {
    for ch in raw.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&apos;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}
