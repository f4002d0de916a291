//! Canvas document model.
//!
//! Nodes are kept as the ordered JSON objects they were read as; the fields
//! the updater needs (`type`, `label`, `file`, geometry) are read on demand.
//! A load/save cycle therefore writes back every key, in its original
//! position, including explicit `null`s. A `file` key added to a node that had
//! none is appended after its existing keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::region::Region;

/// Node `type` that marks a labelled group region.
pub const GROUP_TYPE: &str = "group";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CanvasDocument {
    #[serde(default)]
    pub nodes: Vec<CanvasNode>,
    #[serde(default)]
    pub edges: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One canvas node, stored verbatim.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CanvasNode {
    pub fields: Map<String, Value>,
}

impl CanvasDocument {
    /// Document with no nodes and no edges.
    pub fn empty() -> Self {
        Self::default()
    }

    /// First group node carrying `label` that has usable geometry, in stored
    /// order.
    pub fn find_group(&self, label: &str) -> Option<(usize, Region)> {
        self.nodes.iter().enumerate().find_map(|(index, node)| {
            if !node.is_group() || node.label() != Some(label) {
                return None;
            }
            node.region().map(|region| (index, region))
        })
    }
}

impl CanvasNode {
    pub fn kind(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn label(&self) -> Option<&str> {
        self.str_field("label")
    }

    pub fn file(&self) -> Option<&str> {
        self.str_field("file")
    }

    pub fn set_file(&mut self, file: &str) {
        self.fields
            .insert("file".to_string(), Value::String(file.to_string()));
    }

    pub fn is_group(&self) -> bool {
        self.kind() == Some(GROUP_TYPE)
    }

    /// Axis-aligned bounding box, or `None` if any of `x`, `y`, `width`,
    /// `height` is missing or not a number.
    pub fn region(&self) -> Option<Region> {
        Some(Region::from_origin_size(
            self.coord("x")?,
            self.coord("y")?,
            self.coord("width")?,
            self.coord("height")?,
        ))
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn coord(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }
}
