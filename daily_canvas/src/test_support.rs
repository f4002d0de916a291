//! Test-only helpers for building canvas documents and temporary vaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

use crate::canvas::{CanvasDocument, CanvasNode};
use crate::io::config::DailyConfig;

/// Create a node with integer geometry and no optional attributes.
pub fn node(kind: &str, x: i64, y: i64, width: i64, height: i64) -> CanvasNode {
    let mut fields = Map::new();
    fields.insert("type".to_string(), json!(kind));
    fields.insert("x".to_string(), json!(x));
    fields.insert("y".to_string(), json!(y));
    fields.insert("width".to_string(), json!(width));
    fields.insert("height".to_string(), json!(height));
    CanvasNode { fields }
}

/// Create a labelled group node.
pub fn group_node(label: &str, x: i64, y: i64, width: i64, height: i64) -> CanvasNode {
    with_field(node("group", x, y, width, height), "label", label)
}

/// Create a file-backed node.
pub fn file_node(file: &str, x: i64, y: i64, width: i64, height: i64) -> CanvasNode {
    with_field(node("file", x, y, width, height), "file", file)
}

/// Create a text node, optionally labelled.
pub fn text_node(label: Option<&str>, x: i64, y: i64, width: i64, height: i64) -> CanvasNode {
    let node = with_field(node("text", x, y, width, height), "text", "note");
    match label {
        Some(label) => with_field(node, "label", label),
        None => node,
    }
}

fn with_field(mut node: CanvasNode, key: &str, value: &str) -> CanvasNode {
    node.fields
        .insert(key.to_string(), Value::String(value.to_string()));
    node
}

/// Wrap nodes in a document with no edges.
pub fn document(nodes: Vec<CanvasNode>) -> CanvasDocument {
    CanvasDocument {
        nodes,
        ..CanvasDocument::empty()
    }
}

/// Group `Daily` at (0,0)-(200,200) with one inside,
/// one touching and one outside node.
pub fn daily_example() -> CanvasDocument {
    document(vec![
        group_node("Daily", 0, 0, 200, 200),
        file_node("a.md", 10, 10, 20, 20),
        file_node("b.md", 0, 0, 20, 20),
        file_node("c.md", 300, 300, 10, 10),
    ])
}

/// Temporary vault directory that is removed on drop.
pub struct TestVault {
    dir: TempDir,
}

impl TestVault {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp vault")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw file contents at a vault-relative path, creating parents.
    pub fn write_raw(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Serialize `doc` to a vault-relative path.
    pub fn write_canvas(&self, relative: &str, doc: &CanvasDocument) -> Result<PathBuf> {
        let contents = serde_json::to_string(doc).context("serialize canvas")?;
        self.write_raw(relative, &contents)
    }

    pub fn read_raw(&self, relative: &str) -> Result<String> {
        let path = self.dir.path().join(relative);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }

    pub fn read_canvas(&self, relative: &str) -> Result<CanvasDocument> {
        let contents = self.read_raw(relative)?;
        serde_json::from_str(&contents).context("parse canvas")
    }

    /// Default config pointing journal notes at `Journal/`.
    pub fn config(&self) -> DailyConfig {
        DailyConfig {
            journal_dir: "Journal/".to_string(),
            ..DailyConfig::default()
        }
    }
}
