//! Canvas load/save helpers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::canvas::CanvasDocument;

/// Raw outcome of reading a canvas file.
///
/// Blank and malformed files stay distinguishable here; [`ParsePolicy`]
/// decides whether the difference matters.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasLoad {
    Parsed(CanvasDocument),
    /// File exists but holds only whitespace.
    Blank,
    /// File contents are not a canvas document.
    Malformed { reason: String },
}

/// How to treat a canvas that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Malformed contents degrade to an empty document.
    #[default]
    Lenient,
    /// Malformed contents are an error. Blank files are still empty.
    Strict,
}

impl CanvasLoad {
    pub fn into_document(self, policy: ParsePolicy) -> Result<CanvasDocument> {
        match self {
            CanvasLoad::Parsed(doc) => Ok(doc),
            CanvasLoad::Blank => Ok(CanvasDocument::empty()),
            CanvasLoad::Malformed { reason } => match policy {
                ParsePolicy::Lenient => Ok(CanvasDocument::empty()),
                ParsePolicy::Strict => bail!("malformed canvas: {reason}"),
            },
        }
    }
}

/// Read and classify a canvas file.
///
/// Only I/O failures are errors; invalid UTF-8 and parse failures come back
/// as [`CanvasLoad::Malformed`].
pub fn load_canvas(path: &Path) -> Result<CanvasLoad> {
    let bytes = fs::read(path).with_context(|| format!("read canvas {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(contents) => Ok(classify(&contents, path)),
        Err(err) => {
            warn!(path = %path.display(), err = %err, "canvas is not utf-8");
            Ok(CanvasLoad::Malformed {
                reason: err.to_string(),
            })
        }
    }
}

fn classify(contents: &str, path: &Path) -> CanvasLoad {
    if contents.trim().is_empty() {
        debug!(path = %path.display(), "canvas is blank");
        return CanvasLoad::Blank;
    }
    match serde_json::from_str::<CanvasDocument>(contents) {
        Ok(doc) => {
            debug!(
                path = %path.display(),
                nodes = doc.nodes.len(),
                edges = doc.edges.len(),
                "canvas loaded"
            );
            CanvasLoad::Parsed(doc)
        }
        Err(err) => {
            warn!(path = %path.display(), err = %err, "canvas is malformed");
            CanvasLoad::Malformed {
                reason: err.to_string(),
            }
        }
    }
}

/// Serialize a canvas the way the host application formats it: tab-indented
/// JSON with a trailing newline.
pub fn render_canvas(doc: &CanvasDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser).context("serialize canvas")?;
    let mut payload = String::from_utf8(buf).context("canvas json is not utf-8")?;
    payload.push('\n');
    Ok(payload)
}

/// Atomically overwrite the canvas on disk (temp file + rename).
pub fn write_canvas(path: &Path, doc: &CanvasDocument) -> Result<()> {
    debug!(path = %path.display(), nodes = doc.nodes.len(), "writing canvas");
    let payload = render_canvas(doc)?;
    let tmp_path = path.with_extension("canvas.tmp");
    fs::write(&tmp_path, payload)
        .with_context(|| format!("write temp canvas {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace canvas {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestVault, daily_example};

    #[test]
    fn write_then_load_preserves_document() {
        let vault = TestVault::new().expect("vault");
        let path = vault.path().join("Daily.canvas");
        let doc = daily_example();

        write_canvas(&path, &doc).expect("write");
        let loaded = load_canvas(&path).expect("load");
        assert_eq!(loaded, CanvasLoad::Parsed(doc));
    }

    #[test]
    fn output_is_tab_indented_with_trailing_newline() {
        let rendered = render_canvas(&daily_example()).expect("render");
        assert!(rendered.starts_with("{\n\t\"nodes\": ["));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn blank_file_is_blank() {
        let vault = TestVault::new().expect("vault");
        let path = vault.write_raw("Daily.canvas", "  \n").expect("write");
        let loaded = load_canvas(&path).expect("load");
        assert_eq!(loaded, CanvasLoad::Blank);
        assert_eq!(
            loaded.into_document(ParsePolicy::Strict).expect("blank is empty"),
            CanvasDocument::empty()
        );
    }

    #[test]
    fn malformed_file_depends_on_policy() {
        let vault = TestVault::new().expect("vault");
        let path = vault.write_raw("Daily.canvas", "{\"nodes\": [").expect("write");
        let loaded = load_canvas(&path).expect("load");
        assert!(matches!(loaded, CanvasLoad::Malformed { .. }));

        let lenient = loaded
            .clone()
            .into_document(ParsePolicy::Lenient)
            .expect("lenient");
        assert_eq!(lenient, CanvasDocument::empty());

        let err = loaded.into_document(ParsePolicy::Strict).expect_err("strict");
        assert!(err.to_string().contains("malformed canvas"));
    }

    #[test]
    fn invalid_utf8_is_malformed_not_an_error() {
        let vault = TestVault::new().expect("vault");
        let path = vault.path().join("Daily.canvas");
        fs::write(&path, [0xff, 0xfe, b'{']).expect("write");

        let loaded = load_canvas(&path).expect("load");
        assert!(matches!(loaded, CanvasLoad::Malformed { .. }));
        assert_eq!(
            loaded
                .clone()
                .into_document(ParsePolicy::Lenient)
                .expect("lenient"),
            CanvasDocument::empty()
        );
        assert!(loaded.into_document(ParsePolicy::Strict).is_err());
    }

    #[test]
    fn node_missing_geometry_still_parses() {
        let vault = TestVault::new().expect("vault");
        let path = vault
            .write_raw("Daily.canvas", r#"{"nodes":[{"type":"text","x":1}],"edges":[]}"#)
            .expect("write");
        let CanvasLoad::Parsed(doc) = load_canvas(&path).expect("load") else {
            panic!("expected parsed canvas");
        };
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].region(), None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let vault = TestVault::new().expect("vault");
        assert!(load_canvas(&vault.path().join("gone.canvas")).is_err());
    }
}
