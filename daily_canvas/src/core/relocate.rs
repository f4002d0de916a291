//! Group membership and node relocation.

use crate::canvas::CanvasDocument;

/// What a relocation pass did to the document.
///
/// Index lists are ascending positions in `CanvasDocument::nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelocationSummary {
    /// Position of the group node whose region was used.
    pub group_index: Option<usize>,
    /// Nodes strictly inside the group region (now pointing at the journal path).
    pub relocated: Vec<usize>,
    /// Subset of `relocated` whose `file` value actually changed.
    pub changed: Vec<usize>,
}

impl RelocationSummary {
    pub fn group_found(&self) -> bool {
        self.group_index.is_some()
    }
}

/// Point every node strictly inside the group labelled `group_name` at
/// `journal_path`.
///
/// Only the first group with a matching label and numeric geometry is
/// considered. Without one the document is left untouched. Node order is
/// preserved; nodes of any type are eligible, nodes without numeric geometry
/// never are.
pub fn relocate_group_members(
    doc: &mut CanvasDocument,
    group_name: &str,
    journal_path: &str,
) -> RelocationSummary {
    let Some((group_index, bounds)) = doc.find_group(group_name) else {
        return RelocationSummary::default();
    };

    let mut summary = RelocationSummary {
        group_index: Some(group_index),
        ..RelocationSummary::default()
    };
    for (index, node) in doc.nodes.iter_mut().enumerate() {
        let Some(region) = node.region() else {
            continue;
        };
        if !bounds.strictly_contains(&region) {
            continue;
        }
        summary.relocated.push(index);
        if node.file() != Some(journal_path) {
            node.set_file(journal_path);
            summary.changed.push(index);
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasNode;
    use crate::test_support::{document, file_node, group_node, text_node};

    const TODAY: &str = "Journal/2026-10-16.md";

    #[test]
    fn relocates_only_strictly_contained_nodes() {
        let mut doc = document(vec![
            group_node("Daily", 0, 0, 200, 200),
            file_node("a.md", 10, 10, 20, 20),
            file_node("b.md", 0, 0, 20, 20),
            file_node("c.md", 300, 300, 10, 10),
        ]);

        let summary = relocate_group_members(&mut doc, "Daily", TODAY);

        assert_eq!(summary.group_index, Some(0));
        assert_eq!(summary.relocated, vec![1]);
        assert_eq!(doc.nodes[1].file(), Some(TODAY));
        assert_eq!(doc.nodes[2].file(), Some("b.md"));
        assert_eq!(doc.nodes[3].file(), Some("c.md"));
        assert_eq!(doc.nodes[0].file(), None);
    }

    #[test]
    fn missing_group_leaves_document_untouched() {
        let mut doc = document(vec![
            group_node("Weekly", 0, 0, 200, 200),
            file_node("a.md", 10, 10, 20, 20),
        ]);
        let before = doc.clone();

        let summary = relocate_group_members(&mut doc, "Daily", TODAY);

        assert!(!summary.group_found());
        assert_eq!(doc, before);
    }

    #[test]
    fn label_on_non_group_node_is_not_a_group() {
        let mut doc = document(vec![
            text_node(Some("Daily"), 0, 0, 200, 200),
            file_node("a.md", 10, 10, 20, 20),
        ]);
        let summary = relocate_group_members(&mut doc, "Daily", TODAY);
        assert!(!summary.group_found());
        assert_eq!(doc.nodes[1].file(), Some("a.md"));
    }

    #[test]
    fn first_matching_group_wins() {
        let mut doc = document(vec![
            file_node("in-second.md", 510, 510, 10, 10),
            group_node("Daily", 0, 0, 100, 100),
            group_node("Daily", 500, 500, 100, 100),
            file_node("in-first.md", 10, 10, 10, 10),
        ]);

        let summary = relocate_group_members(&mut doc, "Daily", TODAY);

        assert_eq!(summary.group_index, Some(1));
        assert_eq!(summary.relocated, vec![3]);
        assert_eq!(doc.nodes[0].file(), Some("in-second.md"));
    }

    #[test]
    fn any_node_type_is_eligible() {
        let mut doc = document(vec![
            group_node("Daily", 0, 0, 200, 200),
            text_node(None, 50, 50, 10, 10),
            group_node("Nested", 20, 20, 100, 100),
        ]);

        let summary = relocate_group_members(&mut doc, "Daily", TODAY);

        assert_eq!(summary.relocated, vec![1, 2]);
        assert_eq!(doc.nodes[1].file(), Some(TODAY));
        assert_eq!(doc.nodes[2].file(), Some(TODAY));
    }

    #[test]
    fn node_order_is_preserved() {
        let mut doc = document(vec![
            file_node("a.md", 10, 10, 5, 5),
            group_node("Daily", 0, 0, 200, 200),
            file_node("b.md", 400, 10, 5, 5),
        ]);
        relocate_group_members(&mut doc, "Daily", TODAY);
        let kinds: Vec<Option<&str>> = doc.nodes.iter().map(|node| node.kind()).collect();
        assert_eq!(kinds, vec![Some("file"), Some("group"), Some("file")]);
        assert_eq!(doc.nodes[2].file(), Some("b.md"));
    }

    #[test]
    fn second_run_is_idempotent() {
        let mut doc = document(vec![
            group_node("Daily", 0, 0, 200, 200),
            file_node("a.md", 10, 10, 20, 20),
        ]);

        let first = relocate_group_members(&mut doc, "Daily", TODAY);
        let after_first = doc.clone();
        let second = relocate_group_members(&mut doc, "Daily", TODAY);

        assert_eq!(first.changed, vec![1]);
        assert_eq!(second.relocated, vec![1]);
        assert!(second.changed.is_empty());
        assert_eq!(doc, after_first);
    }

    #[test]
    fn node_without_geometry_is_skipped_and_others_relocated() {
        let link: CanvasNode =
            serde_json::from_str(r#"{"id":"l","type":"link","url":"https://example.com","x":20,"y":20}"#)
                .expect("parse");
        let mut doc = document(vec![
            group_node("Daily", 0, 0, 200, 200),
            link,
            file_node("a.md", 10, 10, 5, 5),
        ]);

        let summary = relocate_group_members(&mut doc, "Daily", TODAY);

        assert_eq!(summary.relocated, vec![2]);
        assert_eq!(doc.nodes[1].file(), None);
        assert_eq!(doc.nodes[2].file(), Some(TODAY));
    }

    #[test]
    fn group_found_with_no_members_reports_empty_lists() {
        let mut doc = document(vec![group_node("Daily", 0, 0, 200, 200)]);
        let summary = relocate_group_members(&mut doc, "Daily", TODAY);
        assert!(summary.group_found());
        assert!(summary.relocated.is_empty());
    }
}
