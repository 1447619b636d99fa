//! Menu grouping of documentation nodes.
//!
//! Nodes are partitioned by [`group_key`]: a page and its API/design
//! companions share one group. Groups are stored in order of first
//! appearance and reference nodes by index into the node list, so the
//! partition is computed once and reused for every render.

use std::collections::HashMap;

use crate::catalog::ExampleCatalog;
use crate::node::DocNode;
use crate::slug::{catalog_key, group_key};

/// Offset added to catalog positions so catalog groups sort after ad-hoc ones.
pub const CATALOG_ORDER_OFFSET: i64 = 100;

/// Nodes sharing one group key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    key: String,
    members: Vec<usize>,
}

impl Group {
    /// Group key (slug prefix shared by all members).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Indices of member nodes, in source order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }
}

/// Partition of a node list into groups.
#[derive(Clone, Debug, Default)]
pub struct Groups {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Groups {
    /// Partition `nodes` by group key.
    ///
    /// Every node lands in exactly one group. Members keep their relative
    /// order from `nodes`.
    #[must_use]
    pub fn build(nodes: &[DocNode]) -> Self {
        let mut groups: Vec<Group> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, node) in nodes.iter().enumerate() {
            let key = group_key(&node.slug);
            match index.get(&key) {
                Some(&g) => groups[g].members.push(i),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(Group {
                        key,
                        members: vec![i],
                    });
                }
            }
        }

        Self { groups, index }
    }

    /// Group by key.
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.index.get(key).map(|&g| &self.groups[g])
    }

    /// Groups in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Effective menu position of a group.
    ///
    /// Groups listed in the catalog get their catalog position plus
    /// [`CATALOG_ORDER_OFFSET`]. Other groups use the order of their first
    /// node. Unknown or empty groups sort as 0.
    pub fn order(&self, key: &str, nodes: &[DocNode], catalog: &ExampleCatalog) -> i64 {
        if let Some(position) = catalog.position(&catalog_key(key)) {
            return i64::try_from(position).unwrap_or(i64::MAX) + CATALOG_ORDER_OFFSET;
        }

        self.get(key)
            .and_then(|group| group.members.first())
            .and_then(|&i| nodes.get(i))
            .map_or(0, DocNode::sort_order)
    }

    /// Group keys for a language, sorted by [`Groups::order`].
    ///
    /// Only keys under `/{lang}/` are returned. The sort is stable, so groups
    /// with equal order keep their order of first appearance.
    pub fn sorted_keys(&self, nodes: &[DocNode], catalog: &ExampleCatalog, lang: &str) -> Vec<&str> {
        let prefix = format!("/{lang}/");
        let mut keyed: Vec<(i64, &str)> = self
            .groups
            .iter()
            .filter(|group| group.key.starts_with(&prefix))
            .map(|group| (self.order(&group.key, nodes, catalog), group.key.as_str()))
            .collect();
        keyed.sort_by_key(|&(order, _)| order);
        keyed.into_iter().map(|(_, key)| key).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::node::node;

    fn catalog(slugs: &[&str]) -> ExampleCatalog {
        ExampleCatalog::new(
            slugs
                .iter()
                .map(|slug| CatalogEntry {
                    slug: (*slug).to_owned(),
                    ..Default::default()
                })
                .collect(),
        )
    }

    fn sample_nodes() -> Vec<DocNode> {
        vec![
            node("/en/examples/gallery", "Gallery", Some(0)),
            node("/en/examples/line/basic", "Basic Line", Some(1)),
            node("/en/examples/line/basic/API", "Basic Line API", None),
            node("/en/examples/pie/donut", "Donut", Some(2)),
            node("/en/examples/line/step", "Step Line", Some(3)),
            node("/en/examples/line/basic/design", "Basic Line Design", None),
            node("/zh/examples/line/basic", "基础折线图", Some(1)),
        ]
    }

    #[test]
    fn test_build_partition_is_total_and_disjoint() {
        let nodes = sample_nodes();

        let groups = Groups::build(&nodes);

        let mut seen: Vec<usize> = groups
            .iter()
            .flat_map(|group| group.members().iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..nodes.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_build_groups_in_first_appearance_order() {
        let nodes = sample_nodes();

        let groups = Groups::build(&nodes);

        let keys: Vec<&str> = groups.iter().map(Group::key).collect();
        assert_eq!(
            keys,
            vec![
                "/en/examples",
                "/en/examples/line",
                "/en/examples/pie",
                "/zh/examples/line",
            ]
        );
    }

    #[test]
    fn test_build_keeps_source_order_within_group() {
        let nodes = sample_nodes();

        let groups = Groups::build(&nodes);

        let line = groups.get("/en/examples/line").unwrap();
        assert_eq!(line.members(), &[1, 2, 4, 5]);
    }

    #[test]
    fn test_api_node_grouped_with_root_page() {
        let nodes = sample_nodes();

        let groups = Groups::build(&nodes);

        let line = groups.get("/en/examples/line").unwrap();
        assert!(line.members().contains(&1));
        assert!(line.members().contains(&2));
    }

    #[test]
    fn test_order_catalog_entries_after_adhoc_groups() {
        let nodes = vec![
            node("/en/examples/b/one", "B", Some(7)),
            node("/en/examples/a/one", "A", Some(3)),
        ];
        let groups = Groups::build(&nodes);
        let catalog = catalog(&["examples/a", "examples/b"]);

        assert_eq!(groups.order("/en/examples/a", &nodes, &catalog), 100);
        assert_eq!(groups.order("/en/examples/b", &nodes, &catalog), 101);
    }

    #[test]
    fn test_sorted_keys_follow_catalog_regardless_of_input_order() {
        let nodes = vec![
            node("/en/examples/b/one", "B", Some(7)),
            node("/en/examples/a/one", "A", Some(3)),
        ];
        let groups = Groups::build(&nodes);
        let catalog = catalog(&["examples/a", "examples/b"]);

        let keys = groups.sorted_keys(&nodes, &catalog, "en");

        assert_eq!(keys, vec!["/en/examples/a", "/en/examples/b"]);
    }

    #[test]
    fn test_order_falls_back_to_first_node_order() {
        let nodes = vec![
            node("/en/examples/x/one", "One", Some(5)),
            node("/en/examples/x/two", "Two", Some(1)),
        ];
        let groups = Groups::build(&nodes);

        let order = groups.order("/en/examples/x", &nodes, &ExampleCatalog::default());

        assert_eq!(order, 5);
    }

    #[test]
    fn test_order_missing_node_order_defaults_to_zero() {
        let nodes = vec![node("/en/examples/x/one", "One", None)];
        let groups = Groups::build(&nodes);

        assert_eq!(groups.order("/en/examples/x", &nodes, &ExampleCatalog::default()), 0);
    }

    #[test]
    fn test_order_unknown_group_is_zero() {
        let groups = Groups::build(&[]);

        let order = groups.order("/en/examples/missing", &[], &ExampleCatalog::default());

        assert_eq!(order, 0);
    }

    #[test]
    fn test_sorted_keys_filters_language() {
        let nodes = sample_nodes();
        let groups = Groups::build(&nodes);

        let keys = groups.sorted_keys(&nodes, &ExampleCatalog::default(), "zh");

        assert_eq!(keys, vec!["/zh/examples/line"]);
    }

    #[test]
    fn test_sorted_keys_is_stable_and_deterministic() {
        let nodes = vec![
            node("/en/examples/c/one", "C", None),
            node("/en/examples/a/one", "A", None),
            node("/en/examples/b/one", "B", None),
        ];
        let groups = Groups::build(&nodes);
        let catalog = ExampleCatalog::default();

        let first = groups.sorted_keys(&nodes, &catalog, "en");
        let second = groups.sorted_keys(&nodes, &catalog, "en");

        assert_eq!(first, vec!["/en/examples/c", "/en/examples/a", "/en/examples/b"]);
        assert_eq!(first, second);
    }
}
