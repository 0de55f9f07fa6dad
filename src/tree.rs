//! Route tree assembly.
//!
//! Every classified file is inserted into a tree of [`RouteNode`]s keyed by
//! path segment. Nodes are created on demand during insertion; two files
//! whose patterns share a prefix share the nodes for that prefix. Segment
//! comparison is exact string equality, so `:id` merges with another `:id`
//! but never with `:slug` — differing parameter names at the same position
//! are a build-time conflict, since one position can bind only one name.
//!
//! The tree is built fresh on every scan and treated as immutable once
//! published; there is no incremental mutation after a build completes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::pattern::FileRole;

/// Ambiguous routing configuration detected during insertion.
///
/// Conflicts are fatal at build time: silently preferring one file over
/// another would make routing depend on discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteConflict {
    /// Two different files supply the same page/layout/extra slot at one
    /// route node.
    DuplicateSlot {
        role: FileRole,
        existing: PathBuf,
        incoming: PathBuf,
    },
    /// Two files reach the same tree position through differently named
    /// parameters (e.g. `:id` vs `:slug` under the same parent).
    ParameterName {
        existing: String,
        incoming: String,
        file: PathBuf,
    },
}

impl fmt::Display for RouteConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteConflict::DuplicateSlot {
                role,
                existing,
                incoming,
            } => write!(
                f,
                "duplicate {} file: {} conflicts with {}",
                role,
                incoming.display(),
                existing.display()
            ),
            RouteConflict::ParameterName {
                existing,
                incoming,
                file,
            } => write!(
                f,
                "route parameter \"{}\" conflicts with \"{}\" at the same position (from {})",
                incoming,
                existing,
                file.display()
            ),
        }
    }
}

impl std::error::Error for RouteConflict {}

/// One node of the route tree.
///
/// Serializes as `{part, page, layout, children}` (plus `extras` when any
/// style-specific extra files exist), with `page`/`layout` rendered as file
/// paths or `null` — the shape consumed by the request dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteNode {
    /// The path segment this node matches. `/` for the root; `:name`,
    /// `:*name`, and `:*?name` denote dynamic, catch-all, and optional
    /// catch-all segments to the dispatcher.
    pub part: String,
    /// File serving the page at this route, if any.
    pub page: Option<PathBuf>,
    /// File supplying the layout wrapping this route and its descendants.
    pub layout: Option<PathBuf>,
    /// Style-specific extra files (e.g. `not-found`), keyed by tag.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<&'static str, PathBuf>,
    /// Child routes, most recently created first.
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Create an empty node matching `part`.
    #[must_use]
    pub fn new(part: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            page: None,
            layout: None,
            extras: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create the tree root (its `part` is `/`).
    #[must_use]
    pub fn root() -> Self {
        Self::new("/")
    }

    /// Record `file` at `pattern` with the given role.
    ///
    /// Missing intermediate nodes are created; a newly created child becomes
    /// the first element of its parent's child list. The empty pattern
    /// targets this node itself.
    pub fn insert(
        &mut self,
        pattern: &str,
        role: FileRole,
        file: PathBuf,
    ) -> Result<(), RouteConflict> {
        let mut node = self;
        for seg in pattern.split('/').filter(|s| !s.is_empty()) {
            if seg.starts_with(':') {
                if let Some(other) = node
                    .children
                    .iter()
                    .find(|c| c.part.starts_with(':') && c.part != seg)
                {
                    return Err(RouteConflict::ParameterName {
                        existing: other.part.clone(),
                        incoming: seg.to_string(),
                        file,
                    });
                }
            }
            let pos = match node.children.iter().position(|c| c.part == seg) {
                Some(pos) => pos,
                None => {
                    node.children.insert(0, RouteNode::new(seg));
                    0
                }
            };
            node = &mut node.children[pos];
        }

        let slot = match role {
            FileRole::Page => &mut node.page,
            FileRole::Layout => &mut node.layout,
            FileRole::Extra(tag) => {
                return match node.extras.get(tag) {
                    Some(existing) if *existing != file => Err(RouteConflict::DuplicateSlot {
                        role,
                        existing: existing.clone(),
                        incoming: file,
                    }),
                    _ => {
                        node.extras.insert(tag, file);
                        Ok(())
                    }
                };
            }
        };
        match slot {
            Some(existing) if *existing != file => Err(RouteConflict::DuplicateSlot {
                role,
                existing: existing.clone(),
                incoming: file,
            }),
            _ => {
                *slot = Some(file);
                Ok(())
            }
        }
    }

    /// Find a direct child by its segment.
    #[must_use]
    pub fn child(&self, part: &str) -> Option<&RouteNode> {
        self.children.iter().find(|c| c.part == part)
    }

    /// Number of file references stored in this subtree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        let own = usize::from(self.page.is_some())
            + usize::from(self.layout.is_some())
            + self.extras.len();
        own + self.children.iter().map(RouteNode::file_count).sum::<usize>()
    }

    /// Visit every node in this subtree, parents before children.
    pub fn walk(&self, visit: &mut impl FnMut(&RouteNode)) {
        // Iterative descent; route trees can nest deeply.
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.children.iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str) -> PathBuf {
        PathBuf::from(format!("/project/pages/{name}"))
    }

    #[test]
    fn test_insert_empty_pattern_targets_root() {
        let mut root = RouteNode::root();
        root.insert("", FileRole::Page, file("index.tsx")).unwrap();
        assert_eq!(root.page, Some(file("index.tsx")));
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_insert_creates_intermediate_nodes() {
        let mut root = RouteNode::root();
        root.insert("/docs/:slug", FileRole::Page, file("docs/[slug].tsx"))
            .unwrap();
        let docs = root.child("docs").unwrap();
        let slug = docs.child(":slug").unwrap();
        assert_eq!(slug.page, Some(file("docs/[slug].tsx")));
    }

    #[test]
    fn test_new_children_are_prepended() {
        let mut root = RouteNode::root();
        root.insert("/a", FileRole::Page, file("a.tsx")).unwrap();
        root.insert("/b", FileRole::Page, file("b.tsx")).unwrap();
        root.insert("/c", FileRole::Page, file("c.tsx")).unwrap();
        let parts: Vec<&str> = root.children.iter().map(|c| c.part.as_str()).collect();
        assert_eq!(parts, ["c", "b", "a"]);
    }

    #[test]
    fn test_page_and_layout_share_a_node() {
        let mut root = RouteNode::root();
        root.insert("/meow", FileRole::Layout, file("meow/_layout.tsx"))
            .unwrap();
        root.insert("/meow", FileRole::Page, file("meow/index.tsx"))
            .unwrap();
        let meow = root.child("meow").unwrap();
        assert!(meow.page.is_some());
        assert!(meow.layout.is_some());
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_duplicate_page_is_a_conflict() {
        let mut root = RouteNode::root();
        root.insert("/a", FileRole::Page, file("a.tsx")).unwrap();
        let err = root
            .insert("/a", FileRole::Page, file("a.jsx"))
            .unwrap_err();
        assert!(matches!(err, RouteConflict::DuplicateSlot { role: FileRole::Page, .. }));
        // Re-inserting the identical file is not a conflict.
        root.insert("/a", FileRole::Page, file("a.tsx")).unwrap();
    }

    #[test]
    fn test_duplicate_extra_is_a_conflict() {
        let mut root = RouteNode::root();
        root.insert("/a", FileRole::Extra("not-found"), file("a/not-found.tsx"))
            .unwrap();
        let err = root
            .insert("/a", FileRole::Extra("not-found"), file("a/not-found.jsx"))
            .unwrap_err();
        assert!(matches!(
            err,
            RouteConflict::DuplicateSlot { role: FileRole::Extra("not-found"), .. }
        ));
    }

    #[test]
    fn test_mismatched_parameter_names_conflict() {
        let mut root = RouteNode::root();
        root.insert("/docs/:id", FileRole::Page, file("docs/[id].tsx"))
            .unwrap();
        let err = root
            .insert("/docs/:slug", FileRole::Page, file("docs/[slug]/index.tsx"))
            .unwrap_err();
        match err {
            RouteConflict::ParameterName { existing, incoming, .. } => {
                assert_eq!(existing, ":id");
                assert_eq!(incoming, ":slug");
            }
            other => panic!("expected a parameter conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_static_and_dynamic_siblings_coexist() {
        let mut root = RouteNode::root();
        root.insert("/docs/intro", FileRole::Page, file("docs/intro.tsx"))
            .unwrap();
        root.insert("/docs/:slug", FileRole::Page, file("docs/[slug].tsx"))
            .unwrap();
        let docs = root.child("docs").unwrap();
        assert!(docs.child("intro").is_some());
        assert!(docs.child(":slug").is_some());
    }

    #[test]
    fn test_file_count_and_walk() {
        let mut root = RouteNode::root();
        root.insert("", FileRole::Layout, file("_layout.tsx")).unwrap();
        root.insert("/a", FileRole::Page, file("a.tsx")).unwrap();
        root.insert("/a/b", FileRole::Page, file("a/b.tsx")).unwrap();
        assert_eq!(root.file_count(), 3);

        let mut parts = Vec::new();
        root.walk(&mut |node| parts.push(node.part.clone()));
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "/");
    }

    #[test]
    fn test_serialized_shape() {
        let mut root = RouteNode::root();
        root.insert("/a", FileRole::Page, file("a.tsx")).unwrap();
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["part"], "/");
        assert_eq!(json["page"], serde_json::Value::Null);
        assert_eq!(json["children"][0]["part"], "a");
        assert_eq!(json["children"][0]["page"], "/project/pages/a.tsx");
        // extras is omitted when empty.
        assert!(json["children"][0].get("extras").is_none());
    }
}
