//! # Router Module
//!
//! The top-level façade: scan a route directory under a naming style and
//! assemble the route tree.
//!
//! ## Overview
//!
//! [`FrameworkRouter`] resolves the style's rule table once at construction,
//! enumerates source files beneath the root (depth-first, directories before
//! their contents, name-sorted so rebuilds over an unchanged directory are
//! deterministic), classifies each file with the pattern parser, and inserts
//! the results into a [`RouteNode`] tree. The first syntax error or tree
//! conflict aborts the scan; non-route files are skipped silently.
//!
//! The directory walk is deliberately thin: callers with their own file
//! enumeration (or tests) can hand a list of relative paths to
//! [`FrameworkRouter::build_from_paths`] and bypass I/O entirely.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fsrouter::{FrameworkRouter, Style};
//!
//! let router = FrameworkRouter::new("src/pages", Style::NextJsPages);
//! let tree = router.scan()?;
//! println!("{}", serde_json::to_string_pretty(&tree.to_json())?);
//! ```

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::pattern::{ExtensionSet, ParseOutcome, Style, StyleRules, SyntaxError};
use crate::tree::{RouteConflict, RouteNode};

/// Why a scan aborted.
#[derive(Debug)]
pub enum BuildError {
    /// A route file's parameter syntax is malformed. `path` is the
    /// `/`-prefixed path relative to the route root; the error's span
    /// indexes into it.
    Syntax { path: String, error: SyntaxError },
    /// Two files produced an ambiguous routing configuration.
    Conflict(RouteConflict),
    /// The directory walk itself failed.
    Io(std::io::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Syntax { path, error } => write!(f, "{path}: {error}"),
            BuildError::Conflict(conflict) => write!(f, "{conflict}"),
            BuildError::Io(err) => write!(f, "failed to walk route directory: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Syntax { error, .. } => Some(error),
            BuildError::Conflict(conflict) => Some(conflict),
            BuildError::Io(err) => Some(err),
        }
    }
}

impl From<RouteConflict> for BuildError {
    fn from(conflict: RouteConflict) -> Self {
        BuildError::Conflict(conflict)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err)
    }
}

/// Walk-level options, matching the original framework surface.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Skip directories and non-reserved files whose names start with `_`.
    pub ignore_underscores: bool,
    /// Directory names never traversed into.
    pub ignore_dirs: Vec<String>,
    /// Override the style's recognized extension set.
    pub extensions: Option<ExtensionSet>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore_underscores: false,
            ignore_dirs: vec!["node_modules".to_string(), ".git".to_string()],
            extensions: None,
        }
    }
}

/// A complete, immutable route tree produced by one scan.
///
/// Built fresh on every scan and replaced wholesale on rebuild; readers hold
/// the previous tree until a new one is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTree {
    root: RouteNode,
    #[serde(skip)]
    file_count: usize,
}

impl RouteTree {
    /// A tree with no routes (the state before the first scan completes).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: RouteNode::root(),
            file_count: 0,
        }
    }

    /// The root node (`part` is `/`).
    #[must_use]
    pub fn root(&self) -> &RouteNode {
        &self.root
    }

    /// Number of file references in the tree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Serialize the tree as the nested `{part, page, layout, children}`
    /// structure consumed by the request dispatcher.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.root).expect("route tree serialization cannot fail")
    }
}

/// File-system router: discovers route files and assembles the route tree.
#[derive(Debug, Clone)]
pub struct FrameworkRouter {
    root: PathBuf,
    style: Style,
    rules: StyleRules,
    options: ScanOptions,
}

impl FrameworkRouter {
    /// Create a router over `root` using `style`'s default rules.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, style: Style) -> Self {
        Self::with_options(root, style, ScanOptions::default())
    }

    /// Create a router with explicit walk options.
    #[must_use]
    pub fn with_options(root: impl Into<PathBuf>, style: Style, options: ScanOptions) -> Self {
        let mut rules = style.rules();
        if let Some(extensions) = options.extensions.clone() {
            rules.set_extensions(extensions);
        }
        Self {
            root: root.into(),
            style,
            rules,
            options,
        }
    }

    /// The route root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The style this router classifies files under.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Walk the route root and build the tree.
    ///
    /// Aborts on the first malformed pattern or route conflict rather than
    /// silently dropping the offending file.
    pub fn scan(&self) -> Result<RouteTree, BuildError> {
        let root = self.root.canonicalize()?;
        let ignore_underscores = self.options.ignore_underscores;
        let ignore_dirs = &self.options.ignore_dirs;

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if ignore_dirs.iter().any(|d| *d == name) {
                    return false;
                }
                !(ignore_underscores && name.starts_with('_'))
            });

        let mut rel_paths = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk produced a cyclic entry"))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&root)
                .expect("walked path is always under the walk root");
            let mut joined = String::new();
            for component in rel.components() {
                joined.push('/');
                joined.push_str(&component.as_os_str().to_string_lossy());
            }
            rel_paths.push(joined);
        }

        let tree = self.assemble(&root, rel_paths.iter().map(String::as_str))?;
        info!(
            root = %root.display(),
            style = %self.style,
            files = tree.file_count(),
            "route tree built"
        );
        Ok(tree)
    }

    /// Build a tree from an already enumerated list of relative paths.
    ///
    /// Paths use `/` separators and are taken relative to the router's root
    /// (a leading `/` is accepted and equivalent). Performs no I/O; this is
    /// the seam for an external file-system walker.
    pub fn build_from_paths<'a, I>(&self, paths: I) -> Result<RouteTree, BuildError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.assemble(&self.root, paths)
    }

    fn assemble<'a, I>(&self, root: &Path, paths: I) -> Result<RouteTree, BuildError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tree_root = RouteNode::root();
        let mut file_count = 0usize;
        for raw in paths {
            let rel = if raw.starts_with('/') {
                raw.to_string()
            } else {
                format!("/{raw}")
            };
            if self.skip_underscored(&rel) {
                debug!(path = %rel, "skipped underscore-prefixed file");
                continue;
            }
            match self.rules.parse(&rel) {
                ParseOutcome::NotARoute => {
                    debug!(path = %rel, "skipped non-route file");
                }
                ParseOutcome::Invalid(error) => {
                    return Err(BuildError::Syntax { path: rel, error });
                }
                ParseOutcome::Route { role, pattern } => {
                    let file = root.join(rel.trim_start_matches('/'));
                    debug!(path = %rel, %role, pattern = %pattern, "classified route file");
                    tree_root.insert(&pattern, role, file)?;
                    file_count += 1;
                }
            }
        }
        Ok(RouteTree {
            root: tree_root,
            file_count,
        })
    }

    /// `ignore_underscores` file rule: `_`-prefixed basenames are not
    /// indexed unless the stem is reserved (so `_layout.tsx` still works).
    fn skip_underscored(&self, rel: &str) -> bool {
        if !self.options.ignore_underscores {
            return false;
        }
        let basename = rel.rsplit('/').next().unwrap_or(rel);
        if !basename.starts_with('_') {
            return false;
        }
        let stem = basename
            .rfind('.')
            .map_or(basename, |dot| &basename[..dot]);
        self.rules.reserved_role(stem).is_none()
    }
}
