//! # fsrouter
//!
//! **fsrouter** discovers source files under a project directory and converts
//! their paths into a routing tree for a file-system-based web framework, in
//! the style of the "pages" and "app" directory conventions.
//!
//! ## Overview
//!
//! Given a route root and a naming style, fsrouter:
//!
//! - classifies each file as a page, layout, or special file — or skips it
//!   as an ordinary non-route file,
//! - parses dynamic-segment syntax in directory and file names (`[slug]`,
//!   `[...rest]`, `[[...rest]]`, `(group)`) into a canonical pattern,
//!   reporting malformed syntax with the exact character span for editor and
//!   CLI diagnostics, and
//! - merges every classified file into a single tree keyed by path segment,
//!   rejecting ambiguous configurations (two pages at one route, or `:id`
//!   and `:slug` competing for the same position) at build time.
//!
//! The tree serializes to a nested `{part, page, layout, children}`
//! structure; a request dispatcher interprets `:name` / `:*name` / `:*?name`
//! parts as dynamic, catch-all, and optional catch-all segments. Matching
//! incoming URLs against the tree is out of scope here — fsrouter produces
//! the data the matcher needs and executes nothing.
//!
//! ## Architecture
//!
//! The library is organized into a few focused modules:
//!
//! - **[`pattern`]** - style rule tables, the segment bracket grammar, and
//!   per-file classification (the pure core)
//! - **[`tree`]** - route tree assembly with conflict detection
//! - **[`router`]** - the [`FrameworkRouter`] façade: directory walk,
//!   classification, tree build, JSON snapshot
//! - **[`hot_reload`]** - rebuild-on-change with coalesced builds and
//!   atomic tree publication
//! - **[`cli`]** - the `fsrouter-cli` diagnostics binary
//!
//! ## Quick Start
//!
//! ```no_run
//! use fsrouter::{FrameworkRouter, Style};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let router = FrameworkRouter::new("src/pages", Style::NextJsPages);
//! let tree = router.scan()?;
//! println!("{}", serde_json::to_string_pretty(&tree.to_json())?);
//! # Ok(())
//! # }
//! ```
//!
//! Classification is also available standalone, which is what diagnostics
//! tooling uses to underline mistakes in a single path:
//!
//! ```
//! use fsrouter::{parse, ParseOutcome, Style};
//!
//! let outcome = parse(Style::NextJsPages, "/blog/[slug.tsx");
//! let err = match outcome {
//!     ParseOutcome::Invalid(err) => err,
//!     other => panic!("unexpected: {other:?}"),
//! };
//! assert_eq!(err.to_string(), "Missing \"]\" to match this route parameter (6:5)");
//! ```

pub mod cli;
pub mod hot_reload;
pub mod pattern;
pub mod router;
pub mod tree;

pub use pattern::{parse, FileRole, ParseOutcome, Style, StyleRules, SyntaxError};
pub use router::{BuildError, FrameworkRouter, RouteTree, ScanOptions};
pub use tree::{RouteConflict, RouteNode};
