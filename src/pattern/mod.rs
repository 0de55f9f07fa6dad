//! # Pattern Module
//!
//! Turns relative file paths into route classifications.
//!
//! Parsing is split into three layers, leaves first:
//!
//! 1. **Style rules** ([`style`]) — which basenames are reserved, which
//!    extensions are source files, whether arbitrary basenames are routes.
//! 2. **Segment grammar** ([`segment`]) — the bracket syntax of one
//!    directory name or basename (`[slug]`, `[...rest]`, `[[...rest]]`,
//!    `(group)`), with exact error spans for diagnostics.
//! 3. **Pattern parsing** ([`parse`](crate::pattern::parse())) — per-file
//!    orchestration: extension gate, role resolution, per-segment grammar,
//!    cross-segment validation, canonical pattern rendering.
//!
//! The whole layer is pure: identical `(style, path)` input always produces
//! the identical [`ParseOutcome`], and nothing here touches the file system.
//!
//! ## Example
//!
//! ```rust
//! use fsrouter::pattern::{parse, FileRole, ParseOutcome, Style};
//!
//! match parse(Style::NextJsPages, "/blog/[slug].tsx") {
//!     ParseOutcome::Route { role, pattern } => {
//!         assert_eq!(role, FileRole::Page);
//!         assert_eq!(pattern, "/blog/:slug");
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod parse;
mod segment;
mod style;

pub use parse::{parse, ParseOutcome};
pub use segment::{SyntaxError, SyntaxErrorKind};
pub use style::{
    ExtensionSet, FileRole, Style, StyleRules, UnknownStyle, DEFAULT_SOURCE_EXTENSIONS,
};
