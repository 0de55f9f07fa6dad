//! Classification of one relative file path under a style rule table.
//!
//! This is the orchestration layer over [`segment`](super::segment): it
//! strips the extension, resolves the basename's role from the style's
//! reserved table, runs the segment grammar over every retained segment, and
//! enforces the rules that span segments (a catch-all must be the final
//! segment of the route).

use super::segment::{parse_segment, SyntaxError, SyntaxErrorKind};
use super::style::{FileRole, Style, StyleRules};

/// Result of classifying one relative path.
///
/// A file that is not a route under the style (wrong extension, or a
/// non-reserved basename under a style that requires reserved names) is
/// `NotARoute`, never an error: route directories commonly hold component,
/// style, and test files next to route files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The file is a route file contributing `role` at `pattern`.
    ///
    /// `pattern` is the canonical `/`-joined form (`/docs/:slug`); the empty
    /// string denotes the route root.
    Route { role: FileRole, pattern: String },
    /// The file is an ordinary non-route file and should be skipped.
    NotARoute,
    /// The file names a route but its parameter syntax is malformed.
    Invalid(SyntaxError),
}

/// Classify `relative_path` under `style`.
///
/// Standalone entry point for diagnostics tooling; a router resolves the
/// style once and calls [`StyleRules::parse`] directly.
#[must_use]
pub fn parse(style: Style, relative_path: &str) -> ParseOutcome {
    style.rules().parse(relative_path)
}

impl StyleRules {
    /// Classify one `/`-separated path relative to the route root.
    ///
    /// Error spans index into `relative_path` exactly as given, including
    /// any leading `/`.
    #[must_use]
    pub fn parse(&self, relative_path: &str) -> ParseOutcome {
        let base_start = relative_path
            .rfind('/')
            .map(|i| i + 1)
            .unwrap_or(0);
        let basename = &relative_path[base_start..];
        if basename.is_empty() {
            return ParseOutcome::NotARoute;
        }

        // Split off the extension. A recognized extension (or none at all)
        // proceeds; an unrecognized one is an ordinary non-route file.
        let stem = match basename.rfind('.') {
            Some(dot) => {
                if !self.extensions.matches(&basename[dot + 1..]) {
                    return ParseOutcome::NotARoute;
                }
                &basename[..dot]
            }
            None => basename,
        };
        if stem.is_empty() {
            return ParseOutcome::NotARoute;
        }

        // Reserved basenames name the directory's route; the basename itself
        // is dropped from the pattern.
        let (role, keep_basename) = match self.reserved_role(stem) {
            Some(role) => (role, false),
            None if self.allows_unreserved() => (FileRole::Page, true),
            None => return ParseOutcome::NotARoute,
        };

        // Byte spans of every retained segment, in path order.
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut offset = 0;
        for seg in relative_path[..base_start].split('/') {
            if !seg.is_empty() {
                spans.push((offset, offset + seg.len()));
            }
            offset += seg.len() + 1;
        }
        if keep_basename {
            spans.push((base_start, base_start + stem.len()));
        }

        let mut rendered = Vec::with_capacity(spans.len());
        let mut catch_all: Option<(usize, (usize, usize))> = None;
        for (idx, (start, end)) in spans.iter().enumerate() {
            match parse_segment(relative_path, *start, *end) {
                Ok(token) => {
                    if let Some(span) = token.catch_all {
                        catch_all.get_or_insert((idx, span));
                    }
                    rendered.push(token.rendered);
                }
                Err(err) => return ParseOutcome::Invalid(err),
            }
        }

        // A catch-all consumes every remaining URL component, so nothing may
        // follow it. The first offending token wins the diagnostic.
        if let Some((idx, (column, length))) = catch_all {
            if idx + 1 != rendered.len() {
                return ParseOutcome::Invalid(SyntaxError::new(
                    SyntaxErrorKind::CatchAllNotLast,
                    column,
                    length,
                ));
            }
        }

        let pattern = if rendered.is_empty() {
            String::new()
        } else {
            format!("/{}", rendered.join("/"))
        };
        ParseOutcome::Route { role, pattern }
    }
}
