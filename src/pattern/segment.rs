//! Bracket grammar for one path segment.
//!
//! A segment is a directory name or a basename stem. Most segments are plain
//! literals; a segment containing `[` carries a route parameter:
//!
//! - `[name]` — named parameter, rendered `:name`. May be embedded in literal
//!   text (`blog-[slug]` renders `blog-:slug`).
//! - `[...name]` — catch-all, rendered `:*name`. Must occupy the entire
//!   segment and may only appear as the final segment of a route.
//! - `[[...name]]` — optional catch-all, rendered `:*?name`. Same placement
//!   rules as `[...name]`.
//! - `(name)` — route group, passed through verbatim.
//!
//! Errors carry the byte span of the offending token within the full
//! relative path so diagnostics can underline the exact source text.

use std::fmt;

/// Why a segment failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// `[` with no closing `]` before the end of the segment.
    MissingCloseBracket,
    /// `[]` with nothing between the brackets.
    EmptyParameterName,
    /// `[.name]` / `[..name]` — a name may not start with a dot.
    LeadingDot,
    /// A catch-all token with other characters in the same segment.
    NotEntireSegment,
    /// `[[name]]` — doubled brackets are only valid for catch-alls.
    OptionalNonCatchAll,
    /// A catch-all token followed by further route segments.
    CatchAllNotLast,
}

impl SyntaxErrorKind {
    fn message(self) -> &'static str {
        match self {
            SyntaxErrorKind::MissingCloseBracket => {
                "Missing \"]\" to match this route parameter"
            }
            SyntaxErrorKind::EmptyParameterName => "Parameter needs a name",
            SyntaxErrorKind::LeadingDot => {
                "Parameter name cannot start with \".\" (use \"...\" for catch-all)"
            }
            SyntaxErrorKind::NotEntireSegment => "Parameters must take up the entire file name",
            SyntaxErrorKind::OptionalNonCatchAll => {
                "Optional parameters can only be catch-all (change to \"[[...name]]\" or remove extra brackets)"
            }
            SyntaxErrorKind::CatchAllNotLast => {
                "Catch-all parameter must be at the end of a route"
            }
        }
    }
}

/// A malformed route parameter, with the exact span of the offending token.
///
/// `column` and `length` are byte offsets into the original relative path
/// string handed to the pattern parser, so a caller can underline the
/// mistake in the text the user actually wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub column: usize,
    pub length: usize,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, column: usize, length: usize) -> Self {
        Self {
            kind,
            column,
            length,
        }
    }

    /// The human-readable reason, without the span suffix.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.kind.message(), self.column, self.length)
    }
}

impl std::error::Error for SyntaxError {}

/// One successfully parsed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SegmentToken {
    /// The segment as it appears in the canonical pattern.
    pub rendered: String,
    /// Span of the catch-all token, when this segment is one. The pattern
    /// parser uses it to enforce the catch-all-must-be-last rule.
    pub catch_all: Option<(usize, usize)>,
}

impl SegmentToken {
    fn literal(text: &str) -> Self {
        Self {
            rendered: text.to_string(),
            catch_all: None,
        }
    }
}

/// Parse the segment occupying `path[start..end]`.
///
/// Error spans index into `path`, not into the segment.
pub(crate) fn parse_segment(
    path: &str,
    start: usize,
    end: usize,
) -> Result<SegmentToken, SyntaxError> {
    let seg = &path[start..end];

    // Route groups pass through verbatim, brackets and all.
    if seg.len() >= 2 && seg.starts_with('(') && seg.ends_with(')') {
        return Ok(SegmentToken::literal(seg));
    }

    let Some(open_rel) = seg.find('[') else {
        return Ok(SegmentToken::literal(seg));
    };
    let open = start + open_rel;
    let bytes = seg.as_bytes();

    let Some(close_rel) = seg[open_rel..].find(']').map(|i| open_rel + i) else {
        // Scanned to the end of the segment without finding a match.
        return Err(SyntaxError::new(
            SyntaxErrorKind::MissingCloseBracket,
            open,
            end - open,
        ));
    };

    // `[[...name]]` is the optional form: doubled on both sides.
    let doubled =
        bytes.get(open_rel + 1) == Some(&b'[') && bytes.get(close_rel + 1) == Some(&b']');
    let (body_start, span_end_rel) = if doubled {
        (open_rel + 2, close_rel + 2)
    } else {
        (open_rel + 1, close_rel + 1)
    };
    let body = &seg[body_start..close_rel];
    let span_len = span_end_rel - open_rel;

    if body.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptyParameterName, open, 2));
    }

    if let Some(name) = body.strip_prefix("...") {
        // Catch-all. The token must be the whole segment.
        if open_rel != 0 || span_end_rel != seg.len() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::NotEntireSegment,
                open,
                span_len,
            ));
        }
        let rendered = if doubled {
            format!(":*?{name}")
        } else {
            format!(":*{name}")
        };
        return Ok(SegmentToken {
            rendered,
            catch_all: Some((open, span_len)),
        });
    }

    if body.starts_with('.') {
        return Err(SyntaxError::new(SyntaxErrorKind::LeadingDot, open, span_len));
    }

    if doubled {
        return Err(SyntaxError::new(
            SyntaxErrorKind::OptionalNonCatchAll,
            open,
            span_len,
        ));
    }

    // Named parameter; surrounding literal text is preserved.
    let rendered = format!("{}:{body}{}", &seg[..open_rel], &seg[span_end_rel..]);
    Ok(SegmentToken {
        rendered,
        catch_all: None,
    })
}
