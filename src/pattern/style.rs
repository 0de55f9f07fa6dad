//! Style rule tables for the supported file naming conventions.
//!
//! A "style" decides which files in a route directory are routes at all, and
//! what role they play. The string identifiers (`"nextjs-pages"`, ...) are
//! resolved once into a [`StyleRules`] value at router construction; the per
//! file hot path never re-dispatches on the style name.

use std::fmt;
use std::str::FromStr;

/// Extensions treated as routable source files by default.
///
/// Matches the full set of JavaScript/TypeScript source extensions; styles
/// may be overridden per router with an explicit list or "any extension".
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] =
    &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// What a classified route file contributes to its route node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// A navigable page at the route.
    Page,
    /// A layout wrapping every page/layout nested beneath the route.
    Layout,
    /// A style-specific special file (e.g. `not-found`), keyed by tag.
    Extra(&'static str),
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Page => write!(f, "page"),
            FileRole::Layout => write!(f, "layout"),
            FileRole::Extra(tag) => write!(f, "extra \"{tag}\""),
        }
    }
}

/// Identifier for a supported naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Any source file is a route; `index` maps to the directory route and
    /// `_layout` supplies the directory layout.
    NextJsPages,
    /// Routes are directories holding a reserved `page`/`layout`/`not-found`
    /// file; other basenames are ordinary non-route files.
    NextJsAppUi,
    /// Routes are directories holding a reserved `route` file.
    NextJsAppRoutes,
}

impl Style {
    /// Resolve this style into its concrete rule table.
    #[must_use]
    pub fn rules(self) -> StyleRules {
        match self {
            Style::NextJsPages => StyleRules {
                extensions: ExtensionSet::default(),
                reserved: &[("index", FileRole::Page), ("_layout", FileRole::Layout)],
                allow_unreserved: true,
            },
            Style::NextJsAppUi => StyleRules {
                extensions: ExtensionSet::default(),
                reserved: &[
                    ("page", FileRole::Page),
                    ("layout", FileRole::Layout),
                    ("not-found", FileRole::Extra("not-found")),
                ],
                allow_unreserved: false,
            },
            Style::NextJsAppRoutes => StyleRules {
                extensions: ExtensionSet::default(),
                reserved: &[("route", FileRole::Page)],
                allow_unreserved: false,
            },
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Style::NextJsPages => "nextjs-pages",
            Style::NextJsAppUi => "nextjs-app-ui",
            Style::NextJsAppRoutes => "nextjs-app-routes",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nextjs-pages" => Ok(Style::NextJsPages),
            "nextjs-app-ui" => Ok(Style::NextJsAppUi),
            "nextjs-app-routes" => Ok(Style::NextJsAppRoutes),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

/// Error returned when a style identifier string is not recognized.
#[derive(Debug, Clone)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown routing style \"{}\" (expected one of: nextjs-pages, nextjs-app-ui, nextjs-app-routes)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStyle {}

/// The set of file extensions a router recognizes as source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionSet {
    /// Match any extension (the original surface's `extensions: "*"`).
    Any,
    /// Match exactly these extensions (without the leading dot).
    List(Vec<String>),
}

impl ExtensionSet {
    /// Whether `ext` (without the leading dot) is recognized.
    #[must_use]
    pub fn matches(&self, ext: &str) -> bool {
        match self {
            ExtensionSet::Any => true,
            ExtensionSet::List(list) => list.iter().any(|e| e == ext),
        }
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        ExtensionSet::List(
            DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|e| (*e).to_string())
                .collect(),
        )
    }
}

/// Resolved per-style configuration: which files are routes, and how.
///
/// Obtained from [`Style::rules`] and held by the router for the lifetime of
/// a scan. The reserved table maps basename stems (extension already
/// stripped) to the role the file plays at its directory's route.
#[derive(Debug, Clone)]
pub struct StyleRules {
    pub(crate) extensions: ExtensionSet,
    reserved: &'static [(&'static str, FileRole)],
    allow_unreserved: bool,
}

impl StyleRules {
    /// Role assigned to a reserved basename stem, if any.
    #[must_use]
    pub fn reserved_role(&self, stem: &str) -> Option<FileRole> {
        self.reserved
            .iter()
            .find(|(name, _)| *name == stem)
            .map(|(_, role)| *role)
    }

    /// Whether a non-reserved basename is itself a routable page.
    #[must_use]
    pub fn allows_unreserved(&self) -> bool {
        self.allow_unreserved
    }

    /// Replace the recognized extension set (router-level override).
    pub fn set_extensions(&mut self, extensions: ExtensionSet) {
        self.extensions = extensions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_round_trips_through_str() {
        for style in [Style::NextJsPages, Style::NextJsAppUi, Style::NextJsAppRoutes] {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
        assert!("nextjs-app".parse::<Style>().is_err());
    }

    #[test]
    fn test_pages_rules() {
        let rules = Style::NextJsPages.rules();
        assert_eq!(rules.reserved_role("index"), Some(FileRole::Page));
        assert_eq!(rules.reserved_role("_layout"), Some(FileRole::Layout));
        assert_eq!(rules.reserved_role("page"), None);
        assert!(rules.allows_unreserved());
    }

    #[test]
    fn test_app_ui_rules() {
        let rules = Style::NextJsAppUi.rules();
        assert_eq!(rules.reserved_role("page"), Some(FileRole::Page));
        assert_eq!(rules.reserved_role("layout"), Some(FileRole::Layout));
        assert_eq!(
            rules.reserved_role("not-found"),
            Some(FileRole::Extra("not-found"))
        );
        assert!(!rules.allows_unreserved());
    }

    #[test]
    fn test_extension_set_matching() {
        let default = ExtensionSet::default();
        assert!(default.matches("tsx"));
        assert!(default.matches("mjs"));
        assert!(!default.matches("css"));
        assert!(ExtensionSet::Any.matches("css"));
        let only_md = ExtensionSet::List(vec!["md".to_string()]);
        assert!(only_md.matches("md"));
        assert!(!only_md.matches("tsx"));
    }
}
