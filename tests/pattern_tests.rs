use fsrouter::pattern::{parse, FileRole, ParseOutcome, Style};

fn expect_route(style: Style, path: &str) -> (FileRole, String) {
    match parse(style, path) {
        ParseOutcome::Route { role, pattern } => (role, pattern),
        other => panic!("expected {path} to be a route, got {other:?}"),
    }
}

fn expect_error(style: Style, path: &str) -> String {
    match parse(style, path) {
        ParseOutcome::Invalid(err) => err.to_string(),
        other => panic!("expected {path} to fail, got {other:?}"),
    }
}

#[test]
fn test_pages_style_classification() {
    assert_eq!(
        expect_route(Style::NextJsPages, "/index.tsx"),
        (FileRole::Page, String::new())
    );
    assert_eq!(
        expect_route(Style::NextJsPages, "/_layout.tsx"),
        (FileRole::Layout, String::new())
    );
    assert_eq!(
        expect_route(Style::NextJsPages, "/[...data].js"),
        (FileRole::Page, "/:*data".to_string())
    );
    assert_eq!(
        expect_route(Style::NextJsPages, "/[[...data]].js"),
        (FileRole::Page, "/:*?data".to_string())
    );
}

#[test]
fn test_pages_style_diagnostics() {
    assert_eq!(
        expect_error(Style::NextJsPages, "/subdir/["),
        "Missing \"]\" to match this route parameter (8:1)"
    );
    assert_eq!(
        expect_error(Style::NextJsPages, "/subdir/[...hello]/bar.tsx"),
        "Catch-all parameter must be at the end of a route (8:10)"
    );
}

#[test]
fn test_app_ui_style_classification() {
    assert_eq!(
        expect_route(Style::NextJsAppUi, "/page.tsx"),
        (FileRole::Page, String::new())
    );
    assert_eq!(
        expect_route(Style::NextJsAppUi, "/route/(group)/page.tsx"),
        (FileRole::Page, "/route/(group)".to_string())
    );
    assert_eq!(
        expect_route(Style::NextJsAppUi, "/route/[param]/not-found.tsx"),
        (FileRole::Extra("not-found"), "/route/:param".to_string())
    );
    assert_eq!(
        parse(Style::NextJsAppUi, "/route/_layout.tsx"),
        ParseOutcome::NotARoute
    );
}

#[test]
fn test_app_routes_style_classification() {
    assert_eq!(
        expect_route(Style::NextJsAppRoutes, "/api/users/route.ts"),
        (FileRole::Page, "/api/users".to_string())
    );
    assert_eq!(
        parse(Style::NextJsAppRoutes, "/api/users/page.tsx"),
        ParseOutcome::NotARoute
    );
}

#[test]
fn test_non_route_files_are_silently_skipped() {
    for path in ["/readme.md", "/styles/global.css", "/pages.test.snap"] {
        assert_eq!(parse(Style::NextJsPages, path), ParseOutcome::NotARoute, "{path}");
    }
    // Styles requiring reserved basenames skip everything else.
    assert_eq!(
        parse(Style::NextJsAppUi, "/dashboard/chart.tsx"),
        ParseOutcome::NotARoute
    );
}

#[test]
fn test_accepted_catch_all_is_always_final() {
    let cases = [
        (Style::NextJsPages, "/[...data].js"),
        (Style::NextJsPages, "/docs/[...rest]/index.tsx"),
        (Style::NextJsAppUi, "/docs/[[...rest]]/page.tsx"),
    ];
    for (style, path) in cases {
        let (_, pattern) = expect_route(style, path);
        let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let catch_alls: Vec<usize> = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.starts_with(":*"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(catch_alls, vec![segments.len() - 1], "{path} -> {pattern}");
    }
}

#[test]
fn test_parse_is_deterministic() {
    for path in ["/index.tsx", "/subdir/[", "/a/[b]/c.tsx", "/nope.css"] {
        assert_eq!(
            parse(Style::NextJsPages, path),
            parse(Style::NextJsPages, path),
            "{path}"
        );
    }
}

#[test]
fn test_error_spans_index_the_original_path() {
    // Spans point into the path as written, extension included in offsets.
    let err = match parse(Style::NextJsPages, "/a/[[bad]]/index.tsx") {
        ParseOutcome::Invalid(err) => err,
        other => panic!("unexpected: {other:?}"),
    };
    assert_eq!((err.column, err.length), (3, 7));
    assert_eq!(&"/a/[[bad]]/index.tsx"[err.column..err.column + err.length], "[[bad]]");
}
