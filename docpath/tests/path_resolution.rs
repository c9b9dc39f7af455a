//! Integration tests for path resolution.
//!
//! These tables exercise the two public resolution operations end to end,
//! covering the full matrix of source/destination shapes: relative and
//! absolute endpoints, `./` and `../` steps, directory paths with trailing
//! slashes, empty destinations, anchors, and ascent past the root.

use docpath::{resolve_absolute, resolve_relative};

#[test]
fn absolute_resolution_table() {
    let cases: &[(&str, &str, Option<&str>)] = &[
        ("index.md", "foo/bar/foo.md", Some("/foo/bar/foo.md")),
        ("/index.md", "/foo/bar/baz.md", Some("/foo/bar/baz.md")),
        ("/index.md", "bar.md", Some("/bar.md")),
        ("/index.md", "/baz.md", Some("/baz.md")),
        ("foo/bar/index.md", "baz/qux.md", Some("/foo/bar/baz/qux.md")),
        ("foo/bar/index.md", "/baz/qux.md", Some("/baz/qux.md")),
        ("foo/bar/index.md", "./baz.md", Some("/foo/bar/baz.md")),
        ("foo/bar/index.md", "../baz.md", Some("/foo/baz.md")),
        ("foo/bar/index.md", "../../qux.md", Some("/qux.md")),
        ("foo/bar/index", "../../qux/quux.foo", Some("/qux/quux.foo")),
        ("foo/bar/index.md", "../../../qux.md", None),
        (
            "foo/bar/index",
            "../../qux/quux.foo#anchor",
            Some("/qux/quux.foo#anchor"),
        ),
        ("foo/bar/index", "../../", Some("/")),
        ("foo/bar/index", "../..", Some("/")),
        ("foo/bar/", "../", Some("/foo/")),
        ("foo/bar/", "..", Some("/foo/")),
        ("foo/bar/", "../qux", Some("/foo/qux")),
        ("foo/bar/", "", Some("/foo/bar/")),
        ("foo/bar", "", Some("/foo/bar")),
        ("/foo/bar/", "/foo/bar.html", Some("/foo/bar.html")),
        ("/foo/bar/", "/foo/bar/baz/qux.html", Some("/foo/bar/baz/qux.html")),
        ("/foo/ba/", "/foo/ba/baz/qux.html", Some("/foo/ba/baz/qux.html")),
    ];

    for (source, destination, expected) in cases {
        assert_eq!(
            resolve_absolute(source, destination).as_deref(),
            *expected,
            "resolve_absolute({source:?}, {destination:?})"
        );
    }
}

#[test]
fn relative_resolution_table() {
    let cases: &[(&str, &str, &str)] = &[
        ("index.md", "foo/bar/foo.md", "./foo/bar/foo.md"),
        ("index.md", "/foo/bar/baz.md", "./foo/bar/baz.md"),
        ("/index.md", "foo/bar/bar.md", "./foo/bar/bar.md"),
        ("/index.md", "bar.md", "./bar.md"),
        ("/index.md", "/baz.md", "./baz.md"),
        ("./index.md", "/qux.md", "./qux.md"),
        ("index.md", "quux.md", "./quux.md"),
        ("foo/index.md", "/foo/baz.md", "./baz.md"),
        ("./foo/bar/index.md", "/baz.md", "../../baz.md"),
        ("/foo/bar/index.md", "/qux/baz.md", "../../qux/baz.md"),
        ("/foo/bar/index.md", "qux/baz.md", "./qux/baz.md"),
        (
            "/foo/bar/quux/index.md",
            "/foo/qux/corge/baz.md",
            "../../qux/corge/baz.md",
        ),
        ("./foo/index.md", "./bar/baz.md", "./bar/baz.md"),
        ("foo/index.md", "/bar/baz.md", "../bar/baz.md"),
        ("/foo/bar/index.md", "/foo/qux/baz.md", "../qux/baz.md"),
        (
            "/foo/bar/baz/qux/index.md",
            "/foo/qux/bar/baz/baz.md",
            "../../../qux/bar/baz/baz.md",
        ),
        ("./foo/index.md", "../bar/baz.md", "../bar/baz.md"),
        ("./foo/index.md", "../foo/baz.md", "./baz.md"),
        ("./foo/index.md", "../foo/baz.md#anchor", "./baz.md#anchor"),
        ("/foo/bar/index.md", "/foo/qux/", "../qux/"),
        ("/foo/bar/index.md", "../../", "../../"),
        ("/foo/bar/index.md", "..", "../"),
        ("/foo/bar/index.md", "../", "../"),
        ("/foo/bar/", "", "./"),
        ("/foo/bar/index.md", "", "./index.md"),
    ];

    for (source, destination, expected) in cases {
        assert_eq!(
            resolve_relative(source, destination).unwrap(),
            *expected,
            "resolve_relative({source:?}, {destination:?})"
        );
    }
}

#[test]
fn relative_resolution_rejects_ascending_source() {
    assert!(resolve_relative("..", "foo.md").is_err());
    assert!(resolve_relative("../index.md", "foo.md").is_err());
}

#[test]
fn round_trip_lands_on_the_same_target() {
    let cases: &[(&str, &str)] = &[
        ("/foo/bar/index.md", "/foo/qux/baz.md"),
        ("foo/bar/index.md", "../baz.md"),
        ("index.md", "foo/bar/foo.md"),
        ("/foo/bar/index.md", "qux/baz.md"),
        ("/foo/bar/index.md", ""),
    ];

    for (source, destination) in cases {
        let direct = resolve_absolute(source, destination);
        let relative = resolve_relative(source, destination).unwrap();
        let rejoined = resolve_absolute(source, &relative);
        assert_eq!(
            direct, rejoined,
            "round trip for ({source:?}, {destination:?}) via {relative:?}"
        );
    }
}
