//! Property-based tests for path resolution.
//!
//! Note: the normalize module has its own inline property tests. This
//! module covers the invariants of absolute and relative resolution, and
//! the round-trip law connecting the two.

use super::absolute::resolve_absolute;
use super::normalize::normalize;
use super::relative::resolve_relative;
use proptest::prelude::*;

// Strategy for plain path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,8}".prop_filter("not a dot segment", |s| s != "." && s != "..")
}

// Strategy for document-like paths, optionally absolute or directory-shaped
fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(segment_strategy(), 1..6),
        prop::bool::ANY,
    )
        .prop_map(|(absolute, parts, directory)| {
            let mut path = String::new();
            if absolute {
                path.push('/');
            }
            path.push_str(&parts.join("/"));
            if directory {
                path.push('/');
            }
            path
        })
}

// Strategy for references with `.` and `..` steps mixed in
fn dotted_reference_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            segment_strategy(),
        ],
        1..8,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    /// Successful absolute resolution yields a canonical path: exactly one
    /// leading slash, no duplicate separators, no `/./` residue.
    #[test]
    fn absolute_results_canonical(source in path_strategy(), destination in dotted_reference_strategy()) {
        if let Some(resolved) = resolve_absolute(&source, &destination) {
            prop_assert!(resolved.starts_with('/'));
            prop_assert!(!resolved.contains("//"));
            prop_assert!(!resolved.contains("/./"));
        }
    }

    /// Absolute resolution is stable: resolving a canonical result against
    /// the root reproduces it.
    #[test]
    fn absolute_resolution_stable(source in path_strategy(), destination in path_strategy()) {
        if let Some(resolved) = resolve_absolute(&source, &destination) {
            prop_assert_eq!(resolve_absolute("/", &resolved), Some(resolved));
        }
    }

    /// Relative results never start with a separator.
    #[test]
    fn relative_results_never_absolute(source in path_strategy(), destination in path_strategy()) {
        if let Ok(relative) = resolve_relative(&source, &destination) {
            prop_assert!(!relative.starts_with('/'));
        }
    }

    /// Relative results start with `./` or climb with `../` steps.
    #[test]
    fn relative_results_anchored(source in path_strategy(), destination in path_strategy()) {
        if let Ok(relative) = resolve_relative(&source, &destination) {
            prop_assert!(
                relative.starts_with("./") || relative.starts_with("../"),
                "unanchored result: {}", relative
            );
        }
    }

    /// Round trip: resolving the relative path from the source lands on the
    /// same canonical target as resolving the destination directly.
    #[test]
    fn relative_round_trips_through_absolute(source in path_strategy(), destination in path_strategy()) {
        let direct = resolve_absolute(&source, &destination);
        if let (Some(direct), Ok(relative)) = (direct, resolve_relative(&source, &destination)) {
            if let Some(rejoined) = resolve_absolute(&source, &relative) {
                prop_assert_eq!(direct, rejoined);
            }
        }
    }

    /// Normalization of the inputs never changes the resolution outcome.
    #[test]
    fn resolution_ignores_separator_noise(source in path_strategy(), destination in path_strategy()) {
        let noisy_source = source.replace('/', "//");
        let noisy_destination = destination.replace('/', "\\");
        prop_assert_eq!(
            resolve_absolute(&source, &destination),
            resolve_absolute(&noisy_source, &noisy_destination)
        );
        prop_assert_eq!(normalize(&normalize(&noisy_source)), normalize(&noisy_source));
    }
}
