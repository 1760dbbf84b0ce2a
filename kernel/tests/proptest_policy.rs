//! Property-based tests for workspace path confinement.
//!
//! Uses proptest to verify that `PathPolicy` accepts paths that stay under
//! the root and rejects paths that climb out of it.

use paster_kernel::vfs::{AccessError, PathPolicy};
use proptest::prelude::*;
use std::path::Path;

/// Strategy for a single normal path segment
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: paths made only of normal segments resolve under the root.
    #[test]
    fn nested_paths_stay_under_root(
        segments in prop::collection::vec(segment_strategy(), 1..6)
    ) {
        let root = Path::new("/workspace");
        let relative = segments.join("/");

        let resolved = PathPolicy::confined().resolve(root, &relative).unwrap();
        prop_assert!(resolved.starts_with(root));
        prop_assert_eq!(resolved, root.join(&relative));
    }

    /// Property: climbing one level more than the path descends is rejected.
    #[test]
    fn climbing_above_root_is_rejected(
        segments in prop::collection::vec(segment_strategy(), 0..4)
    ) {
        let mut relative = segments.join("/");
        for _ in 0..=segments.len() {
            if relative.is_empty() {
                relative.push_str("..");
            } else {
                relative.push_str("/..");
            }
        }
        relative.push_str("/escape.txt");

        let result = PathPolicy::confined().resolve(Path::new("/workspace"), &relative);
        let is_escape = matches!(result, Err(AccessError::PathEscapesRoot { .. }));
        prop_assert!(is_escape);
    }

    /// Property: the unrestricted policy never rejects a path.
    #[test]
    fn unrestricted_policy_resolves_everything(
        segments in prop::collection::vec(
            prop_oneof![segment_strategy(), Just("..".to_string())],
            1..6,
        )
    ) {
        let relative = segments.join("/");
        prop_assert!(PathPolicy::unrestricted().resolve(Path::new("/workspace"), &relative).is_ok());
    }
}
