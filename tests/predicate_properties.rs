// tests/predicate_properties.rs

use proptest::prelude::*;
use ku_release::discovery::{is_executable, is_performance_test, is_unit_test};
use ku_release::types::{EntryKind, EntryMeta};

fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![
        Just(EntryKind::File),
        Just(EntryKind::Dir),
        Just(EntryKind::Other),
    ]
}

proptest! {
    #[test]
    fn executable_iff_file_owner_exec_and_visible(
        name in "\\.?[A-Za-z0-9_.]{0,12}",
        kind in kind_strategy(),
        mode in 0u32..0o1000,
    ) {
        let meta = EntryMeta { kind, mode };
        let expected = kind == EntryKind::File
            && mode & 0o100 != 0
            && !name.starts_with('.');
        prop_assert_eq!(is_executable(&name, &meta), expected);
    }

    #[test]
    fn hidden_names_are_never_selected(
        rest in "[A-Za-z0-9_]{0,12}",
        mode in 0u32..0o1000,
    ) {
        let name = format!(".{rest}");
        prop_assert!(!is_executable(&name, &EntryMeta::file(mode)));
    }

    #[test]
    fn marker_anywhere_in_name_excludes(
        prefix in "[A-Za-z0-9_]{0,8}",
        suffix in "[A-Za-z0-9_]{0,8}",
    ) {
        let name = format!("{prefix}PerformanceTest{suffix}");
        prop_assert!(is_performance_test(&name));
        prop_assert!(!is_unit_test(&name, &EntryMeta::file(0o755)));
    }

    #[test]
    fn lowercase_names_never_match_marker(name in "[a-z0-9_]{0,24}") {
        prop_assert!(!is_performance_test(&name));
    }
}
