//! Property-based tests for the language lookup

use super::*;
use proptest::prelude::*;

fn arb_entry() -> impl Strategy<Value = LanguageEntry> {
    prop::sample::select(entries().to_vec())
}

/// Flip the case of each character according to the mask
fn scramble_case(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn resolve_code_is_case_insensitive(
        entry in arb_entry(),
        mask in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let scrambled = scramble_case(entry.name, &mask);
        prop_assert_eq!(resolve_code(&scrambled), resolve_code(entry.name));
        prop_assert_eq!(resolve_code(&entry.name.to_uppercase()), resolve_code(&entry.name.to_lowercase()));
    }

    #[test]
    fn resolve_code_returns_first_declared_code(entry in arb_entry()) {
        let first = entries()
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(entry.name))
            .map(|e| e.code);
        prop_assert_eq!(resolve_code(entry.name), first);
        prop_assert!(first.is_some());
    }

    #[test]
    fn unknown_names_resolve_to_none(name in "[a-z]{1,12}") {
        let known = entries().iter().any(|e| e.name.eq_ignore_ascii_case(&name));
        prop_assume!(!known);
        prop_assert_eq!(resolve_code(&name), None);
    }

    #[test]
    fn every_resolved_code_maps_back_to_a_known_name(entry in arb_entry()) {
        let code = resolve_code(entry.name).unwrap();
        prop_assert!(language_name(code).is_some());
    }
}
