use folio_types::coerce::{parse_order, parse_proficiency, split_list};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ── split_list ───────────────────────────────────────────────────

#[test]
fn splits_comma_separated_items() {
    assert_eq!(split_list("React, Node.js"), vec!["React", "Node.js"]);
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(
        split_list("  Rust ,  Tokio  , Serde"),
        vec!["Rust", "Tokio", "Serde"]
    );
}

#[test]
fn drops_empty_items() {
    assert_eq!(split_list("React,,Node.js,"), vec!["React", "Node.js"]);
    assert_eq!(split_list(""), Vec::<String>::new());
    assert_eq!(split_list(" , , "), Vec::<String>::new());
}

#[test]
fn preserves_item_order() {
    assert_eq!(split_list("c, a, b"), vec!["c", "a", "b"]);
}

// ── parse_order ──────────────────────────────────────────────────

#[test]
fn parses_integers_with_whitespace() {
    assert_eq!(parse_order("3"), 3);
    assert_eq!(parse_order(" 7 "), 7);
    assert_eq!(parse_order("-1"), -1);
}

#[test]
fn unparseable_order_defaults_to_zero() {
    assert_eq!(parse_order(""), 0);
    assert_eq!(parse_order("first"), 0);
}

// ── parse_proficiency ────────────────────────────────────────────

#[test]
fn clamps_proficiency_into_scale() {
    assert_eq!(parse_proficiency("4"), 4);
    assert_eq!(parse_proficiency("9"), 5);
    assert_eq!(parse_proficiency("0"), 1);
    assert_eq!(parse_proficiency("-3"), 1);
}

#[test]
fn unparseable_proficiency_defaults_to_three() {
    assert_eq!(parse_proficiency(""), 3);
    assert_eq!(parse_proficiency("expert"), 3);
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn split_items_are_trimmed_and_non_empty(input in ".{0,200}") {
        for item in split_list(&input) {
            prop_assert!(!item.is_empty());
            prop_assert_eq!(item.trim(), item.as_str());
            prop_assert!(!item.contains(','));
        }
    }

    #[test]
    fn proficiency_always_lands_in_scale(input in ".{0,20}") {
        let level = parse_proficiency(&input);
        prop_assert!((1..=5).contains(&level));
    }
}
