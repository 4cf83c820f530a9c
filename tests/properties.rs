//! Property-based tests for the document codec
//!
//! Documents are generated from a small grammar of sections holding scalar
//! and list entries, then checked for:
//! - round-trip: parse(serialize(tree)) == tree
//! - idempotence of serialization
//! - insensitivity to comments, blank lines and uniform re-indentation
//! - deterministic scalar coercion

use proptest::prelude::*;
use skill_cfg::scalar::coerce;
use skill_cfg::{parse_document, serialize, Scalar};

#[derive(Debug, Clone)]
enum Entry {
    Scalar(String, String),
    List(String, Vec<String>),
}

/// Keys never collide with the reserved `loaded`/`name` keys or section names.
fn key_strategy() -> impl Strategy<Value = String> {
    "k[a-z0-9_-]{0,6}"
}

fn section_key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}"
}

fn scalar_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i64>().prop_map(|n| n.to_string()),
        (-1000i32..1000, 0u16..1000).prop_map(|(whole, frac)| format!("{}.{}", whole, frac)),
        any::<bool>().prop_map(|b| b.to_string()),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| format!("'{}'", s)),
    ]
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    prop_oneof![
        (key_strategy(), scalar_text_strategy()).prop_map(|(k, v)| Entry::Scalar(k, v)),
        (key_strategy(), prop::collection::vec("[a-zA-Z0-9 ]{0,10}", 0..4))
            .prop_map(|(k, items)| Entry::List(k, items)),
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<(String, Vec<Entry>)>> {
    prop::collection::vec(
        (section_key_strategy(), prop::collection::vec(entry_strategy(), 0..5)),
        1..4,
    )
}

/// Render sections as `(indent level, text)` lines.
fn render(sections: &[(String, Vec<Entry>)]) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    for (name, entries) in sections {
        lines.push((0, format!("{}:", name)));
        for entry in entries {
            match entry {
                Entry::Scalar(key, value) => lines.push((1, format!("{}: {}", key, value))),
                Entry::List(key, items) if items.is_empty() => {
                    lines.push((1, format!("{}: []", key)))
                }
                Entry::List(key, items) => {
                    lines.push((1, format!("{}:", key)));
                    for item in items {
                        lines.push((1, format!("- '{}'", item)));
                    }
                }
            }
        }
    }
    lines
}

fn to_text(lines: &[(usize, String)], offset: usize, unit: usize) -> String {
    lines
        .iter()
        .map(|(level, text)| format!("{}{}\n", " ".repeat(offset + level * unit), text))
        .collect()
}

proptest! {
    #[test]
    fn test_round_trip(sections in document_strategy()) {
        let input = to_text(&render(&sections), 0, 2);
        let tree = parse_document(&input);

        let text = serialize(&tree);
        let reparsed = parse_document(&text);

        prop_assert_eq!(&reparsed, &tree);
        prop_assert_eq!(serialize(&reparsed), text);
    }

    #[test]
    fn test_uniform_reindent_keeps_tree(
        sections in document_strategy(),
        offset in 1usize..4,
        scale in 1usize..4,
    ) {
        let lines = render(&sections);
        let base = parse_document(&to_text(&lines, 0, 2));
        let shifted = parse_document(&to_text(&lines, offset * 2, 2));
        let widened = parse_document(&to_text(&lines, 0, 2 * scale));

        prop_assert_eq!(&shifted, &base);
        prop_assert_eq!(&widened, &base);
    }

    #[test]
    fn test_comments_and_blanks_keep_tree(
        sections in document_strategy(),
        noise in prop::collection::vec((0usize..3, 0usize..8), 0..64),
    ) {
        let lines = render(&sections);
        let clean = to_text(&lines, 0, 2);

        let mut noisy = String::new();
        for (i, (level, text)) in lines.iter().enumerate() {
            match noise.get(i) {
                Some((1, indent)) => noisy.push_str(&format!("{}# note {}\n", " ".repeat(*indent), i)),
                Some((2, indent)) => noisy.push_str(&format!("{}\n", " ".repeat(*indent))),
                _ => {}
            }
            noisy.push_str(&format!("{}{}\n", " ".repeat(level * 2), text));
        }
        noisy.push_str("# trailing\n");

        prop_assert_eq!(parse_document(&noisy), parse_document(&clean));
    }

    #[test]
    fn test_integer_text_coerces_to_integer(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string()), Scalar::Integer(n));
    }

    #[test]
    fn test_quoted_text_stays_string(s in "[a-zA-Z0-9 .-]{0,16}") {
        prop_assert_eq!(coerce(&format!("'{}'", s)), Scalar::String(s));
    }
}

#[test]
fn test_documented_scalar_examples() {
    assert_eq!(coerce("42"), Scalar::Integer(42));
    assert_eq!(coerce("3.5"), Scalar::Float(3.5));
    assert_eq!(coerce("true"), Scalar::Boolean(true));
    assert_eq!(coerce("'42'"), Scalar::String("42".into()));
    assert_eq!(coerce(""), Scalar::Integer(0));
}
