#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::parser::parse_document;

const WARRIOR: &str = r#"
Warrior:
  type: 'class'
  level: 5
  tags:
  - 'tank'
  - 'melee'
"#;

#[test]
fn test_serialize_class_document() {
    let root = parse_document(WARRIOR);
    let text = serialize(&root);

    assert_eq!(
        text,
        "'Warrior':\n  type: 'class'\n  level: 5\n  tags:\n  - 'tank'\n  - 'melee'\n"
    );
}

#[test]
fn test_round_trip_and_idempotence() {
    let input = r#"
Fireball:
  type: 'skill'
  max-level: 5
  cooldown: 2.5
  passive: false
  quoted-number: '42'
  desc:
  - 'Deals damage'
  - 'Sets target on fire'
  attributes:
    damage-base: 10
    damage-scale: 1.0
    empty: {}
  tags: []
"#;

    let tree = parse_document(input);
    let text = serialize(&tree);
    let reparsed = parse_document(&text);

    assert_eq!(reparsed, tree);
    assert_eq!(serialize(&reparsed), text);
}

#[test]
fn test_round_trip_multiple_top_level_sections() {
    let input = "Warrior:\n  level: 5\nMage:\n  level: 7\n";
    let tree = parse_document(input);
    let text = serialize(&tree);
    assert_eq!(parse_document(&text), tree);
}

#[test]
fn test_keys_the_parser_would_split_are_quoted() {
    let input = "Skill:\n  'ratio:max': 3\n  'note:s':\n  - 'a'\n  '#tag': 1\n  '- dash': 2\n  level: 1\n";
    let tree = parse_document(input);
    assert_eq!(tree.keys(), vec!["ratio:max", "note:s", "#tag", "- dash", "level"]);

    let text = serialize(&tree);
    assert_eq!(
        text,
        "'Skill':\n  'ratio:max': 3\n  'note:s':\n  - 'a'\n  '#tag': 1\n  '- dash': 2\n  level: 1\n"
    );
    assert_eq!(parse_document(&text), tree);
}

#[test]
fn test_unlabelled_root_has_no_header() {
    let mut root = Node::new();
    root.put("level", 3);
    root.put("ratio", 0.5);
    assert_eq!(serialize(&root), "level: 3\nratio: 0.5\n");
}

#[test]
fn test_name_entry_used_as_header() {
    let mut root = Node::new();
    root.put("name", "Archer");
    root.put("level", 1);
    assert_eq!(serialize(&root), "'Archer':\n  name: 'Archer'\n  level: 1\n");
}

#[test]
fn test_nested_node_uses_key_when_unlabelled() {
    let mut stats = Node::new();
    stats.put("health", 20);
    let mut root = Node::new();
    root.put("stats", stats);
    assert_eq!(serialize(&root), "'stats':\n  health: 20\n");
}

#[test]
fn test_empty_section_and_list_markers() {
    let mut root = Node::new();
    root.put("attributes", Node::new());
    root.put("tags", Vec::<String>::new());
    assert_eq!(serialize(&root), "'attributes': {}\ntags: []\n");
}

#[test]
fn test_whole_floats_keep_decimal_point() {
    let mut root = Node::new();
    root.put("scale", 2.0);
    let text = serialize(&root);
    assert_eq!(text, "scale: 2.0\n");
    assert_eq!(
        parse_document(&text).get("scale"),
        Some(&Value::Scalar(Scalar::Float(2.0)))
    );
}

#[test]
fn test_quoting_convention() {
    let mut root = Node::new();
    root.put("msg", "it's \"fine\"");
    root.put("looks-numeric", "42");
    assert_eq!(
        serialize(&root),
        "msg: 'it\\'s \"fine\"'\nlooks-numeric: '42'\n"
    );
}

#[test]
fn test_components_get_unique_labels() {
    let mut first = Node::new();
    first.put("name", "Damage");
    first.put("type", "mechanic");
    let mut second = Node::new();
    second.put("name", "Damage");
    second.put("type", "mechanic");

    let mut root = Node::with_label("Fireball");
    root.put("components", vec![first, second]);

    assert_eq!(
        serialize(&root),
        "'Fireball':\n  components:\n    'Damage-0':\n      name: 'Damage'\n      type: 'mechanic'\n    'Damage-1':\n      name: 'Damage'\n      type: 'mechanic'\n"
    );
}

#[test]
fn test_empty_components_render_as_empty_map() {
    let mut root = Node::new();
    root.put("children", Vec::<Node>::new());
    assert_eq!(serialize(&root), "children: {}\n");
}

#[test]
fn test_components_under_other_key_degrade() {
    let mut element = Node::new();
    element.put("type", "target");
    let mut root = Node::new();
    root.put("targets", vec![element]);
    assert_eq!(serialize(&root), "targets: []\n");
}

#[test]
fn test_empty_root() {
    assert_eq!(serialize(&Node::new()), "");
    let labelled = Node::with_label("Empty");
    let text = serialize(&labelled);
    assert_eq!(text, "'Empty': {}\n");
    assert_eq!(parse_document(&text), labelled);
}
