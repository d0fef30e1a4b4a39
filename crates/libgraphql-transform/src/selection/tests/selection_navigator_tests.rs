use crate::ast;
use crate::selection::SelectionNavigator;
use crate::selection::SelectionSetPath;

fn parse(source: &str) -> ast::Document {
    ast::parse(source).expect("parse error")
}

#[test]
fn finds_operation_field_by_field_name_across_operations() {
    let doc = parse(
        "query First { stop { id } }
         fragment F on Trip { trip { id } }
         query Second { trip(n: 1) { id } }",
    );
    let navigator = SelectionNavigator::new(&doc);

    let field_path = navigator.find_operation_field("trip").expect("expected `trip`");

    assert_eq!(field_path.parent(), &SelectionSetPath::definition_root(2));
    let field = navigator.field(&field_path).expect("expected a field");
    assert_eq!(field.arguments.len(), 1);
    assert!(navigator.find_operation_field("First").is_none());
}

#[test]
fn expands_named_fragments_but_not_inline_fragments() {
    let doc = parse(
        "{ trip { ...Patterns ... on Trip { hidden } } }
         fragment Patterns on Trip { tripPatterns { duration } }",
    );
    let navigator = SelectionNavigator::new(&doc);

    assert!(navigator.contains_field("trip", &["tripPatterns", "duration"]));
    assert!(!navigator.contains_field("trip", &["hidden"]));
}

#[test]
fn contains_field_is_false_past_a_leaf() {
    let doc = parse("{ trip { duration } }");
    let navigator = SelectionNavigator::new(&doc);

    assert!(navigator.contains_field("trip", &[]));
    assert!(navigator.contains_field("trip", &["duration"]));
    assert!(!navigator.contains_field("trip", &["duration", "seconds"]));
    assert!(!navigator.contains_field("stop", &[]));
}

#[test]
fn unresolved_spreads_are_skipped() {
    let doc = parse("{ trip { ...Missing duration } }");
    let navigator = SelectionNavigator::new(&doc);

    assert!(navigator.contains_field("trip", &["duration"]));
    assert!(navigator.fragment_definition("Missing").is_none());
}

#[test]
fn cyclic_fragments_terminate() {
    let doc = parse(
        "{ trip { ...A } }
         fragment A on Trip { ...B }
         fragment B on Trip { ...A legs }",
    );
    let navigator = SelectionNavigator::new(&doc);

    assert!(navigator.contains_field("trip", &["legs"]));
    assert!(!navigator.contains_field("trip", &["nope"]));
}

#[test]
fn first_fragment_definition_wins() {
    let doc = parse(
        "{ trip { ...F } }
         fragment F on Trip { first }
         fragment F on Trip { second }",
    );
    let navigator = SelectionNavigator::new(&doc);

    assert!(navigator.contains_field("trip", &["first"]));
    assert!(!navigator.contains_field("trip", &["second"]));
}
