use crate::ast;
use crate::value::ArgumentValue;
use crate::value::InlineValue;
use crate::value::JsonObject;
use crate::value::ListEntry;
use crate::value::SetValueError;
use serde_json::json;

fn value(literal: &str) -> ast::Value {
    ast::parse_value(literal).expect("invalid value literal")
}

#[test]
fn typed_accessors_do_not_coerce() {
    let mut int = value("3");
    let int = InlineValue::new(&mut int, None);
    assert_eq!(int.as_int(), Some(3));
    assert_eq!(int.as_double(), None);
    assert_eq!(int.as_str(), None);

    let mut float = value("2.5");
    let float = InlineValue::new(&mut float, None);
    assert_eq!(float.as_double(), Some(2.5));
    assert_eq!(float.as_int(), None);

    let mut string = value(r#""7""#);
    let string = InlineValue::new(&mut string, None);
    assert_eq!(string.as_str(), Some("7"));
    assert_eq!(string.as_int(), None);

    let mut boolean = value("false");
    assert_eq!(InlineValue::new(&mut boolean, None).as_bool(), Some(false));
}

#[test]
fn enum_answers_as_str() {
    let mut node = value("RAIL");

    assert_eq!(InlineValue::new(&mut node, None).as_str(), Some("RAIL"));
}

#[test]
fn out_of_range_int_is_absent() {
    let mut node = value("4294967296");

    assert_eq!(InlineValue::new(&mut node, None).as_int(), None);
}

#[test]
fn null_literal_is_null() {
    let mut null = value("null");
    let mut zero = value("0");

    assert!(InlineValue::new(&mut null, None).is_null());
    assert!(!InlineValue::new(&mut zero, None).is_null());
}

#[test]
fn list_elements_are_mutable_in_place() {
    let mut node = value("[1, 2, 3]");
    {
        let mut list = InlineValue::new(&mut node, None);
        let mut items = list.as_list().expect("expected a list");
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].set_int(20), Ok(()));
    }

    assert_eq!(node, value("[1, 20, 3]"));
}

#[test]
fn map_entries_are_mutable_in_place() {
    let mut node = value(r#"{name: "Oslo", zone: A}"#);
    {
        let mut object = InlineValue::new(&mut node, None);
        let mut fields = object.as_map().expect("expected an object");
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["name", "zone"]);
        let zone = fields.get_mut("zone").expect("expected a zone field");
        assert_eq!(zone.set_string("B"), Ok(()));
    }

    assert_eq!(node, value(r#"{name: "Oslo", zone: B}"#));
}

#[test]
fn variable_reference_as_map_reads_the_variable() {
    let mut node = value("$from");
    let variables: JsonObject = serde_json::from_value(json!({
        "from": {"name": "Oslo s", "stop": {"id": 3}},
    })).expect("invalid variables");
    let mut from = InlineValue::new(&mut node, Some(&variables));

    let mut fields = from.as_map().expect("expected the variable's object");

    assert_eq!(fields.get("name").and_then(|name| name.as_str()), Some("Oslo s"));
    let stop = fields.get_mut("stop").expect("expected a stop field");
    let mut stop_fields = stop.as_map().expect("expected a nested object");
    let id = stop_fields.get_mut("id").expect("expected an id field");
    assert_eq!(id.as_int(), Some(3));
    assert!(matches!(id.set_int(4), Err(SetValueError::UnsupportedMutation(_))));
}

#[test]
fn variable_reference_without_variables_has_no_map() {
    let mut node = value("$from");

    assert!(InlineValue::new(&mut node, None).as_map().is_none());
}

#[test]
fn set_value_matches_node_kind() {
    let mut string = value(r#""old""#);
    assert_eq!(InlineValue::new(&mut string, None).set_string("new"), Ok(()));
    assert_eq!(string, value(r#""new""#));

    let mut list = value("[A]");
    let entries = vec![ListEntry::Enum("BUS".to_string()), ListEntry::String("x".to_string())];
    assert_eq!(InlineValue::new(&mut list, None).set_list(entries), Ok(()));
    assert_eq!(list, value(r#"[BUS, "x"]"#));

    let mut int = value("1");
    assert_eq!(
        InlineValue::new(&mut int, None).set_string("x"),
        Err(SetValueError::TypeMismatch { attempted: "string", actual: "int" }),
    );
    let mut list = value("[]");
    assert_eq!(
        InlineValue::new(&mut list, None).set_int(1),
        Err(SetValueError::TypeMismatch { attempted: "integer", actual: "list" }),
    );
}

#[test]
fn deep_copy_shares_nothing() {
    let mut node = value("[1, 2]");
    let copied_first = {
        let mut copy = InlineValue::new(&mut node, None).deep_copy();
        if let Some(mut items) = copy.as_list() {
            assert_eq!(items[0].set_int(100), Ok(()));
        }
        copy.as_list().and_then(|items| items[0].as_int())
    };

    assert_eq!(copied_first, Some(100));
    assert_eq!(node, value("[1, 2]"));
}

#[test]
fn owned_value_answers_like_a_borrowed_one() {
    let mut owned = InlineValue::owned(value("{a: 1}"), None);

    let fields = owned.as_map().expect("expected an object");

    assert_eq!(fields.get("a").and_then(|a| a.as_int()), Some(1));
}
