use crate::json::JsonMessage;
use crate::json::JsonMessageError;
use serde_json::json;

type Result<T> = std::result::Result<T, JsonMessageError>;

#[test]
fn parses_object_as_single_and_array_as_batch() -> Result<()> {
    let single: JsonMessage = r#"{"data": {"trip": []}}"#.parse()?;
    let batch: JsonMessage = r#"[{"data": 1}, {"data": 2}]"#.parse()?;

    assert!(matches!(single, JsonMessage::Single(_)));
    assert!(matches!(batch, JsonMessage::Batch(ref elements) if elements.len() == 2));
    Ok(())
}

#[test]
fn rejects_scalar_payloads_and_scalar_batch_elements() {
    assert!(matches!(
        "42".parse::<JsonMessage>(),
        Err(JsonMessageError::NotAnObject("a number")),
    ));
    assert!(matches!(
        r#"[{"a": 1}, "b"]"#.parse::<JsonMessage>(),
        Err(JsonMessageError::NotAnObject("a string")),
    ));
    assert!(matches!(
        "{not json".parse::<JsonMessage>(),
        Err(JsonMessageError::ParseError(_)),
    ));
}

#[test]
fn single_merge_appends_other_array_to_every_matching_entry() -> Result<()> {
    let mut this = JsonMessage::from_value(json!({
        "data": {
            "trip": {"tripPatterns": [{"id": 1}]},
            "other": {"tripPatterns": [{"id": 2}]},
        },
    }))?;
    let other = JsonMessage::from_value(json!({
        "data": {"trip": {"tripPatterns": [{"id": 3}, {"id": 4}]}},
    }))?;

    this.merge_elements(&other, "tripPatterns")?;

    assert_eq!(
        this,
        JsonMessage::from_value(json!({
            "data": {
                "trip": {"tripPatterns": [{"id": 1}, {"id": 3}, {"id": 4}]},
                "other": {"tripPatterns": [{"id": 2}, {"id": 3}, {"id": 4}]},
            },
        }))?,
    );
    Ok(())
}

#[test]
fn single_merge_without_match_in_other_is_a_no_op() -> Result<()> {
    let original = json!({"data": {"tripPatterns": [1]}});
    let mut this = JsonMessage::from_value(original.clone())?;
    let other = JsonMessage::from_value(json!({"data": {"legs": [2]}}))?;

    this.merge_elements(&other, "tripPatterns")?;

    assert_eq!(this, JsonMessage::from_value(original)?);
    Ok(())
}

#[test]
fn single_merge_rejects_non_array_sides() -> Result<()> {
    let mut this = JsonMessage::from_value(json!({"tripPatterns": {"id": 1}}))?;
    let other = JsonMessage::from_value(json!({"tripPatterns": [1]}))?;

    let result = this.merge_elements(&other, "tripPatterns");

    assert!(matches!(
        result,
        Err(JsonMessageError::MergeTypeMismatch { ref element_name }) if element_name == "tripPatterns",
    ));
    Ok(())
}

#[test]
fn batch_merge_is_element_wise_on_direct_key() -> Result<()> {
    let mut this = JsonMessage::from_value(json!([
        {"tripPatterns": [1], "id": "a"},
        {"id": "b"},
        {"tripPatterns": [5]},
        {"id": "d"},
    ]))?;
    let other = JsonMessage::from_value(json!([
        {"tripPatterns": [2]},
        {"tripPatterns": [3]},
        {"nested": {"tripPatterns": [6]}},
    ]))?;

    this.merge_elements(&other, "tripPatterns")?;

    assert_eq!(
        this,
        JsonMessage::from_value(json!([
            {"tripPatterns": [1, 2], "id": "a"},
            {"id": "b", "tripPatterns": [3]},
            {"tripPatterns": [5]},
            {"id": "d"},
        ]))?,
    );
    Ok(())
}

#[test]
fn batch_merge_requires_batch_other() -> Result<()> {
    let mut this = JsonMessage::from_value(json!([{"tripPatterns": [1]}]))?;
    let other = JsonMessage::from_value(json!({"tripPatterns": [2]}))?;

    assert!(matches!(
        this.merge_elements(&other, "tripPatterns"),
        Err(JsonMessageError::ShapeMismatch),
    ));
    Ok(())
}

#[test]
fn find_child_nodes_does_not_descend_into_arrays_or_matches() -> Result<()> {
    let message = JsonMessage::from_value(json!({
        "a": {"id": 1, "b": {"id": 2}},
        "list": [{"id": 3}],
        "id": {"id": 4},
    }))?;

    let found = message.find_child_nodes(|key, _| key == "id");

    assert_eq!(found, vec![&json!(1), &json!(2), &json!({"id": 4})]);
    Ok(())
}

#[test]
fn find_child_nodes_searches_each_batch_element() -> Result<()> {
    let message = JsonMessage::from_value(json!([{"x": {"id": 1}}, {"id": 2}]))?;

    assert_eq!(message.find_child_nodes(|key, _| key == "id"), vec![&json!(1), &json!(2)]);
    Ok(())
}

#[test]
fn transform_node_propagates_mapper_errors() -> Result<()> {
    let mut message = JsonMessage::from_value(json!({"a": {"n": 1}, "n": 2}))?;

    let result: std::result::Result<(), String> = message.transform_node("n", |value| {
        match value.as_i64() {
            Some(n) if n < 2 => Ok(json!(n * 10)),
            _ => Err(format!("cannot transform {value}")),
        }
    });

    assert_eq!(result, Err("cannot transform 2".to_string()));
    assert_eq!(message.elements()[0]["a"]["n"], json!(10));
    Ok(())
}

#[test]
fn serializes_preserving_key_order() -> Result<()> {
    let payload = r#"{"query":"{ a }","variables":{"z":1,"a":2}}"#;
    let message: JsonMessage = payload.parse()?;

    assert_eq!(message.write_value_as_string()?, payload);

    let batch: JsonMessage = format!("[{payload},{payload}]").parse()?;
    assert_eq!(batch.write_value_as_string()?, format!("[{payload},{payload}]"));
    Ok(())
}
