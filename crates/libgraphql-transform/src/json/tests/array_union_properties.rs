use crate::json::array_union;
use proptest::prelude::*;
use serde_json::Value;

fn array_strategy() -> impl Strategy<Value = Option<Value>> {
    prop::option::of(
        prop::collection::vec(any::<i64>(), 0..6)
            .prop_map(|items| Value::Array(items.into_iter().map(Value::from).collect())),
    )
}

fn union(a: Option<Value>, b: Option<Value>) -> Option<Value> {
    array_union("items", a, b).expect("arrays always merge")
}

proptest! {
    #[test]
    fn union_is_associative(a in array_strategy(), b in array_strategy(), c in array_strategy()) {
        prop_assert_eq!(
            union(union(a.clone(), b.clone()), c.clone()),
            union(a, union(b, c)),
        );
    }

    #[test]
    fn union_with_absent_is_identity(a in array_strategy()) {
        prop_assert_eq!(union(a.clone(), None), a.clone());
        prop_assert_eq!(union(None, a.clone()), a);
    }

    #[test]
    fn union_preserves_order(a in prop::collection::vec(any::<i64>(), 0..6), b in prop::collection::vec(any::<i64>(), 0..6)) {
        let merged = union(Some(Value::from(a.clone())), Some(Value::from(b.clone())));
        let expected: Vec<i64> = a.into_iter().chain(b).collect();
        prop_assert_eq!(merged, Some(Value::from(expected)));
    }
}

#[test]
fn union_rejects_non_array_sides() {
    assert!(array_union("items", Some(Value::from(1)), Some(Value::from(vec![2]))).is_err());
    assert!(array_union("items", Some(Value::Null), Some(Value::from(vec![2]))).is_err());
}
