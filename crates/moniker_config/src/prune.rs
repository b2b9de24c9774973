//! Pruning of raw configuration trees.

use moniker_core::Optional;
use serde_json::Value;

/// Drop every null or empty node from a JSON tree.
///
/// Null, `""`, `[]`, and `{}` are dead nodes. Containers are pruned bottom
/// up, so a container whose children all turn out dead is dead too. A tree
/// that prunes away entirely comes back absent; numbers and booleans are
/// never dead, whatever their value.
pub fn prune(value: Value) -> Optional<Value> {
    match value {
        Value::Null => Optional::Absent,
        Value::String(text) if text.is_empty() => Optional::Absent,
        Value::Array(items) => {
            let kept: Vec<Value> = items
                .into_iter()
                .filter_map(|item| prune(item).into_option())
                .collect();
            if kept.is_empty() {
                Optional::Absent
            } else {
                Optional::Present(Value::Array(kept))
            }
        }
        Value::Object(fields) => {
            let kept: serde_json::Map<String, Value> = fields
                .into_iter()
                .filter_map(|(name, field)| {
                    prune(field).into_option().map(|field| (name, field))
                })
                .collect();
            if kept.is_empty() {
                Optional::Absent
            } else {
                Optional::Present(Value::Object(kept))
            }
        }
        scalar => Optional::Present(scalar),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_live_scalars_pass_through() {
        assert_eq!(prune(json!(0)), Optional::Present(json!(0)));
        assert_eq!(prune(json!(false)), Optional::Present(json!(false)));
        assert_eq!(prune(json!("text")), Optional::Present(json!("text")));
    }

    #[test]
    fn test_dead_leaves_are_dropped() {
        assert_eq!(prune(json!(null)), Optional::Absent);
        assert_eq!(prune(json!("")), Optional::Absent);
        assert_eq!(prune(json!([])), Optional::Absent);
        assert_eq!(prune(json!({})), Optional::Absent);
    }

    #[test]
    fn test_containers_keep_only_live_children() {
        let pruned = prune(json!({
            "aliases": { "g": "git", "dead": "" },
            "noise": null,
            "tags": ["keep", "", null],
        }));
        assert_eq!(
            pruned,
            Optional::Present(json!({
                "aliases": { "g": "git" },
                "tags": ["keep"],
            }))
        );
    }

    #[test]
    fn test_containers_emptied_by_pruning_are_dropped_too() {
        let pruned = prune(json!({
            "outer": { "inner": { "value": null }, "list": ["", null] },
        }));
        assert_eq!(pruned, Optional::Absent);
    }

    fn any_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{0,4}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                    .prop_map(|fields| Value::Object(fields.into_iter().collect())),
            ]
        })
    }

    fn has_dead_node(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(text) => text.is_empty(),
            Value::Array(items) => items.is_empty() || items.iter().any(has_dead_node),
            Value::Object(fields) => {
                fields.is_empty() || fields.values().any(has_dead_node)
            }
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    proptest! {
        #[test]
        fn prop_pruned_trees_contain_no_dead_nodes(value in any_value()) {
            if let Optional::Present(pruned) = prune(value) {
                prop_assert!(!has_dead_node(&pruned));
            }
        }

        #[test]
        fn prop_prune_is_idempotent(value in any_value()) {
            match prune(value) {
                Optional::Present(once) => {
                    prop_assert_eq!(prune(once.clone()), Optional::Present(once));
                }
                Optional::Absent => {}
            }
        }
    }
}
