//! JSON overlay mechanics.

use serde_json::{Map, Value};

use super::MergeLayer;

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// - Merging an object into a non-object target first resets the target to
///   `{}`.
/// - Objects merge recursively: keys are added or overwritten and nested
///   objects are overlaid.
/// - Arrays and scalars replace `target` wholesale. In particular a file's
///   `slides` array replaces, rather than extends, the slides of earlier
///   layers.
///
/// # Examples
///
/// ```rust
/// use deck_config::declarative::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"footer": {"show_footer": false}, "slides": [1]});
/// merge_value(&mut acc, json!({"footer": {"show_slide_numbers": true}, "slides": [2, 3]}));
/// assert_eq!(
///     acc,
///     json!({"footer": {"show_footer": false, "show_slide_numbers": true}, "slides": [2, 3]})
/// );
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match layer {
        Value::Object(map) => merge_object(target, map),
        other => *target = other,
    }
}

fn merge_object(target: &mut Value, map: Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    let Some(target_map) = target.as_object_mut() else {
        return;
    };

    for (key, value) in map {
        match target_map.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target_map.insert(key, value);
            }
        }
    }
}

/// Fold `layers` in order into a single JSON value.
#[must_use]
pub fn merge_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = MergeLayer>,
{
    layers.into_iter().fold(Value::Null, |mut acc, layer| {
        merge_value(&mut acc, layer.into_value());
        acc
    })
}
