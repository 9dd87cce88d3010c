//! Tag unwrapping: generation-3 tagged JSON to generation-1 plain JSON

use serde_json::Value;

/// The closed set of collection tags the unwrapper dispatches on.
///
/// Anything outside the three collection tags (scalar wrappers like `g:Int64`,
/// element wrappers like `g:Vertex`) falls into `Other` and unwraps to its
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    List,
    Set,
    Map,
    Other,
}

impl Tag {
    fn classify(tag: &str) -> Self {
        match tag {
            "g:List" => Self::List,
            "g:Set" => Self::Set,
            "g:Map" => Self::Map,
            _ => Self::Other,
        }
    }
}

/// Recursively unwrap a generation-3 tagged value into plain JSON.
///
/// Scalars pass through. Untagged objects and arrays are rewritten in place
/// with every element unwrapped. Tagged objects dispatch on the tag:
/// `g:List` payloads are unwrapped recursively, `g:Map` payloads pair
/// consecutive elements into a plain object, and any other tag takes the
/// payload and recurses once more if it is still a container.
///
/// `g:Set` is the deliberate exception: its payload array is taken as-is
/// with the elements left untouched, matching the wire behavior the rest of
/// the pipeline was built against.
pub fn graphson3_to_1(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            let tag = map
                .get("@type")
                .and_then(Value::as_str)
                .map(Tag::classify);
            match tag {
                None => Value::Object(
                    map.into_iter()
                        .map(|(k, v)| (k, graphson3_to_1(v)))
                        .collect(),
                ),
                Some(Tag::List) => graphson3_to_1(map.remove("@value").unwrap_or(Value::Null)),
                Some(Tag::Set) => map.remove("@value").unwrap_or(Value::Null),
                Some(Tag::Map) => unwrap_map(map.remove("@value").unwrap_or(Value::Null)),
                Some(Tag::Other) => {
                    let payload = map.remove("@value").unwrap_or(Value::Null);
                    if payload.is_object() || payload.is_array() {
                        graphson3_to_1(payload)
                    } else {
                        payload
                    }
                }
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(graphson3_to_1).collect()),
        scalar => scalar,
    }
}

/// Pair consecutive payload elements into a plain key/value object.
fn unwrap_map(payload: Value) -> Value {
    let entries = match payload {
        Value::Array(items) => items,
        other => return other,
    };
    let mut map = serde_json::Map::new();
    let mut iter = entries.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        map.insert(map_key(key), graphson3_to_1(value));
    }
    Value::Object(map)
}

/// Reduce a map key to a string.
///
/// Composite keys are unwrapped first; a key that is still composite is
/// serialized to its JSON text with single quotes replaced by spaces rather
/// than rejected.
fn map_key(key: Value) -> String {
    let key = if key.is_object() || key.is_array() {
        graphson3_to_1(key)
    } else {
        key
    };
    match key {
        Value::String(s) => s,
        composite @ (Value::Array(_) | Value::Object(_)) => {
            composite.to_string().replace('\'', " ")
        }
        scalar => scalar.to_string(),
    }
}
