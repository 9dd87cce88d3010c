//! Element extraction: unwrapped result buckets into the uniform model

use super::unwrap::graphson3_to_1;
use super::{GraphsonFormat, NormalizeError, NormalizeResult};
use crate::graph::{ElementId, ElementKind, GraphElement, PropertyValue, UniformGraphResult};
use serde_json::Value;

/// Convert a search or expansion response payload into the uniform model.
///
/// Generation-3 payloads are tag-unwrapped first; generation-1 payloads are
/// consumed as-is. The payload is a collection of result buckets (the node
/// list and the edge list of the combined query); every item of every bucket
/// is classified and deduplicated by identifier, first occurrence winning.
pub fn arrange(data: Value, format: GraphsonFormat) -> NormalizeResult<UniformGraphResult> {
    match format {
        GraphsonFormat::V3 => arrange_v3(graphson3_to_1(data)),
        GraphsonFormat::V1 => arrange_v1(data),
    }
}

/// Split a response payload into its result buckets.
fn buckets(data: Value) -> NormalizeResult<Vec<Value>> {
    match data {
        Value::Array(items) => Ok(items),
        Value::Object(map) => Ok(map.into_iter().map(|(_, v)| v).collect()),
        other => Err(NormalizeError::Shape(format!(
            "expected result buckets, got {other}"
        ))),
    }
}

fn bucket_items(bucket: &Value) -> NormalizeResult<&Vec<Value>> {
    bucket
        .as_array()
        .ok_or_else(|| NormalizeError::Shape("result bucket is not an array".into()))
}

/// Generation-3 path: an item is an edge exactly when it carries `inV`.
fn arrange_v3(data: Value) -> NormalizeResult<UniformGraphResult> {
    let mut result = UniformGraphResult::new();
    for bucket in buckets(data)? {
        for item in bucket_items(&bucket)? {
            let kind = if item.get("inV").is_some() {
                ElementKind::Edge
            } else {
                ElementKind::Vertex
            };
            result.push(extract_info_v3(item, kind)?);
        }
    }
    Ok(result)
}

/// Generation-1 path: items carry an explicit `type` discriminator.
/// Items with an unknown type are skipped.
fn arrange_v1(data: Value) -> NormalizeResult<UniformGraphResult> {
    let mut result = UniformGraphResult::new();
    for bucket in buckets(data)? {
        for item in bucket_items(&bucket)? {
            let kind = match item.get("type").and_then(Value::as_str) {
                Some("vertex") => ElementKind::Vertex,
                Some("edge") => ElementKind::Edge,
                _ => continue,
            };
            result.push(extract_info_v1(item, kind)?);
        }
    }
    Ok(result)
}

fn element_id(item: &Value) -> NormalizeResult<ElementId> {
    item.get("id")
        .map(ElementId::from_value)
        .ok_or_else(|| NormalizeError::Shape("element has no id".into()))
}

fn element_label(item: &Value) -> String {
    item.get("label")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn property_map(item: &Value) -> NormalizeResult<&serde_json::Map<String, Value>> {
    item.get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| NormalizeError::Shape("element has no properties map".into()))
}

fn endpoint(item: &Value, field: &str) -> NormalizeResult<ElementId> {
    item.get(field)
        .map(ElementId::from_value)
        .ok_or_else(|| NormalizeError::Shape(format!("edge has no {field} endpoint")))
}

/// Extract one unwrapped generation-3 item.
///
/// Vertex properties arrive as multi-valued wrapper lists and are flattened
/// into the value list plus a comma-joined summary. Edge properties unwrap
/// one `value` level to the scalar.
fn extract_info_v3(item: &Value, kind: ElementKind) -> NormalizeResult<GraphElement> {
    let id = element_id(item)?;
    let label = element_label(item);

    let mut element = match kind {
        ElementKind::Vertex => GraphElement::vertex(id, label),
        ElementKind::Edge => GraphElement::edge(
            id,
            label,
            endpoint(item, "outV")?,
            endpoint(item, "inV")?,
        ),
    };

    for (key, wrapper) in property_map(item)? {
        let value = match kind {
            ElementKind::Vertex => flatten_vertex_property(wrapper)?,
            ElementKind::Edge => PropertyValue::Scalar(
                wrapper
                    .get("value")
                    .cloned()
                    .ok_or_else(|| {
                        NormalizeError::Shape(format!("edge property '{key}' has no value"))
                    })?,
            ),
        };
        element.properties.insert(key.clone(), value);
    }
    Ok(element)
}

/// Generation-1 items pass their properties through untouched.
fn extract_info_v1(item: &Value, kind: ElementKind) -> NormalizeResult<GraphElement> {
    let id = element_id(item)?;
    let label = element_label(item);

    let mut element = match kind {
        ElementKind::Vertex => GraphElement::vertex(id, label),
        ElementKind::Edge => GraphElement::edge(
            id,
            label,
            endpoint(item, "outV")?,
            endpoint(item, "inV")?,
        ),
    };

    for (key, value) in property_map(item)? {
        element
            .properties
            .insert(key.clone(), PropertyValue::Scalar(value.clone()));
    }
    Ok(element)
}

/// Flatten one multi-valued vertex property wrapper.
fn flatten_vertex_property(wrapper: &Value) -> NormalizeResult<PropertyValue> {
    let entries = wrapper.as_array().ok_or_else(|| {
        NormalizeError::Shape("vertex property is not a wrapper list".into())
    })?;
    let values: Vec<Value> = entries
        .iter()
        .map(|entry| entry.get("value").cloned().unwrap_or(Value::Null))
        .collect();
    let summary = values
        .iter()
        .map(display_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(PropertyValue::Multi { values, summary })
}

/// Display form of a scalar for summary strings: strings bare, the rest as
/// JSON text.
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v1_vertex(id: i64, name: &str) -> Value {
        json!({
            "id": id,
            "label": "person",
            "type": "vertex",
            "properties": {"name": name}
        })
    }

    #[test]
    fn v3_classifies_on_inbound_edge_marker() {
        // Classification hinges on `inV` alone; an item without it is a
        // vertex even if other edge-ish fields are present.
        let data = json!([[{"id": 1, "label": "person", "outV": 5, "properties": {}}]]);
        let result = arrange(data, GraphsonFormat::V3).expect("arrange");
        assert_eq!(result.node_count(), 1);
        assert_eq!(result.edge_count(), 0);
    }

    #[test]
    fn v3_extracts_vertices_and_edges() {
        let data = json!([
            [{
                "id": 1,
                "label": "person",
                "properties": {"name": [{"id": 100, "value": "alice"}]}
            }],
            [{
                "id": 10,
                "label": "knows",
                "outV": 1,
                "inV": 2,
                "properties": {"weight": {"value": 0.5}}
            }]
        ]);
        let result = arrange(data, GraphsonFormat::V3).expect("arrange");
        assert_eq!(result.node_count(), 1);
        assert_eq!(result.edge_count(), 1);

        let node = &result.nodes[0];
        assert_eq!(node.id, ElementId::Int(1));
        assert_eq!(node.property("name").and_then(|p| p.summary()), Some("alice"));

        let edge = &result.edges[0];
        assert_eq!(edge.source, Some(ElementId::Int(1)));
        assert_eq!(edge.target, Some(ElementId::Int(2)));
        assert_eq!(
            edge.property("weight"),
            Some(&PropertyValue::Scalar(json!(0.5)))
        );
    }

    #[test]
    fn same_id_across_buckets_dedups() {
        let vertex = json!({"id": 1, "label": "person", "properties": {}});
        let data = json!([[vertex.clone()], [vertex]]);
        let result = arrange(data, GraphsonFormat::V3).expect("arrange");
        assert_eq!(result.node_count(), 1);
    }

    #[test]
    fn multi_valued_property_summarizes_comma_joined() {
        let data = json!([[{
            "id": 1,
            "label": "person",
            "properties": {
                "color": [{"value": "red"}, {"value": "blue"}]
            }
        }]]);
        let result = arrange(data, GraphsonFormat::V3).expect("arrange");
        let prop = result.nodes[0].property("color").expect("color");
        assert_eq!(prop.summary(), Some("red,blue"));
        assert_eq!(
            prop,
            &PropertyValue::Multi {
                values: vec![json!("red"), json!("blue")],
                summary: "red,blue".into()
            }
        );
    }

    #[test]
    fn non_string_property_values_summarize_as_json_text() {
        let data = json!([[{
            "id": 1,
            "label": "person",
            "properties": {"age": [{"value": 30}, {"value": 31}]}
        }]]);
        let result = arrange(data, GraphsonFormat::V3).expect("arrange");
        assert_eq!(
            result.nodes[0].property("age").and_then(|p| p.summary()),
            Some("30,31")
        );
    }

    #[test]
    fn v1_path_passes_properties_through() {
        let data = json!([[v1_vertex(1, "alice")], []]);
        let result = arrange(data, GraphsonFormat::V1).expect("arrange");
        assert_eq!(result.node_count(), 1);
        assert_eq!(
            result.nodes[0].property("name"),
            Some(&PropertyValue::Scalar(json!("alice")))
        );
    }

    #[test]
    fn v1_path_skips_unknown_types() {
        let data = json!([[{"id": 1, "type": "meta", "properties": {}}]]);
        let result = arrange(data, GraphsonFormat::V1).expect("arrange");
        assert!(result.is_empty());
    }

    #[test]
    fn full_tagged_response_round_trips() {
        // A generation-3 response as the server would send it: tagged lists
        // of tagged vertices.
        let data = json!({
            "@type": "g:List",
            "@value": [
                {"@type": "g:List", "@value": [
                    {"@type": "g:Vertex", "@value": {
                        "id": {"@type": "g:Int64", "@value": 1},
                        "label": "person",
                        "properties": {
                            "name": [{"id": {"@type": "g:Int64", "@value": 9}, "value": "alice"}]
                        }
                    }}
                ]},
                {"@type": "g:List", "@value": [
                    {"@type": "g:Edge", "@value": {
                        "id": {"@type": "g:Int64", "@value": 20},
                        "label": "knows",
                        "outV": {"@type": "g:Int64", "@value": 1},
                        "inV": {"@type": "g:Int64", "@value": 2},
                        "properties": {"since": {"value": {"@type": "g:Int64", "@value": 2020}}}
                    }}
                ]}
            ]
        });
        let result = arrange(data, GraphsonFormat::V3).expect("arrange");
        assert_eq!(result.node_count(), 1);
        assert_eq!(result.edge_count(), 1);
        assert_eq!(result.edges[0].source, Some(ElementId::Int(1)));
        assert_eq!(
            result.edges[0].property("since"),
            Some(&PropertyValue::Scalar(json!(2020)))
        );
    }

    #[test]
    fn missing_properties_is_a_shape_error() {
        let data = json!([[{"id": 1, "label": "person"}]]);
        let err = arrange(data, GraphsonFormat::V3).unwrap_err();
        assert!(matches!(err, NormalizeError::Shape(_)));
    }

    #[test]
    fn non_array_bucket_is_a_shape_error() {
        let data = json!([42]);
        let err = arrange(data, GraphsonFormat::V3).unwrap_err();
        assert!(matches!(err, NormalizeError::Shape(_)));
    }
}
