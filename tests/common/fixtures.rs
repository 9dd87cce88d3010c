//! Canned GraphSON generation-3 payloads shaped like real server responses.

use serde_json::{json, Value};

fn tagged_int(n: i64) -> Value {
    json!({"@type": "g:Int64", "@value": n})
}

fn tagged_vertex(id: i64, label: &str, name: &str) -> Value {
    json!({
        "@type": "g:Vertex",
        "@value": {
            "id": tagged_int(id),
            "label": label,
            "properties": {
                "name": [{"id": tagged_int(id * 100), "value": name}]
            }
        }
    })
}

fn tagged_edge(id: i64, label: &str, out_v: i64, in_v: i64) -> Value {
    json!({
        "@type": "g:Edge",
        "@value": {
            "id": tagged_int(id),
            "label": label,
            "outV": tagged_int(out_v),
            "inV": tagged_int(in_v),
            "properties": {
                "weight": {"value": tagged_int(1)}
            }
        }
    })
}

/// Two-bucket search response: two person vertices and the edge between them.
pub fn graphson3_search_response() -> Value {
    json!({
        "@type": "g:List",
        "@value": [
            {"@type": "g:List", "@value": [
                tagged_vertex(1, "person", "alice"),
                tagged_vertex(2, "person", "bob")
            ]},
            {"@type": "g:List", "@value": [
                tagged_edge(10, "knows", 1, 2)
            ]}
        ]
    })
}

/// Neighborhood response for seed vertex 1: the seed appears in the node
/// bucket twice (injected plus reached through its neighbor), exercising
/// downstream dedup.
pub fn neighborhood_response() -> Value {
    json!({
        "@type": "g:List",
        "@value": [
            {"@type": "g:List", "@value": [
                tagged_vertex(1, "person", "alice"),
                tagged_vertex(2, "person", "bob"),
                tagged_vertex(1, "person", "alice")
            ]},
            {"@type": "g:List", "@value": [
                tagged_edge(10, "knows", 1, 2),
                tagged_edge(11, "knows", 2, 1)
            ]}
        ]
    })
}

/// Four-bucket graph-info response with tagged maps and composite key sets.
pub fn graphson3_info_response() -> Value {
    json!({
        "@type": "g:List",
        "@value": [
            {"@type": "g:List", "@value": [
                {"@type": "g:Map", "@value": [
                    "person", tagged_int(2),
                    "place", tagged_int(1)
                ]}
            ]},
            {"@type": "g:List", "@value": [
                {"@type": "g:Map", "@value": [
                    {"@type": "g:List", "@value": ["name", "age"]}, tagged_int(2),
                    {"@type": "g:List", "@value": ["name"]}, tagged_int(1)
                ]}
            ]},
            {"@type": "g:List", "@value": [
                {"@type": "g:Map", "@value": ["knows", tagged_int(1)]}
            ]},
            {"@type": "g:List", "@value": [
                {"@type": "g:Map", "@value": [
                    {"@type": "g:List", "@value": ["weight"]}, tagged_int(1)
                ]}
            ]}
        ]
    })
}
