//! Database-wide graph info: label counts and property name lists

use super::unwrap::graphson3_to_1;
use super::{GraphsonFormat, NormalizeError, NormalizeResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One label and how many elements carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub name: String,
    pub count: i64,
}

/// Snapshot of database-wide grouped counts
///
/// Replaced wholesale on each successful info query; consumers never see a
/// partially merged snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphInfo {
    /// Vertex label counts, in arrival order
    pub node_labels: Vec<LabelCount>,
    /// Edge label counts, in arrival order
    pub edge_labels: Vec<LabelCount>,
    /// Deduplicated vertex property names
    pub node_properties: Vec<String>,
    /// Deduplicated edge property names
    pub edge_properties: Vec<String>,
    /// When the snapshot was taken
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Aggregate the four-bucket graph-info response into a snapshot.
///
/// Bucket order matches the combined info query: vertex label counts,
/// vertex property-key-set counts, edge label counts, edge property-key-set
/// counts.
pub fn aggregate_info(data: Value, format: GraphsonFormat) -> NormalizeResult<GraphInfo> {
    let data = match format {
        GraphsonFormat::V3 => graphson3_to_1(data),
        GraphsonFormat::V1 => data,
    };
    let buckets = data
        .as_array()
        .ok_or_else(|| NormalizeError::Shape("expected info buckets".into()))?;
    if buckets.len() < 4 {
        return Err(NormalizeError::Shape(format!(
            "expected 4 info buckets, got {}",
            buckets.len()
        )));
    }

    Ok(GraphInfo {
        node_labels: label_counts(&buckets[0]),
        edge_labels: label_counts(&buckets[2]),
        node_properties: property_names(first_group(&buckets[1])?),
        edge_properties: property_names(first_group(&buckets[3])?),
        fetched_at: Some(Utc::now()),
    })
}

/// Flatten a bucket of label→count maps into ordered pairs.
fn label_counts(bucket: &Value) -> Vec<LabelCount> {
    let mut counts = Vec::new();
    let groups = match bucket.as_array() {
        Some(groups) => groups,
        None => return counts,
    };
    for group in groups {
        if let Some(map) = group.as_object() {
            for (name, count) in map {
                counts.push(LabelCount {
                    name: name.clone(),
                    count: count.as_i64().unwrap_or_default(),
                });
            }
        }
    }
    counts
}

fn first_group(bucket: &Value) -> NormalizeResult<&Value> {
    bucket
        .as_array()
        .and_then(|items| items.first())
        .ok_or_else(|| NormalizeError::Shape("property-count bucket is empty".into()))
}

/// Flatten stringified property-key-set map keys into bare property names.
///
/// The server reports keys like `["name", "age"]` as a single delimited
/// string; bracket, quote and space characters are stripped, the remainder
/// split on commas, and names deduplicated with first occurrence winning.
pub fn property_names(group: &Value) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let map = match group.as_object() {
        Some(map) => map,
        None => return names,
    };
    for key in map.keys() {
        let stripped: String = key
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '"' | '\'' | ' '))
            .collect();
        for name in stripped.split(',') {
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}
