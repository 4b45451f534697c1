//! Grouped-response reshaping
//!
//! The source API nests time-series exports as a list of groups, each holding
//! a shared segment label next to (not inside) its record array:
//!
//! ```json
//! {"results": [
//!     {"segment": "A", "data": [{"date": "2020-01-01", "values": [1]}]},
//!     {"segment": "B", "data": [{"date": "2020-01-01", "values": [2]}]}
//! ]}
//! ```
//!
//! That shape does not flatten into the desired rows, so before flattening
//! the label is lifted into every record and the group wrappers collapse
//! into one flat record sequence. The sequence is re-rooted under the same
//! group/record keys so existing path queries (`/results/data/...`) keep
//! resolving against the reshaped document.
//!
//! This is one instance of the general "lift a sibling field into nested
//! children" transform; the key names are configurable for other APIs with
//! the same nesting.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key names for one grouped-response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReshapeSpec {
    /// Top-level key holding the sequence of groups.
    pub groups_key: String,

    /// Key of the shared label inside each group.
    pub label_key: String,

    /// Key of the record sequence inside each group.
    pub records_key: String,
}

impl Default for ReshapeSpec {
    fn default() -> Self {
        ReshapeSpec {
            groups_key: String::from("results"),
            label_key: String::from("segment"),
            records_key: String::from("data"),
        }
    }
}

impl ReshapeSpec {
    /// Apply the transform to a document.
    ///
    /// Groups and their records keep their original order; all groups'
    /// records are concatenated into a single sequence, each record
    /// augmented with the group's label under `label_key` (explicit `null`
    /// when the group has no label, so every record keeps the same shape).
    /// A group without a record sequence contributes zero records.
    ///
    /// Shape violations never abort: a document whose `groups_key` value is
    /// not a sequence (including this transform's own output) is returned
    /// unchanged, so a second application is a safe no-op. Other top-level
    /// keys pass through untouched.
    pub fn apply(&self, doc: &Value) -> Value {
        let Value::Object(root) = doc else {
            return doc.clone();
        };
        let Some(Value::Array(groups)) = root.get(&self.groups_key) else {
            return doc.clone();
        };

        let mut records: Vec<Value> = Vec::new();
        for group in groups {
            let Value::Object(group) = group else {
                continue;
            };
            let Some(Value::Array(group_records)) = group.get(&self.records_key) else {
                continue;
            };

            let label = group.get(&self.label_key).cloned().unwrap_or(Value::Null);

            for record in group_records {
                let mut augmented = match record {
                    Value::Object(map) => map.clone(),
                    // Scalar records still get the label so the output
                    // sequence stays uniform in shape.
                    other => {
                        let mut map = Map::new();
                        map.insert(String::from("value"), other.clone());
                        map
                    }
                };
                augmented.insert(self.label_key.clone(), label.clone());
                records.push(Value::Object(augmented));
            }
        }

        let mut flat = Map::new();
        flat.insert(self.records_key.clone(), Value::Array(records));

        let mut out = root.clone();
        out.insert(self.groups_key.clone(), Value::Object(flat));
        Value::Object(out)
    }
}

/// Reshape with the source API's key names (`results` / `segment` / `data`).
pub fn reshape_grouped_response(doc: &Value) -> Value {
    ReshapeSpec::default().apply(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grouped_doc() -> Value {
        json!({
            "results": [
                {"segment": "A", "data": [{"date": "2020-01-01", "values": [1]}]},
                {"segment": "B", "data": [{"date": "2020-01-01", "values": [2]}]}
            ]
        })
    }

    #[test]
    fn test_label_is_lifted_into_every_record() {
        let out = reshape_grouped_response(&grouped_doc());

        assert_eq!(
            out,
            json!({
                "results": {
                    "data": [
                        {"date": "2020-01-01", "values": [1], "segment": "A"},
                        {"date": "2020-01-01", "values": [2], "segment": "B"}
                    ]
                }
            }),
        );
    }

    #[test]
    fn test_record_count_is_conserved() {
        let doc = json!({
            "results": [
                {"segment": "A", "data": [{"v": 1}, {"v": 2}]},
                {"segment": "B", "data": []},
                {"segment": "C", "data": [{"v": 3}]}
            ]
        });
        let out = reshape_grouped_response(&doc);

        let records = out["results"]["data"].as_array().unwrap();
        assert_eq!(records.len(), 3);
        // Group order then record order, never shuffled
        assert_eq!(records[0]["v"], json!(1));
        assert_eq!(records[1]["v"], json!(2));
        assert_eq!(records[2]["v"], json!(3));
    }

    #[test]
    fn test_group_without_records_contributes_nothing() {
        let doc = json!({
            "results": [
                {"segment": "A"},
                {"segment": "B", "data": [{"v": 1}]}
            ]
        });
        let out = reshape_grouped_response(&doc);

        let records = out["results"]["data"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["segment"], json!("B"));
    }

    #[test]
    fn test_missing_label_becomes_explicit_null() {
        let doc = json!({"results": [{"data": [{"v": 1}]}]});
        let out = reshape_grouped_response(&doc);

        let record = &out["results"]["data"][0];
        assert!(record.as_object().unwrap().contains_key("segment"));
        assert_eq!(record["segment"], Value::Null);
    }

    #[test]
    fn test_second_application_is_a_noop() {
        let once = reshape_grouped_response(&grouped_doc());
        let twice = reshape_grouped_response(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unrelated_top_level_keys_pass_through() {
        let doc = json!({
            "meta": {"total": 2},
            "results": [{"segment": "A", "data": [{"v": 1}]}]
        });
        let out = reshape_grouped_response(&doc);
        assert_eq!(out["meta"], json!({"total": 2}));
    }

    #[test]
    fn test_non_grouped_document_is_unchanged() {
        let doc = json!({"data": [{"name": "X"}]});
        assert_eq!(reshape_grouped_response(&doc), doc);

        let scalar = json!(42);
        assert_eq!(reshape_grouped_response(&scalar), scalar);
    }

    #[test]
    fn test_custom_key_names() {
        let spec = ReshapeSpec {
            groups_key: String::from("series"),
            label_key: String::from("country"),
            records_key: String::from("points"),
        };
        let doc = json!({
            "series": [
                {"country": "FI", "points": [{"v": 1}]},
                {"country": "SE", "points": [{"v": 2}]}
            ]
        });
        let out = spec.apply(&doc);

        let records = out["series"]["points"].as_array().unwrap();
        assert_eq!(records[0]["country"], json!("FI"));
        assert_eq!(records[1]["country"], json!("SE"));
    }

    #[test]
    fn test_scalar_records_are_wrapped_with_label() {
        let doc = json!({"results": [{"segment": "A", "data": [1, 2]}]});
        let out = reshape_grouped_response(&doc);

        let records = out["results"]["data"].as_array().unwrap();
        assert_eq!(records[0], json!({"value": 1, "segment": "A"}));
    }
}
