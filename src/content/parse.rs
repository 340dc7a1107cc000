use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;

use crate::content::error::SourceError;
use crate::content::types::ContentRecord;

/// Extract a collection snapshot from a raw API response.
///
/// The upstream API wraps collections in a DRF-style envelope:
/// `{ "results": [record, ...] }`. A bare top-level array is also accepted.
/// Any other envelope shape (missing `results`, non-array, non-object) is
/// treated as an empty collection, not an error — the visible behavior must
/// stay indistinguishable from "no results".
///
/// A record item that fails to deserialize is an error: the caller logs it
/// and degrades the whole collection to empty.
///
/// Duplicate identifiers are dropped (first occurrence wins) so a snapshot
/// always holds unique ids.
pub fn parse_collection_response<R>(raw: Value) -> Result<Vec<R>, SourceError>
where
    R: ContentRecord + DeserializeOwned,
{
    let items = match raw {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: R = serde_json::from_value(item).map_err(|e| SourceError::MalformedRecord {
            index,
            detail: e.to_string(),
        })?;
        if seen.insert(record.record_id()) {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::CountryGuide;
    use serde_json::json;

    #[test]
    fn parses_enveloped_results() {
        let raw = json!({
            "count": 2,
            "results": [
                { "id": 1, "name": "Canada", "university_count": 12 },
                { "id": 2, "name": "Ireland", "university_count": 4 }
            ]
        });
        let records: Vec<CountryGuide> = parse_collection_response(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Canada");
    }

    #[test]
    fn bare_array_is_accepted() {
        let raw = json!([{ "id": 7, "name": "Malta" }]);
        let records: Vec<CountryGuide> = parse_collection_response(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].university_count, 0);
    }

    #[test]
    fn missing_results_key_is_empty() {
        let raw = json!({ "detail": "not found" });
        let records: Vec<CountryGuide> = parse_collection_response(raw).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn non_array_results_is_empty() {
        let raw = json!({ "results": "oops" });
        let records: Vec<CountryGuide> = parse_collection_response(raw).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn scalar_body_is_empty() {
        let records: Vec<CountryGuide> = parse_collection_response(json!(42)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_record_is_an_error() {
        let raw = json!({ "results": [{ "name": "missing id" }] });
        let err = parse_collection_response::<CountryGuide>(raw).unwrap_err();
        assert!(matches!(err, SourceError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let raw = json!({
            "results": [
                { "id": 1, "name": "Canada" },
                { "id": 1, "name": "Shadow Canada" },
                { "id": 2, "name": "Ireland" }
            ]
        });
        let records: Vec<CountryGuide> = parse_collection_response(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Canada");
        assert_eq!(records[1].name, "Ireland");
    }
}
