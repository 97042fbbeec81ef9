use super::StatValue;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Decoded body of a `GET /{indices}/_stats` response.
///
/// Only the per-index section is kept, `_shards` and `_all` are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct StatsDocument {
    #[serde(default)]
    pub indices: BTreeMap<String, IndexStats>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct IndexStats {
    #[serde(default)]
    pub primaries: StatGroup,
    #[serde(default)]
    pub total: StatGroup,
}

impl IndexStats {
    /// The two shard scopes of an index, primaries first.
    pub fn scopes(&self) -> [(ShardScope, &StatGroup); 2] {
        [
            (ShardScope::Primaries, &self.primaries),
            (ShardScope::All, &self.total),
        ]
    }
}

/// Category name to field name to value, e.g. `docs` -> `count` -> `42`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StatGroup(BTreeMap<String, BTreeMap<String, StatValue>>);

impl StatGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        category: impl Into<String>,
        field: impl Into<String>,
        value: StatValue,
    ) -> Option<StatValue> {
        self.0
            .entry(category.into())
            .or_default()
            .insert(field.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Every `(category, field, value)` triple of the group.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str, &StatValue)> {
        self.0.iter().flat_map(|(category, fields)| {
            fields
                .iter()
                .map(move |(field, value)| (category.as_str(), field.as_str(), value))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardScope {
    Primaries,
    All,
}

impl ShardScope {
    pub fn tag_value(self) -> &'static str {
        match self {
            ShardScope::Primaries => "primaries",
            ShardScope::All => "all",
        }
    }
}

impl fmt::Display for ShardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shards={}", self.tag_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_stats_document() {
        let body = json!({
            "_shards": {"total": 2, "successful": 1, "failed": 0},
            "_all": {"primaries": {"docs": {"count": 1}}, "total": {}},
            "indices": {
                "logs-1": {
                    "uuid": "Zx8YLR2dRCCKs2n9TIHZ3g",
                    "primaries": {"docs": {"count": 42, "deleted": 0}},
                    "total": {"docs": {"count": 84, "deleted": 0}}
                }
            }
        });
        let document: StatsDocument = serde_json::from_value(body).unwrap();
        assert_eq!(document.indices.len(), 1);

        let stats = &document.indices["logs-1"];
        let primaries: Vec<_> = stats
            .primaries
            .fields()
            .map(|(category, field, value)| (category, field, value.clone()))
            .collect();
        assert_eq!(
            primaries,
            vec![
                ("docs", "count", StatValue::Integer(42)),
                ("docs", "deleted", StatValue::Integer(0)),
            ]
        );
        assert_eq!(stats.total.fields().count(), 2);
    }

    #[test]
    fn test_decode_missing_sections() {
        let document: StatsDocument = serde_json::from_value(json!({})).unwrap();
        assert!(document.indices.is_empty());

        let document: StatsDocument =
            serde_json::from_value(json!({"indices": {"empty": {}}})).unwrap();
        assert!(document.indices["empty"].primaries.is_empty());
        assert!(document.indices["empty"].total.is_empty());
    }

    #[test]
    fn test_decode_schema_mismatch() {
        // A category must be an object of fields
        let result: Result<StatsDocument, _> = serde_json::from_value(json!({
            "indices": {"logs-1": {"primaries": {"docs": 42}}}
        }));
        assert!(result.is_err());

        let result: Result<StatsDocument, _> = serde_json::from_value(json!({"indices": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_stat_group_insert_and_empty() {
        let mut group = StatGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.insert("docs", "count", StatValue::Integer(1)), None);
        assert_eq!(
            group.insert("docs", "count", StatValue::Integer(2)),
            Some(StatValue::Integer(1))
        );
        assert!(!group.is_empty());
        assert_eq!(group.fields().count(), 1);
    }

    #[test]
    fn test_scopes() {
        let stats = IndexStats::default();
        let scopes = stats.scopes();
        assert_eq!(scopes[0].0, ShardScope::Primaries);
        assert_eq!(scopes[1].0, ShardScope::All);
        assert_eq!(ShardScope::Primaries.to_string(), "shards=primaries");
        assert_eq!(ShardScope::All.to_string(), "shards=all");
    }
}
