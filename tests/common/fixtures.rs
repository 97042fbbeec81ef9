/// Stats fixtures shaped like real `_stats` responses
use serde_json::{Value, json};

/// One index with non trivial primaries and total groups
pub fn single_index_stats() -> Value {
    json!({
        "_shards": {"total": 2, "successful": 2, "failed": 0},
        "_all": {
            "primaries": {"docs": {"count": 42, "deleted": 0}},
            "total": {"docs": {"count": 84, "deleted": 0}}
        },
        "indices": {
            "logs-1": {
                "uuid": "bV0kSlnXQfy9Cgy3mT2tUw",
                "health": "green",
                "primaries": {
                    "docs": {"count": 42, "deleted": 0},
                    "store": {"size_in_bytes": 1048576.5, "reserved_in_bytes": 0},
                    "query_cache": {"evictions": 3, "cache_names": ["a", "b"]},
                    "segments": {"count": 4, "file_sizes": {}, "index_writer_max": null},
                    "indexing": {"is_throttled": false, "index_time": "5ms"}
                },
                "total": {
                    "docs": {"count": 84, "deleted": 0},
                    "store": {"size_in_bytes": 2097153.0}
                }
            }
        }
    })
}

/// Several indices, one of them with empty groups
pub fn multi_index_stats() -> Value {
    json!({
        "indices": {
            "metrics-b": {
                "primaries": {"docs": {"count": 1}},
                "total": {"docs": {"count": 2}}
            },
            "metrics-a": {
                "primaries": {},
                "total": {}
            }
        }
    })
}
