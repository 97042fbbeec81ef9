use super::ShardScope;
use smallvec::SmallVec;
use std::fmt;

/// Ordered tags identifying a metric line: check name, `host=`, `index=`, `shards=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(SmallVec<[String; 4]>);

impl TagSet {
    /// Tags shared by every line of a run: the bare check name then `host=<hostname>`.
    pub fn common(check_name: &str, hostname: &str) -> Self {
        let mut tags = Self::default();
        tags.push(check_name);
        tags.push(format!("host={}", hostname));
        tags
    }

    pub fn push(&mut self, tag: impl Into<String>) {
        self.0.push(tag.into());
    }

    pub fn with_index(&self, index: &str) -> Self {
        let mut tags = self.clone();
        tags.push(format!("index={}", index));
        tags
    }

    pub fn with_scope(&self, scope: ShardScope) -> Self {
        let mut tags = self.clone();
        tags.push(scope.to_string());
        tags
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}
