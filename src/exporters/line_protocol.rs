use crate::datamodel::{StatGroup, StatValue, TagSet};
use std::fmt;

/// One `category.field=value` pair of a metric line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMetric(String);

impl FormattedMetric {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for FormattedMetric {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Render a single value in line protocol syntax.
///
/// Integers get the `i` suffix, floats a fixed six digit fraction and strings
/// are wrapped in double quotes. Quotes inside strings are not escaped.
/// Booleans, nulls, arrays and objects have no rendering.
pub fn render_value(value: &StatValue) -> Option<String> {
    match value {
        StatValue::Integer(v) => Some(format!("{}i", v)),
        StatValue::Unsigned(v) => Some(format!("{}i", v)),
        StatValue::Float(v) => Some(format!("{:.6}", v)),
        StatValue::String(v) => Some(format!("\"{}\"", v)),
        StatValue::Boolean(_) | StatValue::Null | StatValue::Array(_) | StatValue::Object(_) => {
            None
        }
    }
}

pub fn format_field(category: &str, field: &str, value: &StatValue) -> Option<FormattedMetric> {
    render_value(value).map(|rendered| {
        let mut metric =
            String::with_capacity(category.len() + field.len() + rendered.len() + 2);
        metric.push_str(category);
        metric.push('.');
        metric.push_str(field);
        metric.push('=');
        metric.push_str(&rendered);
        FormattedMetric(metric)
    })
}

/// Flatten a statistics group into `category.field=value` pairs.
///
/// Fields without a rendering are dropped without notice.
pub fn flatten(group: &StatGroup) -> Vec<FormattedMetric> {
    group
        .fields()
        .filter_map(|(category, field, value)| format_field(category, field, value))
        .collect()
}

/// Converter for statistics groups to line protocol
pub struct LineProtocolConverter;

impl LineProtocolConverter {
    /// `tags metrics timestamp`, each part comma joined. No trailing newline.
    pub fn format_line(tags: &TagSet, metrics: &[FormattedMetric], timestamp_ns: i128) -> String {
        let metrics = metrics
            .iter()
            .map(FormattedMetric::as_str)
            .collect::<Vec<_>>()
            .join(",");
        format!("{} {} {}", tags, metrics, timestamp_ns)
    }

    pub fn to_line(tags: &TagSet, group: &StatGroup, timestamp_ns: i128) -> String {
        Self::format_line(tags, &flatten(group), timestamp_ns)
    }
}
