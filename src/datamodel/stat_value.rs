use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A leaf value of a statistics group, as decoded from the stats response.
///
/// Numbers keep the representation chosen by the JSON decoder: a literal
/// without fraction or exponent is an integer (signed when it fits in `i64`,
/// unsigned otherwise), everything else is a float.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum StatValue {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Array(Vec<StatValue>),
    Object(BTreeMap<String, StatValue>),
}

impl From<Value> for StatValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => StatValue::Null,
            Value::Bool(b) => StatValue::Boolean(b),
            Value::Number(number) => {
                if let Some(i) = number.as_i64() {
                    StatValue::Integer(i)
                } else if let Some(u) = number.as_u64() {
                    StatValue::Unsigned(u)
                } else {
                    // Without arbitrary precision, every other number is an f64
                    StatValue::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => StatValue::String(s),
            Value::Array(values) => {
                StatValue::Array(values.into_iter().map(StatValue::from).collect())
            }
            Value::Object(map) => StatValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, StatValue::from(value)))
                    .collect(),
            ),
        }
    }
}
