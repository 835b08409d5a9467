use std::cmp::Ordering;

use serde_json::Value;

use crate::compliance_controls::domain::model::enums::control_type::ControlType;

/// Typed value a control compares against.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl ControlValue {
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(Self::Boolean(*flag)),
            Value::Number(number) => number.as_f64().map(Self::Number),
            Value::String(text) => Some(Self::String(text.clone())),
            _ => None,
        }
    }

    pub fn control_type(&self) -> ControlType {
        match self {
            Self::Boolean(_) => ControlType::Boolean,
            Self::Number(_) => ControlType::Number,
            Self::String(_) => ControlType::String,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Boolean(flag) => Value::Bool(*flag),
            Self::Number(number) if number.fract() == 0.0 && number.abs() < i64::MAX as f64 => {
                Value::from(*number as i64)
            }
            Self::Number(number) => Value::from(*number),
            Self::String(text) => Value::String(text.clone()),
        }
    }

    /// Orders two values of the same type; `None` across types or for NaN.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Boolean(left), Self::Boolean(right)) => Some(left.cmp(right)),
            (Self::Number(left), Self::Number(right)) => left.partial_cmp(right),
            (Self::String(left), Self::String(right)) => Some(left.cmp(right)),
            _ => None,
        }
    }
}
