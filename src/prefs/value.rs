use std::collections::BTreeSet;

use super::registry::PrefKind;

/// Current value of a preference.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefValue {
    Bool(bool),
    Float(f32),
    Int(i32),
    Str(String),
    StrSet(BTreeSet<String>),
}

impl PrefValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::StrSet(v) => Some(v),
            _ => None,
        }
    }

    /// Encode for the `[prefs]` table.
    pub fn to_toml(&self) -> toml::Value {
        match self {
            Self::Bool(v) => toml::Value::Boolean(*v),
            // Through the shortest decimal form, so 0.95 is written as 0.95
            // and not as the widened 0.949999988079071.
            Self::Float(v) => toml::Value::Float(
                v.to_string().parse::<f64>().unwrap_or_else(|_| f64::from(*v)),
            ),
            Self::Int(v) => toml::Value::Integer(i64::from(*v)),
            Self::Str(v) => toml::Value::String(v.clone()),
            Self::StrSet(set) => toml::Value::Array(
                set.iter().cloned().map(toml::Value::String).collect(),
            ),
        }
    }

    /// Decode a TOML value as the given kind.
    ///
    /// Integers are accepted for float preferences (`dock_scale = 1`).
    /// Returns `None` on a type mismatch; range and entry checks are left to
    /// `PrefKind::normalize`.
    pub fn from_toml(kind: &PrefKind, value: &toml::Value) -> Option<Self> {
        match (kind, value) {
            (PrefKind::Boolean { .. }, toml::Value::Boolean(v)) => Some(Self::Bool(*v)),
            (PrefKind::Float { .. }, toml::Value::Float(v)) => Some(Self::Float(*v as f32)),
            (PrefKind::Float { .. }, toml::Value::Integer(v)) => Some(Self::Float(*v as f32)),
            (PrefKind::IntSelection { .. }, toml::Value::Integer(v)) => {
                i32::try_from(*v).ok().map(Self::Int)
            }
            (PrefKind::StringSelection { .. }, toml::Value::String(v)) => Some(Self::Str(v.clone())),
            (PrefKind::StringMultiSelection { .. }, toml::Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<BTreeSet<_>>>()
                .map(Self::StrSet),
            _ => None,
        }
    }
}
