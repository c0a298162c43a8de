use chrono::NaiveDateTime;
use serde::Serialize;

/// Fallback pattern applied when a date/time field has no usable format.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The current value of a field, independent of the host framework's binding
/// machinery. Collection-typed fields carry `Many`; everything else is a
/// scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
    Enum(EnumValue),
    Many(Vec<FieldValue>),
}

/// A single enum value: the variant identifier plus its integral
/// representation (bit pattern for flags enums, discriminant otherwise).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue {
    pub variant: String,
    pub bits: u64,
}

impl EnumValue {
    pub fn new(variant: impl Into<String>, bits: u64) -> Self {
        Self {
            variant: variant.into(),
            bits,
        }
    }
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Integral representation, if this value has one. Used by the flags-enum
    /// selection rule.
    pub fn bits(&self) -> Option<u64> {
        match self {
            FieldValue::Enum(e) => Some(e.bits),
            FieldValue::Int(i) => u64::try_from(*i).ok(),
            FieldValue::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// The string submitted as the control's value attribute.
    pub fn submit_text(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::UInt(u) => u.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::DateTime(dt) => dt.format(DEFAULT_DATETIME_FORMAT).to_string(),
            FieldValue::Enum(e) => e.variant.clone(),
            FieldValue::Many(values) => values
                .iter()
                .map(FieldValue::submit_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// The string shown in a text-style control, honoring a format pattern
    /// for date/time values (strftime syntax).
    pub fn display_text(&self, format: Option<&str>) -> String {
        match (self, format) {
            (FieldValue::DateTime(dt), Some(pattern)) => dt.format(pattern).to_string(),
            _ => self.submit_text(),
        }
    }
}

/// Decides whether a candidate value is currently selected.
///
/// Rules, in order: a collection-typed current value selects by membership; a
/// flags enum selects by bitwise AND of the integral representations; anything
/// else selects by null-safe equality (an absent value selects nothing).
pub fn is_selected(current: Option<&FieldValue>, candidate: &FieldValue, flags_enum: bool) -> bool {
    let Some(current) = current else {
        return false;
    };
    if let FieldValue::Many(values) = current {
        return values.contains(candidate);
    }
    if flags_enum {
        if let (Some(current_bits), Some(candidate_bits)) = (current.bits(), candidate.bits()) {
            return current_bits & candidate_bits != 0;
        }
    }
    current == candidate
}
