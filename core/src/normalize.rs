//! Field normalization ahead of structural validation.
//!
//! # Design
//! Upstream is loose about "no value": it may omit a key, send `null`, or
//! send `""`. It also drifts between numbers and numeric strings for the
//! same field. Each record type declares a static table of `FieldRule`s;
//! `normalize` applies the table to one raw JSON object and returns a map
//! keyed by domain name in which
//! - `""` has become `null` for fields marked `empty_is_absent`,
//! - the `"(not assigned)"` placeholder has become `null` for authority
//!   link fields,
//! - every coercible value has its canonical JSON type,
//! - keys not listed in the table are dropped.
//!
//! Normalization never invents data. An absent key stays absent, and a
//! value that cannot be coerced is passed through unchanged so validation
//! reports it against the field.

use serde_json::{Map, Number, Value};

/// Target JSON type for a field whose upstream type drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Take the value as sent.
    Keep,
    /// Numeric strings become integers.
    Integer,
    /// Numeric strings become floats.
    Float,
    /// Numbers become their decimal text.
    Text,
}

/// How one wire field maps onto the domain record.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub wire: &'static str,
    pub domain: &'static str,
    pub empty_is_absent: bool,
    /// `"(not assigned)"` means "no value" too. Only authority links use it.
    pub unassigned_is_absent: bool,
    pub coercion: Coercion,
}

impl FieldRule {
    /// A field taken as sent.
    pub const fn exact(wire: &'static str, domain: &'static str) -> Self {
        Self {
            wire,
            domain,
            empty_is_absent: false,
            unassigned_is_absent: false,
            coercion: Coercion::Keep,
        }
    }

    /// An optional field where upstream sends `""` for "no value".
    pub const fn optional(wire: &'static str, domain: &'static str) -> Self {
        Self {
            wire,
            domain,
            empty_is_absent: true,
            unassigned_is_absent: false,
            coercion: Coercion::Keep,
        }
    }

    /// An external authority link (`*_URL`): optional, and upstream fills
    /// unknown links with a placeholder.
    pub const fn link(wire: &'static str, domain: &'static str) -> Self {
        Self {
            unassigned_is_absent: true,
            ..Self::optional(wire, domain)
        }
    }

    pub const fn coerce(self, coercion: Coercion) -> Self {
        Self { coercion, ..self }
    }
}

/// Look up the rule for a domain field name.
pub fn rule_for<'r>(rules: &'r [FieldRule], domain: &str) -> Option<&'r FieldRule> {
    rules.iter().find(|r| r.domain == domain)
}

/// Apply `rules` to one raw JSON object.
pub fn normalize(raw: &Map<String, Value>, rules: &[FieldRule]) -> Map<String, Value> {
    let mut out = Map::with_capacity(rules.len());
    for rule in rules {
        if let Some(value) = raw.get(rule.wire) {
            out.insert(rule.domain.to_string(), normalize_value(value, rule));
        }
    }
    out
}

fn normalize_value(value: &Value, rule: &FieldRule) -> Value {
    if rule.empty_is_absent && is_empty_sentinel(value) {
        return Value::Null;
    }
    if rule.unassigned_is_absent && is_unassigned_sentinel(value) {
        return Value::Null;
    }
    match (rule.coercion, value) {
        (Coercion::Integer, Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| value.clone()),
        (Coercion::Float, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| value.clone()),
        (Coercion::Text, Value::Number(n)) => Value::String(n.to_string()),
        _ => value.clone(),
    }
}

fn is_empty_sentinel(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

fn is_unassigned_sentinel(value: &Value) -> bool {
    match value {
        Value::String(s) => s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .eq_ignore_ascii_case("not assigned"),
        _ => false,
    }
}
