//! Structural validation of normalized JSON into typed records.
//!
//! # Design
//! A `Record` reads itself field by field from a `Fields` cursor. Every
//! accessor returns a value even when the field is bad (falling back to an
//! empty placeholder) and files an `Issue` instead of returning early, so
//! one pass reports every offending field. `validate` hands the record out
//! only if no issue was filed; a record read with issues is dropped
//! without ever reaching the caller.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Issue, IssueReason, ValidationError};
use crate::normalize::{normalize, rule_for, FieldRule};

/// A record type that can be read from a JSON object.
pub trait Record: Sized {
    /// Wire-to-domain table applied before reading.
    const FIELDS: &'static [FieldRule];

    fn read(fields: &mut Fields<'_>) -> Self;
}

/// Parse `body` and read it as `T`, failing with every issue found.
pub fn validate<T: Record>(body: &[u8]) -> Result<T, ValidationError> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => {
            return Err(ValidationError::new(vec![Issue {
                path: "$".to_string(),
                reason: IssueReason::Unparseable(err.to_string()),
            }]))
        }
    };
    let mut issues = Vec::new();
    let record = read_value::<T>("$".to_string(), value, &mut issues);
    if issues.is_empty() {
        Ok(record)
    } else {
        Err(ValidationError::new(issues))
    }
}

fn read_value<T: Record>(path: String, value: Value, issues: &mut Vec<Issue>) -> T {
    let raw = match value {
        Value::Object(map) => map,
        _ => {
            issues.push(Issue {
                path: path.clone(),
                reason: IssueReason::WrongType { expected: "object" },
            });
            Map::new()
        }
    };
    let mut fields = Fields {
        path,
        values: normalize(&raw, T::FIELDS),
        rules: T::FIELDS,
        issues,
    };
    T::read(&mut fields)
}

/// Cursor over one normalized JSON object.
pub struct Fields<'a> {
    path: String,
    values: Map<String, Value>,
    rules: &'static [FieldRule],
    issues: &'a mut Vec<Issue>,
}

impl Fields<'_> {
    fn path_of(&self, name: &str) -> String {
        let wire = rule_for(self.rules, name).map_or(name, |r| r.wire);
        format!("{}.{wire}", self.path)
    }

    fn fail(&mut self, name: &str, reason: IssueReason) {
        let path = self.path_of(name);
        self.issues.push(Issue { path, reason });
    }

    /// Present and non-null value, or an issue when the field is required.
    fn take(&mut self, name: &str, required: bool) -> Option<Value> {
        match self.values.remove(name) {
            Some(Value::Null) | None => {
                if required {
                    self.fail(name, IssueReason::Missing);
                }
                None
            }
            Some(value) => Some(value),
        }
    }

    fn wrong_type(&mut self, name: &str, expected: &'static str) {
        self.fail(name, IssueReason::WrongType { expected });
    }

    pub fn string(&mut self, name: &str) -> String {
        self.opt_string_inner(name, true).unwrap_or_default()
    }

    pub fn opt_string(&mut self, name: &str) -> Option<String> {
        self.opt_string_inner(name, false)
    }

    fn opt_string_inner(&mut self, name: &str, required: bool) -> Option<String> {
        match self.take(name, required)? {
            Value::String(s) => Some(s),
            _ => {
                self.wrong_type(name, "string");
                None
            }
        }
    }

    pub fn bool(&mut self, name: &str) -> bool {
        match self.take(name, true) {
            Some(Value::Bool(b)) => b,
            Some(_) => {
                self.wrong_type(name, "boolean");
                false
            }
            None => false,
        }
    }

    pub fn int(&mut self, name: &str) -> i64 {
        match self.take(name, true) {
            Some(value) => self.as_int(name, &value).unwrap_or_default(),
            None => 0,
        }
    }

    fn as_int(&mut self, name: &str, value: &Value) -> Option<i64> {
        let int = value.as_i64();
        if int.is_none() {
            self.wrong_type(name, "integer");
        }
        int
    }

    /// Identifier: an integer greater than zero.
    pub fn id<T: TryFrom<i64> + Default>(&mut self, name: &str) -> T {
        let Some(value) = self.take(name, true) else {
            return T::default();
        };
        let Some(int) = self.as_int(name, &value) else {
            return T::default();
        };
        if int <= 0 {
            self.fail(name, IssueReason::NotPositive);
            return T::default();
        }
        T::try_from(int).unwrap_or_else(|_| {
            self.wrong_type(name, "identifier in range");
            T::default()
        })
    }

    /// Count: an integer of zero or more.
    pub fn count(&mut self, name: &str) -> u64 {
        let Some(value) = self.take(name, true) else {
            return 0;
        };
        let Some(int) = self.as_int(name, &value) else {
            return 0;
        };
        u64::try_from(int).unwrap_or_else(|_| {
            self.fail(name, IssueReason::Negative);
            0
        })
    }

    pub fn float(&mut self, name: &str) -> f64 {
        self.opt_float_inner(name, true).unwrap_or_default()
    }

    pub fn opt_float(&mut self, name: &str) -> Option<f64> {
        self.opt_float_inner(name, false)
    }

    fn opt_float_inner(&mut self, name: &str, required: bool) -> Option<f64> {
        let value = self.take(name, required)?;
        let float = value.as_f64();
        if float.is_none() {
            self.wrong_type(name, "number");
        }
        float
    }

    pub fn opt_url(&mut self, name: &str) -> Option<Url> {
        let text = self.opt_string(name)?;
        match Url::parse(&text) {
            Ok(url) => Some(url),
            Err(err) => {
                self.fail(name, IssueReason::InvalidUrl(err.to_string()));
                None
            }
        }
    }

    pub fn opt_timestamp(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let text = self.opt_string(name)?;
        match DateTime::parse_from_rfc3339(&text) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(err) => {
                self.fail(name, IssueReason::InvalidTimestamp(err.to_string()));
                None
            }
        }
    }

    /// Required key holding an array of identifiers; `null` reads as empty.
    pub fn id_list(&mut self, name: &str) -> Vec<u64> {
        if !self.values.contains_key(name) {
            self.fail(name, IssueReason::Missing);
            return Vec::new();
        }
        let Some(items) = self.array(name) else {
            return Vec::new();
        };
        let base = self.path_of(name);
        let mut ids = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match item.as_i64() {
                Some(id) if id > 0 => ids.push(id.unsigned_abs()),
                Some(_) => self.issues.push(Issue {
                    path: format!("{base}[{i}]"),
                    reason: IssueReason::NotPositive,
                }),
                None => self.issues.push(Issue {
                    path: format!("{base}[{i}]"),
                    reason: IssueReason::WrongType {
                        expected: "integer",
                    },
                }),
            }
        }
        ids
    }

    /// Optional array of URLs; `""` elements are skipped.
    pub fn url_list(&mut self, name: &str) -> Vec<Url> {
        let Some(items) = self.array(name) else {
            return Vec::new();
        };
        let base = self.path_of(name);
        let mut urls = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            let reason = match item {
                Value::String(s) if s.is_empty() => continue,
                Value::String(s) => match Url::parse(&s) {
                    Ok(url) => {
                        urls.push(url);
                        continue;
                    }
                    Err(err) => IssueReason::InvalidUrl(err.to_string()),
                },
                _ => IssueReason::WrongType { expected: "string" },
            };
            self.issues.push(Issue {
                path: format!("{base}[{i}]"),
                reason,
            });
        }
        urls
    }

    /// Optional array of nested records; absent or `null` reads as `None`.
    pub fn opt_records<T: Record>(&mut self, name: &str) -> Option<Vec<T>> {
        let items = self.array(name)?;
        let base = self.path_of(name);
        let records = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| read_value::<T>(format!("{base}[{i}]"), item, self.issues))
            .collect();
        Some(records)
    }

    /// Required array of nested records.
    pub fn records<T: Record>(&mut self, name: &str) -> Vec<T> {
        if !matches!(self.values.get(name), Some(v) if !v.is_null()) {
            self.fail(name, IssueReason::Missing);
        }
        self.opt_records(name).unwrap_or_default()
    }

    /// Required nested record.
    pub fn record<T: Record>(&mut self, name: &str) -> T {
        let path = self.path_of(name);
        let value = self.take(name, true).unwrap_or(Value::Null);
        if value.is_null() {
            // already reported as missing; read from an empty object so
            // nested issues are not filed twice
            let mut scratch = Vec::new();
            let mut fields = Fields {
                path,
                values: Map::new(),
                rules: T::FIELDS,
                issues: &mut scratch,
            };
            return T::read(&mut fields);
        }
        read_value::<T>(path, value, self.issues)
    }

    fn array(&mut self, name: &str) -> Option<Vec<Value>> {
        match self.take(name, false)? {
            Value::Array(items) => Some(items),
            _ => {
                self.wrong_type(name, "array");
                None
            }
        }
    }
}
