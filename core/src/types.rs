//! Domain records for the list, department and search endpoints.
//!
//! # Design
//! Records are immutable values produced once per response by the
//! validator. They serialize with snake_case domain names, not the
//! upstream wire names; see `object.rs` for the full object record.

use serde::Serialize;

use crate::normalize::{Coercion, FieldRule};
use crate::validate::{Fields, Record};

/// Object identifiers returned by `GET /objects`.
///
/// `total` is what upstream reports; `ids` may be shorter, so callers must
/// not assume `ids.len() == total`. Upstream sends `null` instead of an
/// empty array when there are no hits; that reads as an empty `ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectSummaryList {
    pub total: u64,
    pub ids: Vec<u64>,
}

impl Record for ObjectSummaryList {
    const FIELDS: &'static [FieldRule] = ID_LIST_FIELDS;

    fn read(fields: &mut Fields<'_>) -> Self {
        Self {
            total: fields.count("total"),
            ids: fields.id_list("ids"),
        }
    }
}

/// Object identifiers returned by `GET /search`.
///
/// Same shape as `ObjectSummaryList` today, kept separate so the two can
/// diverge with upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultList {
    pub total: u64,
    pub ids: Vec<u64>,
}

impl Record for SearchResultList {
    const FIELDS: &'static [FieldRule] = ID_LIST_FIELDS;

    fn read(fields: &mut Fields<'_>) -> Self {
        Self {
            total: fields.count("total"),
            ids: fields.id_list("ids"),
        }
    }
}

const ID_LIST_FIELDS: &[FieldRule] = &[
    FieldRule::exact("total", "total").coerce(Coercion::Integer),
    FieldRule::exact("objectIDs", "ids"),
];

/// A curatorial department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: u32,
    pub display_name: String,
}

impl Record for Department {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::exact("departmentId", "id").coerce(Coercion::Integer),
        FieldRule::exact("displayName", "display_name"),
    ];

    fn read(fields: &mut Fields<'_>) -> Self {
        Self {
            id: fields.id("id"),
            display_name: fields.string("display_name"),
        }
    }
}

/// Departments returned by `GET /departments`, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentList {
    pub departments: Vec<Department>,
}

impl Record for DepartmentList {
    const FIELDS: &'static [FieldRule] = &[FieldRule::exact("departments", "departments")];

    fn read(fields: &mut Fields<'_>) -> Self {
        Self {
            departments: fields.records("departments"),
        }
    }
}

impl DepartmentList {
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Department> {
        self.departments.iter()
    }

    /// Department with the given id, if listed.
    pub fn get(&self, id: u32) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }
}

impl<'a> IntoIterator for &'a DepartmentList {
    type Item = &'a Department;
    type IntoIter = std::slice::Iter<'a, Department>;

    fn into_iter(self) -> Self::IntoIter {
        self.departments.iter()
    }
}
