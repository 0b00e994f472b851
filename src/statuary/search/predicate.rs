//! Search predicates.
//!
//! A [`Predicate`] is one filter condition. Each kind has an "inactive" state
//! (empty term, the `all` facet sentinel, the full numeric range) in which it
//! matches every item, so a default query state filters nothing.

use super::{FieldValue, Searchable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sentinel facet value meaning "no restriction".
pub const ALL: &str = "all";

/// A selection in a facet control: the `all` sentinel or one concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetSelection {
    #[default]
    All,
    Value(String),
}

impl FacetSelection {
    pub fn value(v: impl Into<String>) -> Self {
        FacetSelection::Value(v.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            FacetSelection::All => None,
            FacetSelection::Value(v) => Some(v),
        }
    }
}

impl FromStr for FacetSelection {
    type Err = std::convert::Infallible;

    /// Any string is a valid selection; only the exact sentinel `all` clears it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(FacetSelection::All)
        } else {
            Ok(FacetSelection::Value(s.to_string()))
        }
    }
}

impl From<Option<String>> for FacetSelection {
    fn from(value: Option<String>) -> Self {
        match value {
            None => FacetSelection::All,
            Some(v) => v.parse().unwrap_or_default(),
        }
    }
}

impl fmt::Display for FacetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetSelection::All => f.write_str(ALL),
            FacetSelection::Value(v) => f.write_str(v),
        }
    }
}

/// An inclusive numeric range `low..=high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub low: f64,
    pub high: f64,
}

impl NumericRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// One filter condition over one or more item fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match against ANY of the listed fields.
    Text {
        term: String,
        fields: Vec<&'static str>,
    },
    /// Exact, case-sensitive equality with a single-valued field.
    Facet {
        field: &'static str,
        selection: FacetSelection,
    },
    /// Membership of the selection in a multi-valued field.
    Member {
        field: &'static str,
        selection: FacetSelection,
    },
    /// Inclusive range check; inactive while `range == full`.
    Range {
        field: &'static str,
        range: NumericRange,
        full: NumericRange,
    },
    /// Boolean flag must be set; inactive when `required` is false.
    Flag { field: &'static str, required: bool },
}

impl Predicate {
    pub fn text(term: impl Into<String>, fields: &[&'static str]) -> Self {
        Predicate::Text {
            term: term.into(),
            fields: fields.to_vec(),
        }
    }

    pub fn facet(field: &'static str, selection: FacetSelection) -> Self {
        Predicate::Facet { field, selection }
    }

    pub fn member(field: &'static str, selection: FacetSelection) -> Self {
        Predicate::Member { field, selection }
    }

    pub fn range(field: &'static str, range: NumericRange, full: NumericRange) -> Self {
        Predicate::Range { field, range, full }
    }

    pub fn flag(field: &'static str, required: bool) -> Self {
        Predicate::Flag { field, required }
    }

    /// Inactive predicates match every item.
    pub fn is_active(&self) -> bool {
        match self {
            Predicate::Text { term, .. } => !term.is_empty(),
            Predicate::Facet { selection, .. } | Predicate::Member { selection, .. } => {
                !selection.is_all()
            }
            Predicate::Range { range, full, .. } => range != full,
            Predicate::Flag { required, .. } => *required,
        }
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if !self.is_active() {
            return true;
        }

        match self {
            Predicate::Text { term, fields } => {
                let needle = term.to_lowercase();
                fields
                    .iter()
                    .any(|field| text_contains(item.field(field), &needle))
            }
            Predicate::Facet { field, selection } => {
                let Some(wanted) = selection.as_value() else {
                    return true;
                };
                matches!(item.field(field), Some(FieldValue::Text(v)) if v == wanted)
            }
            Predicate::Member { field, selection } => {
                let Some(wanted) = selection.as_value() else {
                    return true;
                };
                matches!(item.field(field), Some(FieldValue::Tags(tags)) if tags.iter().any(|t| t == wanted))
            }
            Predicate::Range { field, range, .. } => {
                matches!(item.field(field), Some(FieldValue::Number(n)) if range.contains(n))
            }
            Predicate::Flag { field, .. } => {
                matches!(item.field(field), Some(FieldValue::Flag(true)))
            }
        }
    }
}

/// `needle` must already be lowercased.
fn text_contains(value: Option<FieldValue<'_>>, needle: &str) -> bool {
    match value {
        Some(FieldValue::Text(s)) => s.to_lowercase().contains(needle),
        Some(FieldValue::Tags(tags)) => tags.iter().any(|t| t.to_lowercase().contains(needle)),
        _ => false,
    }
}
