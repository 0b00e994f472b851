use super::{fields, FieldValue, Searchable};
use crate::model::{Artist, Collection, Statue};
use serde::Serialize;
use std::collections::HashSet;

/// Collects the distinct values of a facet field, in order of first occurrence.
///
/// Single-valued text fields contribute their value; tag fields are flattened.
/// Other field kinds contribute nothing.
pub fn distinct_values<T: Searchable>(items: &[T], field: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    let mut push = |value: &str| {
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    };

    for item in items {
        match item.field(field) {
            Some(FieldValue::Text(v)) => push(v),
            Some(FieldValue::Tags(tags)) => tags.iter().for_each(|t| push(t)),
            _ => {}
        }
    }

    values
}

/// Filter options for every page, derived once when a catalog is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    pub materials: Vec<String>,
    pub categories: Vec<String>,
    pub specialties: Vec<String>,
    pub themes: Vec<String>,
}

impl FacetIndex {
    pub fn build(statues: &[Statue], artists: &[Artist], collections: &[Collection]) -> Self {
        Self {
            materials: distinct_values(statues, fields::MATERIAL),
            categories: distinct_values(statues, fields::CATEGORY),
            specialties: distinct_values(artists, fields::SPECIALTIES),
            themes: distinct_values(collections, fields::THEME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::{artist, collection, statue};

    #[test]
    fn single_valued_facets_keep_first_occurrence_order() {
        let statues = vec![
            statue(1, "A", "Marble", "Classical", 1),
            statue(2, "B", "Bronze", "Modern", 1),
            statue(3, "C", "Marble", "Classical", 1),
            statue(4, "D", "Stone", "Modern", 1),
        ];
        assert_eq!(
            distinct_values(&statues, fields::MATERIAL),
            vec!["Marble", "Bronze", "Stone"]
        );
        assert_eq!(
            distinct_values(&statues, fields::CATEGORY),
            vec!["Classical", "Modern"]
        );
    }

    #[test]
    fn multi_valued_facets_are_flattened_and_deduped() {
        let artists = vec![
            artist("1", "Elena", &["Marble", "Bronze", "Classical"]),
            artist("2", "Marcus", &["Contemporary", "Bronze"]),
        ];
        assert_eq!(
            distinct_values(&artists, fields::SPECIALTIES),
            vec!["Marble", "Bronze", "Classical", "Contemporary"]
        );
    }

    #[test]
    fn every_offered_value_matches_something() {
        let collections = vec![
            collection("1", "Classical Masterpieces", "Classical", true, &["Greek"]),
            collection("2", "Minimalist Forms", "Minimalist", false, &["Modern"]),
        ];
        let index = FacetIndex::build(&[], &[], &collections);
        assert_eq!(index.themes, vec!["Classical", "Minimalist"]);
        assert!(index.materials.is_empty());
    }

    #[test]
    fn non_facet_fields_contribute_nothing() {
        let statues = vec![statue(1, "A", "Marble", "Classical", 10)];
        assert!(distinct_values(&statues, fields::PRICE).is_empty());
        assert!(distinct_values(&statues, "unknown").is_empty());
    }
}
