//! # Faceted Search
//!
//! Every browsing page (gallery, artists, collections) narrows an immutable
//! catalog list with the same machinery:
//!
//! - [`Searchable`]: items expose named fields as [`FieldValue`]s
//! - [`predicate::Predicate`]: one condition on one or more fields
//! - [`evaluate`]: keeps the items matching **all** active predicates
//! - [`query`]: the per-page query state and the predicates it produces
//! - [`facets`]: distinct facet values offered as filter options
//!
//! ## Evaluation Rules
//!
//! The evaluator is a stable filter. The output is always a subsequence of the
//! input in the same relative order; nothing is re-sorted. Evaluation is a
//! full linear scan, redone from scratch for every query. Catalogs are a few
//! dozen items, so there is no index and no caching between queries.
//!
//! An empty result is a normal outcome. Callers render a "no results" line
//! rather than treating it as an error.

pub mod facets;
pub mod predicate;
pub mod query;

use crate::model::{Artist, Collection, Statue};
use predicate::Predicate;

/// Field names shared by predicates, facet derivation and the item impls.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const NAME: &str = "name";
    pub const ARTIST: &str = "artist";
    pub const BIO: &str = "bio";
    pub const DESCRIPTION: &str = "description";
    pub const MATERIAL: &str = "material";
    pub const CATEGORY: &str = "category";
    pub const PRICE: &str = "price";
    pub const FEATURED: &str = "featured";
    pub const IS_NEW: &str = "new";
    pub const SPECIALTIES: &str = "specialties";
    pub const THEME: &str = "theme";
    pub const TAGS: &str = "tags";
    pub const LOCATION: &str = "location";
    pub const CURATOR: &str = "curator";
}

/// A borrowed view of one item field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Single-valued text (names, descriptions, single facets).
    Text(&'a str),
    /// A set of tags (multi-valued facets).
    Tags(&'a [String]),
    /// A numeric value (prices, in dollars).
    Number(f64),
    /// A boolean flag (featured, new).
    Flag(bool),
}

/// Anything the filter evaluator can inspect.
///
/// Returns `None` for fields the item does not have; predicates on unknown
/// fields never match.
pub trait Searchable {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Returns the items satisfying every predicate, in catalog order.
pub fn evaluate<'a, T: Searchable>(items: &'a [T], predicates: &[Predicate]) -> Vec<&'a T> {
    let active: Vec<&Predicate> = predicates.iter().filter(|p| p.is_active()).collect();
    let matched: Vec<&T> = items
        .iter()
        .filter(|item| active.iter().all(|p| p.matches(*item)))
        .collect();

    log::debug!(
        "evaluated {} active predicate(s): {} of {} item(s) matched",
        active.len(),
        matched.len(),
        items.len()
    );
    matched
}

/// Splits a result into a leading group (flag set) and the rest.
///
/// Both groups keep their relative order.
pub fn partition_by<'a, T, F>(items: Vec<&'a T>, flag: F) -> (Vec<&'a T>, Vec<&'a T>)
where
    F: Fn(&T) -> bool,
{
    items.into_iter().partition(|item| flag(item))
}

impl Searchable for Statue {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            fields::TITLE | fields::NAME => Some(FieldValue::Text(&self.title)),
            fields::ARTIST => Some(FieldValue::Text(&self.artist)),
            fields::MATERIAL => Some(FieldValue::Text(&self.material)),
            fields::CATEGORY => Some(FieldValue::Text(&self.category)),
            fields::PRICE => Some(FieldValue::Number(self.price.as_dollars())),
            fields::FEATURED => Some(FieldValue::Flag(self.is_featured)),
            fields::IS_NEW => Some(FieldValue::Flag(self.is_new)),
            _ => None,
        }
    }
}

impl Searchable for Artist {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            fields::NAME => Some(FieldValue::Text(&self.name)),
            fields::BIO => Some(FieldValue::Text(&self.bio)),
            fields::LOCATION => Some(FieldValue::Text(&self.location)),
            fields::SPECIALTIES => Some(FieldValue::Tags(&self.specialties)),
            fields::PRICE => Some(FieldValue::Number(self.featured_work.price.as_dollars())),
            _ => None,
        }
    }
}

impl Searchable for Collection {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            fields::NAME => Some(FieldValue::Text(&self.name)),
            fields::DESCRIPTION => Some(FieldValue::Text(&self.description)),
            fields::CURATOR => Some(FieldValue::Text(&self.curator)),
            fields::THEME => Some(FieldValue::Text(&self.theme)),
            fields::TAGS => Some(FieldValue::Tags(&self.tags)),
            fields::FEATURED => Some(FieldValue::Flag(self.featured)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::predicate::{FacetSelection, NumericRange};
    use super::*;
    use crate::catalog::memory::fixtures::statue;

    fn catalog() -> Vec<Statue> {
        vec![
            statue(1, "Venus de Milo", "Marble", "Classical", 2499),
            statue(2, "Urban Thinker", "Bronze", "Contemporary", 3899),
            statue(3, "Guardian Lion", "Stone", "Traditional", 3299),
            statue(4, "Dancing Ballerina", "Bronze", "Contemporary", 1599),
        ]
    }

    fn titles(items: &[&Statue]) -> Vec<String> {
        items.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn no_predicates_returns_everything_in_order() {
        let items = catalog();
        let result = evaluate(&items, &[]);
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[3].id, 4);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let items = catalog();
        let predicates = vec![
            Predicate::facet(fields::MATERIAL, FacetSelection::value("Bronze")),
            Predicate::range(
                fields::PRICE,
                NumericRange::new(0.0, 3000.0),
                NumericRange::new(0.0, 5000.0),
            ),
        ];
        let result = evaluate(&items, &predicates);
        assert_eq!(titles(&result), vec!["Dancing Ballerina"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let items = catalog();
        let predicates = vec![Predicate::text("an", &[fields::TITLE, fields::ARTIST])];
        let once = evaluate(&items, &predicates);
        let owned: Vec<Statue> = once.iter().map(|s| (*s).clone()).collect();
        let twice = evaluate(&owned, &predicates);
        assert_eq!(titles(&once), titles(&twice));
    }

    #[test]
    fn result_is_an_ordered_subsequence() {
        let items = catalog();
        let predicates = vec![Predicate::text("n", &[fields::TITLE])];
        let result = evaluate(&items, &predicates);
        let ids: Vec<u32> = result.iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn narrowing_a_predicate_never_grows_the_result() {
        let items = catalog();
        let wide = evaluate(&items, &[Predicate::text("a", &[fields::TITLE])]);
        let narrow = evaluate(&items, &[Predicate::text("an", &[fields::TITLE])]);
        assert!(narrow.len() <= wide.len());

        let full = NumericRange::new(0.0, 5000.0);
        let wide = evaluate(
            &items,
            &[Predicate::range(fields::PRICE, NumericRange::new(0.0, 4000.0), full)],
        );
        let narrow = evaluate(
            &items,
            &[Predicate::range(fields::PRICE, NumericRange::new(1000.0, 3000.0), full)],
        );
        assert!(narrow.len() <= wide.len());
    }

    #[test]
    fn partition_keeps_both_groups_ordered() {
        let mut items = catalog();
        items[1].is_featured = true;
        items[3].is_featured = true;
        let all = evaluate(&items, &[]);
        let (featured, rest) = partition_by(all, |s| s.is_featured);
        assert_eq!(featured.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(rest.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
