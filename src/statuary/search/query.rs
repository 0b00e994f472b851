//! Per-page query state.
//!
//! Each browsing page owns one of these structs. They are plain values: the
//! page builds one from user input, hands it to the matching command, and
//! throws it away afterwards. [`GalleryQuery::predicates`] and friends turn the
//! state into the conjunctive predicate list the evaluator runs.

use super::fields;
use super::predicate::{FacetSelection, NumericRange, Predicate};
use serde::{Deserialize, Serialize};

/// Upper bound of the gallery price slider when nothing else is configured.
pub const DEFAULT_PRICE_CEILING: u32 = 5000;

/// Granularity of the gallery price slider.
pub const PRICE_STEP: u32 = 100;

/// Fields searched by the gallery's free-text box.
pub const GALLERY_TEXT_FIELDS: &[&str] = &[fields::TITLE, fields::ARTIST];
/// Fields searched by the artists page.
pub const ARTIST_TEXT_FIELDS: &[&str] = &[fields::NAME, fields::BIO];
/// Fields searched by the collections page.
pub const COLLECTION_TEXT_FIELDS: &[&str] = &[fields::NAME, fields::DESCRIPTION, fields::TAGS];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryQuery {
    pub term: String,
    pub material: FacetSelection,
    pub category: FacetSelection,
    pub price: NumericRange,
    /// The slider's full extent; a `price` equal to this filters nothing.
    pub full_price: NumericRange,
    pub featured_only: bool,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self::with_ceiling(DEFAULT_PRICE_CEILING)
    }
}

impl GalleryQuery {
    pub fn with_ceiling(ceiling: u32) -> Self {
        let full = NumericRange::new(0.0, f64::from(ceiling));
        Self {
            term: String::new(),
            material: FacetSelection::All,
            category: FacetSelection::All,
            price: full,
            full_price: full,
            featured_only: false,
        }
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn material(mut self, selection: FacetSelection) -> Self {
        self.material = selection;
        self
    }

    pub fn category(mut self, selection: FacetSelection) -> Self {
        self.category = selection;
        self
    }

    /// Narrows the price range. A missing bound keeps the full range's
    /// bound. Two explicit bounds given in reverse are swapped; a single bound
    /// beyond the full range is kept as given, so nothing matches it.
    pub fn price_between(mut self, low: Option<u32>, high: Option<u32>) -> Self {
        self.price = match (low.map(f64::from), high.map(f64::from)) {
            (Some(low), Some(high)) if low > high => NumericRange::new(high, low),
            (low, high) => NumericRange::new(
                low.unwrap_or(self.full_price.low),
                high.unwrap_or(self.full_price.high),
            ),
        };
        self
    }

    pub fn featured_only(mut self, featured: bool) -> Self {
        self.featured_only = featured;
        self
    }

    pub fn predicates(&self) -> Vec<Predicate> {
        vec![
            Predicate::text(self.term.clone(), GALLERY_TEXT_FIELDS),
            Predicate::range(fields::PRICE, self.price, self.full_price),
            Predicate::facet(fields::MATERIAL, self.material.clone()),
            Predicate::facet(fields::CATEGORY, self.category.clone()),
            Predicate::flag(fields::FEATURED, self.featured_only),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistQuery {
    pub term: String,
    pub specialty: FacetSelection,
}

impl ArtistQuery {
    pub fn new(term: impl Into<String>, specialty: FacetSelection) -> Self {
        Self {
            term: term.into(),
            specialty,
        }
    }

    pub fn predicates(&self) -> Vec<Predicate> {
        vec![
            Predicate::text(self.term.clone(), ARTIST_TEXT_FIELDS),
            Predicate::member(fields::SPECIALTIES, self.specialty.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionQuery {
    pub term: String,
    pub theme: FacetSelection,
}

impl CollectionQuery {
    pub fn new(term: impl Into<String>, theme: FacetSelection) -> Self {
        Self {
            term: term.into(),
            theme,
        }
    }

    pub fn predicates(&self) -> Vec<Predicate> {
        vec![
            Predicate::text(self.term.clone(), COLLECTION_TEXT_FIELDS),
            Predicate::facet(fields::THEME, self.theme.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::statue;
    use crate::search::evaluate;

    fn venus_and_thinker() -> Vec<crate::model::Statue> {
        vec![
            statue(1, "Venus de Milo", "Marble", "Classical", 2499),
            statue(2, "Urban Thinker", "Bronze", "Contemporary", 3899),
        ]
    }

    #[test]
    fn default_gallery_query_has_no_active_predicates() {
        let query = GalleryQuery::default();
        assert!(query.predicates().iter().all(|p| !p.is_active()));
    }

    #[test]
    fn term_selects_venus() {
        let items = venus_and_thinker();
        let query = GalleryQuery::default()
            .term("venus")
            .material(FacetSelection::All);
        let result = evaluate(&items, &query.predicates());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Venus de Milo");
    }

    #[test]
    fn material_selects_thinker() {
        let items = venus_and_thinker();
        let query = GalleryQuery::default().material(FacetSelection::value("Bronze"));
        let result = evaluate(&items, &query.predicates());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Urban Thinker");
    }

    #[test]
    fn price_range_selects_venus() {
        let items = venus_and_thinker();
        let query = GalleryQuery::default().price_between(Some(0), Some(3000));
        let result = evaluate(&items, &query.predicates());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Venus de Milo");
    }

    #[test]
    fn sentinel_equals_unset() {
        let items = venus_and_thinker();
        let unset = GalleryQuery::default().term("u");
        let sentinel = unset
            .clone()
            .material("all".parse().unwrap())
            .category("all".parse().unwrap());
        assert_eq!(
            evaluate(&items, &unset.predicates()),
            evaluate(&items, &sentinel.predicates())
        );
    }

    #[test]
    fn price_bounds_fill_in_and_swap() {
        let query = GalleryQuery::default().price_between(None, Some(2000));
        assert_eq!(query.price, NumericRange::new(0.0, 2000.0));

        let query = GalleryQuery::default().price_between(Some(4000), Some(1000));
        assert_eq!(query.price, NumericRange::new(1000.0, 4000.0));

        let query = GalleryQuery::default().price_between(None, None);
        assert_eq!(query.price, query.full_price);
    }

    #[test]
    fn single_bound_beyond_the_ceiling_is_not_swapped() {
        let items = vec![
            statue(1, "Five", "Marble", "Classical", 5000),
            statue(2, "FiveHalf", "Marble", "Classical", 5500),
            statue(3, "Seven", "Marble", "Classical", 7000),
        ];
        let query = GalleryQuery::default().price_between(Some(6000), None);
        assert_eq!(query.price, NumericRange::new(6000.0, 5000.0));
        assert!(evaluate(&items, &query.predicates()).is_empty());

        let query = GalleryQuery::with_ceiling(3000).price_between(None, Some(0));
        assert_eq!(query.price, NumericRange::new(0.0, 0.0));
    }
}
