//! # Catalog Layer
//!
//! The catalog is the read-only data every page browses: statues, artists,
//! collections, plus the demo shopper's profile, orders, wishlist and seeded
//! cart. It is loaded once through a [`CatalogSource`] and never mutated.
//!
//! ## Sources
//!
//! - [`builtin::BuiltinCatalog`]: the storefront's hardcoded demo data
//! - [`json::JsonCatalog`]: the same shape read from a JSON file
//! - [`memory::InMemoryCatalog`]: hand-built data for tests
//!
//! Sources only produce a [`CatalogData`]. [`Catalog::new`] validates it
//! (unique ids per list, no facet value spelled `all`) and derives the facet
//! options once, so the pages never recompute them per query.

use crate::cart::CartLine;
use crate::error::{Result, StoreError};
use crate::model::{
    Artist, Collection, Order, Profile, Statue, StatueDetail, WishlistItem,
};
use crate::search::facets::FacetIndex;
use crate::search::predicate::ALL;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod builtin;
pub mod json;
pub mod memory;

/// Raw catalog contents as produced by a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub statues: Vec<Statue>,
    #[serde(default)]
    pub details: Vec<StatueDetail>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    pub profile: Profile,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

/// Abstract interface for loading catalog data.
pub trait CatalogSource {
    /// Produce the raw catalog.
    fn load(&self) -> Result<CatalogData>;

    /// Human-readable origin, used in logs and `config` output.
    fn describe(&self) -> String;
}

/// A validated, immutable catalog with its facet options.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    facets: FacetIndex,
}

impl Catalog {
    pub fn new(data: CatalogData) -> Result<Self> {
        ensure_unique("statue", data.statues.iter().map(|s| s.id.to_string()))?;
        ensure_unique("artist", data.artists.iter().map(|a| a.id.clone()))?;
        ensure_unique("collection", data.collections.iter().map(|c| c.id.clone()))?;
        ensure_unique("cart line", data.cart.iter().map(|l| l.item.id.clone()))?;

        let facets = FacetIndex::build(&data.statues, &data.artists, &data.collections);
        ensure_not_sentinel(&facets)?;
        Ok(Self { data, facets })
    }

    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        let data = source.load()?;
        let catalog = Self::new(data)?;
        log::info!(
            "loaded catalog from {}: {} statues, {} artists, {} collections",
            source.describe(),
            catalog.data.statues.len(),
            catalog.data.artists.len(),
            catalog.data.collections.len()
        );
        Ok(catalog)
    }

    pub fn statues(&self) -> &[Statue] {
        &self.data.statues
    }

    pub fn artists(&self) -> &[Artist] {
        &self.data.artists
    }

    pub fn collections(&self) -> &[Collection] {
        &self.data.collections
    }

    pub fn profile(&self) -> &Profile {
        &self.data.profile
    }

    pub fn orders(&self) -> &[Order] {
        &self.data.orders
    }

    pub fn wishlist(&self) -> &[WishlistItem] {
        &self.data.wishlist
    }

    pub fn cart_seed(&self) -> &[CartLine] {
        &self.data.cart
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    pub fn statue(&self, id: u32) -> Result<&Statue> {
        self.data
            .statues
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::StatueNotFound(id))
    }

    pub fn detail(&self, id: u32) -> Option<&StatueDetail> {
        self.data.details.iter().find(|d| d.statue_id == id)
    }
}

/// A facet value spelled like the `all` sentinel could never be selected.
fn ensure_not_sentinel(facets: &FacetIndex) -> Result<()> {
    let named = [
        ("material", &facets.materials),
        ("category", &facets.categories),
        ("specialty", &facets.specialties),
        ("theme", &facets.themes),
    ];
    for (facet, options) in named {
        if options.iter().any(|o| o == ALL) {
            return Err(StoreError::ReservedFacetValue(facet.to_string()));
        }
    }
    Ok(())
}

fn ensure_unique<I: Iterator<Item = String>>(kind: &str, ids: I) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(StoreError::DuplicateId(format!("{} {}", kind, id)));
        }
    }
    Ok(())
}
