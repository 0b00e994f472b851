use crate::catalog::Catalog;
use crate::commands::{CmdResult, Page};
use crate::error::{Result, StoreError};
use crate::search::predicate::ALL;
use crate::search::query::PRICE_STEP;
use serde::Serialize;
use std::str::FromStr;

/// Which page's filter controls to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetTarget {
    Gallery,
    Artists,
    Collections,
}

impl FromStr for FacetTarget {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gallery" => Ok(FacetTarget::Gallery),
            "artists" => Ok(FacetTarget::Artists),
            "collections" => Ok(FacetTarget::Collections),
            other => Err(StoreError::Api(format!(
                "Unknown page '{}': expected gallery, artists or collections",
                other
            ))),
        }
    }
}

/// One select control: its options start with the `all` sentinel.
#[derive(Debug, Clone, Serialize)]
pub struct FacetOptions {
    pub name: &'static str,
    pub options: Vec<String>,
}

impl FacetOptions {
    fn new(name: &'static str, values: &[String]) -> Self {
        let mut options = Vec::with_capacity(values.len() + 1);
        options.push(ALL.to_string());
        options.extend(values.iter().cloned());
        Self { name, options }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceSlider {
    pub low: u32,
    pub high: u32,
    pub step: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetsPage {
    pub target: FacetTarget,
    pub facets: Vec<FacetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceSlider>,
}

pub fn run(catalog: &Catalog, target: FacetTarget, price_ceiling: u32) -> Result<CmdResult> {
    let index = catalog.facets();
    let page = match target {
        FacetTarget::Gallery => FacetsPage {
            target,
            facets: vec![
                FacetOptions::new("material", &index.materials),
                FacetOptions::new("category", &index.categories),
            ],
            price: Some(PriceSlider {
                low: 0,
                high: price_ceiling,
                step: PRICE_STEP,
            }),
        },
        FacetTarget::Artists => FacetsPage {
            target,
            facets: vec![FacetOptions::new("specialty", &index.specialties)],
            price: None,
        },
        FacetTarget::Collections => FacetsPage {
            target,
            facets: vec![FacetOptions::new("theme", &index.themes)],
            price: None,
        },
    };
    Ok(CmdResult::default().with_page(Page::Facets(page)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;

    #[test]
    fn gallery_facets_lead_with_the_sentinel() {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        let page = match run(&catalog, FacetTarget::Gallery, 5000).unwrap().page {
            Some(Page::Facets(page)) => page,
            other => panic!("unexpected page {:?}", other),
        };
        assert_eq!(page.facets[0].options, vec!["all", "Marble", "Bronze", "Stone"]);
        assert_eq!(page.facets[1].options[0], "all");
        assert_eq!(page.price.unwrap().high, 5000);
    }

    #[test]
    fn target_parses_page_names() {
        assert_eq!("artists".parse::<FacetTarget>().unwrap(), FacetTarget::Artists);
        assert!(matches!("cart".parse::<FacetTarget>(), Err(StoreError::Api(_))));
    }
}
