use crate::cart::{Cart, CartItem};
use crate::catalog::Catalog;
use crate::commands::cart::CartPage;
use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::{Result, StoreError};
use crate::model::{Statue, StatueDetail};
use crate::scene::placeholder::PlaceholderModel;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const PERKS: &[&str] = &["Free shipping", "Authenticity guaranteed", "30-day returns"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Description,
    Specifications,
    Reviews,
}

impl FromStr for DetailTab {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "description" => Ok(DetailTab::Description),
            "specifications" | "specs" => Ok(DetailTab::Specifications),
            "reviews" => Ok(DetailTab::Reviews),
            other => Err(StoreError::Api(format!(
                "Unknown tab '{}': expected description, specifications or reviews",
                other
            ))),
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetailTab::Description => "description",
            DetailTab::Specifications => "specifications",
            DetailTab::Reviews => "reviews",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatuePage {
    pub statue: Statue,
    pub detail: Option<StatueDetail>,
    pub tab: DetailTab,
    pub stars: usize,
    pub quantity: u32,
    /// The cart as it would look after "Add to Cart".
    pub cart_preview: CartPage,
    pub viewer: PlaceholderModel,
    pub perks: Vec<&'static str>,
}

pub fn run(
    catalog: &Catalog,
    id: u32,
    tab: DetailTab,
    quantity: i64,
    hovered: bool,
) -> Result<CmdResult> {
    let statue = catalog.statue(id)?;
    let detail = catalog.detail(id).cloned();
    let quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);

    let mut result = CmdResult::default();
    match &detail {
        None => result.add_message(CmdMessage::info(
            "No extended product sheet for this statue.",
        )),
        Some(d) if !d.in_stock => result.add_message(CmdMessage::warning("Currently out of stock.")),
        Some(_) => {}
    }

    let preview = Cart::new(catalog.cart_seed().to_vec()).add(CartItem::from(statue), quantity);

    Ok(result.with_page(Page::Statue(StatuePage {
        stars: detail.as_ref().map(StatueDetail::full_stars).unwrap_or(0),
        statue: statue.clone(),
        detail,
        tab,
        quantity,
        cart_preview: CartPage::from(&preview),
        viewer: PlaceholderModel::default().hover(hovered),
        perks: PERKS.to_vec(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;

    fn page(id: u32, quantity: i64) -> Result<StatuePage> {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        match run(&catalog, id, DetailTab::default(), quantity, false)?.page {
            Some(Page::Statue(page)) => Ok(page),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn venus_has_full_sheet() {
        let page = page(1, 1).unwrap();
        assert_eq!(page.statue.title, "Venus de Milo Replica");
        assert_eq!(page.stars, 4);
        assert_eq!(page.detail.unwrap().reviews, 24);
    }

    #[test]
    fn quantity_has_a_floor_of_one() {
        assert_eq!(page(2, -3).unwrap().quantity, 1);
        assert_eq!(page(2, 0).unwrap().quantity, 1);
        assert_eq!(page(2, 4).unwrap().quantity, 4);
    }

    #[test]
    fn preview_adds_to_the_seeded_cart() {
        let page = page(8, 2).unwrap();
        assert_eq!(page.cart_preview.lines.len(), 3);
        assert_eq!(page.cart_preview.lines[2].item.name, "Wild Horse");
        assert_eq!(page.cart_preview.lines[2].quantity, 2);
    }

    #[test]
    fn missing_statue_is_an_error() {
        assert!(matches!(page(404, 1), Err(StoreError::StatueNotFound(404))));
    }

    #[test]
    fn tabs_parse() {
        assert_eq!("specs".parse::<DetailTab>().unwrap(), DetailTab::Specifications);
        assert_eq!(DetailTab::Reviews.to_string(), "reviews");
        assert!("photos".parse::<DetailTab>().is_err());
    }
}
