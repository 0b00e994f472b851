//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every storefront page, whatever the UI.
//!
//! The facade:
//! - **Normalizes inputs**: raw strings from the UI (`"7=2"`, `"list"`,
//!   `"#CD853F"`) become typed arguments, and bad input becomes a
//!   [`StoreError`] before any command runs
//! - **Loads the catalog** from its [`CatalogSource`] for the commands that
//!   browse it
//! - **Dispatches** to the matching `commands::*::run`
//!
//! It does no printing and no formatting; it returns [`CmdResult`]s.
//!
//! `StorefrontApi<S: CatalogSource>` is generic over where the catalog comes
//! from: the built-in demo data, a JSON file, or an in-memory fixture in tests.

use crate::cart::parse_quantity;
use crate::catalog::{Catalog, CatalogSource};
use crate::commands::{self, CmdResult};
use crate::commands::cart::CartOp;
use crate::commands::config::ConfigAction;
use crate::commands::detail::DetailTab;
use crate::commands::facets::FacetTarget;
use crate::commands::profile::{ProfileField, ProfileTab};
use crate::config::{StoreConfig, ViewMode};
use crate::error::{Result, StoreError};
use crate::scene::{Color, StatueKind};
use crate::search::predicate::FacetSelection;
use crate::search::query::{ArtistQuery, CollectionQuery, GalleryQuery};
use std::path::PathBuf;

/// Gallery filters as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct GalleryArgs {
    pub term: Option<String>,
    pub material: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub view: Option<String>,
    pub featured: bool,
}

/// Cart edits as typed by the user. Applied adds, sets, increments,
/// decrements, removals, in that order.
#[derive(Debug, Clone, Default)]
pub struct CartArgs {
    /// `ID` or `ID=QTY` of gallery statues.
    pub add: Vec<String>,
    /// `LINE=QTY`.
    pub set: Vec<String>,
    pub inc: Vec<String>,
    pub dec: Vec<String>,
    pub remove: Vec<String>,
}

pub struct StorefrontApi<S: CatalogSource> {
    source: S,
    config: StoreConfig,
    config_dir: PathBuf,
}

impl<S: CatalogSource> StorefrontApi<S> {
    pub fn new(source: S, config: StoreConfig, config_dir: PathBuf) -> Self {
        Self {
            source,
            config,
            config_dir,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn catalog(&self) -> Result<Catalog> {
        Catalog::load(&self.source)
    }

    pub fn gallery(&self, args: GalleryArgs) -> Result<CmdResult> {
        let view = match args.view.as_deref() {
            Some(v) => v.parse::<ViewMode>()?,
            None => self.config.default_view,
        };
        let query = GalleryQuery::with_ceiling(self.config.price_ceiling)
            .term(args.term.unwrap_or_default())
            .material(FacetSelection::from(args.material))
            .category(FacetSelection::from(args.category))
            .price_between(args.min_price, args.max_price)
            .featured_only(args.featured);
        commands::gallery::run(&self.catalog()?, &query, view)
    }

    pub fn artists(&self, term: Option<String>, specialty: Option<String>) -> Result<CmdResult> {
        let query = ArtistQuery::new(term.unwrap_or_default(), FacetSelection::from(specialty));
        commands::artists::run(&self.catalog()?, &query)
    }

    pub fn collections(&self, term: Option<String>, theme: Option<String>) -> Result<CmdResult> {
        let query = CollectionQuery::new(term.unwrap_or_default(), FacetSelection::from(theme));
        commands::collections::run(&self.catalog()?, &query)
    }

    pub fn facets(&self, page: &str) -> Result<CmdResult> {
        let target: FacetTarget = page.parse()?;
        commands::facets::run(&self.catalog()?, target, self.config.price_ceiling)
    }

    pub fn statue(
        &self,
        id: u32,
        tab: Option<&str>,
        quantity: Option<&str>,
        hovered: bool,
    ) -> Result<CmdResult> {
        let tab = tab.map(str::parse::<DetailTab>).transpose()?.unwrap_or_default();
        let quantity = quantity.map(parse_quantity).unwrap_or(1);
        commands::detail::run(&self.catalog()?, id, tab, quantity, hovered)
    }

    pub fn cart(&self, args: &CartArgs) -> Result<CmdResult> {
        let ops = cart_ops(args)?;
        commands::cart::run(&self.catalog()?, &ops)
    }

    pub fn profile<E: AsRef<str>>(&self, tab: Option<&str>, edits: &[E]) -> Result<CmdResult> {
        let tab = tab.map(str::parse::<ProfileTab>).transpose()?.unwrap_or_default();
        let edits = edits
            .iter()
            .map(|e| {
                let (key, value) = split_assignment(e.as_ref(), "FIELD=VALUE")?;
                Ok((key.parse::<ProfileField>()?, value.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        commands::profile::run(&self.catalog()?, tab, &edits)
    }

    pub fn showcase(&self, slide: usize, frames: u32) -> Result<CmdResult> {
        commands::scene::showcase(slide, frames)
    }

    pub fn viewer(
        &self,
        kind: &str,
        color: Option<&str>,
        scale: f64,
        frames: u32,
    ) -> Result<CmdResult> {
        let kind: StatueKind = kind.parse()?;
        let color = match color {
            Some(c) => c.parse::<Color>()?,
            None => commands::scene::DEFAULT_VIEWER_COLOR,
        };
        if !(scale.is_finite() && scale > 0.0) {
            return Err(StoreError::Api(format!(
                "Scale must be a positive number, got {}",
                scale
            )));
        }
        commands::scene::viewer(kind, color, scale, frames)
    }

    pub fn about(&self) -> Result<CmdResult> {
        commands::about::run()
    }

    pub fn configure(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

fn split_assignment<'a>(input: &'a str, expected: &str) -> Result<(&'a str, &'a str)> {
    input
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| StoreError::Api(format!("Expected {}, got '{}'", expected, input)))
}

fn statue_id(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| StoreError::Api(format!("Invalid statue id '{}'", input)))
}

/// Literal integers are taken as-is, so `0` removes a line; anything else
/// falls back to free-typed quantity parsing.
fn set_quantity_value(input: &str) -> i64 {
    input.trim().parse().unwrap_or_else(|_| parse_quantity(input))
}

fn cart_ops(args: &CartArgs) -> Result<Vec<CartOp>> {
    let mut ops = Vec::new();

    for add in &args.add {
        let (id, quantity) = match add.split_once('=') {
            Some((id, qty)) => (id, parse_quantity(qty)),
            None => (add.as_str(), 1),
        };
        ops.push(CartOp::Add {
            statue_id: statue_id(id)?,
            quantity: u32::try_from(quantity.max(1)).unwrap_or(u32::MAX),
        });
    }
    for set in &args.set {
        let (line_id, qty) = split_assignment(set, "LINE=QTY")?;
        ops.push(CartOp::Set {
            line_id: line_id.to_string(),
            quantity: set_quantity_value(qty),
        });
    }
    for line_id in &args.inc {
        ops.push(CartOp::Step {
            line_id: line_id.trim().to_string(),
            delta: 1,
        });
    }
    for line_id in &args.dec {
        ops.push(CartOp::Step {
            line_id: line_id.trim().to_string(),
            delta: -1,
        });
    }
    for line_id in &args.remove {
        ops.push(CartOp::Remove {
            line_id: line_id.trim().to_string(),
        });
    }

    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::catalog::memory::fixtures::{statue, CatalogFixture};
    use crate::catalog::memory::InMemoryCatalog;
    use crate::commands::Page;
    use tempfile::TempDir;

    fn builtin_api() -> (StorefrontApi<BuiltinCatalog>, TempDir) {
        let temp = TempDir::new().unwrap();
        let api = StorefrontApi::new(
            BuiltinCatalog,
            StoreConfig::default(),
            temp.path().to_path_buf(),
        );
        (api, temp)
    }

    fn fixture_api(config: StoreConfig) -> StorefrontApi<InMemoryCatalog> {
        let source = CatalogFixture::new()
            .with_statue(statue(1, "Small", "Marble", "Classical", 900))
            .with_statue(statue(2, "Large", "Marble", "Classical", 9000))
            .source();
        StorefrontApi::new(source, config, PathBuf::from("unused"))
    }

    #[test]
    fn gallery_view_falls_back_to_config() {
        let api = fixture_api(StoreConfig {
            default_view: ViewMode::List,
            ..StoreConfig::default()
        });
        match api.gallery(GalleryArgs::default()).unwrap().page {
            Some(Page::Gallery(page)) => assert_eq!(page.view, ViewMode::List),
            other => panic!("unexpected page {:?}", other),
        }
        assert!(api
            .gallery(GalleryArgs {
                view: Some("table".into()),
                ..GalleryArgs::default()
            })
            .is_err());
    }

    #[test]
    fn price_ceiling_bounds_the_full_range() {
        // Default ceiling: the 9000 statue sits outside the range but the
        // range is inactive, so both show.
        let api = fixture_api(StoreConfig::default());
        match api.gallery(GalleryArgs::default()).unwrap().page {
            Some(Page::Gallery(page)) => assert_eq!(page.statues.len(), 2),
            other => panic!("unexpected page {:?}", other),
        }
        let narrowed = GalleryArgs {
            max_price: Some(1000),
            ..GalleryArgs::default()
        };
        match api.gallery(narrowed).unwrap().page {
            Some(Page::Gallery(page)) => assert_eq!(page.statues[0].title, "Small"),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn cart_args_become_ordered_ops() {
        let args = CartArgs {
            add: vec!["7".into(), "8=3".into()],
            set: vec!["1=0".into(), "2=abc".into()],
            inc: vec!["8".into()],
            dec: vec![],
            remove: vec!["7".into()],
        };
        let ops = cart_ops(&args).unwrap();
        assert_eq!(
            ops,
            vec![
                CartOp::Add {
                    statue_id: 7,
                    quantity: 1
                },
                CartOp::Add {
                    statue_id: 8,
                    quantity: 3
                },
                CartOp::Set {
                    line_id: "1".into(),
                    quantity: 0
                },
                CartOp::Set {
                    line_id: "2".into(),
                    quantity: 1
                },
                CartOp::Step {
                    line_id: "8".into(),
                    delta: 1
                },
                CartOp::Remove {
                    line_id: "7".into()
                },
            ]
        );
    }

    #[test]
    fn malformed_cart_args_are_rejected() {
        let bad_add = CartArgs {
            add: vec!["venus".into()],
            ..CartArgs::default()
        };
        assert!(matches!(cart_ops(&bad_add), Err(StoreError::Api(_))));

        let bad_set = CartArgs {
            set: vec!["1".into()],
            ..CartArgs::default()
        };
        assert!(matches!(cart_ops(&bad_set), Err(StoreError::Api(_))));
    }

    #[test]
    fn viewer_validates_inputs() {
        let (api, _temp) = builtin_api();
        assert!(matches!(
            api.viewer("dragon", None, 1.0, 0),
            Err(StoreError::UnknownStatueKind(_))
        ));
        assert!(matches!(
            api.viewer("horse", Some("brown"), 1.0, 0),
            Err(StoreError::InvalidColor(_))
        ));
        assert!(api.viewer("horse", None, 0.0, 0).is_err());
        assert!(api.viewer("woman", Some("#F5F5DC"), 1.2, 3).is_ok());
    }

    #[test]
    fn profile_edits_need_field_value_pairs() {
        let (api, _temp) = builtin_api();
        assert!(api.profile(None, &["name"]).is_err());
        assert!(api.profile(None, &["age=30"]).is_err());
        match api.profile(Some("orders"), &["name=Sam Rivera"]).unwrap().page {
            Some(Page::Profile(page)) => assert_eq!(page.profile.name, "Sam Rivera"),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn statue_quantity_is_free_typed() {
        let (api, _temp) = builtin_api();
        match api.statue(1, Some("reviews"), Some("3 please"), false).unwrap().page {
            Some(Page::Statue(page)) => assert_eq!(page.quantity, 3),
            other => panic!("unexpected page {:?}", other),
        }
    }
}
