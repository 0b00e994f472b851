use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, Page};
use crate::config::ViewMode;
use crate::error::Result;
use crate::model::Statue;
use crate::search::evaluate;
use crate::search::predicate::FacetSelection;
use crate::search::query::GalleryQuery;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryPage {
    pub query: GalleryQuery,
    pub view: ViewMode,
    pub statues: Vec<Statue>,
    /// Size of the unfiltered catalog.
    pub total: usize,
}

pub fn run(catalog: &Catalog, query: &GalleryQuery, view: ViewMode) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    warn_unknown(&mut result, "material", &query.material, &catalog.facets().materials);
    warn_unknown(&mut result, "category", &query.category, &catalog.facets().categories);

    let statues: Vec<Statue> = evaluate(catalog.statues(), &query.predicates())
        .into_iter()
        .cloned()
        .collect();

    if statues.is_empty() {
        result.add_message(CmdMessage::warning(
            "No statues found matching your criteria.",
        ));
    }

    Ok(result.with_page(Page::Gallery(GalleryPage {
        query: query.clone(),
        view,
        statues,
        total: catalog.statues().len(),
    })))
}

/// Flags a facet value the catalog never offers. Filtering still runs, so the
/// page reports an empty result rather than ignoring the selection.
pub(crate) fn warn_unknown(
    result: &mut CmdResult,
    facet: &str,
    selection: &FacetSelection,
    offered: &[String],
) {
    if let Some(value) = selection.as_value() {
        if !offered.iter().any(|o| o == value) {
            log::warn!("{} '{}' is not offered by the catalog", facet, value);
            result.add_message(CmdMessage::warning(format!(
                "Unknown {} '{}'. Available: {}",
                facet,
                value,
                offered.join(", ")
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::commands::MessageLevel;

    fn gallery(query: GalleryQuery) -> (GalleryPage, CmdResult) {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        let mut result = run(&catalog, &query, ViewMode::Grid).unwrap();
        match result.page.take() {
            Some(Page::Gallery(page)) => (page, result),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn default_query_shows_everything_in_order() {
        let (page, result) = gallery(GalleryQuery::default());
        assert_eq!(page.statues.len(), 8);
        assert_eq!(page.total, 8);
        let ids: Vec<u32> = page.statues.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn search_matches_title_or_artist() {
        let (page, _) = gallery(GalleryQuery::default().term("venus"));
        assert_eq!(page.statues.len(), 1);
        assert_eq!(page.statues[0].title, "Venus de Milo Replica");

        let (page, _) = gallery(GalleryQuery::default().term("zhang"));
        assert_eq!(page.statues[0].title, "Guardian Lion");
    }

    #[test]
    fn facets_and_price_combine() {
        let query = GalleryQuery::default()
            .material(FacetSelection::value("Bronze"))
            .price_between(Some(2000), Some(3000));
        let (page, _) = gallery(query);
        let titles: Vec<&str> = page.statues.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Ancient Warrior", "Art Deco Lady"]);
    }

    #[test]
    fn featured_only_limits_to_the_homepage_set() {
        let (page, _) = gallery(GalleryQuery::default().featured_only(true));
        assert_eq!(page.statues.len(), 6);
    }

    #[test]
    fn unknown_facet_value_warns_and_matches_nothing() {
        let (page, result) = gallery(GalleryQuery::default().material(FacetSelection::value("marble")));
        assert!(page.statues.is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.starts_with("Unknown material 'marble'")));
    }
}
