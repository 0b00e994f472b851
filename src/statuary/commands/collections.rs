use crate::catalog::Catalog;
use crate::commands::gallery::warn_unknown;
use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::Result;
use crate::model::Collection;
use crate::search::query::CollectionQuery;
use crate::search::{evaluate, partition_by};
use serde::Serialize;

/// Tags shown on a featured card before collapsing into "+N more".
pub const FEATURED_TAG_LIMIT: usize = 3;
/// Tags shown on a regular card.
pub const REGULAR_TAG_LIMIT: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct CollectionCard {
    pub collection: Collection,
    pub shown_tags: Vec<String>,
    pub hidden_tags: usize,
}

impl CollectionCard {
    fn new(collection: &Collection, tag_limit: usize) -> Self {
        let shown_tags: Vec<String> = collection.tags.iter().take(tag_limit).cloned().collect();
        Self {
            hidden_tags: collection.tags.len() - shown_tags.len(),
            shown_tags,
            collection: collection.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionsPage {
    pub query: CollectionQuery,
    pub featured: Vec<CollectionCard>,
    pub regular: Vec<CollectionCard>,
    pub total: usize,
}

pub fn run(catalog: &Catalog, query: &CollectionQuery) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    warn_unknown(&mut result, "theme", &query.theme, &catalog.facets().themes);

    let matches = evaluate(catalog.collections(), &query.predicates());
    let (featured, regular) = partition_by(matches, |c| c.featured);

    if featured.is_empty() && regular.is_empty() {
        result.add_message(CmdMessage::warning(
            "No collections found matching your criteria.",
        ));
    }

    Ok(result.with_page(Page::Collections(CollectionsPage {
        query: query.clone(),
        featured: featured
            .into_iter()
            .map(|c| CollectionCard::new(c, FEATURED_TAG_LIMIT))
            .collect(),
        regular: regular
            .into_iter()
            .map(|c| CollectionCard::new(c, REGULAR_TAG_LIMIT))
            .collect(),
        total: catalog.collections().len(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::search::predicate::FacetSelection;

    fn page(query: CollectionQuery) -> CollectionsPage {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        match run(&catalog, &query).unwrap().page {
            Some(Page::Collections(page)) => page,
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn splits_featured_from_regular() {
        let page = page(CollectionQuery::default());
        assert_eq!(page.featured.len(), 2);
        assert_eq!(page.regular.len(), 3);
        assert_eq!(page.featured[0].collection.name, "Classical Masterpieces");
        assert_eq!(page.regular[0].collection.name, "Renaissance Revival");
    }

    #[test]
    fn truncates_tags_per_section() {
        let page = page(CollectionQuery::default());
        assert_eq!(page.featured[0].shown_tags, vec!["Greek", "Roman", "Marble"]);
        assert_eq!(page.featured[0].hidden_tags, 1);
        assert_eq!(page.regular[0].shown_tags.len(), 2);
        assert_eq!(page.regular[0].hidden_tags, 2);
    }

    #[test]
    fn search_reaches_tags() {
        let page = page(CollectionQuery::new("geometric", FacetSelection::All));
        assert!(page.featured.is_empty());
        assert_eq!(page.regular.len(), 1);
        assert_eq!(page.regular[0].collection.name, "Minimalist Forms");
    }

    #[test]
    fn theme_filter_is_exact() {
        let page = page(CollectionQuery::new("", FacetSelection::value("Mythology")));
        assert_eq!(page.regular.len(), 1);
        assert_eq!(page.regular[0].collection.id, "4");
    }
}
