use crate::catalog::Catalog;
use crate::commands::gallery::warn_unknown;
use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::Result;
use crate::model::Artist;
use crate::search::evaluate;
use crate::search::query::ArtistQuery;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArtistsPage {
    pub query: ArtistQuery,
    pub artists: Vec<Artist>,
    pub total: usize,
}

pub fn run(catalog: &Catalog, query: &ArtistQuery) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    warn_unknown(&mut result, "specialty", &query.specialty, &catalog.facets().specialties);

    let artists: Vec<Artist> = evaluate(catalog.artists(), &query.predicates())
        .into_iter()
        .cloned()
        .collect();

    if artists.is_empty() {
        result.add_message(CmdMessage::warning("No artists found matching your criteria."));
    }

    Ok(result.with_page(Page::Artists(ArtistsPage {
        query: query.clone(),
        artists,
        total: catalog.artists().len(),
    })))
}
