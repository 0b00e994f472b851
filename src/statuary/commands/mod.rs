//! # Commands
//!
//! One module per page of the storefront. Each `run` function takes the loaded
//! [`Catalog`](crate::catalog::Catalog) plus already-parsed arguments and
//! returns a [`CmdResult`]: the page data to render and any messages for the
//! user. Commands never print.
//!
//! Soft failures (an unknown cart line, an empty result set) are reported as
//! warning messages; only failures that make the page meaningless (a missing
//! statue on its own detail page) are errors.

use crate::config::StoreConfig;
use serde::Serialize;

pub mod about;
pub mod artists;
pub mod cart;
pub mod collections;
pub mod config;
pub mod detail;
pub mod facets;
pub mod gallery;
pub mod profile;
pub mod scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The data a command produced, one variant per page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Gallery(gallery::GalleryPage),
    Artists(artists::ArtistsPage),
    Collections(collections::CollectionsPage),
    Facets(facets::FacetsPage),
    Statue(detail::StatuePage),
    Cart(cart::CartPage),
    Profile(profile::ProfilePage),
    Showcase(crate::scene::showcase::ShowcaseScene),
    Viewer(scene::ViewerPage),
    About(about::AboutPage),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<Page>,
    pub config: Option<StoreConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
