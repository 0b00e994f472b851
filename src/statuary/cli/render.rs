//! # Rendering Module
//!
//! Turns command pages into terminal text. Templates are minijinja sources
//! from [`super::templates`]; a `style` filter maps semantic names onto the
//! [`STORE_THEME`] and degrades to plain text when color is off.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they need Unicode-aware measuring. Templates handle presentation:
//! - Style selection for badges, prices and the active tab
//! - Section headings and blank lines
//! - Optional parts (ratings, stock, order summary)

use super::styles::STORE_THEME;
use super::templates::{
    ABOUT_TEMPLATE, ARTISTS_TEMPLATE, CART_TEMPLATE, COLLECTIONS_TEMPLATE, FACETS_TEMPLATE,
    GALLERY_TEMPLATE, PROFILE_TEMPLATE, SCENE_TEMPLATE, STATUE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use colored::Colorize;
use minijinja::{Environment, Value};
use serde::Serialize;
use statuary::commands::artists::ArtistsPage;
use statuary::commands::cart::CartPage;
use statuary::commands::collections::{CollectionCard, CollectionsPage};
use statuary::commands::detail::{DetailTab, StatuePage};
use statuary::commands::facets::{FacetTarget, FacetsPage};
use statuary::commands::gallery::GalleryPage;
use statuary::commands::profile::{ProfilePage, ProfileTab};
use statuary::commands::scene::ViewerPage;
use statuary::commands::{CmdMessage, MessageLevel, Page};
use statuary::config::{StoreConfig, ViewMode, KEYS};
use statuary::error::{Result, StoreError};
use statuary::model::{Money, Statue};
use statuary::scene::showcase::{Light, ShowcaseScene, Stage};
use statuary::scene::StatueModel;
use statuary::search::predicate::FacetSelection;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column widths of the gallery list view.
pub const TITLE_WIDTH: usize = 30;
pub const ARTIST_WIDTH: usize = 22;
pub const PRICE_WIDTH: usize = 9;
/// Longest bio or description line before truncation.
pub const TEXT_WIDTH: usize = 96;
const LABEL_WIDTH: usize = 12;
const SUMMARY_WIDTH: usize = 22;

pub const STAR_FULL: &str = "★";
pub const STAR_EMPTY: &str = "☆";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Pretty JSON of any command output.
pub fn render_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(StoreError::Serialization)
}

/// Renders one page as styled text.
pub fn render_page(page: &Page, use_color: bool) -> Result<String> {
    let env = environment(use_color)?;
    match page {
        Page::Gallery(p) => render(&env, "gallery", &gallery_data(p)),
        Page::Artists(p) => render(&env, "artists", &artists_data(p)),
        Page::Collections(p) => render(&env, "collections", &collections_data(p)),
        Page::Facets(p) => render(&env, "facets", &facets_data(p)),
        Page::Statue(p) => render(&env, "statue", &statue_data(p)),
        Page::Cart(p) => render(&env, "cart", &cart_data(p)),
        Page::Profile(p) => render(&env, "profile", &profile_data(p)),
        Page::Showcase(scene) => render(&env, "scene", &showcase_data(scene)),
        Page::Viewer(p) => render(&env, "scene", &viewer_data(p)),
        Page::About(p) => render(&env, "about", p),
    }
}

/// `key = value` lines for every config key.
pub fn render_config(config: &StoreConfig, use_color: bool) -> Result<String> {
    let lines: Vec<String> = KEYS
        .iter()
        .map(|key| format!("{} = {}", key, config.get(key).unwrap_or_default()))
        .collect();
    render_text_list(&lines, "No configuration values.", use_color)
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> Result<String> {
    #[derive(Serialize)]
    struct TextListData<'a> {
        lines: &'a [String],
        empty_message: &'a str,
    }

    let env = environment(use_color)?;
    render(
        &env,
        "text_list",
        &TextListData {
            lines,
            empty_message,
        },
    )
}

fn environment(use_color: bool) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        STORE_THEME.apply(&name, &value.to_string(), use_color)
    });

    let templates = [
        ("gallery", GALLERY_TEMPLATE),
        ("artists", ARTISTS_TEMPLATE),
        ("collections", COLLECTIONS_TEMPLATE),
        ("facets", FACETS_TEMPLATE),
        ("statue", STATUE_TEMPLATE),
        ("cart", CART_TEMPLATE),
        ("profile", PROFILE_TEMPLATE),
        ("scene", SCENE_TEMPLATE),
        ("about", ABOUT_TEMPLATE),
        ("text_list", TEXT_LIST_TEMPLATE),
    ];
    for (name, source) in templates {
        env.add_template(name, source).map_err(render_error)?;
    }
    Ok(env)
}

fn render<T: Serialize>(env: &Environment<'static>, name: &str, data: &T) -> Result<String> {
    env.get_template(name)
        .and_then(|tmpl| tmpl.render(data))
        .map(|out| out.trim_end().to_string())
        .map_err(render_error)
}

fn render_error(e: minijinja::Error) -> StoreError {
    StoreError::Api(format!("Failed to render output: {}", e))
}

/// Cuts `s` to `max_width` terminal columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Truncates then right-pads to exactly `width` columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let padding = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(padding))
}

fn fit_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

pub fn star_line(full: usize) -> String {
    let full = full.min(5);
    format!("{}{}", STAR_FULL.repeat(full), STAR_EMPTY.repeat(5 - full))
}

#[derive(Serialize)]
struct Badge {
    text: &'static str,
    style: &'static str,
}

fn statue_badges(statue: &Statue) -> Vec<Badge> {
    let mut badges = Vec::new();
    if statue.is_new {
        badges.push(Badge {
            text: " New ",
            style: "badge_new",
        });
    }
    if statue.on_sale() {
        badges.push(Badge {
            text: " Sale ",
            style: "badge_sale",
        });
    }
    badges
}

#[derive(Serialize)]
struct Row {
    label: String,
    value: String,
}

impl Row {
    fn new(label: &str, value: impl Into<String>, width: usize) -> Self {
        Self {
            label: fit_to_width(label, width),
            value: value.into(),
        }
    }
}

// --- gallery ---

#[derive(Serialize)]
struct StatueCard {
    index: String,
    title: String,
    artist: String,
    price: String,
    original_price: Option<String>,
    badges: Vec<Badge>,
    material: String,
    height: String,
    category: String,
    link: String,
    title_col: String,
    artist_col: String,
    price_col: String,
}

#[derive(Serialize)]
struct GalleryData {
    showing: String,
    filters: Vec<String>,
    view: ViewMode,
    cards: Vec<StatueCard>,
}

fn gallery_data(page: &GalleryPage) -> GalleryData {
    let query = &page.query;
    let mut filters = Vec::new();
    if !query.term.trim().is_empty() {
        filters.push(format!("\"{}\"", query.term.trim()));
    }
    if let FacetSelection::Value(v) = &query.material {
        filters.push(format!("material {}", v));
    }
    if let FacetSelection::Value(v) = &query.category {
        filters.push(format!("category {}", v));
    }
    if query.price != query.full_price {
        filters.push(format!(
            "price {} – {}",
            dollars(query.price.low),
            dollars(query.price.high)
        ));
    }
    if query.featured_only {
        filters.push("featured".to_string());
    }

    let cards = page
        .statues
        .iter()
        .map(|s| StatueCard {
            index: format!("{:>3}.", s.id),
            title: s.title.clone(),
            artist: s.artist.clone(),
            price: s.price.to_string(),
            original_price: s.original_price.map(|p| p.to_string()),
            badges: statue_badges(s),
            material: s.material.clone(),
            height: s.height.clone(),
            category: s.category.clone(),
            link: s.detail_ref(),
            title_col: fit_to_width(&s.title, TITLE_WIDTH),
            artist_col: fit_to_width(&s.artist, ARTIST_WIDTH),
            price_col: fit_right(&s.price.to_string(), PRICE_WIDTH),
        })
        .collect();

    GalleryData {
        showing: format!("Showing {} of {} statues", page.statues.len(), page.total),
        filters,
        view: page.view,
        cards,
    }
}

fn dollars(amount: f64) -> Money {
    Money::from_cents((amount.max(0.0) * 100.0).round() as u64)
}

// --- artists ---

#[derive(Serialize)]
struct ArtistCard {
    name: String,
    verified: bool,
    location: String,
    established: String,
    total_works: u32,
    specialties: String,
    bio: String,
    featured_name: String,
    featured_price: String,
}

#[derive(Serialize)]
struct ArtistsData {
    showing: String,
    artists: Vec<ArtistCard>,
}

fn artists_data(page: &ArtistsPage) -> ArtistsData {
    ArtistsData {
        showing: format!("Showing {} of {} artists", page.artists.len(), page.total),
        artists: page
            .artists
            .iter()
            .map(|a| ArtistCard {
                name: a.name.clone(),
                verified: a.verified,
                location: a.location.clone(),
                established: a.established.clone(),
                total_works: a.total_works,
                specialties: a.specialties.join(", "),
                bio: truncate_to_width(&a.bio, TEXT_WIDTH),
                featured_name: a.featured_work.name.clone(),
                featured_price: a.featured_work.price.to_string(),
            })
            .collect(),
    }
}

// --- collections ---

#[derive(Serialize)]
struct CollectionCardData {
    name: String,
    theme: String,
    curator: String,
    item_count: u32,
    created: String,
    description: String,
    tags: Vec<String>,
    more: Option<String>,
}

impl From<&CollectionCard> for CollectionCardData {
    fn from(card: &CollectionCard) -> Self {
        let c = &card.collection;
        Self {
            name: c.name.clone(),
            theme: c.theme.clone(),
            curator: c.curator.clone(),
            item_count: c.item_count,
            created: c.created.format("%B %-d, %Y").to_string(),
            description: truncate_to_width(&c.description, TEXT_WIDTH),
            tags: card.shown_tags.clone(),
            more: (card.hidden_tags > 0).then(|| format!("+{} more", card.hidden_tags)),
        }
    }
}

#[derive(Serialize)]
struct CollectionSection {
    title: &'static str,
    cards: Vec<CollectionCardData>,
}

#[derive(Serialize)]
struct CollectionsData {
    showing: String,
    sections: Vec<CollectionSection>,
}

fn collections_data(page: &CollectionsPage) -> CollectionsData {
    let shown = page.featured.len() + page.regular.len();
    CollectionsData {
        showing: format!("Showing {} of {} collections", shown, page.total),
        sections: vec![
            CollectionSection {
                title: "Featured Collections",
                cards: page.featured.iter().map(CollectionCardData::from).collect(),
            },
            CollectionSection {
                title: "All Collections",
                cards: page.regular.iter().map(CollectionCardData::from).collect(),
            },
        ],
    }
}

// --- facets ---

#[derive(Serialize)]
struct FacetLine {
    name_col: String,
    options: Vec<String>,
}

#[derive(Serialize)]
struct PriceLine {
    name_col: String,
    range: String,
}

#[derive(Serialize)]
struct FacetsData {
    heading: String,
    facets: Vec<FacetLine>,
    price: Option<PriceLine>,
}

fn facets_data(page: &FacetsPage) -> FacetsData {
    let target = match page.target {
        FacetTarget::Gallery => "gallery",
        FacetTarget::Artists => "artists",
        FacetTarget::Collections => "collections",
    };
    FacetsData {
        heading: format!("Filters for {}", target),
        facets: page
            .facets
            .iter()
            .map(|f| FacetLine {
                name_col: fit_to_width(&format!("{}:", f.name), LABEL_WIDTH),
                options: f.options.clone(),
            })
            .collect(),
        price: page.price.map(|slider| PriceLine {
            name_col: fit_to_width("price:", LABEL_WIDTH),
            range: format!(
                "{} – {} in steps of {}",
                Money::from_dollars(u64::from(slider.low)),
                Money::from_dollars(u64::from(slider.high)),
                Money::from_dollars(u64::from(slider.step))
            ),
        }),
    }
}

// --- statue detail ---

#[derive(Serialize)]
struct Rating {
    stars: String,
    score: String,
    reviews: u32,
}

#[derive(Serialize)]
struct Stock {
    text: &'static str,
    style: &'static str,
}

#[derive(Serialize)]
struct Tab {
    name: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct StatueData {
    title: String,
    artist: String,
    badges: Vec<Badge>,
    price: String,
    original_price: Option<String>,
    rating: Option<Rating>,
    facts: Vec<Row>,
    stock: Option<Stock>,
    tabs: Vec<Tab>,
    tab_body: Vec<String>,
    quantity: u32,
    cart_summary: String,
    perks: Vec<&'static str>,
    viewer: String,
}

fn statue_data(page: &StatuePage) -> StatueData {
    let statue = &page.statue;
    let detail = page.detail.as_ref();

    let mut facts = vec![
        Row::new("Material", statue.material.clone(), LABEL_WIDTH),
        Row::new("Height", statue.height.clone(), LABEL_WIDTH),
        Row::new("Category", statue.category.clone(), LABEL_WIDTH),
    ];
    if let Some(d) = detail {
        facts.push(Row::new("Width", d.width.clone(), LABEL_WIDTH));
        facts.push(Row::new("Depth", d.depth.clone(), LABEL_WIDTH));
        facts.push(Row::new("Weight", d.weight.clone(), LABEL_WIDTH));
    }

    let tab_body = match (page.tab, detail) {
        (DetailTab::Description, Some(d)) => {
            let mut lines = vec![d.description.clone()];
            if !d.features.is_empty() {
                lines.push(String::new());
                lines.push("Key Features".to_string());
                lines.extend(d.features.iter().map(|f| format!("  • {}", f)));
            }
            lines
        }
        (DetailTab::Specifications, Some(d)) => {
            let width = d
                .specifications
                .iter()
                .map(|(k, _)| k.width())
                .max()
                .unwrap_or(0)
                + 2;
            d.specifications
                .iter()
                .map(|(k, v)| format!("  {}{}", fit_to_width(k, width), v))
                .collect()
        }
        (DetailTab::Reviews, _) => vec!["Reviews coming soon".to_string()],
        (_, None) => Vec::new(),
    };

    let placeholder = &page.viewer;
    let viewer = format!(
        "{} {}{}",
        placeholder.mesh.part,
        placeholder.mesh.primitive,
        if placeholder.hovered {
            format!(" at scale {} (hovered)", placeholder.mesh.transform.scale.0)
        } else {
            String::new()
        }
    );

    StatueData {
        title: statue.title.clone(),
        artist: statue.artist.clone(),
        badges: statue_badges(statue),
        price: statue.price.to_string(),
        original_price: statue.original_price.map(|p| p.to_string()),
        rating: detail.map(|d| Rating {
            stars: star_line(page.stars),
            score: format!("{:.1}", d.rating),
            reviews: d.reviews,
        }),
        facts,
        stock: detail.map(|d| {
            if d.in_stock {
                Stock {
                    text: "In stock",
                    style: "active",
                }
            } else {
                Stock {
                    text: "Out of stock",
                    style: "warning",
                }
            }
        }),
        tabs: [
            (DetailTab::Description, "Description"),
            (DetailTab::Specifications, "Specifications"),
            (DetailTab::Reviews, "Reviews"),
        ]
        .into_iter()
        .map(|(tab, name)| Tab {
            name,
            active: tab == page.tab,
        })
        .collect(),
        tab_body,
        quantity: page.quantity,
        cart_summary: format!(
            "{} items, total {}",
            page.cart_preview.units,
            page.cart_preview.totals.total.exact()
        ),
        perks: page.perks.clone(),
        viewer,
    }
}

// --- cart ---

#[derive(Serialize)]
struct CartLineData {
    id: String,
    name: String,
    artist: String,
    details: String,
    quantity: u32,
    price: String,
    total: String,
}

#[derive(Serialize)]
struct SummaryRow {
    label: String,
    value: String,
    is_total: bool,
}

#[derive(Serialize)]
struct CartData {
    lines: Vec<CartLineData>,
    summary: Vec<SummaryRow>,
}

fn cart_data(page: &CartPage) -> CartData {
    let lines: Vec<CartLineData> = page
        .lines
        .iter()
        .map(|line| CartLineData {
            id: format!("[{}]", line.item.id),
            name: line.item.name.clone(),
            artist: line.item.artist.clone(),
            details: format!("{} · {}", line.item.material, line.item.size),
            quantity: line.quantity,
            price: line.item.price.to_string(),
            total: line.line_total().to_string(),
        })
        .collect();

    let summary = if lines.is_empty() {
        Vec::new()
    } else {
        let t = &page.totals;
        let row = |label: String, value: Money, is_total: bool| SummaryRow {
            label: fit_to_width(&label, SUMMARY_WIDTH),
            value: fit_right(&value.exact(), PRICE_WIDTH + 3),
            is_total,
        };
        vec![
            row(format!("Subtotal ({} items)", page.units), t.subtotal, false),
            row("Shipping".to_string(), t.shipping, false),
            row("Tax (8%)".to_string(), t.tax, false),
            row("Total".to_string(), t.total, true),
        ]
    };

    CartData { lines, summary }
}

// --- profile ---

#[derive(Serialize)]
struct ProfileSection {
    title: String,
    rows: Vec<Row>,
    empty: &'static str,
}

#[derive(Serialize)]
struct ProfileData {
    initials: String,
    name: String,
    email: String,
    badges: Vec<&'static str>,
    tabs: Vec<Tab>,
    sections: Vec<ProfileSection>,
}

fn profile_data(page: &ProfilePage) -> ProfileData {
    let p = &page.profile;
    let sections = match page.tab {
        ProfileTab::Profile => vec![ProfileSection {
            title: "Personal Information".to_string(),
            rows: vec![
                Row::new("Name", p.name.clone(), LABEL_WIDTH),
                Row::new("Email", p.email.clone(), LABEL_WIDTH),
                Row::new("Phone", p.phone.clone(), LABEL_WIDTH),
                Row::new("Address", p.address.clone(), LABEL_WIDTH),
                Row::new("Bio", truncate_to_width(&p.bio, TEXT_WIDTH), LABEL_WIDTH),
            ],
            empty: "",
        }],
        ProfileTab::Orders => vec![ProfileSection {
            title: "Order History".to_string(),
            rows: page
                .orders
                .iter()
                .map(|o| {
                    let items: Vec<&str> = o.items.iter().map(|i| i.name.as_str()).collect();
                    Row::new(
                        &o.id,
                        format!(
                            "{}  {:<10}  {}  {}",
                            o.date.format("%Y-%m-%d"),
                            o.status.to_string(),
                            fit_right(&o.total.to_string(), PRICE_WIDTH),
                            items.join(", ")
                        ),
                        LABEL_WIDTH,
                    )
                })
                .collect(),
            empty: "No orders yet.",
        }],
        ProfileTab::Wishlist => vec![ProfileSection {
            title: "Wishlist".to_string(),
            rows: page
                .wishlist
                .iter()
                .map(|w| {
                    Row::new(
                        &w.name,
                        format!("{}  {}", fit_to_width(&w.artist, ARTIST_WIDTH), w.price),
                        TITLE_WIDTH,
                    )
                })
                .collect(),
            empty: "Your wishlist is empty.",
        }],
        ProfileTab::Settings => page
            .settings
            .iter()
            .map(|section| ProfileSection {
                title: section.title.to_string(),
                rows: section
                    .settings
                    .iter()
                    .map(|s| {
                        let value = match s.description {
                            Some(d) => format!("{} [{}]", d, s.action),
                            None => format!("[{}]", s.action),
                        };
                        Row::new(s.label, value, TITLE_WIDTH + 4)
                    })
                    .collect(),
                empty: "",
            })
            .collect(),
    };

    ProfileData {
        initials: format!(" {} ", page.initials),
        name: p.name.clone(),
        email: p.email.clone(),
        badges: page.badges.clone(),
        tabs: [
            (ProfileTab::Profile, "Profile"),
            (ProfileTab::Orders, "Orders"),
            (ProfileTab::Wishlist, "Wishlist"),
            (ProfileTab::Settings, "Settings"),
        ]
        .into_iter()
        .map(|(tab, name)| Tab {
            name,
            active: tab == page.tab,
        })
        .collect(),
        sections,
    }
}

// --- scenes ---

#[derive(Serialize)]
struct SlideData {
    position: String,
    name: String,
    price: String,
    description: String,
    color: String,
}

#[derive(Serialize)]
struct SceneData {
    slide: Option<SlideData>,
    camera: String,
    lights: Vec<String>,
    frames: u32,
    outline: String,
}

fn scene_data(
    stage: &Stage,
    model: &StatueModel,
    frames: u32,
    slide: Option<SlideData>,
) -> SceneData {
    SceneData {
        slide,
        camera: format!("at {}  fov {}", stage.camera.position, stage.camera.fov),
        lights: stage.lights.iter().map(describe_light).collect(),
        frames,
        outline: model.outline().trim_end().to_string(),
    }
}

fn describe_light(light: &Light) -> String {
    match light {
        Light::Ambient { intensity } => format!("ambient  intensity {}", intensity),
        Light::Directional {
            position,
            intensity,
        } => format!("directional at {}  intensity {}", position, intensity),
        Light::Point {
            position,
            intensity,
        } => format!("point at {}  intensity {}", position, intensity),
    }
}

fn showcase_data(scene: &ShowcaseScene) -> SceneData {
    let slide = SlideData {
        position: format!("Slide {} of {}", scene.index + 1, scene.count),
        name: scene.slide.name.clone(),
        price: scene.slide.price.to_string(),
        description: scene.slide.description.clone(),
        color: scene.slide.color.to_string(),
    };
    scene_data(&scene.stage, &scene.model, scene.frames, Some(slide))
}

fn viewer_data(page: &ViewerPage) -> SceneData {
    scene_data(&page.stage, &page.model, page.frames, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statuary::api::{CartArgs, GalleryArgs, StorefrontApi};
    use statuary::catalog::builtin::BuiltinCatalog;
    use std::path::PathBuf;

    fn api() -> StorefrontApi<BuiltinCatalog> {
        StorefrontApi::new(
            BuiltinCatalog,
            StoreConfig::default(),
            PathBuf::from("unused"),
        )
    }

    fn plain(page: Option<Page>) -> String {
        render_page(&page.expect("page"), false).unwrap()
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Venus de Milo", 20), "Venus de Milo");
        assert_eq!(truncate_to_width("Venus de Milo", 6), "Venus…");
        assert_eq!(fit_to_width("ab", 4), "ab  ");
        assert_eq!(fit_to_width("雕像雕像", 5), "雕像…");
    }

    #[test]
    fn star_line_has_five_slots() {
        assert_eq!(star_line(4), "★★★★☆");
        assert_eq!(star_line(9), "★★★★★");
    }

    #[test]
    fn gallery_text_counts_and_badges() {
        let args = GalleryArgs {
            term: Some("venus".into()),
            ..GalleryArgs::default()
        };
        let out = plain(api().gallery(args).unwrap().page);
        assert!(out.contains("Showing 1 of 8 statues"));
        assert!(out.contains("Venus de Milo"));
        assert!(out.contains("/statue/1"));
        assert!(out.contains("\"venus\""));
    }

    #[test]
    fn cart_text_shows_exact_totals() {
        let out = plain(api().cart(&CartArgs::default()).unwrap().page);
        assert!(out.contains("$5,928.84"));
        assert!(out.contains("Tax (8%)"));
    }

    #[test]
    fn empty_cart_has_no_summary() {
        let args = CartArgs {
            remove: vec!["1".into(), "2".into()],
            ..CartArgs::default()
        };
        let out = plain(api().cart(&args).unwrap().page);
        assert!(out.contains("Shopping Cart"));
        assert!(!out.contains("Total"));
    }

    #[test]
    fn reviews_tab_is_a_placeholder() {
        let out = plain(api().statue(1, Some("reviews"), None, false).unwrap().page);
        assert!(out.contains("Reviews coming soon"));
        assert!(out.contains("★★★★☆"));
    }

    #[test]
    fn showcase_text_names_the_slide() {
        let out = plain(api().showcase(1, 0).unwrap().page);
        assert!(out.contains("Slide 2 of 3"));
        assert!(out.contains("Regal Lion"));
        assert!(out.contains("mane"));
    }

    #[test]
    fn no_unknown_styles_in_any_page() {
        let api = api();
        let pages = vec![
            api.gallery(GalleryArgs::default()).unwrap().page,
            api.artists(None, None).unwrap().page,
            api.collections(None, None).unwrap().page,
            api.facets("gallery").unwrap().page,
            api.statue(1, None, None, true).unwrap().page,
            api.cart(&CartArgs::default()).unwrap().page,
            api.profile::<&str>(Some("settings"), &[]).unwrap().page,
            api.viewer("horse", None, 1.0, 3).unwrap().page,
            api.about().unwrap().page,
        ];
        for page in pages {
            assert!(!plain(page).contains("(!?)"));
        }
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&StoreConfig::default(), false).unwrap();
        assert!(out.contains("price_ceiling = 5000"));
        assert!(out.contains("catalog_path = (builtin)"));
    }
}
