use super::{CatalogData, CatalogSource};
use crate::cart::{CartItem, CartLine};
use crate::error::{Result, StoreError};
use crate::model::{
    Artist, Collection, FeaturedWork, Money, Order, OrderItem, OrderStatus, Profile, Statue,
    StatueDetail, WishlistItem,
};
use chrono::NaiveDate;

/// The storefront's demo catalog, compiled into the binary.
///
/// Used whenever no catalog file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<CatalogData> {
        Ok(CatalogData {
            statues: statues(),
            details: vec![venus_detail()],
            artists: artists(),
            collections: collections()?,
            profile: profile(),
            orders: orders()?,
            wishlist: wishlist(),
            cart: cart(),
        })
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| StoreError::Config(format!("invalid date {}-{}-{}", y, m, d)))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn statue(
    id: u32,
    title: &str,
    artist: &str,
    price: u64,
    original_price: Option<u64>,
    image: &str,
    material: &str,
    height: &str,
    category: &str,
    is_new: bool,
) -> Statue {
    Statue {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        price: Money::from_dollars(price),
        original_price: original_price.map(Money::from_dollars),
        image: Some(image.to_string()),
        material: material.to_string(),
        height: height.to_string(),
        category: category.to_string(),
        is_new,
        // The homepage features the first six pieces.
        is_featured: id <= 6,
    }
}

fn statues() -> Vec<Statue> {
    vec![
        statue(
            1,
            "Venus de Milo Replica",
            "Classical Collection",
            2499,
            Some(2999),
            "/elegant-white-marble-venus-de-milo-statue.png",
            "Marble",
            "180cm",
            "Classical",
            true,
        ),
        statue(
            2,
            "Modern Abstract Form",
            "Elena Rodriguez",
            1899,
            None,
            "/modern-abstract-bronze-sculpture-flowing-curves.png",
            "Bronze",
            "120cm",
            "Modern",
            false,
        ),
        statue(
            3,
            "Guardian Lion",
            "Zhang Wei",
            3299,
            None,
            "/majestic-stone-lion-statue-traditional-chinese-sty.png",
            "Stone",
            "150cm",
            "Traditional",
            true,
        ),
        statue(
            4,
            "Dancing Ballerina",
            "Marie Dubois",
            1599,
            Some(1899),
            "/graceful-bronze-ballerina-statue-in-dancing-pose.png",
            "Bronze",
            "90cm",
            "Contemporary",
            false,
        ),
        statue(
            5,
            "Ancient Warrior",
            "Historical Replicas",
            2799,
            None,
            "/detailed-bronze-ancient-roman-warrior-statue-with-.png",
            "Bronze",
            "200cm",
            "Historical",
            false,
        ),
        statue(
            6,
            "Peaceful Buddha",
            "Meditation Arts",
            1299,
            None,
            "/serene-stone-buddha-statue-in-meditation-pose.png",
            "Stone",
            "100cm",
            "Spiritual",
            true,
        ),
        statue(
            7,
            "Art Deco Lady",
            "Vintage Reproductions",
            2199,
            None,
            "/elegant-art-deco-bronze-lady-statue-1920s-style.png",
            "Bronze",
            "140cm",
            "Art Deco",
            false,
        ),
        statue(
            8,
            "Wild Horse",
            "Nature Sculptures",
            3599,
            None,
            "/dynamic-bronze-wild-horse-statue-in-galloping-pose.png",
            "Bronze",
            "160cm",
            "Nature",
            true,
        ),
    ]
}

fn venus_detail() -> StatueDetail {
    let spec = |k: &str, v: &str| (k.to_string(), v.to_string());
    StatueDetail {
        statue_id: 1,
        images: strings(&[
            "/elegant-white-marble-venus-de-milo-statue-front-vi.png",
            "/elegant-white-marble-venus-de-milo-statue-side-vie.png",
            "/elegant-white-marble-venus-de-milo-statue-back-vie.png",
        ]),
        width: "65cm".to_string(),
        depth: "45cm".to_string(),
        weight: "850kg".to_string(),
        in_stock: true,
        rating: 4.8,
        reviews: 24,
        description: "This exquisite replica of the famous Venus de Milo captures the timeless \
beauty and grace of the original masterpiece. Crafted from premium Carrara marble by skilled \
artisans, this statue embodies the classical ideals of beauty and proportion that have inspired \
artists for centuries."
            .to_string(),
        features: strings(&[
            "Hand-carved from premium Carrara marble",
            "Museum-quality reproduction",
            "Weather-resistant finish",
            "Certificate of authenticity included",
            "Professional installation available",
        ]),
        specifications: vec![
            spec("Material", "Carrara Marble"),
            spec("Dimensions", "180cm H × 65cm W × 45cm D"),
            spec("Weight", "850kg"),
            spec("Origin", "Italy"),
            spec("Finish", "Polished marble with protective coating"),
            spec("Installation", "Professional installation recommended"),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn artist(
    id: &str,
    name: &str,
    bio: &str,
    location: &str,
    established: &str,
    specialties: &[&str],
    work: (&str, &str, u64),
    verified: bool,
    total_works: u32,
) -> Artist {
    let slug = name.to_lowercase().replace(' ', "-");
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        location: location.to_string(),
        established: established.to_string(),
        specialties: strings(specialties),
        featured_work: FeaturedWork {
            name: work.0.to_string(),
            image: Some(work.1.to_string()),
            price: Money::from_dollars(work.2),
        },
        avatar: Some(format!("/{}-artist-portrait.png", slug)),
        verified,
        total_works,
    }
}

fn artists() -> Vec<Artist> {
    vec![
        artist(
            "1",
            "Elena Marquez",
            "Contemporary sculptor specializing in marble and bronze works inspired by classical Greek and Roman art.",
            "Florence, Italy",
            "2010",
            &["Marble", "Bronze", "Classical"],
            ("Modern Venus", "/modern-venus-marble-sculpture.png", 4299),
            true,
            47,
        ),
        artist(
            "2",
            "Marcus Chen",
            "Master craftsman creating contemporary interpretations of ancient sculptures with modern techniques.",
            "New York, USA",
            "2008",
            &["Contemporary", "Mixed Media", "Abstract"],
            ("Urban Thinker", "/urban-thinker-contemporary-sculpture.png", 3899),
            true,
            32,
        ),
        artist(
            "3",
            "Isabella Romano",
            "Traditional sculptor preserving ancient techniques while creating timeless pieces for modern collectors.",
            "Rome, Italy",
            "2005",
            &["Traditional", "Stone", "Religious"],
            ("Sacred Guardian", "/sacred-guardian-stone-sculpture.png", 5299),
            true,
            63,
        ),
        artist(
            "4",
            "David Thompson",
            "Emerging artist combining 3D printing technology with traditional sculpting methods.",
            "London, UK",
            "2018",
            &["3D Printed", "Modern", "Experimental"],
            ("Digital Dreams", "/digital-dreams-3d-printed-sculpture.png", 2199),
            false,
            18,
        ),
    ]
}

struct CollectionSeed<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    curator: &'a str,
    theme: &'a str,
    item_count: u32,
    created: (i32, u32, u32),
    featured: bool,
    previews: [&'a str; 3],
    tags: [&'a str; 4],
}

impl CollectionSeed<'_> {
    fn build(&self) -> Result<Collection> {
        let (y, m, d) = self.created;
        let slug = self.name.to_lowercase().replace(' ', "-");
        Ok(Collection {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            curator: self.curator.to_string(),
            theme: self.theme.to_string(),
            item_count: self.item_count,
            created: date(y, m, d)?,
            featured: self.featured,
            cover_image: Some(format!("/{}-collection.png", slug)),
            preview_images: strings(&self.previews),
            tags: strings(&self.tags),
        })
    }
}

fn collections() -> Result<Vec<Collection>> {
    let seeds = [
        CollectionSeed {
            id: "1",
            name: "Classical Masterpieces",
            description: "A curated selection of the most iconic classical sculptures, featuring timeless pieces that have inspired artists for centuries.",
            curator: "Dr. Sarah Williams",
            theme: "Classical",
            item_count: 24,
            created: (2024, 1, 15),
            featured: true,
            previews: [
                "/venus-de-milo-preview.png",
                "/david-preview.png",
                "/apollo-belvedere-preview.png",
            ],
            tags: ["Greek", "Roman", "Marble", "Historical"],
        },
        CollectionSeed {
            id: "2",
            name: "Modern Interpretations",
            description: "Contemporary artists reimagining classical forms with modern techniques and materials.",
            curator: "Marcus Chen",
            theme: "Contemporary",
            item_count: 18,
            created: (2024, 1, 10),
            featured: true,
            previews: [
                "/modern-venus-preview.png",
                "/abstract-thinker-preview.png",
                "/contemporary-david-preview.png",
            ],
            tags: ["Contemporary", "Abstract", "Mixed Media", "Innovation"],
        },
        CollectionSeed {
            id: "3",
            name: "Renaissance Revival",
            description: "Sculptures inspired by the Renaissance period, showcasing the perfect blend of classical beauty and humanistic ideals.",
            curator: "Isabella Romano",
            theme: "Renaissance",
            item_count: 31,
            created: (2024, 1, 5),
            featured: false,
            previews: [
                "/renaissance-angel-preview.png",
                "/medici-venus-preview.png",
                "/pieta-replica-preview.png",
            ],
            tags: ["Renaissance", "Religious", "Marble", "Italian"],
        },
        CollectionSeed {
            id: "4",
            name: "Mythological Beings",
            description: "Statues depicting gods, goddesses, and mythological creatures from various cultures around the world.",
            curator: "Elena Marquez",
            theme: "Mythology",
            item_count: 27,
            created: (2023, 12, 20),
            featured: false,
            previews: [
                "/athena-statue-preview.png",
                "/poseidon-sculpture-preview.png",
                "/apollo-statue-preview.png",
            ],
            tags: ["Mythology", "Gods", "Bronze", "Ancient"],
        },
        CollectionSeed {
            id: "5",
            name: "Minimalist Forms",
            description: "Clean, simple sculptures that focus on form, space, and the essence of sculptural art.",
            curator: "David Thompson",
            theme: "Minimalist",
            item_count: 15,
            created: (2023, 12, 15),
            featured: false,
            previews: [
                "/geometric-form-preview.png",
                "/abstract-curve-preview.png",
                "/minimal-figure-preview.png",
            ],
            tags: ["Minimalist", "Abstract", "Modern", "Geometric"],
        },
    ];

    seeds.iter().map(CollectionSeed::build).collect()
}

fn profile() -> Profile {
    Profile {
        name: "Alexandra Chen".to_string(),
        email: "alexandra.chen@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        address: "123 Art District, New York, NY 10001".to_string(),
        bio: "Art enthusiast and collector with a passion for classical sculptures and contemporary pieces."
            .to_string(),
        avatar: None,
    }
}

fn orders() -> Result<Vec<Order>> {
    let item = |name: &str| OrderItem {
        name: name.to_string(),
        image: Some("/serene-stone-buddha-statue-in-meditation-pose.png".to_string()),
    };
    Ok(vec![
        Order {
            id: "ORD-001".to_string(),
            date: date(2024, 1, 15)?,
            status: OrderStatus::Delivered,
            total: Money::from_dollars(2499),
            items: vec![item("Venus de Milo")],
        },
        Order {
            id: "ORD-002".to_string(),
            date: date(2024, 1, 10)?,
            status: OrderStatus::Shipped,
            total: Money::from_dollars(3299),
            items: vec![item("David Replica")],
        },
    ])
}

fn wishlist() -> Vec<WishlistItem> {
    vec![
        WishlistItem {
            id: "1".to_string(),
            name: "The Thinker".to_string(),
            artist: "Auguste Rodin".to_string(),
            price: Money::from_dollars(2899),
            image: Some("/the-thinker-bronze-statue.png".to_string()),
        },
        WishlistItem {
            id: "2".to_string(),
            name: "Winged Victory".to_string(),
            artist: "Classical Greek".to_string(),
            price: Money::from_dollars(3499),
            image: Some("/winged-victory-of-samothrace-statue.png".to_string()),
        },
    ]
}

fn cart() -> Vec<CartLine> {
    let line = |id: &str, name: &str, artist: &str, price: u64, image: &str, material: &str, size: &str| {
        CartLine {
            item: CartItem {
                id: id.to_string(),
                name: name.to_string(),
                artist: artist.to_string(),
                price: Money::from_dollars(price),
                image: Some(image.to_string()),
                material: material.to_string(),
                size: size.to_string(),
            },
            quantity: 1,
        }
    };
    vec![
        line(
            "1",
            "Venus de Milo",
            "Classical Greek",
            2499,
            "/venus-de-milo-marble-statue.png",
            "Marble",
            "24 inches",
        ),
        line(
            "2",
            "The Thinker",
            "Auguste Rodin",
            2899,
            "/the-thinker-bronze-statue.png",
            "Bronze",
            "18 inches",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn builtin_catalog_validates() {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        assert_eq!(catalog.statues().len(), 8);
        assert_eq!(catalog.artists().len(), 4);
        assert_eq!(catalog.collections().len(), 5);
        assert_eq!(catalog.cart_seed().len(), 2);
    }

    #[test]
    fn builtin_facets_come_from_the_data() {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        assert_eq!(catalog.facets().materials, vec!["Marble", "Bronze", "Stone"]);
        assert_eq!(catalog.facets().categories.len(), 8);
        assert_eq!(catalog.facets().specialties.len(), 12);
        assert_eq!(catalog.facets().themes.len(), 5);
    }

    #[test]
    fn venus_has_a_detail_sheet() {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        let detail = catalog.detail(1).unwrap();
        assert_eq!(detail.full_stars(), 4);
        assert_eq!(detail.specifications.len(), 6);
        assert!(catalog.detail(2).is_none());
    }

    #[test]
    fn avatars_follow_artist_names() {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        assert_eq!(
            catalog.artists()[0].avatar.as_deref(),
            Some("/elena-marquez-artist-portrait.png")
        );
    }
}
