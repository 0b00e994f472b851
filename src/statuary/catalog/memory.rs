use super::{CatalogData, CatalogSource};
use crate::error::Result;

/// Catalog held entirely in memory, for tests and embedding.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    data: CatalogData,
}

impl InMemoryCatalog {
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<CatalogData> {
        Ok(self.data.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::cart::{CartItem, CartLine};
    use crate::model::{Artist, Collection, FeaturedWork, Money, Profile, Statue};
    use chrono::NaiveDate;

    pub fn statue(id: u32, title: &str, material: &str, category: &str, price: u64) -> Statue {
        Statue {
            id,
            title: title.to_string(),
            artist: "Test Artist".to_string(),
            price: Money::from_dollars(price),
            original_price: None,
            image: None,
            material: material.to_string(),
            height: "100cm".to_string(),
            category: category.to_string(),
            is_new: false,
            is_featured: false,
        }
    }

    pub fn artist(id: &str, name: &str, specialties: &[&str]) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            bio: format!("{} is a sculptor.", name),
            location: "Florence, Italy".to_string(),
            established: "2010".to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            featured_work: FeaturedWork {
                name: "Untitled".to_string(),
                image: None,
                price: Money::from_dollars(1000),
            },
            avatar: None,
            verified: false,
            total_works: 1,
        }
    }

    pub fn collection(
        id: &str,
        name: &str,
        theme: &str,
        featured: bool,
        tags: &[&str],
    ) -> Collection {
        Collection {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("The {} collection.", name),
            curator: "Curator".to_string(),
            theme: theme.to_string(),
            item_count: 10,
            created: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            featured,
            cover_image: None,
            preview_images: Vec::new(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn cart_item(id: &str, name: &str, price: u64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: name.to_string(),
            artist: "Test Artist".to_string(),
            price: Money::from_dollars(price),
            image: None,
            material: "Marble".to_string(),
            size: "24 inches".to_string(),
        }
    }

    pub struct CatalogFixture {
        pub data: CatalogData,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                data: CatalogData {
                    statues: Vec::new(),
                    details: Vec::new(),
                    artists: Vec::new(),
                    collections: Vec::new(),
                    profile: Profile::default(),
                    orders: Vec::new(),
                    wishlist: Vec::new(),
                    cart: Vec::new(),
                },
            }
        }

        pub fn with_statue(mut self, statue: Statue) -> Self {
            self.data.statues.push(statue);
            self
        }

        pub fn with_artist(mut self, artist: Artist) -> Self {
            self.data.artists.push(artist);
            self
        }

        pub fn with_collection(mut self, collection: Collection) -> Self {
            self.data.collections.push(collection);
            self
        }

        pub fn with_cart_line(mut self, item: CartItem, quantity: u32) -> Self {
            self.data.cart.push(CartLine { item, quantity });
            self
        }

        pub fn source(self) -> InMemoryCatalog {
            InMemoryCatalog::new(self.data)
        }
    }
}
