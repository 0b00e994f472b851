use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown when an item has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Resolves an optional image reference, falling back to the placeholder asset.
pub fn image_or_placeholder(image: Option<&str>) -> &str {
    match image {
        Some(path) if !path.trim().is_empty() => path,
        _ => PLACEHOLDER_IMAGE,
    }
}

/// An amount of money in US cents.
///
/// Catalog files express prices in dollars (`2499`, `199.92`); arithmetic is
/// done on whole cents so totals never drift. Arithmetic saturates at
/// `u64::MAX` cents instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiplies by a whole quantity.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Applies a rate given in basis points, rounding half-up to the cent.
    pub fn percent_bp(self, basis_points: u64) -> Self {
        let scaled = (u128::from(self.0) * u128::from(basis_points) + 5_000) / 10_000;
        Self(u64::try_from(scaled).unwrap_or(u64::MAX))
    }

    /// Formats with thousands separators and exactly two decimals: `$5,929.92`.
    pub fn exact(self) -> String {
        format!("${}.{:02}", group_thousands(self.0 / 100), self.0 % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "${}", group_thousands(self.0 / 100))
        } else {
            f.write_str(&self.exact())
        }
    }
}

impl TryFrom<f64> for Money {
    type Error = String;

    fn try_from(dollars: f64) -> std::result::Result<Self, Self::Error> {
        if !dollars.is_finite() || dollars < 0.0 {
            return Err(format!("invalid price: {}", dollars));
        }
        Ok(Money((dollars * 100.0).round() as u64))
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.as_dollars()
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statue {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub price: Money,
    #[serde(default)]
    pub original_price: Option<Money>,
    #[serde(default)]
    pub image: Option<String>,
    pub material: String,
    pub height: String,
    pub category: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl Statue {
    pub fn on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    pub fn image(&self) -> &str {
        image_or_placeholder(self.image.as_deref())
    }

    /// Route of the detail view for this statue.
    pub fn detail_ref(&self) -> String {
        format!("/statue/{}", self.id)
    }
}

/// The extended product sheet shown on a statue's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatueDetail {
    pub statue_id: u32,
    #[serde(default)]
    pub images: Vec<String>,
    pub width: String,
    pub depth: String,
    pub weight: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub rating: f32,
    pub reviews: u32,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    // Ordered list rather than a map: rows keep their authoring order.
    #[serde(default)]
    pub specifications: Vec<(String, String)>,
}

fn default_in_stock() -> bool {
    true
}

impl StatueDetail {
    /// Number of filled stars out of five.
    pub fn full_stars(&self) -> usize {
        (self.rating.max(0.0).floor() as usize).min(5)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedWork {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub location: String,
    pub established: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub featured_work: FeaturedWork,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub verified: bool,
    pub total_works: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub curator: String,
    pub theme: String,
    pub item_count: u32,
    pub created: NaiveDate,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub preview_images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Profile {
    /// Initials used when there is no avatar image ("Alexandra Chen" -> "AC").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Money,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
}
