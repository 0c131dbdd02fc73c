use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Catalog-assigned sneaker identifier
pub type SneakerId = u32;

/// Image shown when a sneaker has no picture of its own
pub const PLACEHOLDER_IMAGE_URL: &str = "/images/sneaker-placeholder.jpg";

/// Sneaker brand
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Brand {
    Nike,
    Adidas,
    Jordan,
    Puma,
    NewBalance,
    Converse,
    Vans,
    Reebok,
    Asics,
    Other,
}

impl Brand {
    pub const ALL: [Brand; 10] = [
        Brand::Nike,
        Brand::Adidas,
        Brand::Jordan,
        Brand::Puma,
        Brand::NewBalance,
        Brand::Converse,
        Brand::Vans,
        Brand::Reebok,
        Brand::Asics,
        Brand::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Nike => "Nike",
            Brand::Adidas => "Adidas",
            Brand::Jordan => "Jordan",
            Brand::Puma => "Puma",
            Brand::NewBalance => "New Balance",
            Brand::Converse => "Converse",
            Brand::Vans => "Vans",
            Brand::Reebok => "Reebok",
            Brand::Asics => "ASICS",
            Brand::Other => "Other",
        }
    }
}

/// Condition grade, declared best first so that `Ord` follows quality
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Condition {
    DeadStock,
    VeryNearDeadStock,
    NearMint,
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 8] = [
        Condition::DeadStock,
        Condition::VeryNearDeadStock,
        Condition::NearMint,
        Condition::Excellent,
        Condition::VeryGood,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::DeadStock => "Dead Stock (DS)",
            Condition::VeryNearDeadStock => "Very Near Dead Stock (VNDS)",
            Condition::NearMint => "Near Mint",
            Condition::Excellent => "Excellent",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

/// Sneaker category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Basketball,
    Running,
    Lifestyle,
    Skateboarding,
    Tennis,
    Football,
    Retro,
    Limited,
    Collaboration,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Basketball,
        Category::Running,
        Category::Lifestyle,
        Category::Skateboarding,
        Category::Tennis,
        Category::Football,
        Category::Retro,
        Category::Limited,
        Category::Collaboration,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Basketball => "Basketball",
            Category::Running => "Running",
            Category::Lifestyle => "Lifestyle",
            Category::Skateboarding => "Skateboarding",
            Category::Tennis => "Tennis",
            Category::Football => "Football",
            Category::Retro => "Retro",
            Category::Limited => "Limited Edition",
            Category::Collaboration => "Collaboration",
        }
    }
}

/// Sneaker entity as held by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sneaker {
    /// Identifier assigned by the catalog
    pub id: SneakerId,
    pub brand: Brand,
    pub model: String,
    pub colorway: String,
    /// US size
    pub size: f64,
    /// Price in the catalog currency
    pub price: f64,
    pub condition: Condition,
    pub category: Category,
    pub release_date: NaiveDate,
    /// Set once when the sneaker enters the catalog
    pub added_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub is_limited: bool,
    pub stock_quantity: Option<u32>,
}

impl Sneaker {
    /// `{brand} {model} "{colorway}"`
    pub fn full_name(&self) -> String {
        format!(
            "{} {} \"{}\"",
            self.brand.display_name(),
            self.model,
            self.colorway
        )
    }

    pub fn display_image_url(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}

/// DTO for adding or replacing a sneaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SneakerInput {
    pub brand: Brand,
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub model: String,
    #[validate(length(min = 1, max = 50), custom(function = "not_blank"))]
    pub colorway: String,
    /// US size
    #[validate(range(min = 3.0, max = 18.0))]
    pub size: f64,
    #[validate(range(min = 0.01, max = 9999.99))]
    pub price: f64,
    pub condition: Condition,
    pub category: Category,
    pub release_date: NaiveDate,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub is_limited: bool,
    #[validate(range(max = 1000))]
    pub stock_quantity: Option<u32>,
}

impl SneakerInput {
    pub fn into_sneaker(self, id: SneakerId, added_date: DateTime<Utc>) -> Sneaker {
        Sneaker {
            id,
            brand: self.brand,
            model: self.model,
            colorway: self.colorway,
            size: self.size,
            price: self.price,
            condition: self.condition,
            category: self.category,
            release_date: self.release_date,
            added_date,
            image_url: self.image_url,
            description: self.description,
            is_limited: self.is_limited,
            stock_quantity: self.stock_quantity,
        }
    }
}

impl From<Sneaker> for SneakerInput {
    fn from(sneaker: Sneaker) -> Self {
        Self {
            brand: sneaker.brand,
            model: sneaker.model,
            colorway: sneaker.colorway,
            size: sneaker.size,
            price: sneaker.price,
            condition: sneaker.condition,
            category: sneaker.category,
            release_date: sneaker.release_date,
            image_url: sneaker.image_url,
            description: sneaker.description,
            is_limited: sneaker.is_limited,
            stock_quantity: sneaker.stock_quantity,
        }
    }
}

/// Query filters for searching the catalog
///
/// Blank values (as submitted by an untouched search form) count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SneakerFilter {
    /// Case-insensitive text matched against model, colorway, brand and description
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub brand: Option<Brand>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub condition: Option<Condition>,
}

impl SneakerFilter {
    /// The search term, if it contains anything besides whitespace
    pub fn term(&self) -> Option<&str> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.term().is_none()
            && self.brand.is_none()
            && self.category.is_none()
            && self.condition.is_none()
    }
}

pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
