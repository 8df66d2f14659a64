use serde::{Deserialize, Serialize};

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components are finite. Range is not checked.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Listing price as exposed by the catalog
///
/// Older catalog versions carry a single fixed price per item, newer ones a
/// `[min, max]` range derived from formatted text like `"Rp20.000 - Rp50.000"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Price {
    Fixed { amount: f64 },
    Range { min: f64, max: f64 },
}

/// A discoverable business (UMKM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(rename = "thumbnailUrl", default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}

impl Listing {
    /// Coordinate usable for distance work, if any
    #[inline]
    pub fn usable_coordinate(&self) -> Option<Coordinate> {
        self.coordinate.filter(Coordinate::is_finite)
    }
}

/// Category as supplied by the category provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Category filter. `"all"` on the wire, any other string is a name or id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelector {
    #[default]
    All,
    Key(String),
}

impl From<String> for CategorySelector {
    fn from(value: String) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Key(value)
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CategorySelector> for String {
    fn from(value: CategorySelector) -> Self {
        match value {
            CategorySelector::All => "all".to_string(),
            CategorySelector::Key(key) => key,
        }
    }
}

/// Per-query search input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: CategorySelector,
    #[serde(rename = "radiusKm", default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(default)]
    pub origin: Option<Coordinate>,
}

pub(crate) fn default_radius_km() -> f64 { 5.0 }

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: CategorySelector::All,
            radius_km: default_radius_km(),
            origin: None,
        }
    }
}

/// Sort order for the filtered list
///
/// Parsing never fails: unknown keys, including the empty string, fall back to
/// `None` so newer clients can send keys this service does not know yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    Distance,
    NameAsc,
    #[default]
    None,
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "distance" => Self::Distance,
            "name-asc" => Self::NameAsc,
            _ => Self::None,
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SortKey> for &'static str {
    fn from(value: SortKey) -> Self {
        match value {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Distance => "distance",
            SortKey::NameAsc => "name-asc",
            SortKey::None => "none",
        }
    }
}

/// A listing together with its distance from the search origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub listing: Listing,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
}

/// One page of a result sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
    pub total: usize,
}

/// Live search suggestion shown while typing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Suggestion {
    Listing {
        id: String,
        label: String,
        coordinate: Option<Coordinate>,
        address: String,
        category: Option<String>,
    },
    Category {
        name: String,
    },
}
