use crate::models::{Category, Coordinate, Listing, Price};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the remote catalog API
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Business record as served by `GET /umkm/all`
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "nama_umkm")]
    name: String,
    #[serde(rename = "alamat", default)]
    address: Option<String>,
    #[serde(rename = "kategori", default)]
    category: Option<String>,
    #[serde(rename = "kategori_id", default)]
    category_id: Option<String>,
    #[serde(default)]
    latitude: Value,
    #[serde(default)]
    longitude: Value,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(rename = "harga", alias = "price", default)]
    price: Value,
}

/// Category record as served by `GET /category/all`
#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "nama_kategori", default)]
    name: String,
}

/// A coordinate component sent as a number or a numeric string
fn coordinate_part(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    v.is_finite().then_some(v)
}

impl From<RawListing> for Listing {
    fn from(raw: RawListing) -> Self {
        let coordinate = coordinate_part(&raw.latitude)
            .zip(coordinate_part(&raw.longitude))
            .map(|(latitude, longitude)| Coordinate { latitude, longitude });

        Listing {
            id: raw.id,
            name: raw.name,
            address: raw.address.unwrap_or_default(),
            category: raw.category.filter(|c| !c.is_empty()),
            category_id: raw.category_id.filter(|c| !c.is_empty()),
            coordinate,
            thumbnail_url: raw.thumbnail.filter(|t| !t.is_empty()),
            price: Price::from_value(&raw.price),
        }
    }
}

/// Catalog API client
///
/// Fetches listings and categories fresh on every call; nothing is cached.
/// Records that are missing required fields are skipped, records with bad
/// coordinates are kept with `coordinate: None`.
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Pull the `data` array out of a catalog response envelope
    async fn fetch_data(&self, request: reqwest::RequestBuilder, what: &str) -> Result<Vec<Value>, CatalogError> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch {}: {} - {}", what, status, body);
            return Err(CatalogError::ApiError(format!("Failed to fetch {}: {}", what, status)));
        }

        let json: Value = response.json().await?;

        match json.get("data") {
            Some(Value::Array(items)) => Ok(items.clone()),
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(_) => Err(CatalogError::InvalidResponse(format!("{} data is not an array", what))),
        }
    }

    /// Fetch all listings
    ///
    /// The user's location, when known, is forwarded so the API can pre-sort;
    /// the engine does its own filtering either way.
    pub async fn fetch_listings(&self, origin: Option<Coordinate>) -> Result<Vec<Listing>, CatalogError> {
        let mut request = self
            .client
            .get(self.url("umkm/all"))
            .header("Content-Type", "application/json");

        if let Some(origin) = origin.filter(Coordinate::is_finite) {
            request = request.query(&[("latitude", origin.latitude), ("longitude", origin.longitude)]);
        }

        let items = self.fetch_data(request, "listings").await?;
        let total = items.len();

        let listings: Vec<Listing> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RawListing>(item).ok())
            .map(Listing::from)
            .collect();

        if listings.len() < total {
            tracing::warn!("Skipped {} malformed listing records", total - listings.len());
        }
        tracing::debug!("Fetched {} listings", listings.len());

        Ok(listings)
    }

    /// Fetch all categories
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let request = self.client.get(self.url("category/all"));
        let items = self.fetch_data(request, "categories").await?;

        let categories: Vec<Category> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RawCategory>(item).ok())
            .map(|raw| Category { id: raw.id, name: raw.name })
            .collect();

        tracing::debug!("Fetched {} categories", categories.len());

        Ok(categories)
    }
}
