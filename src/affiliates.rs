//! Affiliate vendor mapping.
//!
//! The mapping arrives as JSON text (`{"vendor": "https://base/url", ...}`).
//! It is strictly best-effort: any payload that is not an object of string
//! values degrades to an empty mapping and never surfaces as an error.
//!
//! Vendor order is the order in which keys appear in the JSON text, so the
//! "first" vendor is always the leftmost key.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Ordered vendor name → base URL mapping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AffiliateMap(Map<String, Value>);

impl AffiliateMap {
    /// Parse a JSON payload, falling back to an empty map on any failure.
    pub fn parse(json: &str) -> Self {
        match serde_json::from_str::<AffiliateMap>(json) {
            Ok(map) if map.0.values().all(Value::is_string) => map,
            Ok(_) => {
                tracing::debug!("discarding affiliate payload: values must be strings");
                Self::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "discarding unparseable affiliate payload");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first vendor and its base URL, in JSON key order.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0
            .iter()
            .next()
            .and_then(|(vendor, url)| url.as_str().map(|url| (vendor.as_str(), url)))
    }
}

/// Load the affiliate mapping from optional JSON text.
///
/// Absent or empty input yields an empty mapping, as does anything that
/// fails to parse. This function cannot fail.
pub fn load_affiliates(json: Option<&str>) -> AffiliateMap {
    match json {
        Some(text) if !text.is_empty() => AffiliateMap::parse(text),
        _ => AffiliateMap::default(),
    }
}
