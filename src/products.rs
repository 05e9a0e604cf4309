//! Placeholder product synthesis.
//!
//! Every run fabricates exactly [`PRODUCT_COUNT`] recommendations named after
//! the last word of the niche. Pros and cons alternate by index parity and
//! every product links to the first affiliate's base URL (or nothing).

use crate::affiliates::AffiliateMap;
use crate::text::title_case;

/// Number of products in every post.
pub const PRODUCT_COUNT: usize = 3;

/// Name stem used when the niche has no words.
const FALLBACK_KEY: &str = "product";

const EVEN_PROS: &[&str] = &["Affordable", "Popular choice"];
const EVEN_CONS: &[&str] = &["Limited colors"];
const ODD_PROS: &[&str] = &["Premium quality", "Great reviews"];
const ODD_CONS: &[&str] = &["Higher price"];

/// A single fabricated recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Affiliate base URL; empty when no affiliates are configured.
    pub link: String,
}

/// Fabricate the product list for a niche.
pub fn synthesize_products(niche: &str, affiliates: &AffiliateMap) -> Vec<Product> {
    let base_key = niche.split_whitespace().last().unwrap_or(FALLBACK_KEY);
    let stem = title_case(base_key);
    let link = affiliates
        .first()
        .map(|(_, url)| url.to_string())
        .unwrap_or_default();

    (0..PRODUCT_COUNT)
        .map(|i| {
            let name = format!("{} Option {}", stem, i + 1);
            let description = format!("{} is a recommended choice for {} enthusiasts.", name, niche);
            let (pros, cons) = if i % 2 == 0 {
                (EVEN_PROS, EVEN_CONS)
            } else {
                (ODD_PROS, ODD_CONS)
            };
            Product {
                name,
                description,
                pros: to_owned_list(pros),
                cons: to_owned_list(cons),
                link: link.clone(),
            }
        })
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
