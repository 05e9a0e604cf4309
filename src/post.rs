//! Post rendering and writing.
//!
//! A post is a Jekyll-style Markdown file:
//!
//! ```text
//! ---
//! layout: post
//! title: Top 3 Coffee Makers Products for 2024
//! date: 2024-01-15
//! ---
//!
//! Looking for the best coffee makers products? Here are some recommendations:
//!
//! ## Makers Option 1
//! ...
//! ```

use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::products::Product;
use crate::text::{slugify, title_case};
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "_posts";

/// Filename for a post: `{date}-{slug(niche-date)}.md`.
pub fn post_filename(niche: &str, date: NaiveDate) -> String {
    let iso = date.format("%Y-%m-%d").to_string();
    let slug = slugify(&format!("{}-{}", niche, iso));
    format!("{}-{}.md", iso, slug)
}

/// Render the full post content.
pub fn render_post(niche: &str, products: &[Product], date: NaiveDate) -> String {
    let iso = date.format("%Y-%m-%d");
    let mut out = String::new();

    out.push_str("---\n");
    out.push_str("layout: post\n");
    out.push_str(&format!(
        "title: Top {} {} Products for {}\n",
        products.len(),
        title_case(niche),
        date.year()
    ));
    out.push_str(&format!("date: {}\n", iso));
    out.push_str("---\n\n");
    out.push_str(&format!(
        "Looking for the best {} products? Here are some recommendations:\n\n",
        niche
    ));

    for product in products {
        out.push_str(&format!("## {}\n", product.name));
        out.push_str(&format!("{}\n\n", product.description));
        out.push_str(&format!("*Pros:* {}\n\n", product.pros.join(", ")));
        out.push_str(&format!("*Cons:* {}\n\n", product.cons.join(", ")));
        if !product.link.is_empty() {
            out.push_str(&format!("[View product here]({})\n\n", product.link));
        }
    }

    out
}

/// Write the post into `output_dir`, creating it if needed.
///
/// An existing post with the same filename is replaced without warning.
/// Returns the path that was written.
pub fn write_post(
    output_dir: &Path,
    niche: &str,
    products: &[Product],
    date: NaiveDate,
) -> Result<PathBuf> {
    let path = output_dir.join(post_filename(niche, date));
    atomic_write_file(&path, &render_post(niche, products, date))?;
    Ok(path)
}
