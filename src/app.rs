//! The generator pipeline: resolve niche, load affiliates, synthesize
//! products, render/write the post.

use crate::affiliates::load_affiliates;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::niche::resolve_niche;
use crate::post::{post_filename, render_post, write_post};
use crate::products::synthesize_products;
use std::path::PathBuf;

/// Result of a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// The post was written to this path.
    Written(PathBuf),
    /// Dry run: the post that would have been written, and where.
    DryRun { path: PathBuf, content: String },
}

/// Run the pipeline once.
///
/// `cwd` is only consulted when no niche override is configured.
pub fn generate<F>(config: &GeneratorConfig, cwd: F) -> Result<Generated>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    let (niche, source) = resolve_niche(config.niche_override.as_deref(), cwd)?;
    tracing::debug!(niche = %niche, ?source, "resolved niche");

    let affiliates = load_affiliates(config.affiliate_json.as_deref());
    if affiliates.is_empty() {
        tracing::debug!("no affiliates configured, products will not be linked");
    } else {
        tracing::debug!(vendors = affiliates.len(), "loaded affiliates");
    }

    let products = synthesize_products(&niche, &affiliates);

    if config.dry_run {
        let path = config.output_dir.join(post_filename(&niche, config.date));
        let content = render_post(&niche, &products, config.date);
        return Ok(Generated::DryRun { path, content });
    }

    let path = write_post(&config.output_dir, &niche, &products, config.date)?;
    tracing::info!(path = %path.display(), products = products.len(), "wrote post");
    Ok(Generated::Written(path))
}
