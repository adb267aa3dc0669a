use anyhow::{Context, Result};
use log::{info, warn};
use reqwest::Client;
use std::path::Path;

use crate::github::{GitHub, GitHubRepo};
use crate::page;
use crate::platform::Platform;
use crate::resolver;

/// Rewrite the download button link in `page_path` to the resolved asset URL.
///
/// An unknown platform, a fetch failure or an unmatched asset list all leave
/// the page untouched and are reported as warnings only; the link keeps
/// whatever value the markup already had.
#[tracing::instrument(skip(api_url))]
pub async fn apply(
    page_path: &Path,
    element_id: &str,
    repo: &GitHubRepo,
    platform: Platform,
    api_url: Option<String>,
) -> Result<()> {
    let github = GitHub::new(Client::new(), api_url);

    let resolved = match resolver::resolve(&github, repo, platform).await {
        Ok(Some(resolved)) => resolved,
        Ok(None) => {
            info!("Leaving {} unchanged", page_path.display());
            return Ok(());
        }
        Err(e) => {
            warn!("Could not resolve the download link: {:#}", e);
            return Ok(());
        }
    };

    let html = std::fs::read_to_string(page_path)
        .with_context(|| format!("Failed to read {}", page_path.display()))?;

    match page::rewrite_href(&html, element_id, &resolved.url) {
        Some(updated) => {
            std::fs::write(page_path, updated)
                .with_context(|| format!("Failed to write {}", page_path.display()))?;
            info!(
                "Set download link for {} {} to {}",
                repo, resolved.tag_name, resolved.url
            );
        }
        None => {
            warn!(
                "No element with id \"{}\" and an href attribute in {}",
                element_id,
                page_path.display()
            );
        }
    }

    Ok(())
}
