use anyhow::Result;
use log::info;
use reqwest::Client;

use crate::github::{GitHub, GitHubRepo};
use crate::platform::Platform;
use crate::resolver;

/// Print the resolved download URL for `repo` to stdout.
///
/// Prints nothing when no asset matches the platform; fetch failures are
/// reported as errors.
#[tracing::instrument(skip(api_url))]
pub async fn resolve(
    repo: &GitHubRepo,
    platform: Platform,
    api_url: Option<String>,
) -> Result<()> {
    let github = GitHub::new(Client::new(), api_url);

    if let Some(resolved) = resolver::resolve(&github, repo, platform).await? {
        info!(
            "Latest release of {} is {}, asset matched for '{}'",
            repo, resolved.tag_name, platform
        );
        println!("{}", resolved.url);
    }

    Ok(())
}
