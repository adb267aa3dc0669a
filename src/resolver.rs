//! Download link resolution.
//!
//! The scan itself is a pure function over the fetched asset list, so it can
//! be tested without any network access; [`resolve`] glues it to the GitHub
//! client.

use anyhow::Result;
use log::{debug, warn};

use crate::github::{GetLatestRelease, GitHubRepo, ReleaseAsset};
use crate::platform::Platform;

/// A successfully resolved download link.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Tag of the release the asset belongs to, e.g. `"v2.3.0"`.
    pub tag_name: String,
    /// Direct download URL of the matched asset.
    pub url: String,
}

/// Whether an asset filename ends with `-<token>.exe` or `-<token>.zip`.
///
/// The comparison against the asset name is case-sensitive; only the token
/// itself is guaranteed lower-case.
fn matches_platform(name: &str, token: &str) -> bool {
    name.ends_with(&format!("-{}.exe", token)) || name.ends_with(&format!("-{}.zip", token))
}

/// Scan an asset list for the platform build.
///
/// Assets are scanned in API order and every match overwrites the previous
/// one, so the LAST matching asset wins. This mirrors the long-standing
/// behavior of the site script this replaces; do not change it to
/// first-match without confirming the intended priority rule.
///
/// An unknown platform never matches anything.
pub fn find_download_url(platform: Platform, assets: &[ReleaseAsset]) -> Option<&str> {
    let token = platform.token()?;

    let mut url = None;
    for asset in assets {
        let matched = matches_platform(&asset.name, token);
        debug!("Asset '{}': matched = {}", asset.name, matched);
        if matched {
            url = Some(asset.browser_download_url.as_str());
        }
    }
    url
}

/// Fetch the latest release of `repo` and resolve the download URL for
/// `platform`.
///
/// Returns `Ok(None)` when no asset matches (including the unknown-platform
/// case); `Err` only for fetch or parse failures.
#[tracing::instrument(skip(github, repo))]
pub async fn resolve<G: GetLatestRelease>(
    github: &G,
    repo: &GitHubRepo,
    platform: Platform,
) -> Result<Option<Resolved>> {
    debug!("Detected OS: {}", platform);

    let release = github.get_latest_release(repo).await?;
    debug!("Latest release of {} is {}", repo, release.tag_name);

    match find_download_url(platform, &release.assets) {
        Some(url) => Ok(Some(Resolved {
            tag_name: release.tag_name.clone(),
            url: url.to_string(),
        })),
        None => {
            warn!(
                "No asset of {} {} matches platform '{}'",
                repo, release.tag_name, platform
            );
            Ok(None)
        }
    }
}
