//! GitHub releases API client.
//!
//! Only the `releases/latest` endpoint is used; the resolver never lists
//! historical releases.

mod client;
mod repo;
mod types;

pub use client::{GetLatestRelease, GitHub};
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockGetLatestRelease;
