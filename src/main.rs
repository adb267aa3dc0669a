use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ghdl::github::GitHubRepo;
use ghdl::platform::Platform;

/// The project whose releases are resolved when no repository is given.
const DEFAULT_REPO: &str = "giancosta86/moondeploy";

/// ghdl - GitHub Download Link resolver
///
/// Finds the latest-release asset built for the current operating system and
/// prints its download URL, or writes it into the download button of a
/// static HTML page.
///
/// Examples:
///   ghdl resolve                      # URL for the default project
///   ghdl resolve owner/repo
///   ghdl apply index.html owner/repo
#[derive(Parser, Debug)]
#[command(author, version = env!("GHDL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Platform to resolve for (overrides host detection; also via GHDL_PLATFORM)
    #[arg(
        long = "platform",
        env = "GHDL_PLATFORM",
        value_name = "OS",
        global = true
    )]
    pub platform: Option<Platform>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the download URL for the latest release
    Resolve(ResolveArgs),

    /// Rewrite the download button link in an HTML page
    Apply(ApplyArgs),
}

#[derive(clap::Args, Debug)]
struct ResolveArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO", default_value = DEFAULT_REPO)]
    repo: String,
}

#[derive(clap::Args, Debug)]
struct ApplyArgs {
    /// The HTML page containing the download button
    #[arg(value_name = "PAGE")]
    page: PathBuf,

    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO", default_value = DEFAULT_REPO)]
    repo: String,

    /// Element id of the download button
    #[arg(long = "id", value_name = "ID", default_value = "download-program")]
    element_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let platform = cli.platform.unwrap_or_else(Platform::detect);

    match cli.command {
        Commands::Resolve(args) => {
            let repo = args.repo.parse::<GitHubRepo>()?;
            ghdl::commands::resolve(&repo, platform, cli.api_url).await?
        }
        Commands::Apply(args) => {
            let repo = args.repo.parse::<GitHubRepo>()?;
            ghdl::commands::apply(&args.page, &args.element_id, &repo, platform, cli.api_url)
                .await?
        }
    }
    Ok(())
}
