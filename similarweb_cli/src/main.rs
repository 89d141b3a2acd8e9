mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use similarweb_api::{EndpointKind, SimilarWeb, BASE_URL};

use crate::commands::Context;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "similarweb")]
#[command(about = "Query website and app analytics from the SimilarWeb API")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// SimilarWeb user key
    #[arg(long, env = "SIMILARWEB_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long, env = "SIMILARWEB_BASE_URL", default_value = BASE_URL, global = true)]
    base_url: String,

    /// Print the request URL (key redacted) instead of sending it
    #[arg(long, global = true)]
    print_url: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Visits over a month range
    Traffic(commands::metrics::TimeSeriesArgs),
    /// Global and country rank
    RankAndReach(commands::site::DomainArgs),
    /// Page views, visit duration or bounce rate over a month range
    Engagement(commands::metrics::EngagementArgs),
    /// Similar websites with scores
    SimilarWebsites(commands::site::DomainArgs),
    /// Sites also visited by the domain's audience
    AlsoVisited(commands::site::DomainArgs),
    /// Tags describing the site
    WebsiteTags(commands::site::DomainArgs),
    /// Category of the site
    WebsiteCategorization(commands::site::DomainArgs),
    /// Category and rank within it
    CategoryRank(commands::site::DomainArgs),
    /// Top sites, optionally by category and country
    TopSites(commands::top_sites::TopSitesArgs),
    /// Social networks sending traffic
    SocialReferrals(commands::site::DomainArgs),
    /// Search keywords (orgsearch or paidsearch)
    SearchKeywords(commands::paged::NamedPagedArgs),
    /// Leading destination sites
    Destinations(commands::site::DomainArgs),
    /// Referring sites
    Referrals(commands::paged::PagedArgs),
    /// Keyword competitors (orgkwcompetitor or paidkwcompetitor)
    KeywordCompetitors(commands::paged::NamedPagedArgs),
    /// Store details for an app
    AppDetails(commands::mobile::AppArgs),
    /// Google Play install range for an app
    GoogleAppInstalls(commands::mobile::InstallsArgs),
    /// Apps related to a site
    RelatedSiteApps(commands::mobile::RelatedAppsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("similarweb_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("missing API key: pass --api-key or set SIMILARWEB_API_KEY"))?;

    let ctx = Context {
        api: SimilarWeb::new(api_key)?.with_base_url(&cli.base_url),
        format: OutputFormat::parse(&cli.output),
        print_url: cli.print_url,
    };

    use commands::{metrics, mobile, paged, site, top_sites};
    match &cli.command {
        Commands::Traffic(args) => metrics::run_traffic(args, &ctx).await?,
        Commands::RankAndReach(args) => site::run(EndpointKind::RankAndReach, args, &ctx).await?,
        Commands::Engagement(args) => metrics::run_engagement(args, &ctx).await?,
        Commands::SimilarWebsites(args) => {
            site::run(EndpointKind::SimilarWebsites, args, &ctx).await?
        }
        Commands::AlsoVisited(args) => site::run(EndpointKind::AlsoVisited, args, &ctx).await?,
        Commands::WebsiteTags(args) => site::run(EndpointKind::WebsiteTags, args, &ctx).await?,
        Commands::WebsiteCategorization(args) => {
            site::run(EndpointKind::WebsiteCategorization, args, &ctx).await?
        }
        Commands::CategoryRank(args) => site::run(EndpointKind::CategoryRank, args, &ctx).await?,
        Commands::TopSites(args) => top_sites::run(args, &ctx).await?,
        Commands::SocialReferrals(args) => {
            site::run(EndpointKind::SocialReferrals, args, &ctx).await?
        }
        Commands::SearchKeywords(args) => {
            paged::run_named(EndpointKind::SearchKeywords, args, &ctx).await?
        }
        Commands::Destinations(args) => site::run(EndpointKind::Destinations, args, &ctx).await?,
        Commands::Referrals(args) => paged::run_referrals(args, &ctx).await?,
        Commands::KeywordCompetitors(args) => {
            paged::run_named(EndpointKind::KeywordCompetitors, args, &ctx).await?
        }
        Commands::AppDetails(args) => mobile::run_details(args, &ctx).await?,
        Commands::GoogleAppInstalls(args) => mobile::run_installs(args, &ctx).await?,
        Commands::RelatedSiteApps(args) => mobile::run_related(args, &ctx).await?,
    }

    Ok(())
}
