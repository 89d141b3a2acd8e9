use anyhow::Result;
use clap::Args;
use similarweb_api::{AppStore, EndpointKind, RequestParams};

use super::Context;

#[derive(Args)]
pub struct AppArgs {
    /// Store-specific app id (e.g. com.yahoo.mobile.client.android.mail)
    #[arg(long)]
    pub app_id: String,

    /// Store: google-play (0) or app-store (1)
    #[arg(long, default_value = "google-play", value_parser = parse_store)]
    pub store: AppStore,
}

#[derive(Args)]
pub struct InstallsArgs {
    /// Google Play app id
    #[arg(long)]
    pub app_id: String,
}

#[derive(Args)]
pub struct RelatedAppsArgs {
    /// Domain or URL whose apps to list
    #[arg(long)]
    pub domain: String,

    /// Store: google-play (0) or app-store (1)
    #[arg(long, default_value = "google-play", value_parser = parse_store)]
    pub store: AppStore,
}

fn parse_store(s: &str) -> Result<AppStore, String> {
    s.parse()
        .map_err(|_| format!("unknown store '{}', expected google-play or app-store", s))
}

pub async fn run_details(args: &AppArgs, ctx: &Context) -> Result<()> {
    let params = RequestParams::default()
        .with_app_id(&args.app_id)
        .with_app_store(args.store);
    ctx.run(EndpointKind::AppDetails, &params).await
}

pub async fn run_installs(args: &InstallsArgs, ctx: &Context) -> Result<()> {
    let params = RequestParams::default().with_app_id(&args.app_id);
    ctx.run(EndpointKind::GoogleAppInstalls, &params).await
}

pub async fn run_related(args: &RelatedAppsArgs, ctx: &Context) -> Result<()> {
    let params = RequestParams::default()
        .with_domain(&args.domain)
        .with_app_store(args.store);
    ctx.run(EndpointKind::RelatedSiteApps, &params).await
}
