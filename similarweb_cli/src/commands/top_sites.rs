use anyhow::Result;
use clap::Args;
use similarweb_api::{EndpointKind, RequestParams};

use super::Context;

#[derive(Args)]
pub struct TopSitesArgs {
    /// Category filter (e.g. Shopping, or Shopping~Sports)
    #[arg(long)]
    pub category: Option<String>,

    /// Country filter (e.g. "United States")
    #[arg(long)]
    pub country: Option<String>,
}

pub async fn run(args: &TopSitesArgs, ctx: &Context) -> Result<()> {
    let mut params = RequestParams::default();
    if let Some(category) = &args.category {
        params = params.with_category(category);
    }
    if let Some(country) = &args.country {
        params = params.with_country(country);
    }
    ctx.run(EndpointKind::TopSites, &params).await
}
