use anyhow::Result;
use clap::Args;
use similarweb_api::{EndpointKind, RequestParams};

use super::Context;

#[derive(Args)]
pub struct TimeSeriesArgs {
    /// Domain or URL to look up
    #[arg(long)]
    pub domain: String,

    /// First month of the range, as M-YYYY (e.g. 5-2014)
    #[arg(long)]
    pub start: String,

    /// Last month of the range, as M-YYYY (e.g. 6-2014)
    #[arg(long)]
    pub end: String,

    /// Granularity, forwarded as given: DAILY, WEEKLY, MONTHLY
    #[arg(long, default_value = "MONTHLY")]
    pub granularity: String,

    /// Only count the main domain, excluding subdomains
    #[arg(long)]
    pub main_domain_only: bool,
}

#[derive(Args)]
pub struct EngagementArgs {
    /// Metric: pageviews, visitduration, bouncerate
    pub metric: String,

    #[command(flatten)]
    pub series: TimeSeriesArgs,
}

fn series_params(args: &TimeSeriesArgs) -> RequestParams {
    RequestParams::default()
        .with_domain(&args.domain)
        .with_months(&args.start, &args.end)
        .with_time_granularity(&args.granularity)
        .with_main_domain_only(args.main_domain_only)
}

pub async fn run_traffic(args: &TimeSeriesArgs, ctx: &Context) -> Result<()> {
    ctx.run(EndpointKind::Traffic, &series_params(args)).await
}

pub async fn run_engagement(args: &EngagementArgs, ctx: &Context) -> Result<()> {
    let params = series_params(&args.series).with_endpoint(&args.metric);
    ctx.run(EndpointKind::Engagement, &params).await
}
