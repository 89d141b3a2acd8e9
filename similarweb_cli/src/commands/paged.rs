use anyhow::Result;
use clap::Args;
use similarweb_api::{EndpointKind, RequestParams};

use super::Context;

#[derive(Args)]
pub struct PagedArgs {
    /// Domain or URL to look up
    #[arg(long)]
    pub domain: String,

    /// First month of the range, as M-YYYY
    #[arg(long)]
    pub start: String,

    /// Last month of the range, as M-YYYY
    #[arg(long)]
    pub end: String,

    /// Only count the main domain, excluding subdomains
    #[arg(long)]
    pub main_domain_only: bool,

    /// Results page (omit for the first page)
    #[arg(long)]
    pub page: Option<u32>,
}

#[derive(Args)]
pub struct NamedPagedArgs {
    /// Endpoint variant (e.g. orgsearch, paidsearch, orgkwcompetitor, paidkwcompetitor)
    pub endpoint: String,

    #[command(flatten)]
    pub paged: PagedArgs,
}

fn paged_params(args: &PagedArgs) -> RequestParams {
    let params = RequestParams::default()
        .with_domain(&args.domain)
        .with_months(&args.start, &args.end)
        .with_main_domain_only(args.main_domain_only);
    match args.page {
        Some(page) => params.with_results_page(page),
        None => params,
    }
}

pub async fn run_referrals(args: &PagedArgs, ctx: &Context) -> Result<()> {
    ctx.run(EndpointKind::Referrals, &paged_params(args)).await
}

/// Search keywords or keyword competitors, selected by `kind`.
pub async fn run_named(kind: EndpointKind, args: &NamedPagedArgs, ctx: &Context) -> Result<()> {
    let params = paged_params(&args.paged).with_endpoint(&args.endpoint);
    ctx.run(kind, &params).await
}
