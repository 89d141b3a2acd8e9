use anyhow::Result;
use clap::Args;
use similarweb_api::{EndpointKind, RequestParams};

use super::Context;

#[derive(Args)]
pub struct DomainArgs {
    /// Domain or URL to look up (e.g. similarweb.com, http://www.bbc.co.uk/news)
    #[arg(long)]
    pub domain: String,
}

/// Runs any endpoint whose only input is a domain.
pub async fn run(kind: EndpointKind, args: &DomainArgs, ctx: &Context) -> Result<()> {
    let params = RequestParams::default().with_domain(&args.domain);
    ctx.run(kind, &params).await
}
