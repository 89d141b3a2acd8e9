//! CLI subcommand implementations.

pub mod metrics;
pub mod mobile;
pub mod paged;
pub mod site;
pub mod top_sites;

use anyhow::Result;
use similarweb_api::{EndpointClient, EndpointKind, Projection, RequestParams, SimilarWeb};

use crate::output::{print_value, OutputFormat};

/// Settings shared by every subcommand.
pub struct Context {
    pub api: SimilarWeb,
    pub format: OutputFormat,
    pub print_url: bool,
}

impl Context {
    /// Builds the client, prints or runs it, and renders the result.
    pub async fn run(&self, kind: EndpointKind, params: &RequestParams) -> Result<()> {
        let client = self.api.client(kind, params)?;
        self.execute(&client).await
    }

    async fn execute(&self, client: &EndpointClient) -> Result<()> {
        if self.print_url {
            println!("{}", client.redacted_url());
            return Ok(());
        }

        let value = match client.query().await {
            Ok(value) => value,
            Err(e) => {
                if let Some(message) = e.upstream_message() {
                    eprintln!("Upstream error: {}", message);
                }
                return Err(e.into());
            }
        };

        // Whole envelopes carrying a list get the list tabulated.
        let descriptor = client.descriptor();
        let rows_key = match descriptor.projection {
            Projection::Whole => Some(descriptor.presence_key),
            Projection::Key => None,
        };
        print_value(&value, &self.format, rows_key)
    }
}
