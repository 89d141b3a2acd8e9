//! Client for the SimilarWeb web-analytics API.
//!
//! Every endpoint is described by an [`EndpointDescriptor`] in a static table;
//! a single [`EndpointClient`] builds the URL from that descriptor, performs
//! the GET, and validates the response envelope.
//!
//! ```no_run
//! # async fn run() -> Result<(), similarweb_api::Error> {
//! let api = similarweb_api::SimilarWeb::new("user-key")?;
//! let visits = api.traffic("http://www.similarweb.com", "5-2014", "6-2014")?;
//! println!("{}", visits.query().await?);
//! # Ok(())
//! # }
//! ```

mod client;
mod credentials;
pub mod domain;
mod endpoint;
mod errors;
pub mod params;
pub mod types;
pub use self::client::{EndpointClient, SimilarWeb};
pub use self::credentials::ApiKey;
pub use self::domain::{normalize, NormalizedDomain};
pub use self::endpoint::{EndpointDescriptor, EndpointKind, Field, Projection, BASE_URL};
pub use self::errors::Error;
pub use self::params::{AppStore, ParamMap, RequestParams};
