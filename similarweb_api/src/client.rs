//! HTTP client for the SimilarWeb API.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    credentials::ApiKey,
    domain,
    endpoint::{EndpointDescriptor, EndpointKind, Field, Projection, BASE_URL},
    params::{render, AppStore, ParamMap, RequestParams},
    Error,
};

fn user_agent() -> &'static str {
    concat!("similarweb_api/", env!("CARGO_PKG_VERSION"))
}

fn build_http() -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(user_agent())
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })
}

/// A configured request against one SimilarWeb endpoint.
///
/// All parameters are validated and serialized at construction; afterwards
/// the client is immutable. [`url`](Self::url) is a pure function of that
/// configuration, and every [`query`](Self::query) performs one fresh GET.
#[derive(Clone)]
pub struct EndpointClient {
    kind: EndpointKind,
    api_key: ApiKey,
    /// Serialized parameters, without the API key.
    params: ParamMap,
    /// Rendered path and query string, API key included.
    path: String,
    base_url: String,
    http: reqwest::Client,
}

impl EndpointClient {
    /// Validates `params` against `kind`'s descriptor and builds the client.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEndpoint`] when the endpoint name is outside the
    ///   allowed set of a multiplexed endpoint.
    /// - [`Error::MissingParameter`] when a required parameter is absent.
    /// - [`Error::InvalidUrl`] when the domain has no registrable root.
    pub fn new(kind: EndpointKind, api_key: ApiKey, params: &RequestParams) -> Result<Self, Error> {
        Self::build(kind, api_key, params, build_http()?)
    }

    fn build(
        kind: EndpointKind,
        api_key: ApiKey,
        params: &RequestParams,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let descriptor = kind.descriptor();
        check_endpoint_name(descriptor, params)?;

        let mut map = ParamMap::new();
        for &field in descriptor.required {
            let value = params
                .raw(field)
                .ok_or(Error::MissingParameter(field.placeholder()))?;
            map.insert(field.placeholder(), value);
        }
        for &(field, default) in descriptor.defaults {
            let value = params.raw(field).unwrap_or_else(|| default.to_string());
            map.insert(field.placeholder(), value);
        }

        if let Some(raw) = map.get_mut(Field::Domain.placeholder()) {
            *raw = domain::normalize(raw)?.into();
        }

        let mut full = map.clone();
        full.insert(Field::ApiKey.placeholder(), api_key.as_str().to_string());
        let path = render(descriptor.path, &full)?;

        Ok(Self {
            kind,
            api_key,
            params: map,
            path,
            base_url: BASE_URL.to_string(),
            http,
        })
    }

    /// Points the client at a different base authority. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    pub fn descriptor(&self) -> &'static EndpointDescriptor {
        self.kind.descriptor()
    }

    /// The serialized parameters, keyed by placeholder name, `api_key` included.
    pub fn parameters(&self) -> ParamMap {
        let mut params = self.params.clone();
        params.insert(Field::ApiKey.placeholder(), self.api_key.as_str().to_string());
        params
    }

    /// The full request URL.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// [`url`](Self::url) with the `UserKey` value masked, for logs and display.
    pub fn redacted_url(&self) -> String {
        let url = self.url();
        match url.strip_suffix(self.api_key.as_str()) {
            Some(head) => format!("{}<redacted>", head),
            None => url,
        }
    }

    /// Performs the GET and validates the response envelope.
    ///
    /// Returns either the whole decoded envelope or the value under the
    /// presence key, depending on the endpoint's [`Projection`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidResponse`] when the presence key is missing, carrying
    /// the decoded payload. Network and decoding failures surface as
    /// [`Error::Transport`] and [`Error::Decode`].
    pub async fn query(&self) -> Result<Value, Error> {
        let descriptor = self.descriptor();
        tracing::debug!(endpoint = descriptor.name, url = %self.redacted_url(), "Querying");

        let resp = self.http.get(self.url()).send().await.map_err(|e| {
            tracing::error!("Failed to get {}: {}", descriptor.name, e);
            Error::Transport(e)
        })?;

        // Upstream reports failures in the body, so the status is informational only.
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("{} returned status {}", descriptor.name, status);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        let payload = serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!("Failed to parse {}: {} | body: {}", descriptor.name, e, truncate_body(&body));
            Error::Decode(e)
        })?;

        project(descriptor, payload)
    }

    /// Like [`query`](Self::query), deserializing the projected value into `T`.
    pub async fn query_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let value = self.query().await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl std::fmt::Debug for EndpointClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointClient")
            .field("kind", &self.kind)
            .field("url", &self.redacted_url())
            .finish()
    }
}

fn check_endpoint_name(descriptor: &EndpointDescriptor, params: &RequestParams) -> Result<(), Error> {
    if !descriptor.takes_endpoint_name() {
        return Ok(());
    }
    let endpoint = params
        .endpoint
        .as_deref()
        .ok_or(Error::MissingParameter(Field::Endpoint.placeholder()))?;
    if descriptor.allowed_endpoints.contains(&endpoint) {
        Ok(())
    } else {
        Err(Error::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            allowed: descriptor.allowed_endpoints.join(", "),
        })
    }
}

/// Checks the presence key and applies the descriptor's projection.
fn project(descriptor: &EndpointDescriptor, mut payload: Value) -> Result<Value, Error> {
    let key = descriptor.presence_key;
    if payload.get(key).is_none() {
        tracing::error!(
            "{} response missing {:?}: {}",
            descriptor.name,
            key,
            payload.get("Error").and_then(serde_json::Value::as_str).unwrap_or("no upstream message")
        );
        return Err(Error::InvalidResponse { key, payload });
    }
    Ok(match descriptor.projection {
        Projection::Whole => payload,
        Projection::Key => payload[key].take(),
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

/// Factory for [`EndpointClient`]s sharing one API key, base URL and HTTP client.
///
/// The named constructors take each endpoint's required parameters and leave
/// optional ones at their defaults; use [`client`](Self::client) with a full
/// [`RequestParams`] to set granularity, paging and the like.
#[derive(Clone, Debug)]
pub struct SimilarWeb {
    api_key: ApiKey,
    base_url: String,
    http: reqwest::Client,
}

impl SimilarWeb {
    /// Creates a factory pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            base_url: BASE_URL.to_string(),
            http: build_http()?,
        })
    }

    /// Creates a factory with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Builds a client for any endpoint from a full parameter set.
    pub fn client(&self, kind: EndpointKind, params: &RequestParams) -> Result<EndpointClient, Error> {
        Ok(
            EndpointClient::build(kind, self.api_key.clone(), params, self.http.clone())?
                .with_base_url(&self.base_url),
        )
    }

    /// Visits over a month range (`/v1/visits`).
    pub fn traffic(&self, domain: &str, start_month: &str, end_month: &str) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::Traffic,
            &RequestParams::default()
                .with_domain(domain)
                .with_months(start_month, end_month),
        )
    }

    pub fn rank_and_reach(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::RankAndReach, domain)
    }

    /// One of `pageviews`, `visitduration` or `bouncerate` over a month range.
    pub fn engagement(
        &self,
        endpoint: &str,
        domain: &str,
        start_month: &str,
        end_month: &str,
    ) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::Engagement,
            &RequestParams::default()
                .with_endpoint(endpoint)
                .with_domain(domain)
                .with_months(start_month, end_month),
        )
    }

    pub fn similar_websites(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::SimilarWebsites, domain)
    }

    pub fn also_visited(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::AlsoVisited, domain)
    }

    pub fn website_tags(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::WebsiteTags, domain)
    }

    pub fn website_categorization(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::WebsiteCategorization, domain)
    }

    pub fn category_rank(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::CategoryRank, domain)
    }

    /// Top sites; `None` means all categories / worldwide.
    pub fn top_sites(&self, category: Option<&str>, country: Option<&str>) -> Result<EndpointClient, Error> {
        let mut params = RequestParams::default();
        if let Some(category) = category {
            params = params.with_category(category);
        }
        if let Some(country) = country {
            params = params.with_country(country);
        }
        self.client(EndpointKind::TopSites, &params)
    }

    pub fn social_referrals(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::SocialReferrals, domain)
    }

    /// One of `orgsearch` or `paidsearch` over a month range.
    pub fn search_keywords(
        &self,
        endpoint: &str,
        domain: &str,
        start_month: &str,
        end_month: &str,
    ) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::SearchKeywords,
            &RequestParams::default()
                .with_endpoint(endpoint)
                .with_domain(domain)
                .with_months(start_month, end_month),
        )
    }

    pub fn destinations(&self, domain: &str) -> Result<EndpointClient, Error> {
        self.site(EndpointKind::Destinations, domain)
    }

    pub fn referrals(&self, domain: &str, start_month: &str, end_month: &str) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::Referrals,
            &RequestParams::default()
                .with_domain(domain)
                .with_months(start_month, end_month),
        )
    }

    /// One of `orgkwcompetitor` or `paidkwcompetitor` over a month range.
    pub fn keyword_competitors(
        &self,
        endpoint: &str,
        domain: &str,
        start_month: &str,
        end_month: &str,
    ) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::KeywordCompetitors,
            &RequestParams::default()
                .with_endpoint(endpoint)
                .with_domain(domain)
                .with_months(start_month, end_month),
        )
    }

    pub fn app_details(&self, app_id: &str, app_store: AppStore) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::AppDetails,
            &RequestParams::default()
                .with_app_id(app_id)
                .with_app_store(app_store),
        )
    }

    pub fn google_app_installs(&self, app_id: &str) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::GoogleAppInstalls,
            &RequestParams::default().with_app_id(app_id),
        )
    }

    pub fn related_site_apps(&self, domain: &str, app_store: AppStore) -> Result<EndpointClient, Error> {
        self.client(
            EndpointKind::RelatedSiteApps,
            &RequestParams::default()
                .with_domain(domain)
                .with_app_store(app_store),
        )
    }

    fn site(&self, kind: EndpointKind, domain: &str) -> Result<EndpointClient, Error> {
        self.client(kind, &RequestParams::default().with_domain(domain))
    }
}
