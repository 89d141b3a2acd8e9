//! Caller-supplied endpoint parameters and their string serialization.

use std::str::FromStr;

use crate::endpoint::Field;

/// Builder for the parameters an endpoint may take.
///
/// Which fields are actually required depends on the endpoint; see
/// [`EndpointDescriptor`](crate::EndpointDescriptor). Fields an endpoint
/// doesn't use are ignored.
#[derive(Clone, Debug, Default)]
pub struct RequestParams {
    /// Metric name for endpoints that multiplex several metrics over one path.
    pub endpoint: Option<String>,
    /// Domain or URL to query; normalized to its registrable domain.
    pub domain: Option<String>,
    /// Start month in `M-YYYY` format.
    pub start_month: Option<String>,
    /// End month in `M-YYYY` format.
    pub end_month: Option<String>,
    /// `DAILY`, `WEEKLY` or `MONTHLY`. Forwarded as-is.
    pub time_granularity: Option<String>,
    /// Restrict metrics to the main domain (no subdomains).
    pub main_domain_only: Option<bool>,
    /// Result page, for more than 10 results.
    pub results_page: Option<u32>,
    pub category: Option<String>,
    pub country: Option<String>,
    /// Store-specific app id, e.g. `com.yahoo.mobile.client.android.mail`.
    pub app_id: Option<String>,
    pub app_store_id: Option<AppStore>,
}

impl RequestParams {
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    /// Sets both ends of the month range.
    pub fn with_months(mut self, start_month: &str, end_month: &str) -> Self {
        self.start_month = Some(start_month.to_string());
        self.end_month = Some(end_month.to_string());
        self
    }

    pub fn with_time_granularity(mut self, time_granularity: &str) -> Self {
        self.time_granularity = Some(time_granularity.to_string());
        self
    }

    pub fn with_main_domain_only(mut self, main_domain_only: bool) -> Self {
        self.main_domain_only = Some(main_domain_only);
        self
    }

    pub fn with_results_page(mut self, results_page: u32) -> Self {
        self.results_page = Some(results_page);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_app_id(mut self, app_id: &str) -> Self {
        self.app_id = Some(app_id.to_string());
        self
    }

    pub fn with_app_store(mut self, app_store: AppStore) -> Self {
        self.app_store_id = Some(app_store);
        self
    }

    /// The supplied value of `field` in its wire form, or `None` when unset.
    ///
    /// Booleans become `"true"`/`"false"`. A results page of 0 counts as
    /// unset. The domain is returned as supplied, before normalization.
    pub(crate) fn raw(&self, field: Field) -> Option<String> {
        match field {
            Field::Endpoint => self.endpoint.clone(),
            Field::Domain => self.domain.clone(),
            Field::StartMonth => self.start_month.clone(),
            Field::EndMonth => self.end_month.clone(),
            Field::TimeGranularity => self.time_granularity.clone(),
            Field::MainDomainOnly => self.main_domain_only.map(|md| md.to_string()),
            Field::ResultsPage => self
                .results_page
                .filter(|page| *page > 0)
                .map(|page| page.to_string()),
            Field::Category => self.category.clone(),
            Field::Country => self.country.clone(),
            Field::AppId => self.app_id.clone(),
            Field::AppStoreId => self.app_store_id.map(|store| store.to_string()),
            Field::ApiKey => None,
        }
    }
}

/// Mobile app store, sent as its numeric id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppStore {
    #[default]
    GooglePlay = 0,
    AppStore = 1,
}

impl std::fmt::Display for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl FromStr for AppStore {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "google" | "google-play" => Ok(AppStore::GooglePlay),
            "1" | "ios" | "app-store" => Ok(AppStore::AppStore),
            _ => Err(()),
        }
    }
}
