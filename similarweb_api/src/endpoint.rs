//! The endpoint table: one [`EndpointDescriptor`] per SimilarWeb endpoint.
//!
//! Each descriptor captures everything that differs between endpoints: the
//! path template, which parameters are required or defaulted, the allowed
//! endpoint names (for the endpoints that multiplex several metrics over one
//! path), the envelope key whose presence signals success, and what part of
//! the envelope is handed back to the caller.

use std::str::FromStr;

/// Base authority every URL is built on.
pub const BASE_URL: &str = "http://api.similarweb.com";

/// A named parameter that can appear in a path template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Endpoint,
    Domain,
    StartMonth,
    EndMonth,
    TimeGranularity,
    MainDomainOnly,
    ResultsPage,
    Category,
    Country,
    AppId,
    AppStoreId,
    ApiKey,
}

impl Field {
    /// The `{placeholder}` name used in path templates and parameter maps.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Endpoint => "endpoint",
            Field::Domain => "domain",
            Field::StartMonth => "start_month",
            Field::EndMonth => "end_month",
            Field::TimeGranularity => "time_granularity",
            Field::MainDomainOnly => "main_domain_only",
            Field::ResultsPage => "results_page",
            Field::Category => "category",
            Field::Country => "country",
            Field::AppId => "app_id",
            Field::AppStoreId => "app_store_id",
            Field::ApiKey => "api_key",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// What a successful query returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// The whole decoded envelope.
    Whole,
    /// Only the value stored under the presence key.
    Key,
}

/// Static description of one endpoint.
#[derive(Debug)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    /// Path and query template, appended to the base authority.
    pub path: &'static str,
    pub required: &'static [Field],
    pub defaults: &'static [(Field, &'static str)],
    /// Allowed values for [`Field::Endpoint`]; empty when the path is fixed.
    pub allowed_endpoints: &'static [&'static str],
    pub presence_key: &'static str,
    pub projection: Projection,
}

impl EndpointDescriptor {
    /// Every field this endpoint serializes, `api_key` included.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.required
            .iter()
            .copied()
            .chain(self.defaults.iter().map(|(field, _)| *field))
            .chain(std::iter::once(Field::ApiKey))
    }

    pub fn default_for(&self, field: Field) -> Option<&'static str> {
        self.defaults
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| *value)
    }

    pub fn takes_endpoint_name(&self) -> bool {
        !self.allowed_endpoints.is_empty()
    }
}

const DATE_RANGE_DEFAULTS: &[(Field, &str)] = &[
    (Field::TimeGranularity, "MONTHLY"),
    (Field::MainDomainOnly, "false"),
];

const PAGED_DEFAULTS: &[(Field, &str)] = &[
    (Field::MainDomainOnly, "false"),
    (Field::ResultsPage, ""),
];

const DOMAIN_ONLY: &[Field] = &[Field::Domain];
const DATE_RANGE: &[Field] = &[Field::Domain, Field::StartMonth, Field::EndMonth];
const ENDPOINT_DATE_RANGE: &[Field] = &[
    Field::Endpoint,
    Field::Domain,
    Field::StartMonth,
    Field::EndMonth,
];

static TRAFFIC: EndpointDescriptor = EndpointDescriptor {
    name: "traffic",
    path: "/Site/{domain}/v1/visits?gr={time_granularity}&start={start_month}\
           &end={end_month}&md={main_domain_only}&Format=JSON&UserKey={api_key}",
    required: DATE_RANGE,
    defaults: DATE_RANGE_DEFAULTS,
    allowed_endpoints: &[],
    presence_key: "Values",
    projection: Projection::Key,
};

static RANK_AND_REACH: EndpointDescriptor = EndpointDescriptor {
    name: "rank-and-reach",
    path: "/Site/{domain}/v1/traffic?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "GlobalRank",
    projection: Projection::Whole,
};

static ENGAGEMENT: EndpointDescriptor = EndpointDescriptor {
    name: "engagement",
    path: "/Site/{domain}/v1/{endpoint}?gr={time_granularity}&start={start_month}\
           &end={end_month}&md={main_domain_only}&Format=JSON&UserKey={api_key}",
    required: ENDPOINT_DATE_RANGE,
    defaults: DATE_RANGE_DEFAULTS,
    allowed_endpoints: &["pageviews", "visitduration", "bouncerate"],
    presence_key: "Values",
    projection: Projection::Key,
};

static SIMILAR_WEBSITES: EndpointDescriptor = EndpointDescriptor {
    name: "similar-websites",
    path: "/Site/{domain}/v2/similarsites?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "SimilarSites",
    projection: Projection::Key,
};

static ALSO_VISITED: EndpointDescriptor = EndpointDescriptor {
    name: "also-visited",
    path: "/Site/{domain}/v2/alsovisited?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "AlsoVisited",
    projection: Projection::Key,
};

static WEBSITE_TAGS: EndpointDescriptor = EndpointDescriptor {
    name: "website-tags",
    path: "/Site/{domain}/v2/tags?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "Tags",
    projection: Projection::Key,
};

static WEBSITE_CATEGORIZATION: EndpointDescriptor = EndpointDescriptor {
    name: "website-categorization",
    path: "/Site/{domain}/v2/category?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "Category",
    projection: Projection::Key,
};

// Same presence key as categorization, but the whole envelope is returned.
static CATEGORY_RANK: EndpointDescriptor = EndpointDescriptor {
    name: "category-rank",
    path: "/Site/{domain}/v2/CategoryRank?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "Category",
    projection: Projection::Whole,
};

static TOP_SITES: EndpointDescriptor = EndpointDescriptor {
    name: "top-sites",
    path: "/v1/TopSites?Format=JSON&country={country}&category={category}&UserKey={api_key}",
    required: &[],
    defaults: &[(Field::Country, ""), (Field::Category, "")],
    allowed_endpoints: &[],
    presence_key: "1",
    projection: Projection::Whole,
};

static SOCIAL_REFERRALS: EndpointDescriptor = EndpointDescriptor {
    name: "social-referrals",
    path: "/Site/{domain}/v1/socialreferringsites?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "SocialSources",
    projection: Projection::Whole,
};

static SEARCH_KEYWORDS: EndpointDescriptor = EndpointDescriptor {
    name: "search-keywords",
    path: "/Site/{domain}/v1/{endpoint}?start={start_month}&end={end_month}\
           &md={main_domain_only}&page={results_page}&Format=JSON&UserKey={api_key}",
    required: ENDPOINT_DATE_RANGE,
    defaults: PAGED_DEFAULTS,
    allowed_endpoints: &["orgsearch", "paidsearch"],
    presence_key: "Data",
    projection: Projection::Whole,
};

static DESTINATIONS: EndpointDescriptor = EndpointDescriptor {
    name: "destinations",
    path: "/Site/{domain}/v2/leadingdestinationsites?Format=JSON&UserKey={api_key}",
    required: DOMAIN_ONLY,
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "Sites",
    projection: Projection::Whole,
};

static REFERRALS: EndpointDescriptor = EndpointDescriptor {
    name: "referrals",
    path: "/Site/{domain}/v1/referrals?start={start_month}&end={end_month}\
           &md={main_domain_only}&page={results_page}&Format=JSON&UserKey={api_key}",
    required: DATE_RANGE,
    defaults: PAGED_DEFAULTS,
    allowed_endpoints: &[],
    presence_key: "Data",
    projection: Projection::Whole,
};

static KEYWORD_COMPETITORS: EndpointDescriptor = EndpointDescriptor {
    name: "keyword-competitors",
    path: "/Site/{domain}/v1/{endpoint}?start={start_month}&end={end_month}\
           &md={main_domain_only}&page={results_page}&Format=JSON&UserKey={api_key}",
    required: ENDPOINT_DATE_RANGE,
    defaults: PAGED_DEFAULTS,
    allowed_endpoints: &["orgkwcompetitor", "paidkwcompetitor"],
    presence_key: "Data",
    projection: Projection::Whole,
};

static APP_DETAILS: EndpointDescriptor = EndpointDescriptor {
    name: "app-details",
    path: "/Mobile/{app_store_id}/{app_id}/v1/GetAppDetails?Format=JSON&UserKey={api_key}",
    required: &[Field::AppId, Field::AppStoreId],
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "Title",
    projection: Projection::Whole,
};

// Installs are only published for Google Play, hence the fixed store id.
static GOOGLE_APP_INSTALLS: EndpointDescriptor = EndpointDescriptor {
    name: "google-app-installs",
    path: "/Mobile/0/{app_id}/v1/GetAppInstalls?Format=JSON&UserKey={api_key}",
    required: &[Field::AppId],
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "InstallsMin",
    projection: Projection::Whole,
};

static RELATED_SITE_APPS: EndpointDescriptor = EndpointDescriptor {
    name: "related-site-apps",
    path: "/Mobile/{app_store_id}/{domain}/v1/GetRelatedSiteApps?Format=JSON&UserKey={api_key}",
    required: &[Field::Domain, Field::AppStoreId],
    defaults: &[],
    allowed_endpoints: &[],
    presence_key: "RelatedApps",
    projection: Projection::Key,
};

/// Every endpoint the client knows how to call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Traffic,
    RankAndReach,
    Engagement,
    SimilarWebsites,
    AlsoVisited,
    WebsiteTags,
    WebsiteCategorization,
    CategoryRank,
    TopSites,
    SocialReferrals,
    SearchKeywords,
    Destinations,
    Referrals,
    KeywordCompetitors,
    AppDetails,
    GoogleAppInstalls,
    RelatedSiteApps,
}

impl EndpointKind {
    pub const ALL: [EndpointKind; 17] = [
        EndpointKind::Traffic,
        EndpointKind::RankAndReach,
        EndpointKind::Engagement,
        EndpointKind::SimilarWebsites,
        EndpointKind::AlsoVisited,
        EndpointKind::WebsiteTags,
        EndpointKind::WebsiteCategorization,
        EndpointKind::CategoryRank,
        EndpointKind::TopSites,
        EndpointKind::SocialReferrals,
        EndpointKind::SearchKeywords,
        EndpointKind::Destinations,
        EndpointKind::Referrals,
        EndpointKind::KeywordCompetitors,
        EndpointKind::AppDetails,
        EndpointKind::GoogleAppInstalls,
        EndpointKind::RelatedSiteApps,
    ];

    pub fn descriptor(self) -> &'static EndpointDescriptor {
        match self {
            EndpointKind::Traffic => &TRAFFIC,
            EndpointKind::RankAndReach => &RANK_AND_REACH,
            EndpointKind::Engagement => &ENGAGEMENT,
            EndpointKind::SimilarWebsites => &SIMILAR_WEBSITES,
            EndpointKind::AlsoVisited => &ALSO_VISITED,
            EndpointKind::WebsiteTags => &WEBSITE_TAGS,
            EndpointKind::WebsiteCategorization => &WEBSITE_CATEGORIZATION,
            EndpointKind::CategoryRank => &CATEGORY_RANK,
            EndpointKind::TopSites => &TOP_SITES,
            EndpointKind::SocialReferrals => &SOCIAL_REFERRALS,
            EndpointKind::SearchKeywords => &SEARCH_KEYWORDS,
            EndpointKind::Destinations => &DESTINATIONS,
            EndpointKind::Referrals => &REFERRALS,
            EndpointKind::KeywordCompetitors => &KEYWORD_COMPETITORS,
            EndpointKind::AppDetails => &APP_DETAILS,
            EndpointKind::GoogleAppInstalls => &GOOGLE_APP_INSTALLS,
            EndpointKind::RelatedSiteApps => &RELATED_SITE_APPS,
        }
    }
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

impl FromStr for EndpointKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EndpointKind::ALL
            .into_iter()
            .find(|kind| kind.descriptor().name == s)
            .ok_or(())
    }
}
