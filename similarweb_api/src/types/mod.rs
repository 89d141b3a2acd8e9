//! Typed views of SimilarWeb response payloads, for use with
//! [`EndpointClient::query_as`](crate::EndpointClient::query_as).
//!
//! Field names follow the upstream PascalCase keys. Unknown fields are ignored.

mod paged;
pub use self::paged::{CompetitorDomain, PagedData, ReferringSite, SearchTerm};

mod site;
pub use self::site::{
    CategoryRank, Destinations, RankAndReach, ScoredSite, SocialReferrals, SocialSource, Tag,
    TimeSeriesPoint,
};

mod mobile;
pub use self::mobile::{AppDetails, AppInstalls, RelatedApp};
