use similarweb_api::{AppStore, EndpointClient, EndpointKind, Error, RequestParams, SimilarWeb};

const APP: &str = "com.yahoo.mobile.client.android.mail";

fn api() -> SimilarWeb {
    SimilarWeb::new("a").unwrap()
}

fn paged(endpoint: Option<&str>) -> RequestParams {
    let params = RequestParams::default()
        .with_domain("similarweb.com")
        .with_months("5-2014", "6-2014")
        .with_main_domain_only(false)
        .with_results_page(5);
    match endpoint {
        Some(endpoint) => params.with_endpoint(endpoint),
        None => params,
    }
}

fn url(client: Result<EndpointClient, Error>) -> String {
    client.unwrap().url()
}

#[test]
fn traffic() {
    let params = RequestParams::default()
        .with_domain("similarweb.com")
        .with_months("5-2014", "6-2014")
        .with_time_granularity("MONTHLY")
        .with_main_domain_only(false);
    insta::assert_snapshot!(
        url(api().client(EndpointKind::Traffic, &params)),
        @"http://api.similarweb.com/Site/similarweb.com/v1/visits?gr=MONTHLY&start=5-2014&end=6-2014&md=false&Format=JSON&UserKey=a"
    );
}

#[test]
fn traffic_granularity_is_forwarded_verbatim() {
    let params = RequestParams::default()
        .with_domain("similarweb.com")
        .with_months("1-2015", "3-2015")
        .with_time_granularity("weekly")
        .with_main_domain_only(true);
    insta::assert_snapshot!(
        url(api().client(EndpointKind::Traffic, &params)),
        @"http://api.similarweb.com/Site/similarweb.com/v1/visits?gr=weekly&start=1-2015&end=3-2015&md=true&Format=JSON&UserKey=a"
    );
}

#[test]
fn engagement() {
    for metric in ["pageviews", "visitduration", "bouncerate"] {
        let expected = format!(
            "http://api.similarweb.com/Site/similarweb.com/v1/{}?gr=MONTHLY&start=5-2014\
             &end=6-2014&md=false&Format=JSON&UserKey=a",
            metric
        );
        assert_eq!(
            url(api().engagement(metric, "similarweb.com", "5-2014", "6-2014")),
            expected
        );
    }
}

#[test]
fn domain_only_endpoints() {
    insta::assert_snapshot!(
        url(api().rank_and_reach("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v1/traffic?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().similar_websites("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v2/similarsites?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().also_visited("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v2/alsovisited?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().website_tags("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v2/tags?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().website_categorization("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v2/category?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().category_rank("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v2/CategoryRank?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().social_referrals("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v1/socialreferringsites?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().destinations("similarweb.com")),
        @"http://api.similarweb.com/Site/similarweb.com/v2/leadingdestinationsites?Format=JSON&UserKey=a"
    );
}

#[test]
fn top_sites() {
    insta::assert_snapshot!(
        url(api().top_sites(Some("Shopping~Sports"), Some("United States"))),
        @"http://api.similarweb.com/v1/TopSites?Format=JSON&country=United States&category=Shopping~Sports&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().top_sites(None, None)),
        @"http://api.similarweb.com/v1/TopSites?Format=JSON&country=&category=&UserKey=a"
    );
}

#[test]
fn paged_endpoints() {
    insta::assert_snapshot!(
        url(api().client(EndpointKind::SearchKeywords, &paged(Some("orgsearch")))),
        @"http://api.similarweb.com/Site/similarweb.com/v1/orgsearch?start=5-2014&end=6-2014&md=false&page=5&Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().client(EndpointKind::Referrals, &paged(None))),
        @"http://api.similarweb.com/Site/similarweb.com/v1/referrals?start=5-2014&end=6-2014&md=false&page=5&Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().client(EndpointKind::KeywordCompetitors, &paged(Some("orgkwcompetitor")))),
        @"http://api.similarweb.com/Site/similarweb.com/v1/orgkwcompetitor?start=5-2014&end=6-2014&md=false&page=5&Format=JSON&UserKey=a"
    );
}

#[test]
fn paged_endpoints_without_page() {
    insta::assert_snapshot!(
        url(api().search_keywords("paidsearch", "similarweb.com", "5-2014", "6-2014")),
        @"http://api.similarweb.com/Site/similarweb.com/v1/paidsearch?start=5-2014&end=6-2014&md=false&page=&Format=JSON&UserKey=a"
    );
}

#[test]
fn mobile_endpoints() {
    insta::assert_snapshot!(
        url(api().app_details(APP, AppStore::GooglePlay)),
        @"http://api.similarweb.com/Mobile/0/com.yahoo.mobile.client.android.mail/v1/GetAppDetails?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().google_app_installs(APP)),
        @"http://api.similarweb.com/Mobile/0/com.yahoo.mobile.client.android.mail/v1/GetAppInstalls?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().related_site_apps("similarweb.com", AppStore::GooglePlay)),
        @"http://api.similarweb.com/Mobile/0/similarweb.com/v1/GetRelatedSiteApps?Format=JSON&UserKey=a"
    );
    insta::assert_snapshot!(
        url(api().related_site_apps("similarweb.com", AppStore::AppStore)),
        @"http://api.similarweb.com/Mobile/1/similarweb.com/v1/GetRelatedSiteApps?Format=JSON&UserKey=a"
    );
}

#[test]
fn domains_are_normalized_before_rendering() {
    let expected = "http://api.similarweb.com/Site/google.com/v2/tags?Format=JSON&UserKey=a";
    for domain in [
        "google.com",
        "http://google.com/sg/?q=search",
        "http://sg.google.com/page/?q=search",
    ] {
        assert_eq!(url(api().website_tags(domain)), expected);
    }
}

#[test]
fn urls_are_byte_identical_across_calls() {
    for kind in EndpointKind::ALL {
        let params = paged(kind.descriptor().allowed_endpoints.first().copied())
            .with_app_id(APP)
            .with_app_store(AppStore::AppStore);
        let first = api().client(kind, &params).unwrap();
        let second = api().client(kind, &params).unwrap();
        assert_eq!(first.url(), first.url(), "{}", kind);
        assert_eq!(first.url(), second.url(), "{}", kind);
    }
}

#[test]
fn restricted_endpoint_names() {
    let cases = [
        (EndpointKind::Engagement, "visits"),
        (EndpointKind::SearchKeywords, "orgkwcompetitor"),
        (EndpointKind::KeywordCompetitors, "orgsearch"),
    ];
    for (kind, name) in cases {
        let err = api().client(kind, &paged(Some(name))).unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { .. }), "{}: {:?}", kind, err);
    }
}

#[test]
fn invalid_domain() {
    assert!(matches!(
        api().destinations("INVALID"),
        Err(Error::InvalidUrl { .. })
    ));
}
