//! Root-domain extraction for domain-shaped parameters.
//!
//! Every endpoint that takes a `domain` sends the registrable domain only:
//! scheme, path, query string and subdomain labels are stripped. Suffixes are
//! resolved against the Public Suffix List (ICANN section), so multi-label
//! suffixes such as `co.uk` are handled correctly.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tldextract::{TldExtractor, TldOption};
use url::{Host, Url};

use crate::Error;

fn extractor() -> &'static TldExtractor {
    static EXTRACTOR: OnceLock<TldExtractor> = OnceLock::new();
    EXTRACTOR.get_or_init(|| TldOption::default().build())
}

/// A registrable domain such as `google.com` or `example.co.uk`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedDomain(String);

impl NormalizedDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NormalizedDomain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl TryFrom<String> for NormalizedDomain {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize(&value)
    }
}

impl From<NormalizedDomain> for String {
    fn from(value: NormalizedDomain) -> Self {
        value.0
    }
}

/// Extracts the registrable root domain from a URL or bare domain.
///
/// `"google.com"`, `"http://google.com/sg/?q=search"` and
/// `"http://sg.google.com/page/?q=search"` all yield `google.com`.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the input has no host, the host is an
/// IP address, or no public suffix (or no label in front of it) can be found.
pub fn normalize(input: &str) -> Result<NormalizedDomain, Error> {
    let invalid = || Error::InvalidUrl {
        input: input.to_string(),
    };

    let host = host_of(input).ok_or_else(invalid)?;

    // The extractor expects a URL; feed it the bare host so nothing else leaks in.
    let parts = extractor().extract(&format!("http://{}/", host)).map_err(|e| {
        tracing::debug!("Public suffix lookup failed for {:?}: {}", input, e);
        invalid()
    })?;

    let domain = parts.domain.filter(|d| !d.is_empty()).ok_or_else(invalid)?;
    let suffix = parts.suffix.filter(|s| !s.is_empty()).ok_or_else(invalid)?;

    Ok(NormalizedDomain(format!("{}.{}", domain, suffix)))
}

/// Lower-cased host of `input`, treating scheme-less input as `http://`.
fn host_of(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let parsed = if has_scheme(input) {
        Url::parse(input)
    } else {
        Url::parse(&format!("http://{}", input))
    }
    .ok()?;

    match parsed.host()? {
        Host::Domain(host) => Some(host.trim_end_matches('.').to_string()),
        Host::Ipv4(_) | Host::Ipv6(_) => None,
    }
}

/// True when `input` starts with `scheme://`. A `://` inside the path or
/// query string does not count.
fn has_scheme(input: &str) -> bool {
    let authority_end = input
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(input.len());
    input.find("://").is_some_and(|i| i < authority_end)
}
