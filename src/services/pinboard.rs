use anyhow::{Context, Result};
use reqwest::Url;
use std::fmt;

pub const DEFAULT_API_BASE: &str = "https://api.pinboard.in/v1";

// the v1 endpoints this client knows about, only AllPosts is fetched today
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetPosts,
    AllPosts,
    AllTags,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GetPosts => "posts/get",
            Endpoint::AllPosts => "posts/all",
            Endpoint::AllTags => "tags/get",
        }
    }

    pub fn url(self, api_base: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), self.path())
    }
}

// the user's "username:HEX" api token, kept out of Debug output
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parses `base` and sets `auth_token` and `format=json` on its query string.
    ///
    /// Unrelated query pairs already on `base` are kept as they are.
    pub fn build_url(&self, base: &str) -> Result<Url> {
        let mut url = Url::parse(base).with_context(|| format!("Invalid API url: {}", base))?;

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "auth_token" && key != "format")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut query = url.query_pairs_mut();
        query.clear();
        for (key, value) in &retained {
            query.append_pair(key, value);
        }
        query
            .append_pair("auth_token", &self.0)
            .append_pair("format", "json");
        drop(query);

        Ok(url)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

// copy of the url that is safe to print
pub fn redact_url(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if key == "auth_token" {
                (key.into_owned(), "***".to_string())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();

    if !pairs.is_empty() {
        let mut query = redacted.query_pairs_mut();
        query.clear();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
    }

    redacted.to_string()
}
