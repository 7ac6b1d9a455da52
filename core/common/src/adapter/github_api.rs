//! GitHub REST API の RepositoryApi 実装（reqwest blocking）
//!
//! 認証・リトライ・ページングは行わない。ステータスの解釈は usecase に任せる。

use crate::domain::RepoSlug;
use crate::error::Error;
use crate::ports::outbound::{HttpReply, RepositoryApi};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("projimport/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// GitHub 互換 API クライアント
pub struct GithubApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl GithubApi {
    /// * `base_url` - API のベース URL（None のとき DEFAULT_API_BASE、末尾の `/` は除く）
    pub fn new(base_url: Option<String>) -> Result<Self, Error> {
        Self::with_builder(base_url, reqwest::blocking::Client::builder())
    }

    fn with_builder(
        base_url: Option<String>,
        builder: reqwest::blocking::ClientBuilder,
    ) -> Result<Self, Error> {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = builder
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { base_url, client })
    }

    fn repository_url(&self, slug: &RepoSlug) -> String {
        format!("{}/repos/{}/{}", self.base_url, slug.owner(), slug.name())
    }

    fn readme_url(&self, slug: &RepoSlug) -> String {
        format!("{}/readme", self.repository_url(slug))
    }

    fn get(&self, url: &str) -> Result<HttpReply, Error> {
        let response = self
            .client
            .get(url)
            .header("Accept", ACCEPT)
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;
        Ok(HttpReply { status, body })
    }
}

impl RepositoryApi for GithubApi {
    fn get_repository(&self, slug: &RepoSlug) -> Result<HttpReply, Error> {
        self.get(&self.repository_url(slug))
    }

    fn get_readme(&self, slug: &RepoSlug) -> Result<HttpReply, Error> {
        self.get(&self.readme_url(slug))
    }
}
