//! リポジトリ識別子（owner/name）

use crate::error::Error;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// 引数・環境変数とも未指定のときに使うリポジトリ
pub const DEFAULT_REPO: &str = "andreas-bauer/credit-maker";

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)/([A-Za-z0-9._-]+)$")
            .expect("slug regex is valid")
    })
}

/// `owner/name` 形式のリポジトリ識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    /// `owner/name` を解析する。前後の空白は無視する。
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let caps = slug_regex().captures(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Invalid repository '{}': expected owner/name",
                s
            ))
        })?;
        let name = &caps[2];
        if name == "." || name == ".." {
            return Err(Error::invalid_argument(format!(
                "Invalid repository name '{}'",
                name
            )));
        }
        Ok(Self {
            owner: caps[1].to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
