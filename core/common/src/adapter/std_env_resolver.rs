//! 標準環境変数解決実装（std::env を委譲）

use crate::ports::outbound::env_resolver::{ENV_API_BASE, ENV_LOG, ENV_REPO, ENV_STORE};
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn default_repo(&self) -> Option<String> {
        non_empty_var(ENV_REPO)
    }

    fn api_base_url(&self) -> Option<String> {
        non_empty_var(ENV_API_BASE)
    }

    fn store_path(&self) -> Option<PathBuf> {
        non_empty_var(ENV_STORE).map(PathBuf::from)
    }

    fn log_file_path(&self) -> Option<PathBuf> {
        non_empty_var(ENV_LOG).map(PathBuf::from)
    }
}
