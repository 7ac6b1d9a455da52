//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, GithubApi, NoopLog, StdEnvResolver, StdFileSystem};
use common::domain::repo_slug::DEFAULT_REPO;
use common::domain::RepoSlug;
use common::error::Error;
use common::ports::outbound::env_resolver::ENV_API_BASE;
use common::ports::outbound::{EnvResolver, FileSystem, Log, RepositoryApi};

use crate::adapter::JsonFileProjectStore;
use crate::ports::outbound::ProjectStoreRepository;
use crate::usecase::{ImportUseCase, StoreViewUseCase};

/// -o も PROJIMPORT_STORE も無いときのストア
pub const DEFAULT_STORE_PATH: &str = "projects.json";

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    /// 構造化ログ（ファイルへ JSONL）。コンソール表示とは別。
    pub logger: Arc<dyn Log>,
    pub import_use_case: ImportUseCase,
    pub store_view_use_case: StoreViewUseCase,
}

impl App {
    /// 外界のポートを受け取って UseCase を組み立てる（テストではスタブを渡す）
    pub fn new(
        api: Arc<dyn RepositoryApi>,
        fs: Arc<dyn FileSystem>,
        env_resolver: Arc<dyn EnvResolver>,
        logger: Arc<dyn Log>,
    ) -> Self {
        let store: Arc<dyn ProjectStoreRepository> = Arc::new(JsonFileProjectStore::new(fs));
        Self {
            env_resolver,
            import_use_case: ImportUseCase::new(api, Arc::clone(&store), Arc::clone(&logger)),
            store_view_use_case: StoreViewUseCase::new(store),
            logger,
        }
    }

    /// 引数 → PROJIMPORT_REPO → 既定値 の順でリポジトリを決める
    pub fn resolve_slug(&self, explicit: Option<&str>) -> Result<RepoSlug, Error> {
        match explicit {
            Some(s) => RepoSlug::parse(s),
            None => match self.env_resolver.default_repo() {
                Some(s) => RepoSlug::parse(&s),
                None => RepoSlug::parse(DEFAULT_REPO),
            },
        }
    }

    /// -o → PROJIMPORT_STORE → projects.json の順でストアのパスを決める
    pub fn resolve_store_path(&self, explicit: Option<&str>) -> PathBuf {
        explicit
            .map(PathBuf::from)
            .or_else(|| self.env_resolver.store_path())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_projimport() -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = env_resolver
        .log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|| Arc::new(NoopLog));
    let api_base = env_resolver.api_base_url();
    if let Some(base) = api_base.as_deref() {
        check_api_base(base)?;
    }
    let api: Arc<dyn RepositoryApi> = Arc::new(GithubApi::new(api_base)?);
    Ok(App::new(api, fs, env_resolver, logger))
}

fn check_api_base(base: &str) -> Result<(), Error> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::env(format!(
            "{} must be an http(s) URL, got '{}'",
            ENV_API_BASE, base
        )))
    }
}
