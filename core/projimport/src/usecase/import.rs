//! replace / append コマンドのユースケース
//!
//! リポジトリ情報の取得 → レコード化 →（append のみ README 取得）→ ストアへ書き出し。
//! リポジトリ情報が 200 で取れなければ中断し、ストアには触れない。

use crate::ports::outbound::ProjectStoreRepository;
use common::domain::{
    DescriptionLong, ProjectRecord, ProjectStore, RepoMetadata, RepoSlug, StoreSnapshot,
};
use common::error::Error;
use common::ports::outbound::{Log, LogRecord, RepositoryApi};
use std::path::Path;
use std::sync::Arc;

/// 書き出し後の結果
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub record: ProjectRecord,
    /// 書き出したストアのプロジェクト数
    pub total: usize,
}

/// replace / append のユースケース
pub struct ImportUseCase {
    api: Arc<dyn RepositoryApi>,
    store: Arc<dyn ProjectStoreRepository>,
    logger: Arc<dyn Log>,
}

impl ImportUseCase {
    pub fn new(
        api: Arc<dyn RepositoryApi>,
        store: Arc<dyn ProjectStoreRepository>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self { api, store, logger }
    }

    /// ストアをこのレコード 1 件だけにする（既存の内容は読まない）
    pub fn replace(&self, slug: &RepoSlug, store_path: &Path) -> Result<ImportOutcome, Error> {
        let record = self.fetch_record(slug)?;
        let mut store = ProjectStore::default();
        store.push(&record)?;
        self.save(store_path, &store)?;
        Ok(ImportOutcome { record, total: 1 })
    }

    /// README 込みのレコードを既存ストアの末尾に追加する
    pub fn append(&self, slug: &RepoSlug, store_path: &Path) -> Result<ImportOutcome, Error> {
        let record = self
            .fetch_record(slug)?
            .with_description_long(self.fetch_description_long(slug));

        let snapshot = self.store.load(store_path)?;
        self.log(
            LogRecord::info("store loaded")
                .kind("store")
                .field("path", store_path.display().to_string())
                .field("snapshot", snapshot.kind()),
        );
        if snapshot == StoreSnapshot::Unparsable {
            self.log(
                LogRecord::warn("existing store is not valid JSON; starting from empty list")
                    .kind("store"),
            );
        }

        let mut store = ProjectStore::new(snapshot.into_projects());
        store.push(&record)?;
        self.save(store_path, &store)?;
        Ok(ImportOutcome {
            record,
            total: store.projects.len(),
        })
    }

    fn fetch_record(&self, slug: &RepoSlug) -> Result<ProjectRecord, Error> {
        let reply = self.api.get_repository(slug)?;
        if !reply.is_ok() {
            self.log(
                LogRecord::error("repository fetch failed")
                    .kind("fetch")
                    .field("repo", slug.to_string())
                    .field("status", reply.status),
            );
            return Err(Error::http(format!("Failed to retrieve data: {}", reply.status)));
        }
        let meta: RepoMetadata = serde_json::from_str(&reply.body).map_err(|e| {
            Error::json(format!("Failed to parse repository metadata for {}: {}", slug, e))
        })?;
        let record = ProjectRecord::from(meta);
        self.log(
            LogRecord::info("repository fetched")
                .kind("fetch")
                .field("repo", slug.to_string())
                .field("tags", record.tags.len()),
        );
        Ok(record)
    }

    /// README を取得して description_long を決める。失敗しても中断しない。
    fn fetch_description_long(&self, slug: &RepoSlug) -> DescriptionLong {
        let description = match self.api.get_readme(slug) {
            Err(e) => {
                eprintln!("Failed to retrieve README: {}", e);
                DescriptionLong::FetchFailed
            }
            Ok(reply) if !reply.is_ok() => {
                eprintln!("Failed to retrieve README: {}", reply.status);
                DescriptionLong::FetchFailed
            }
            Ok(reply) => match DescriptionLong::from_readme_body(&reply.body) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Error decoding/processing README: {}", e);
                    DescriptionLong::Unprocessable
                }
            },
        };
        self.log(
            LogRecord::info("readme resolved")
                .kind("readme")
                .field("repo", slug.to_string())
                .field("outcome", description.kind()),
        );
        description
    }

    fn save(&self, store_path: &Path, store: &ProjectStore) -> Result<(), Error> {
        self.store.save(store_path, store)?;
        self.log(
            LogRecord::info("store written")
                .kind("store")
                .field("path", store_path.display().to_string())
                .field("projects", store.projects.len()),
        );
        Ok(())
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase"));
    }
}
