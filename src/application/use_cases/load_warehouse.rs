//! # Load Warehouse Use Case
//!
//! ウェアハウステーブルの全件入れ替えユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::load_config::LoadConfig;
use crate::domain::entities::load_plan::ReplaceStrategy;
use crate::domain::repositories::warehouse::WarehouseCursor;
use crate::domain::services::load_statements::LoadStatements;

/// ロード結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// ロード先テーブル
    pub table: String,
    /// COPY の影響行数（ドライバが返さない場合は `None`）
    pub rows_loaded: Option<u64>,
    /// 使用した置換方式
    pub strategy: ReplaceStrategy,
}

/// ウェアハウスロードユースケース
///
/// 毎回テーブル全体を置き換える。追記はしない。
pub struct LoadWarehouseUseCase<C: WarehouseCursor + ?Sized> {
    cursor: Arc<C>,
}

impl<C: WarehouseCursor + ?Sized> LoadWarehouseUseCase<C> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `cursor` - 接続済みのカーソル
    pub fn new(cursor: Arc<C>) -> Self {
        Self { cursor }
    }

    /// テーブルを空にしてローカルファイルをバルクロード
    ///
    /// # Errors
    ///
    /// いずれかの文の実行に失敗した場合。
    /// `Truncate` 方式では COPY の失敗時もテーブルは空のまま残る。
    pub async fn execute(&self, config: &LoadConfig) -> Result<LoadSummary> {
        let rows_loaded = match config.strategy {
            ReplaceStrategy::Truncate => self.truncate_and_copy(config).await?,
            ReplaceStrategy::Transactional => self.replace_in_transaction(config).await?,
        };

        info!(
            "Completed loading {} - #{} Records",
            config.table,
            rows_loaded.map_or_else(|| "unknown".to_string(), |n| n.to_string())
        );

        Ok(LoadSummary {
            table: config.table.clone(),
            rows_loaded,
            strategy: config.strategy,
        })
    }

    async fn truncate_and_copy(&self, config: &LoadConfig) -> Result<Option<u64>> {
        let truncate = LoadStatements::truncate(&config.table);
        self.cursor
            .execute(&truncate)
            .await
            .with_context(|| format!("Failed to truncate {}", config.table))?;

        let copy = LoadStatements::copy_from_local(&config.table, &config.files);
        self.copy(config, &copy).await
    }

    async fn replace_in_transaction(&self, config: &LoadConfig) -> Result<Option<u64>> {
        self.cursor
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let result = async {
            let delete = LoadStatements::delete_all(&config.table);
            self.cursor
                .execute(&delete)
                .await
                .with_context(|| format!("Failed to delete rows from {}", config.table))?;
            let copy = LoadStatements::copy_from_local_no_commit(&config.table, &config.files);
            self.copy(config, &copy).await
        }
        .await;

        match result {
            Ok(rows) => {
                self.cursor
                    .commit()
                    .await
                    .context("Failed to commit load transaction")?;
                Ok(rows)
            }
            Err(e) => {
                warn!("Load of {} failed, rolling back: {:#}", config.table, e);
                if let Err(rollback_err) = self.cursor.rollback().await {
                    warn!("Rollback failed: {:#}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn copy(&self, config: &LoadConfig, copy: &str) -> Result<Option<u64>> {
        info!("{}", copy);

        self.cursor.execute(copy).await.with_context(|| {
            format!(
                "Failed to load {} into {}",
                config.files.data_file.display(),
                config.table
            )
        })
    }
}
