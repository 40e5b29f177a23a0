//! CSV Output Repository Implementation
//!
//! OutputRepositoryのCSVファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::report_row::REPORT_COLUMNS;
use crate::domain::entities::report_table::ReportTable;
use crate::domain::repositories::output_repository::OutputRepository;

/// CSVファイルベースの出力リポジトリ
///
/// ヘッダー行付き、カンマ区切り
pub struct CsvOutputRepository;

impl CsvOutputRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// テーブルをCSVに書き出す（同期処理）
    fn write_sync(table: &ReportTable, dir: &Path, filename: &str) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            info!("Created output directory {}", dir.display());
        }

        let path = dir.join(filename);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        // serialize() がヘッダーを書くのは最初の行だけなので、空テーブルは明示的に書く
        if table.is_empty() {
            writer
                .write_record(REPORT_COLUMNS)
                .context("Failed to write CSV header")?;
        }
        for row in table.rows() {
            writer
                .serialize(row)
                .with_context(|| format!("Failed to write row to {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;

        Ok(path)
    }
}

#[async_trait]
impl OutputRepository for CsvOutputRepository {
    async fn write_table(
        &self,
        table: &ReportTable,
        dir: &Path,
        filename: &str,
    ) -> Result<PathBuf> {
        let table = table.clone();
        let dir = dir.to_path_buf();
        let filename = filename.to_string();
        tokio::task::spawn_blocking(move || Self::write_sync(&table, &dir, &filename))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for CsvOutputRepository {
    fn default() -> Self {
        Self::new()
    }
}
