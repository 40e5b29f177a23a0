//! # Write Report Use Case
//!
//! マージ済みテーブルのファイル出力ユースケース

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::load_plan::DEFAULT_OUTPUT_FILENAME;
use crate::domain::entities::report_table::ReportTable;
use crate::domain::repositories::output_repository::OutputRepository;

/// ファイル出力ユースケース
pub struct WriteReportUseCase<O: OutputRepository> {
    output_repository: Arc<O>,
    filename: String,
}

impl<O: OutputRepository> WriteReportUseCase<O> {
    /// `output.csv` に書き出すユースケースを作成
    pub fn new(output_repository: Arc<O>) -> Self {
        Self::with_filename(output_repository, DEFAULT_OUTPUT_FILENAME)
    }

    /// 出力ファイル名を指定して作成
    pub fn with_filename(output_repository: Arc<O>, filename: impl Into<String>) -> Self {
        Self {
            output_repository,
            filename: filename.into(),
        }
    }

    /// テーブルを `load_path` に書き出す
    ///
    /// # Returns
    ///
    /// 書き出したファイルのパス
    pub async fn execute(&self, table: &ReportTable, load_path: &Path) -> Result<PathBuf> {
        let path = self
            .output_repository
            .write_table(table, load_path, &self.filename)
            .await
            .with_context(|| format!("Failed to write report to {}", load_path.display()))?;

        info!("Wrote {} rows to {}", table.len(), path.display());
        Ok(path)
    }
}
