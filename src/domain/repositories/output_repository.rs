//! # Output Repository Trait
//!
//! マージ済みテーブルのローカル出力を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::entities::report_table::ReportTable;

/// 出力リポジトリ
#[async_trait]
pub trait OutputRepository: Send + Sync {
    /// テーブルをファイルに書き出す
    ///
    /// ディレクトリが無ければ作成し、同名ファイルは上書きする。
    ///
    /// # Arguments
    ///
    /// * `table` - 書き出すテーブル
    /// * `dir` - 出力ディレクトリ
    /// * `filename` - ファイル名
    ///
    /// # Returns
    ///
    /// 書き出したファイルのパス
    async fn write_table(&self, table: &ReportTable, dir: &Path, filename: &str)
        -> Result<PathBuf>;
}
