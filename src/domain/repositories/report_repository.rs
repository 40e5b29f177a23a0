//! # Report Repository Trait
//!
//! アプリ単位のKPIレポート取得を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::report_table::ReportTable;

/// レポートリポジトリ
///
/// 1アプリ分のKPIレポートを取得するリポジトリ
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// レポートを取得する
    ///
    /// # Arguments
    ///
    /// * `app_name` - アプリ名（各行の `app` 列に入る）
    /// * `app_key` - API上のアプリキー
    /// * `token` - 全アプリ共通のAPIトークン
    ///
    /// # Returns
    ///
    /// 全行の `app` が `app_name` のテーブル
    ///
    /// # Errors
    ///
    /// 通信失敗、またはレスポンスを期待する列構成で解釈できない場合
    async fn fetch_report(&self, app_name: &str, app_key: &str, token: &str)
        -> Result<ReportTable>;
}
