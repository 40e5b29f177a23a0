//! # ReportRow Entity
//!
//! KPIレポートの1行を表すドメインエンティティ

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 出力CSVの列名（`ReportRow` のフィールド順と一致）
pub const REPORT_COLUMNS: [&str; 7] = ["adj_date", "os", "daus", "waus", "maus", "installs", "app"];

/// KPIレポートの1行
///
/// 日付・OS単位のアクティブユーザー数とインストール数。
/// `installs` は常に非負整数で、APIが空値を返した場合は 0 になる。
///
/// フィールド順はそのまま出力CSVの列順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub adj_date: NaiveDate,
    pub os: String,
    pub daus: Option<u64>,
    pub waus: Option<u64>,
    pub maus: Option<u64>,
    pub installs: u64,
    pub app: String,
}

impl ReportRow {
    /// 新しいレポート行を作成
    ///
    /// # Arguments
    ///
    /// * `adj_date` - 集計日
    /// * `os` - OS名（android, ios）
    /// * `daus` / `waus` / `maus` - アクティブユーザー数（欠損は `None`）
    /// * `installs` - インストール数（欠損は `None`、0 に変換される）
    /// * `app` - アプリ名
    pub fn new(
        adj_date: NaiveDate,
        os: impl Into<String>,
        daus: Option<u64>,
        waus: Option<u64>,
        maus: Option<u64>,
        installs: Option<u64>,
        app: impl Into<String>,
    ) -> Self {
        Self {
            adj_date,
            os: os.into(),
            daus,
            waus,
            maus,
            installs: installs.unwrap_or(0),
            app: app.into(),
        }
    }
}
