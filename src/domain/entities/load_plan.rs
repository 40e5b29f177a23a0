//! # Load Plan
//!
//! ウェアハウスへのロードに使うファイル群と置換方式

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 出力CSVのデフォルトファイル名
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.csv";
/// リジェクト行の出力先ファイル名
pub const REJECTS_FILENAME: &str = "rejects";
/// 例外情報の出力先ファイル名
pub const EXCEPTIONS_FILENAME: &str = "exceptions";

/// COPY に渡すファイル群
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFiles {
    /// ロードするデータファイル
    pub data_file: PathBuf,
    /// 不正な行の書き出し先
    pub reject_file: PathBuf,
    /// 行単位の例外の書き出し先
    pub exception_file: PathBuf,
}

impl LoadFiles {
    /// データファイルと、`load_path` 直下のサイドカーファイルから作成
    pub fn new(data_file: impl Into<PathBuf>, load_path: &Path) -> Self {
        Self {
            data_file: data_file.into(),
            reject_file: load_path.join(REJECTS_FILENAME),
            exception_file: load_path.join(EXCEPTIONS_FILENAME),
        }
    }
}

/// テーブル置換方式
///
/// - `Truncate`: TRUNCATE → COPY。COPY が失敗するとテーブルは空のまま残る
/// - `Transactional`: BEGIN → DELETE → COPY → COMMIT、失敗時は ROLLBACK
///
/// Vertica の TRUNCATE は暗黙的にコミットされるため、
/// トランザクション内では DELETE を使う。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceStrategy {
    #[default]
    Truncate,
    Transactional,
}

impl fmt::Display for ReplaceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceStrategy::Truncate => write!(f, "truncate"),
            ReplaceStrategy::Transactional => write!(f, "transactional"),
        }
    }
}
