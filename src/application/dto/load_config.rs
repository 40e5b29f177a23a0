//! # Load Configuration DTO
//!
//! ウェアハウスロード設定のData Transfer Object

use crate::domain::entities::load_plan::{LoadFiles, ReplaceStrategy};

/// ウェアハウスロード設定
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// ロード先テーブル
    pub table: String,
    /// データファイルとサイドカーファイル
    pub files: LoadFiles,
    /// テーブル置換方式
    pub strategy: ReplaceStrategy,
}

impl LoadConfig {
    pub fn new(table: String, files: LoadFiles, strategy: ReplaceStrategy) -> Self {
        Self {
            table,
            files,
            strategy,
        }
    }
}
