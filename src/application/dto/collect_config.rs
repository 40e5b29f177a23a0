//! # Collect Configuration DTO
//!
//! レポート収集設定のData Transfer Object

use indexmap::IndexMap;

/// レポート収集設定
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// 全アプリ共通のAPIトークン
    pub token: String,
    /// アプリ名 → アプリキー（順序が出力の行順になる）
    pub apps: IndexMap<String, String>,
}

impl CollectConfig {
    /// 新しい収集設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use adjust_collector::application::dto::collect_config::CollectConfig;
    /// use indexmap::IndexMap;
    ///
    /// let mut apps = IndexMap::new();
    /// apps.insert("firefox".to_string(), "abc123".to_string());
    /// apps.insert("focus".to_string(), "def456".to_string());
    ///
    /// let config = CollectConfig::new("tok".to_string(), apps);
    ///
    /// assert_eq!(config.app_names(), vec!["firefox", "focus"]);
    /// ```
    pub fn new(token: String, apps: IndexMap<String, String>) -> Self {
        Self { token, apps }
    }

    /// 設定順のアプリ名一覧
    pub fn app_names(&self) -> Vec<&str> {
        self.apps.keys().map(String::as_str).collect()
    }
}
