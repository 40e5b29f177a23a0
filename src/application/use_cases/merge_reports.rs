//! # Merge Reports Use Case
//!
//! 全アプリのレポート取得と連結ユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::application::dto::collect_config::CollectConfig;
use crate::domain::entities::report_table::ReportTable;
use crate::domain::repositories::report_repository::ReportRepository;

/// レポート取得・連結ユースケース
///
/// 設定順にアプリを1つずつ取得し、1つのテーブルに連結する。
/// どれか1アプリでも失敗すれば全体を中止する。
pub struct MergeReportsUseCase<R: ReportRepository> {
    report_repository: Arc<R>,
}

impl<R: ReportRepository> MergeReportsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `report_repository` - レポートリポジトリ
    pub fn new(report_repository: Arc<R>) -> Self {
        Self { report_repository }
    }

    /// 全アプリのレポートを取得して連結
    ///
    /// # Arguments
    ///
    /// * `config` - 収集設定
    ///
    /// # Returns
    ///
    /// アプリ順・API返却順に並んだテーブル
    ///
    /// # Errors
    ///
    /// いずれかのアプリの取得に失敗した場合
    pub async fn execute(&self, config: &CollectConfig) -> Result<ReportTable> {
        let mut merged = ReportTable::default();

        for (app_name, app_key) in &config.apps {
            let table = self
                .report_repository
                .fetch_report(app_name, app_key, &config.token)
                .await
                .with_context(|| format!("Failed to collect report for app '{}'", app_name))?;

            info!("{} collected ({} rows)", app_name, table.len());
            merged.append(table);
        }

        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use indexmap::IndexMap;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::entities::report_row::ReportRow;

    struct MockReportRepository {
        row_counts: HashMap<String, usize>,
        failing_key: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl MockReportRepository {
        fn new(row_counts: &[(&str, usize)]) -> Self {
            Self {
                row_counts: row_counts
                    .iter()
                    .map(|(key, n)| (key.to_string(), *n))
                    .collect(),
                failing_key: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, key: &str) -> Self {
            self.failing_key = Some(key.to_string());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReportRepository for MockReportRepository {
        async fn fetch_report(
            &self,
            app_name: &str,
            app_key: &str,
            token: &str,
        ) -> Result<ReportTable> {
            assert_eq!(token, "tok");
            self.calls.lock().unwrap().push(app_key.to_string());

            if self.failing_key.as_deref() == Some(app_key) {
                anyhow::bail!("connection refused");
            }

            let count = self.row_counts.get(app_key).copied().unwrap_or(0);
            let rows = (0..count)
                .map(|i| {
                    ReportRow::new(
                        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
                        "android",
                        Some(100),
                        Some(200),
                        Some(300),
                        None,
                        app_name,
                    )
                })
                .collect::<Vec<_>>();
            Ok(ReportTable::new(rows))
        }
    }

    fn create_config(apps: &[(&str, &str)]) -> CollectConfig {
        let apps: IndexMap<String, String> = apps
            .iter()
            .map(|(name, key)| (name.to_string(), key.to_string()))
            .collect();
        CollectConfig::new("tok".to_string(), apps)
    }

    #[tokio::test]
    async fn test_merge_two_apps() {
        let repo = Arc::new(MockReportRepository::new(&[("key-a", 3), ("key-b", 5)]));
        let use_case = MergeReportsUseCase::new(repo.clone());
        let config = create_config(&[("firefox", "key-a"), ("focus", "key-b")]);

        let merged = use_case.execute(&config).await.unwrap();

        assert_eq!(merged.len(), 8);
        assert!(merged.rows()[..3].iter().all(|r| r.app == "firefox"));
        assert!(merged.rows()[3..].iter().all(|r| r.app == "focus"));
        assert_eq!(repo.calls(), vec!["key-a", "key-b"]);
    }

    #[tokio::test]
    async fn test_merge_preserves_config_order() {
        let repo = Arc::new(MockReportRepository::new(&[("key-a", 1), ("key-b", 2), ("key-c", 1)]));
        let use_case = MergeReportsUseCase::new(repo);
        let config = create_config(&[("zeta", "key-c"), ("alpha", "key-a"), ("mid", "key-b")]);

        let merged = use_case.execute(&config).await.unwrap();

        let apps: Vec<&str> = merged.rows().iter().map(|r| r.app.as_str()).collect();
        assert_eq!(apps, vec!["zeta", "alpha", "mid", "mid"]);
    }

    #[tokio::test]
    async fn test_merge_row_count_is_sum_and_installs_filled() {
        let repo = Arc::new(MockReportRepository::new(&[("k1", 4), ("k2", 0), ("k3", 7)]));
        let use_case = MergeReportsUseCase::new(repo);
        let config = create_config(&[("a", "k1"), ("b", "k2"), ("c", "k3")]);

        let merged = use_case.execute(&config).await.unwrap();

        assert_eq!(merged.len(), 11);
        assert_eq!(merged.count_for_app("a"), 4);
        assert_eq!(merged.count_for_app("b"), 0);
        assert_eq!(merged.count_for_app("c"), 7);
        assert!(merged.rows().iter().all(|r| r.installs == 0));
    }

    #[tokio::test]
    async fn test_merge_fails_fast() {
        let repo = Arc::new(
            MockReportRepository::new(&[("k1", 2), ("k2", 2), ("k3", 2)]).failing_on("k2"),
        );
        let use_case = MergeReportsUseCase::new(repo.clone());
        let config = create_config(&[("a", "k1"), ("b", "k2"), ("c", "k3")]);

        let result = use_case.execute(&config).await;

        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("app 'b'"));
        assert!(message.contains("connection refused"));
        // 失敗したアプリ以降は取得しない
        assert_eq!(repo.calls(), vec!["k1", "k2"]);
    }
}
