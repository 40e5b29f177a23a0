//! Adjust Report Repository Implementation
//!
//! ReportRepositoryのAdjust API実装

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::adapter::adjust::client::KpiClient;
use crate::adapter::adjust::error::FetchError;
use crate::adapter::adjust::parser::parse_kpi_csv;
use crate::adapter::adjust::url::{build_kpi_url, redact_token};
use crate::domain::entities::report_table::ReportTable;
use crate::domain::repositories::report_repository::ReportRepository;

/// Adjust KPI APIベースのレポートリポジトリ
pub struct AdjustReportRepository<C: KpiClient + ?Sized> {
    client: Arc<C>,
}

impl<C: KpiClient + ?Sized> AdjustReportRepository<C> {
    /// 新しいリポジトリを作成
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: KpiClient + ?Sized> ReportRepository for AdjustReportRepository<C> {
    async fn fetch_report(
        &self,
        app_name: &str,
        app_key: &str,
        token: &str,
    ) -> Result<ReportTable> {
        let url = build_kpi_url(app_key, token);
        debug!("Fetching {} from {}", app_name, redact_token(&url));

        let body = self
            .client
            .get_csv(&url)
            .await
            .map_err(|source| FetchError::Request {
                app: app_name.to_string(),
                source: source.into(),
            })?;

        Ok(parse_kpi_csv(app_name, &body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::adjust::client::MockKpiClient;

    #[tokio::test]
    async fn test_fetch_report_requests_app_url() {
        let mut client = MockKpiClient::new();
        client
            .expect_get_csv()
            .withf(|url| {
                url.starts_with("https://api.adjust.com/kpis/v1/abc123.csv?user_token=tok&")
            })
            .times(1)
            .returning(|_| Ok("2024-01-01,android,5,6,7,\n2024-01-01,ios,1,2,3,4\n".to_string()));

        let repo = AdjustReportRepository::new(Arc::new(client));
        let table = repo.fetch_report("firefox", "abc123", "tok").await.unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.count_for_app("firefox"), 2);
        assert_eq!(table.rows()[0].installs, 0);
        assert_eq!(table.rows()[1].installs, 4);
    }

    #[tokio::test]
    async fn test_fetch_report_request_error() {
        let mut client = MockKpiClient::new();
        client
            .expect_get_csv()
            .returning(|_| Err(anyhow::anyhow!("connection refused")));

        let repo = AdjustReportRepository::new(Arc::new(client));
        let err = repo.fetch_report("focus", "k", "tok").await.unwrap_err();

        let fetch_err = err.downcast_ref::<FetchError>().unwrap();
        assert!(matches!(fetch_err, FetchError::Request { app, .. } if app == "focus"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_fetch_report_bad_shape() {
        let mut client = MockKpiClient::new();
        client
            .expect_get_csv()
            .returning(|_| Ok("<html>Unauthorized</html>\n".to_string()));

        let repo = AdjustReportRepository::new(Arc::new(client));
        let err = repo.fetch_report("focus", "k", "tok").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::ColumnCount { found: 1, .. })
        ));
    }
}
